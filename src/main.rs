mod args;
mod config;
mod context;
mod error;
mod manifest;
mod pack;
mod result;
mod retrieve;
mod theme;
mod tpl;
mod utils;

use args::{Args, Operation};
use config::Config;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        path,
        operation,
    } = Args::parse();

    let base_dir = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    // Create context
    let ctx = Context::new(base_dir, verbose);

    // Use cliclack for nice UI
    cliclack::intro("themepack")?;

    // Load project configuration (themepack.toml, defaults when absent)
    let config = {
        let spinner = cliclack::spinner();
        spinner.start("Loading configuration...");
        match Config::load(&ctx) {
            Ok(c) => {
                spinner.stop("Configuration loaded");
                c
            }
            Err(e) => {
                spinner.error("Failed to load configuration");
                return Err(e);
            }
        }
    };

    match operation {
        Operation::Retrieve { source } => {
            let spinner = cliclack::spinner();
            spinner.start("Retrieving theme file...");
            match retrieve::run(&ctx, &config, source.as_deref()) {
                Ok(dest) => spinner.stop(format!("Theme file staged at {}", dest.display())),
                Err(e) => {
                    spinner.error("Failed to retrieve theme file");
                    return Err(e);
                }
            }
        }
        Operation::Pack => {
            let spinner = cliclack::spinner();
            spinner.start("Packaging theme...");
            match pack::run(&ctx, &config) {
                Ok(package) => spinner.stop(format!(
                    "Packaged {} {} at {}",
                    package.theme_name,
                    package.version,
                    package.archive_path.display()
                )),
                Err(e) => {
                    spinner.error("Failed to package theme");
                    return Err(e);
                }
            }
        }
    }

    cliclack::outro("Done")?;
    Ok(())
}
