use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Which operation was requested on the command line
#[derive(Debug)]
pub enum Operation {
    /// Copy the theme file from its source location into the staging directory
    Retrieve {
        /// Override the configured source file
        source: Option<PathBuf>,
    },

    /// Package the staged theme and the manifest into a versioned zip archive
    Pack,
}

/// Command-line arguments for the themepack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Project directory containing blender_manifest.toml
    pub path: Option<PathBuf>,

    /// Requested operation
    pub operation: Operation,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("themepack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Retrieve and package Blender interface themes")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .global(true)
                    .help("Project directory containing blender_manifest.toml (default: current directory)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .global(true)
                    .help("Enable verbose output")
            )
            .subcommand(
                Command::new("retrieve")
                    .about("Copy the theme XML file into the staging directory")
                    .arg(
                        Arg::new("source")
                            .short('s')
                            .long("source")
                            .value_name("FILE")
                            .help("Theme file to retrieve (overrides `source` in themepack.toml)")
                    )
            )
            .subcommand(
                Command::new("pack")
                    .about("Package the staged theme and manifest into a versioned zip archive")
            )
            .get_matches();

        let operation = match matches.subcommand() {
            Some(("retrieve", sub)) => Operation::Retrieve {
                source: sub.get_one::<String>("source").map(PathBuf::from),
            },
            Some(("pack", _)) => Operation::Pack,
            _ => unreachable!("subcommand is required"),
        };

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            operation,
        }
    }
}
