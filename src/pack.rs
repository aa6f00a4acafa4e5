use crate::config::Config;
use crate::context::Context;
use crate::manifest;
use crate::result::Result;
use crate::theme;
use crate::tpl::Tpl;
use crate::utils;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Details of a produced archive
pub struct Package {
    pub archive_path: PathBuf,
    pub theme_name: String,
    pub version: String,
}

/// Package the staged theme and the manifest into a versioned zip archive
pub fn run(ctx: &Context, config: &Config) -> Result<Package> {
    let version = manifest::read_version(&config.manifest_path)?;

    let themes = theme::discover(&config.staging_dir)?;
    let theme_name = &themes[0];
    if themes.len() > 1 {
        cliclack::log::warning(format!(
            "Multiple theme files in {}; using {} and ignoring {}",
            config.staging_dir.display(),
            theme_name,
            themes[1..].join(", ")
        ))?;
    }

    utils::ensure_dir(&config.output_dir)?;

    let mut tpl = Tpl::new();
    tpl.register("THEME", theme_name);
    tpl.register("VERSION", &version);

    let archive_filename = format!("{}.zip", tpl.parse(&config.filename_template));
    let archive_path = config.output_dir.join(&archive_filename);

    println!("Creating theme package: {}", archive_filename);
    println!("  Theme: {}", theme_name);
    println!("  Version: {}", version);

    create_zip_file(ctx, config, &archive_path)?;

    println!("Successfully created: {}", archive_path.display());

    Ok(Package {
        archive_path,
        theme_name: theme_name.clone(),
        version,
    })
}

fn create_zip_file(ctx: &Context, config: &Config, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut seen = HashSet::new();

    // Manifest goes in first, under its own base filename
    add_entry(ctx, &mut zip, &config.manifest_path, options, &mut seen)?;

    // Staging contents are flattened: every file lands at archive root
    // under its base filename, whatever subdirectory it came from.
    for entry in WalkDir::new(&config.staging_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            add_entry(ctx, &mut zip, entry.path(), options, &mut seen)?;
        }
    }

    zip.finish()?;
    Ok(())
}

fn add_entry(
    ctx: &Context,
    zip: &mut ZipWriter<File>,
    path: &Path,
    options: SimpleFileOptions,
    seen: &mut HashSet<String>,
) -> Result<()> {
    let name = utils::base_name(path);

    // Flattening can collide on base filenames; keep the first entry and
    // say so instead of silently dropping data.
    if !seen.insert(name.clone()) {
        cliclack::log::warning(format!(
            "Skipping {}: an entry named {} is already in the archive",
            path.display(),
            name
        ))?;
        return Ok(());
    }

    zip.start_file(name.as_str(), options)?;
    let mut f = File::open(path)?;
    let mut buffer = Vec::new();
    f.read_to_end(&mut buffer)?;
    zip.write_all(&buffer)?;

    if ctx.verbose {
        println!("  Added: {} ({})", name, path.display());
    } else {
        println!("  Added: {}", name);
    }

    Ok(())
}
