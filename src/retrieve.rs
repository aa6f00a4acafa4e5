use crate::config::Config;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy the theme file into the staging directory, creating it if needed.
/// Returns the destination path. Re-running with an unchanged source is
/// idempotent.
pub fn run(ctx: &Context, config: &Config, source_override: Option<&Path>) -> Result<PathBuf> {
    let source = match source_override {
        Some(path) => path.to_path_buf(),
        None => config.source.clone().ok_or_else(|| {
            Error::InvalidConfig(
                "no theme source configured; pass --source or set `source` in themepack.toml"
                    .to_string(),
            )
        })?,
    };

    if !source.is_file() {
        return Err(Error::SourceNotFound(source.display().to_string()));
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| Error::custom(format!("source path {} has no file name", source.display())))?;

    utils::ensure_dir(&config.staging_dir)?;
    let dest = config.staging_dir.join(file_name);

    // fs::copy carries permission bits over where the platform supports it;
    // the modification time has to be carried explicitly
    fs::copy(&source, &dest)?;
    if let Ok(mtime) = fs::metadata(&source)?.modified() {
        fs::File::options().write(true).open(&dest)?.set_modified(mtime)?;
    }

    if ctx.verbose {
        println!("Copied {} to {}", source.display(), dest.display());
    }

    Ok(dest)
}
