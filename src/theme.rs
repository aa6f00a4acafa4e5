use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// File extension Blender uses for interface themes
pub const THEME_EXTENSION: &str = "xml";

/// List the names (base filename without extension) of theme files directly
/// inside the staging directory, sorted so selection is deterministic.
/// Discovery is non-recursive; archive population walks subdirectories
/// separately.
pub fn discover(staging_dir: &Path) -> Result<Vec<String>> {
    if !staging_dir.is_dir() {
        return Err(Error::StagingNotFound(staging_dir.display().to_string()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(staging_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == THEME_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(Error::ThemeNotFound(staging_dir.display().to_string()));
    }

    Ok(paths
        .iter()
        .map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect())
}
