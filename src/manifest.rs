use crate::error::Error;
use crate::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Line-anchored so that `schema_version = "..."` never matches.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version\s*=\s*"([^"]+)""#).unwrap());

/// Extract the package version from manifest text; first match wins.
pub fn parse_version(content: &str) -> Option<String> {
    VERSION_RE
        .captures(content)
        .map(|caps| caps[1].to_string())
}

/// Read the `version` value from the Blender extension manifest
pub fn read_version(manifest_path: &Path) -> Result<String> {
    if !manifest_path.exists() {
        return Err(Error::ManifestNotFound(
            manifest_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(manifest_path)?;

    parse_version(&content)
        .ok_or_else(|| Error::VersionNotFound(manifest_path.display().to_string()))
}
