use crate::context::Context;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional per-project configuration file
pub const CONFIG_FILE: &str = "themepack.toml";

/// Blender extension manifest consumed by the pack operation
pub const MANIFEST_FILE: &str = "blender_manifest.toml";

const DEFAULT_STAGING: &str = "retrieve";
const DEFAULT_OUTPUT: &str = "dist";
const DEFAULT_FILENAME: &str = "$THEME_$VERSION";

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    /// Path to the theme XML file exported by Blender
    #[serde(default)]
    source: Option<String>,

    /// Staging directory, relative to the project directory
    #[serde(default)]
    staging: Option<String>,

    /// Output directory for produced archives
    #[serde(default)]
    output: Option<String>,

    /// Archive name template; $THEME and $VERSION are substituted
    #[serde(default)]
    filename: Option<String>,
}

/// Resolved project configuration with defaults applied
pub struct Config {
    pub source: Option<PathBuf>,
    pub staging_dir: PathBuf,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub filename_template: String,
}

impl Config {
    /// Load themepack.toml from the project directory, falling back to
    /// defaults when the file is absent.
    pub fn load(ctx: &Context) -> Result<Self> {
        let config_path = ctx.base_dir.join(CONFIG_FILE);

        let file: ConfigFile = if config_path.exists() {
            toml::from_str(&fs::read_to_string(&config_path)?)?
        } else {
            ConfigFile::default()
        };

        let staging = file.staging.unwrap_or_else(|| DEFAULT_STAGING.to_string());
        let output = file.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        Ok(Config {
            source: file.source.map(|s| ctx.base_dir.join(s)),
            staging_dir: ctx.base_dir.join(staging),
            output_dir: ctx.base_dir.join(output),
            manifest_path: ctx.base_dir.join(MANIFEST_FILE),
            filename_template: file
                .filename
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        })
    }
}
