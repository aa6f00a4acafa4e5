use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Manifest not found at {0}")]
    ManifestNotFound(String),

    #[error("Version not found in {0} (expected a line `version = \"...\"`)")]
    VersionNotFound(String),

    #[error("Source file not found at {0}")]
    SourceNotFound(String),

    #[error("Staging directory not found at {0}")]
    StagingNotFound(String),

    #[error("No theme file found in {0}")]
    ThemeNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}
