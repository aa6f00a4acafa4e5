use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show per-file copy and archive details)
    pub verbose: bool,

    /// Project directory; relative paths resolve against it
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }
}
