//! Input source resolution

use std::path::PathBuf;

/// Where the TOML document comes from for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TomlSource {
    /// A named file on disk
    File(PathBuf),
    /// The process's standard input stream
    Stdin,
}

impl TomlSource {
    /// Resolve the source from the positional arguments: the first file
    /// wins, any further arguments are silently ignored; no argument
    /// means stdin.
    pub fn from_args(files: &[PathBuf]) -> Self {
        match files.first() {
            Some(path) => Self::File(path.clone()),
            None => Self::Stdin,
        }
    }
}
