//! TOML to JSON converter
//!
//! Reads a TOML document, decodes it into a generic value, and writes it
//! back out as JSON with two-space indentation. The library surface lets
//! embedders and tests drive a conversion without spawning the binary.

pub mod conversion;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use conversion::convert;
pub use error::{ConvertError, ConvertResult, DecodeError};
pub use source::TomlSource;

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Convert one TOML document, resolving the input from the positional
/// file arguments (first file wins) or falling back to `stdin`.
///
/// When a file is named, the handle is scoped to this call and closed on
/// every exit path. An open failure aborts before any decoding.
pub fn run<R: Read, W: Write>(files: &[PathBuf], stdin: R, output: W) -> ConvertResult<()> {
    match TomlSource::from_args(files) {
        TomlSource::File(path) => {
            let file = File::open(&path).map_err(|source| ConvertError::Open { path, source })?;
            convert(file, output)
        }
        TomlSource::Stdin => convert(stdin, output),
    }
}
