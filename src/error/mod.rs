//! Error types for TOML to JSON conversion

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A TOML decode failure with the 1-based source position where the
/// decoder detected the problem.
#[derive(Debug, Clone)]
pub struct DecodeError {
    message: String,
    row: usize,
    col: usize,
}

impl DecodeError {
    /// Build a positioned error from the decoder's error and the source
    /// text it was parsing. The decoder reports a byte span; the span
    /// start is translated into a row/column pair by scanning the text.
    pub fn from_parse(err: &toml::de::Error, input: &str) -> Self {
        let offset = err.span().map(|span| span.start).unwrap_or(0);
        let (row, col) = line_col(input, offset);
        Self {
            message: err.message().to_string(),
            row,
            col,
        }
    }

    /// The decoder's human-readable description, without position.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based row of the error in the source text.
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column of the error in the source text.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DecodeError {}

/// Top-level error type for a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input is not valid TOML; carries the source position.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The named input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input or writing the encoded output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The JSON encoder failed, typically because the sink went away.
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Translate a byte offset into a 1-based (row, column) position.
/// Columns count characters on the line, not bytes.
fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut row = 1;
    let mut col = 1;
    for (idx, ch) in input.char_indices() {
        if idx >= offset {
            break;
        }
        if ch == '\n' {
            row += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (row, col)
}
