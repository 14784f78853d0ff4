use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a single check can end without a report.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{}: file does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: file is not ELF", path.display())]
    NotABinaryObject { path: PathBuf },

    #[error("{option}: unsupported option")]
    UnsupportedOption { option: String },

    #[error("{}: failed to read symbol table: {reason}", path.display())]
    SymbolExtractionError { path: PathBuf, reason: String },

    #[error("{}: cannot read file", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    pub fn extraction(path: &std::path::Path, reason: impl Into<String>) -> Self {
        CheckError::SymbolExtractionError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
