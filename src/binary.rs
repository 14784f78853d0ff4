use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};

/// ELF identification bytes (`EI_MAG0..EI_MAG3`).
pub const ELF_MAGIC: [u8; 4] = *b"\x7fELF";

/// A path that passed validation: an existing regular file with an ELF header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
}

impl TargetFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Confirms `path` is a regular file whose first four bytes are the ELF magic.
///
/// Only the header is read, so this is cheap on arbitrarily large files.
pub fn validate_binary(path: &Path) -> Result<TargetFile> {
    if !path.is_file() {
        return Err(CheckError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let header = read_header(path)?;
    match header {
        Some(magic) if magic == ELF_MAGIC => {
            log::debug!("{}: ELF header ok", path.display());
            Ok(TargetFile {
                path: path.to_path_buf(),
            })
        }
        _ => {
            log::debug!("{}: header {:02x?} is not ELF", path.display(), header);
            Err(CheckError::NotABinaryObject {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Reads the first four bytes, or `None` when the file is shorter than that.
fn read_header(path: &Path) -> Result<Option<[u8; 4]>> {
    let unreadable = |source: io::Error| CheckError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let mut header = [0u8; 4];
    match file.read_exact(&mut header) {
        Ok(()) => Ok(Some(header)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(unreadable(e)),
    }
}
