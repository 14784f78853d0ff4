use std::io;
use std::path::Path;
use std::process::{Command, Output};

use crate::elf::ElfSymbolSource;
use crate::error::{CheckError, Result};

/// Produces the textual symbol listing of an object file.
pub trait SymbolSource {
    fn name(&self) -> &'static str;

    /// Empty text is a valid answer (stripped file).
    fn extract_symbols(&self, path: &Path) -> Result<String>;
}

/// Shells out to binutils `nm`.
pub struct NmSymbolSource {
    program: String,
}

/// A spawn failure is kept apart so callers can tell a missing tool from a
/// failing one.
enum NmRun {
    Finished(Result<String>),
    SpawnFailed(io::Error),
}

impl NmSymbolSource {
    pub fn new() -> Self {
        Self::with_program("nm")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, path: &Path) -> NmRun {
        match Command::new(&self.program).arg(path).output() {
            Ok(output) => NmRun::Finished(self.listing(path, output)),
            Err(e) => NmRun::SpawnFailed(e),
        }
    }

    fn listing(&self, path: &Path, output: Output) -> Result<String> {
        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        // Some nm builds fail on stripped files; that is an empty table.
        if stderr.trim_end().ends_with("no symbols") {
            return Ok(String::new());
        }
        let reason = match stderr.trim() {
            "" => format!("{} exited with {}", self.program, output.status),
            msg => msg.to_string(),
        };
        Err(CheckError::extraction(path, reason))
    }

    fn spawn_error(&self, path: &Path, e: io::Error) -> CheckError {
        CheckError::extraction(path, format!("failed to run {}: {}", self.program, e))
    }
}

impl Default for NmSymbolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for NmSymbolSource {
    fn name(&self) -> &'static str {
        "nm"
    }

    fn extract_symbols(&self, path: &Path) -> Result<String> {
        match self.run(path) {
            NmRun::Finished(listing) => listing,
            NmRun::SpawnFailed(e) => Err(self.spawn_error(path, e)),
        }
    }
}

/// `nm` when it is installed, otherwise the built-in ELF reader.
#[derive(Default)]
pub struct DefaultSymbolSource {
    nm: NmSymbolSource,
    native: ElfSymbolSource,
}

impl SymbolSource for DefaultSymbolSource {
    fn name(&self) -> &'static str {
        self.nm.name()
    }

    fn extract_symbols(&self, path: &Path) -> Result<String> {
        match self.nm.run(path) {
            NmRun::Finished(listing) => listing,
            NmRun::SpawnFailed(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "{} not found, reading symbols with {}",
                    self.nm.program,
                    self.native.name()
                );
                self.native.extract_symbols(path)
            }
            NmRun::SpawnFailed(e) => Err(self.nm.spawn_error(path, e)),
        }
    }
}
