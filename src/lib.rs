//! Detects which LLVM/GCC runtime sanitizers were linked into an ELF binary
//! by searching its symbol table for each runtime's name fragment.

pub mod binary;
pub mod cli;
pub mod detector;
pub mod elf;
pub mod error;
pub mod output;
pub mod signatures;
pub mod symbols;

pub use binary::{validate_binary, TargetFile};
pub use detector::{detect, detect_sanitizers, DetectionResult};
pub use error::CheckError;
pub use output::{HumanFormatter, OutputFormatter, ReportMode};
pub use symbols::{DefaultSymbolSource, NmSymbolSource, SymbolSource};
