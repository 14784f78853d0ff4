use clap::{CommandFactory, Parser};
use colored::*;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::binary::validate_binary;
use crate::detector::{detect_sanitizers, DetectionResult};
use crate::error::{CheckError, Result};
use crate::output::{HumanFormatter, OutputFormatter, ReportMode};
use crate::symbols::SymbolSource;

pub const BIN_NAME: &str = "sanitizer-checker";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = BIN_NAME,
    version,
    about = "Lists the sanitizers an ELF binary was built with",
    long_about = "List of sanitizers used during file compilation (by default only\n\
                  AddressSanitizer, MemorySanitizer, ThreadSanitizer).",
    disable_help_flag = true,
    disable_version_flag = true,
    after_long_help = "Options:\n  \
                       -a, --all   print all detected sanitizers\n  \
                       -h, --help  print help information\n\n\
                       Example:\n  \
                       sanitizer-checker test.so"
)]
pub struct Args {
    /// ELF binary or shared object to inspect
    #[arg(value_name = "FILE", value_parser = clap::builder::OsStringValueParser::new())]
    pub file: OsString,

    /// `-a`/`--all` to report all six sanitizers
    #[arg(value_name = "OPTION", value_parser = clap::builder::OsStringValueParser::new())]
    pub option: Option<OsString>,
}

impl Args {
    pub fn path(&self) -> &Path {
        Path::new(&self.file)
    }
}

/// What the command line asks for, before any file is touched.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Help,
    Check(Args),
}

impl Invocation {
    /// `argv` includes the program name.
    pub fn from_args<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if !(2..=3).contains(&argv.len()) {
            return Invocation::Usage;
        }

        if let Some(last) = argv.last() {
            if last == "-h" || last == "--help" {
                return Invocation::Help;
            }
        }

        // Everything after `--` is positional, so `-x` reaches the option check.
        let mut forwarded = Vec::with_capacity(argv.len() + 1);
        forwarded.push(argv[0].clone());
        forwarded.push(OsString::from("--"));
        forwarded.extend(argv[1..].iter().cloned());

        match Args::try_parse_from(forwarded) {
            Ok(args) => Invocation::Check(args),
            Err(e) => {
                log::debug!("argument parsing failed: {}", e);
                Invocation::Usage
            }
        }
    }
}

impl ReportMode {
    pub fn from_option(option: Option<&OsStr>) -> Result<Self> {
        let Some(option) = option else {
            return Ok(ReportMode::Default);
        };
        match option.to_str() {
            Some("-a") | Some("--all") => Ok(ReportMode::All),
            _ => Err(CheckError::UnsupportedOption {
                option: option.to_string_lossy().into_owned(),
            }),
        }
    }
}

pub fn print_usage() {
    println!("{} {} <FILE> [OPTION]", "Usage:".yellow().bold(), BIN_NAME);
    println!("{}", help_hint());
}

pub fn print_help() {
    let help = Args::command().render_long_help();
    println!("{}", help);
}

pub fn help_hint() -> String {
    format!("run `{} -h` for details", BIN_NAME)
}

/// Validates the file, then the option, then extracts and matches symbols.
pub fn check(args: &Args, source: &dyn SymbolSource) -> Result<(DetectionResult, ReportMode)> {
    let target = validate_binary(args.path())?;
    let mode = ReportMode::from_option(args.option.as_deref())?;
    let result = detect_sanitizers(&target, source)?;
    Ok((result, mode))
}

pub fn run(args: &Args, source: &dyn SymbolSource) -> anyhow::Result<()> {
    let (result, mode) = check(args, source)?;
    HumanFormatter::new(mode).format(args.path(), &result)?;
    Ok(())
}
