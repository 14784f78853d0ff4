use anyhow::Result;
use colored::*;
use env_logger::Env;
use sanitizer_checker::cli::{self, Invocation};
use sanitizer_checker::{CheckError, DefaultSymbolSource};
use std::process;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Disable colors if not a TTY
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let args = match Invocation::from_args(std::env::args_os()) {
        Invocation::Usage => {
            cli::print_usage();
            process::exit(2);
        }
        Invocation::Help => {
            cli::print_help();
            return Ok(());
        }
        Invocation::Check(args) => args,
    };

    if let Err(e) = cli::run(&args, &DefaultSymbolSource::default()) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if matches!(e.downcast_ref::<CheckError>(), Some(CheckError::UnsupportedOption { .. })) {
            eprintln!("{}", cli::help_hint());
        }
        log::debug!("Detailed error: {:#?}", e);
        process::exit(1);
    }

    Ok(())
}
