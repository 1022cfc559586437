mod args;
mod demo;
mod logger;

use std::process::ExitCode;

use clap::Parser;
use color_print::cformat;
use ht_library::diag::StrResult;
use ht_library::html::MergePolicy;

use crate::args::{CliArguments, Command, MergeCommand};

/// Entry point.
fn main() -> ExitCode {
    let args = CliArguments::parse();
    logger::init(args.verbose);

    match dispatch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            print_error(&msg);
            ExitCode::FAILURE
        }
    }
}

/// Execute the requested command.
fn dispatch(args: &CliArguments) -> StrResult<()> {
    match &args.command {
        Command::Demo(command) => demo::demo(command)?,
        Command::Merge(command) => merge(command),
    }
    Ok(())
}

/// Execute a merge command.
fn merge(command: &MergeCommand) {
    let policy = MergePolicy::STANDARD;
    if policy.delimiter(&command.key).is_none() {
        log::warn!("`{}` is not merged, the new value replaces the old one", command.key);
    }
    println!("{}", policy.combine(&command.key, &command.existing, &command.new));
}

/// Print an application-level error (independent from a source file).
fn print_error(msg: &str) {
    eprintln!("{}", cformat!("<red,bold>error</>: {}", msg));
}
