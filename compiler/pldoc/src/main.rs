//! `pldoc` command-line entry point.

use std::process::ExitCode;

use pldoc::{init_tracing, parse_args, run, Command, USAGE};

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_usage() {
                eprintln!();
                eprint!("{USAGE}");
            }
            return ExitCode::FAILURE;
        }
    };

    init_tracing(options.verbose);
    match run(&options) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
