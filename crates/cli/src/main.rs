use std::io::{stdin, stdout, IsTerminal};
use std::process::ExitCode;

use carbon_calc_cli::cli_args::Args;
use carbon_calc_cli::input::Prompter;
use carbon_calc_cli::session;
use carbon_calc_core::error::{Error, Result};
use clap::Parser;
use log::{debug, error, LevelFilter};

fn init_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if let Some(level) = args.log_level() {
        builder.filter_level(level);
    }
    builder.init();
}

fn execute() -> Result<()> {
    let mut prompter = Prompter::new(stdin().lock(), stdout().lock());
    session::run(&mut prompter)?;
    Ok(())
}

/// Ends the prompt line the error interrupted, so the message starts on a
/// line of its own. A terminal echoes the user's Enter; piped input and end of
/// input do not.
fn finish_prompt_line(error: &Error) {
    if matches!(error, Error::EndOfInput) || !stdin().is_terminal() {
        println!();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_validation() {
                debug!("Rejected answer: {e:?}");
            } else {
                error!("Session aborted: {e:?}");
            }
            finish_prompt_line(&e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
