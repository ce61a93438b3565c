//! Command-line argument parsing.
//!
//! The calculator is driven entirely by interactive prompts, so the only
//! arguments control diagnostics.

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the `carbon-calc` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use carbon_calc_cli::cli_args::Args;
///
/// let args = Args::parse_from(["carbon-calc", "-vv"]);
/// assert_eq!(args.verbose, 2);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(version, about = "Estimate the CO2 emissions of a trip")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Increase log output on stderr. Repeat for more detail (-v info, -vv debug, -vvv trace).
    ///
    /// Without this flag the `RUST_LOG` environment variable is honoured.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level requested with `-v`, or `None` to fall back to `RUST_LOG`.
    #[must_use]
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
