//! Carbon Calc CLI Library
//!
//! This crate provides the interactive command-line interface for carbon-calc.
//! It asks for a travel mode, a distance and any mode-specific details, then
//! prints the estimated CO2 emissions of the trip.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`input`]: Prompting and reading answers, including the numeric retry loop
//! - [`session`]: The prompt sequence for one calculation
//! - [`report`]: Banner and result output
//!
//! # Examples
//!
//! ```bash
//! # Interactive calculation
//! carbon-calc
//!
//! # Same, with debug logging on stderr
//! carbon-calc -vv
//! ```

pub mod cli_args;
pub mod input;
pub mod report;
pub mod session;
