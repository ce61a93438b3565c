use std::io::{BufRead, Write};

use carbon_calc_core::calculation::{Estimate, DISCLAIMER};
use carbon_calc_core::error::Result;

use crate::input::Prompter;

const WELCOME: &str = "Welcome to the Carbon Emission Calculator!";
const INTRODUCTION: &str = "This tool estimates the CO2 emissions based on your travel details.";

/// Prints the two line welcome banner, padded by blank lines.
pub fn print_banner<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say("")?;
    prompter.say(WELCOME)?;
    prompter.say(INTRODUCTION)?;
    prompter.say("")
}

/// Prints the estimate summary followed by the disclaimer.
pub fn print_estimate<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    estimate: &Estimate,
) -> Result<()> {
    prompter.say("")?;
    prompter.say(&estimate.to_string())?;
    prompter.say("")?;
    prompter.say(DISCLAIMER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_calc_core::calculation::estimate;
    use carbon_calc_core::travel::{Distance, Trip};
    use std::io::Cursor;

    #[test]
    fn test_banner() {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        print_banner(&mut prompter).unwrap();
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(
            output,
            "\nWelcome to the Carbon Emission Calculator!\nThis tool estimates the CO2 emissions based on your travel details.\n\n"
        );
    }

    #[test]
    fn test_estimate_report() {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let estimate = estimate(&Trip::Bus, Distance::new(10.0).unwrap());
        print_estimate(&mut prompter, &estimate).unwrap();

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(
            output,
            format!(
                "\nEstimated carbon emissions for traveling 10.00 km by bus: 0.80 kg CO2\n\n{DISCLAIMER}\n"
            )
        );
    }
}
