use std::io::{BufRead, Write};

use carbon_calc_core::error::{Error, Result};
use log::{debug, trace};

/// Printed for each token that is not a number while a number is expected.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";

/// Reads answers from an input stream, writing prompts and messages to an
/// output stream.
///
/// Generic over both streams so a session can run against stdin/stdout or
/// against in-memory buffers.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the output stream, consuming the prompter.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a full line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Prompts and reads one line, returning it trimmed and lowercased.
    pub fn prompt_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        let answer = self.read_line()?.trim().to_lowercase();
        trace!("Answer to `{}`: `{answer}`", prompt.trim_end());
        Ok(answer)
    }

    /// Prompts once and reads whitespace-separated tokens until one parses as
    /// a finite number.
    ///
    /// Every rejected token prints [`INVALID_NUMBER_MESSAGE`] and is discarded.
    /// There is no retry limit. Blank lines are skipped, and anything after
    /// the accepted number on the same line is discarded.
    pub fn prompt_number(&mut self, prompt: &str) -> Result<f64> {
        self.prompt(prompt)?;

        loop {
            let line = self.read_line()?;
            for token in line.split_whitespace() {
                if let Some(number) = parse_number(token) {
                    trace!("Answer to `{}`: {number}", prompt.trim_end());
                    return Ok(number);
                }

                debug!("Discarding non-numeric token `{token}`");
                self.say(INVALID_NUMBER_MESSAGE)?;
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Bytes that are not valid UTF-8 are replaced, so they read as an
    /// unrecognised answer instead of failing the stream.
    fn read_line(&mut self) -> Result<String> {
        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Err(Error::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&input).into_owned())
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|number| number.is_finite())
}
