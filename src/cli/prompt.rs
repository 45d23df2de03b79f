//! Line-oriented prompting with repeat-until-valid parsing.
//!
//! Behavior:
//! - every prompt is flushed before blocking on input
//! - one answer is one line, trimmed of surrounding whitespace
//! - malformed answers print a hint and ask again, with no limit unless
//!   `max_retries` is set
//! - end of input is reported as `InputClosed` so callers can stop cleanly

use std::io::{BufRead, Write};

use crate::error::CalibrationError;
use crate::io::parse_finite;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_retries: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: None,
        }
    }

    /// Cap how many malformed answers are tolerated per value (`None` = no cap).
    pub fn with_max_retries(mut self, max_retries: Option<usize>) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` as-is.
    pub fn say(&mut self, text: &str) -> Result<(), CalibrationError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> Result<(), CalibrationError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and return the next input line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CalibrationError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let bytes = self.input.read_until(b'\n', &mut buf)?;
        if bytes == 0 {
            return Err(CalibrationError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Ask until `parse` accepts the answer.
    ///
    /// Each rejected answer prints `invalid` on its own line before asking
    /// again.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, CalibrationError> {
        let mut failures = 0usize;
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }

            failures += 1;
            log::debug!("rejected answer {answer:?} to {:?} ({failures} so far)", prompt.trim());
            self.line(invalid)?;

            if let Some(max) = self.max_retries {
                if failures > max {
                    return Err(CalibrationError::RetriesExhausted { attempts: failures });
                }
            }
        }
    }

    /// Ask for a finite floating-point number.
    pub fn ask_number(&mut self, prompt: &str, invalid: &str) -> Result<f64, CalibrationError> {
        self.ask_until(prompt, invalid, parse_finite)
    }

    /// Ask for an integer no smaller than `min`.
    pub fn ask_count(
        &mut self,
        prompt: &str,
        invalid: &str,
        min: usize,
    ) -> Result<usize, CalibrationError> {
        self.ask_until(prompt, invalid, |answer| {
            answer.parse::<usize>().ok().filter(|&n| n >= min)
        })
    }

    /// Yes/no question; only an answer starting with `y` or `Y` is a yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CalibrationError> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self) -> Result<(), CalibrationError> {
        self.ask("\nPress Enter to continue...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn ask_number_reprompts_until_valid() {
        let mut p = prompter("abc\n\ninf\n  2.5  \n");
        let value = p.ask_number("Value: ", "Invalid input. Enter a number.").unwrap();
        assert_eq!(value, 2.5);

        let out = printed(&p);
        assert_eq!(out.matches("Value: ").count(), 4);
        assert_eq!(out.matches("Invalid input. Enter a number.").count(), 3);
    }

    #[test]
    fn ask_count_enforces_minimum() {
        let mut p = prompter("1\n-3\n2.5\n3\n");
        assert_eq!(p.ask_count("Count: ", "bad", 2).unwrap(), 3);
        assert_eq!(printed(&p).matches("bad").count(), 3);
    }

    #[test]
    fn retry_cap_aborts() {
        let mut p = prompter("x\ny\nz\n4\n").with_max_retries(Some(2));
        let err = p.ask_number("Value: ", "bad").unwrap_err();
        assert!(matches!(err, CalibrationError::RetriesExhausted { attempts: 3 }));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("nope\n");
        let err = p.ask_number("Value: ", "bad").unwrap_err();
        assert!(matches!(err, CalibrationError::InputClosed));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn confirm_accepts_only_y() {
        let mut p = prompter("y\nYes\nn\n\nsure\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
