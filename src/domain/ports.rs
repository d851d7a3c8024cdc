use crate::utils::error::Result;
use std::io::BufRead;

/// Source of user input lines for the shop prompt.
pub trait LineSource {
    /// Next line without its line ending, or `None` once input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
