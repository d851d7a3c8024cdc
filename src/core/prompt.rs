use crate::core::messages::INPUT_MARKER;
use crate::core::session::Session;
use crate::domain::model::NumberKind;
use crate::domain::ports::LineSource;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{clean_token, is_exit_token, parse_number, validate_non_negative};
use std::io::Write;

impl<S: LineSource, W: Write> Session<S, W> {
    /// Asks `question` until the answer is a non-negative number.
    ///
    /// An exit token ends the session without the farewell banner. Answers that
    /// don't parse re-print the question; negative answers print why they were
    /// refused.
    pub fn prompt_number(&mut self, kind: NumberKind, question: &str) -> Result<f64> {
        writeln!(self.output, "\n{}", question)?;

        loop {
            let raw = self.read_answer(INPUT_MARKER)?;
            let token = clean_token(&raw);

            if is_exit_token(token) {
                tracing::debug!("Exit token \"{}\" at numeric prompt", token);
                return Err(ShopError::Exit { farewell: false });
            }

            match parse_number(kind, token).and_then(validate_non_negative) {
                Ok(value) => return Ok(value),
                Err(e @ ShopError::ParseError { .. }) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "{}", question)?;
                }
                Err(e @ ShopError::NegativeValue { .. }) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
