use crate::core::messages::QUESTION_ANOTHER;
use crate::core::session::Session;
use crate::domain::model::Verdict;
use crate::domain::ports::LineSource;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{clean_token, is_exit_token};
use std::io::Write;

pub const LIST_TOKEN: &str = "ls";

/// Exit word accepted at the "another?" question.
pub const DECLINE_WORD: &str = "no";

const ACCEPT_WORDS: [&str; 3] = ["", "yes", "y"];

/// Numeric part of the classifier: only positive numbers complete an answer.
pub fn numeric_verdict(token: &str) -> Verdict {
    match token.parse::<f64>() {
        Ok(value) if value > 0.0 => Verdict::Completed,
        _ => Verdict::Continued,
    }
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Decides whether `token` answers the pending question.
    ///
    /// `ls` lists the inventory and asks whether to keep going, then reports
    /// [`Verdict::Continued`]. Exit tokens and any of `extra_exits` end the
    /// session with the farewell banner.
    pub fn determine(&mut self, token: &str, extra_exits: &[&str]) -> Result<Verdict> {
        if token == LIST_TOKEN {
            self.print_inquiries()?;
            self.ask_another()?;
            return Ok(Verdict::Continued);
        }

        let token = clean_token(token);
        if extra_exits.contains(&token) || is_exit_token(token) {
            tracing::debug!("Exit word \"{}\" at classifier", token);
            return Err(ShopError::Exit { farewell: true });
        }

        let verdict = numeric_verdict(token);
        tracing::debug!("Classified \"{}\" as {:?}", token, verdict);
        Ok(verdict)
    }

    /// Asks whether the user wants to keep making inquiries.
    pub fn ask_another(&mut self) -> Result<()> {
        writeln!(self.output, "\nItems made {}", self.store.len())?;

        loop {
            let answer = self.read_answer(QUESTION_ANOTHER)?;
            let cleaned = clean_token(&answer).to_ascii_lowercase();
            if ACCEPT_WORDS.contains(&cleaned.as_str()) {
                return Ok(());
            }

            // A nested listing already settled the question.
            let verdict = self.determine(&answer, &[DECLINE_WORD])?;
            if verdict == Verdict::Completed || answer == LIST_TOKEN {
                return Ok(());
            }
        }
    }
}
