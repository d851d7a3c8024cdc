use crate::core::formulas;
use crate::core::messages::{QUESTION_COST, QUESTION_HOW_BIG, WHAT_NEXT};
use crate::core::session::Session;
use crate::domain::model::{InquiryRecord, NumberKind, Verdict};
use crate::domain::ports::LineSource;
use crate::utils::error::Result;
use std::io::Write;

impl<S: LineSource, W: Write> Session<S, W> {
    /// Runs one inquiry: length, then cost, then the derived values.
    ///
    /// The record is appended only once both answers are in; an exit or
    /// closed input part way through leaves the store untouched.
    pub fn run_inquiry(&mut self) -> Result<InquiryRecord> {
        let record = self.collect_inquiry()?;

        let position = self.store.append(record);
        tracing::debug!(
            "Recorded inquiry #{}: {}",
            position + 1,
            serde_json::to_string(&record)?
        );

        writeln!(self.output, "{}", WHAT_NEXT)?;
        Ok(record)
    }

    fn collect_inquiry(&mut self) -> Result<InquiryRecord> {
        let inches = self.ask_until_completed(QUESTION_HOW_BIG)?;
        let cost = self.ask_until_completed(QUESTION_COST)?;

        let servings = formulas::servings(inches);
        Ok(InquiryRecord {
            cost,
            cost_per_serving: formulas::cost_per_serving(servings, cost),
            sandwich_inches: inches,
            servings,
        })
    }

    fn ask_until_completed(&mut self, question: &str) -> Result<f64> {
        loop {
            let value = self.prompt_number(NumberKind::Float, question)?;
            if self.determine(&value.to_string(), &[])? == Verdict::Completed {
                return Ok(value);
            }
            tracing::debug!("{} does not answer \"{}\", asking again", value, question);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShopError;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<String>, Vec<u8>> {
        Session::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_records_nine_inch_sandwich() {
        let mut s = session("9\n$10\n");
        let record = s.run_inquiry().unwrap();

        let expected = InquiryRecord {
            cost: 10.0,
            cost_per_serving: 10.0 / 3.0,
            sandwich_inches: 9.0,
            servings: 3.0,
        };
        assert_eq!(record, expected);
        assert_eq!(s.store().records(), &[expected]);

        let text = String::from_utf8(s.into_output()).unwrap();
        assert!(text.ends_with("What would you like to do next?\n"));
    }

    #[test]
    fn test_zero_answers_are_asked_again() {
        let mut s = session("0\n1.5\n0\n2\n");
        s.run_inquiry().unwrap();

        let record = s.store().records()[0];
        assert_eq!(record.sandwich_inches, 1.5);
        assert_eq!(record.servings, 0.5);
        assert_eq!(record.cost, 2.0);
        assert_eq!(record.cost_per_serving, 4.0);
    }

    #[test]
    fn test_exit_mid_inquiry_leaves_no_record() {
        let mut s = session("9\nexit\n");
        let err = s.run_inquiry().unwrap_err();

        assert!(matches!(err, ShopError::Exit { farewell: false }));
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_closed_input_leaves_no_record() {
        let mut s = session("12\n");
        assert!(matches!(s.run_inquiry(), Err(ShopError::InputClosed)));
        assert!(s.store().is_empty());
    }
}
