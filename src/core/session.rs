use crate::core::messages::{HELP_ROWS, INVENTORY_HEADER, NO_INVENTORY};
use crate::core::store::InquiryStore;
use crate::domain::ports::LineSource;
use crate::utils::error::{Result, ShopError};
use std::io::Write;
use tabwriter::TabWriter;

/// Console plus the inquiry store, shared by the prompt, classifier and flow.
pub struct Session<S: LineSource, W: Write> {
    pub(crate) input: S,
    pub(crate) output: W,
    pub(crate) store: InquiryStore,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(input: S, output: W) -> Self {
        Self {
            input,
            output,
            store: InquiryStore::new(),
        }
    }

    pub fn store(&self) -> &InquiryStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `marker` and waits for a line. End of input ends the session.
    pub fn read_answer(&mut self, marker: &str) -> Result<String> {
        write!(self.output, "{}", marker)?;
        self.output.flush()?;

        match self.input.next_line()? {
            Some(line) => Ok(line),
            None => {
                tracing::debug!("Input closed while waiting at \"{}\"", marker.trim());
                Err(ShopError::InputClosed)
            }
        }
    }

    pub fn print_help(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Please choose an option:\n")?;

        {
            let mut tw = TabWriter::new(&mut self.output).padding(2);
            for row in HELP_ROWS {
                writeln!(tw, "{}", row)?;
            }
            tw.flush()?;
        }

        writeln!(self.output)?;
        Ok(())
    }

    pub fn print_inquiries(&mut self) -> Result<()> {
        writeln!(self.output)?;
        if self.store.is_empty() {
            writeln!(self.output, "{}", NO_INVENTORY)?;
            return Ok(());
        }

        {
            let mut tw = TabWriter::new(&mut self.output).padding(2);
            writeln!(tw, "{}", INVENTORY_HEADER)?;
            for record in self.store.records() {
                writeln!(
                    tw,
                    "${:.2}\t{:.2}\"\t${:.2}\t{:.2}",
                    record.cost, record.sandwich_inches, record.cost_per_serving, record.servings
                )?;
            }
            tw.flush()?;
        }

        writeln!(self.output)?;
        Ok(())
    }
}
