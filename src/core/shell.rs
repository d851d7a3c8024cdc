use crate::core::messages::{EXIT_MESSAGE, INPUT_MARKER, UNKNOWN_OPTION, WELCOME};
use crate::core::session::Session;
use crate::core::store::InquiryStore;
use crate::domain::model::ExitReason;
use crate::domain::ports::LineSource;
use crate::utils::error::{Result, ShopError};
use std::io::Write;

/// Top-level commands understood by the shop prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Exit,
    List,
    Help,
    Unknown(String),
}

impl Command {
    /// Matches the line exactly; surrounding spaces make it unknown.
    pub fn parse(line: &str) -> Self {
        match line {
            "new" | "" => Self::New,
            "exit" => Self::Exit,
            "ls" => Self::List,
            "?" | "help" => Self::Help,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub struct Shell<S: LineSource, W: Write> {
    session: Session<S, W>,
    first_run: bool,
}

impl<S: LineSource, W: Write> Shell<S, W> {
    pub fn new(input: S, output: W) -> Self {
        Self {
            session: Session::new(input, output),
            first_run: true,
        }
    }

    /// Skips the one-time welcome banner and help table.
    pub fn without_welcome(mut self) -> Self {
        self.first_run = false;
        self
    }

    pub fn store(&self) -> &InquiryStore {
        self.session.store()
    }

    pub fn into_output(self) -> W {
        self.session.into_output()
    }

    /// Serves commands until the session ends.
    pub fn run(&mut self) -> ExitReason {
        tracing::info!("Sandwich shop open");

        let err = loop {
            if let Err(e) = self.step() {
                break e;
            }
        };

        let reason = err.exit_reason();
        match reason {
            ExitReason::Farewell | ExitReason::EndOfInput | ExitReason::Interrupted => {
                if let Err(e) = writeln!(self.session.output, "{}", EXIT_MESSAGE) {
                    tracing::warn!("Could not print exit banner: {}", e);
                }
            }
            ExitReason::Quiet => {}
            ExitReason::Failed => tracing::error!("Shop session failed: {}", err),
        }
        if let Err(e) = self.session.output.flush() {
            tracing::warn!("Could not flush output: {}", e);
        }

        tracing::info!(
            "Sandwich shop closed ({:?}) after {} inquiries",
            reason,
            self.store().len()
        );
        reason
    }

    fn step(&mut self) -> Result<()> {
        if self.first_run {
            writeln!(self.session.output, "{}", WELCOME)?;
            self.session.print_help()?;
            self.first_run = false;
        }

        let query = self.session.read_answer(INPUT_MARKER)?;
        match Command::parse(&query) {
            Command::New => {
                self.session.run_inquiry()?;
            }
            Command::Exit => return Err(ShopError::Exit { farewell: true }),
            Command::List => self.session.print_inquiries()?,
            Command::Help => self.session.print_help()?,
            Command::Unknown(other) => {
                tracing::debug!("Unknown command \"{}\"", other);
                writeln!(self.session.output, "{}", UNKNOWN_OPTION)?;
            }
        }
        Ok(())
    }
}
