use crate::domain::model::ExitReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Parse error: \"{input}\" is not a number")]
    ParseError { input: String },

    #[error("Value must be non-negative, got {value}")]
    NegativeValue { value: f64 },

    #[error("Session ended by user")]
    Exit { farewell: bool },

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ShopError {
    /// How the session ends when this error reaches the shell.
    pub fn exit_reason(&self) -> ExitReason {
        match self {
            Self::Exit { farewell: true } => ExitReason::Farewell,
            Self::Exit { farewell: false } => ExitReason::Quiet,
            Self::InputClosed => ExitReason::EndOfInput,
            Self::ParseError { .. }
            | Self::NegativeValue { .. }
            | Self::IoError(_)
            | Self::SerializationError(_) => ExitReason::Failed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
