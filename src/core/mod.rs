pub mod classifier;
pub mod formulas;
pub mod inquiry;
pub mod messages;
pub mod prompt;
pub mod session;
pub mod shell;
pub mod store;

pub use crate::domain::model::{ExitReason, InquiryRecord, NumberKind, Verdict};
pub use crate::domain::ports::LineSource;
pub use crate::utils::error::Result;
