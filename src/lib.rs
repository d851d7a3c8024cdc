#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{shell::Shell, store::InquiryStore};
pub use domain::model::{ExitReason, InquiryRecord};
pub use utils::error::{Result, ShopError};
