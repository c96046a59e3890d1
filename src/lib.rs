pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod storage;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{Cli, Command, WijnCommand};

pub use crate::core::aggregate::aggregate;
pub use crate::core::discount::resolve_free_bottles;
pub use crate::core::session::{Tasting, TastingFiles};
pub use crate::domain::model::{OrderLine, PersonTotal, TastingSummary, WineEntry};
pub use crate::domain::ports::Storage;
pub use crate::storage::LocalStorage;
pub use crate::utils::error::{AppError, Result};
