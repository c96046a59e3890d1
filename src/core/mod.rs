pub mod aggregate;
pub mod discount;
pub mod session;
pub mod store;

pub use crate::domain::model::{OrderLine, PersonTotal, TastingSummary, WineEntry};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
