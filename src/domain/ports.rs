use crate::utils::error::Result;

/// Seam to durable storage for named artifacts.
///
/// Absence of an artifact is a valid state for both record sets, so reads
/// return `None` instead of failing.
pub trait Storage {
    fn read_file(&self, name: &str) -> Result<Option<Vec<u8>>>;

    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;

    /// Removing an artifact that does not exist is a no-op.
    fn remove_file(&self, name: &str) -> Result<()>;
}
