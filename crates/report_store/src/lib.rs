//! Report storage for the flood dashboard.
//!
//! Reports are kept in insertion order for the lifetime of the process.
//! There is no update, delete, or lookup by coordinate.

use core_types::Report;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors from the report store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("report table lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Append-only, ordered table of reports.
pub trait ReportStore: Send + Sync {
    /// Add a report at the end of the table.
    fn append(&self, report: Report) -> Result<()>;

    /// All reports, oldest first.
    fn all(&self) -> Result<Vec<Report>>;

    fn len(&self) -> Result<usize> {
        self.all().map(|reports| reports.len())
    }

    fn is_empty(&self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }
}

/// Process-memory report table.
///
/// Clones share the same table; `MemoryReportStore::new()` starts an
/// independent one.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    reports: Arc<RwLock<Vec<Report>>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryReportStore {
    fn append(&self, report: Report) -> Result<()> {
        self.reports
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .push(report);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Report>> {
        Ok(self
            .reports
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.reports.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}
