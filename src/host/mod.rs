//! Seam between the metric collectors and the operating system.
//!
//! Every OS query goes through [`Host`]. Each per-process attribute lookup
//! is its own fallible call so collectors can decide per field whether a
//! failure drops the process or falls back to a default.

mod native;

#[cfg(test)]
pub(crate) mod fake;

use crate::{error::QueryError, system::MemoryInfo};
use std::{path::PathBuf, sync::Arc, time::Duration};

pub use native::Native;

pub type SharedHost = Arc<dyn Host>;

/// A single opened process.
pub trait Handle {
    fn pid(&self) -> u32;
    fn name(&self) -> Result<String, QueryError>;
    /// Lifetime average CPU usage, may exceed 100 on multi-core hosts.
    fn cpu_percent(&self) -> Result<f64, QueryError>;
    fn memory_percent(&self) -> Result<f32, QueryError>;
    fn status(&self) -> Result<String, QueryError>;
    /// Creation time in milliseconds since the unix epoch.
    fn create_time(&self) -> Result<i64, QueryError>;
    fn exe(&self) -> Result<PathBuf, QueryError>;
}

pub trait Host: Send + Sync {
    fn pids(&self) -> Result<Vec<u32>, QueryError>;
    fn open(&self, pid: u32) -> Result<Box<dyn Handle>, QueryError>;

    /// Blocks the caller for `interval`.
    fn cpu_percent(&self, interval: Duration) -> Result<f64, QueryError>;
    fn virtual_memory(&self) -> Result<MemoryInfo, QueryError>;
    fn cpu_count(&self) -> Result<u64, QueryError>;
}
