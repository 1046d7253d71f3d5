use super::{Handle, Host};
use crate::{error::QueryError, system::MemoryInfo};
use std::{path::PathBuf, time::Duration};

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeProcess {
    pub pid: u32,
    pub name: Option<String>,
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f32>,
    pub status: Option<String>,
    pub create_time: Option<i64>,
    pub exe: Option<PathBuf>,
    pub vanished: bool,
}

impl FakeProcess {
    pub fn healthy(pid: u32, name: &str, exe: &str) -> Self {
        Self {
            pid,
            name: Some(name.to_string()),
            cpu_percent: Some(1.5),
            memory_percent: Some(0.25),
            status: Some("running".to_string()),
            create_time: Some(1_700_000_000_000),
            exe: Some(PathBuf::from(exe)),
            vanished: false,
        }
    }

    /// Only the name resolves.
    pub fn bare(pid: u32, name: &str) -> Self {
        Self {
            pid,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeHost {
    pub processes: Vec<FakeProcess>,
    pub table_fails: bool,
    pub stats_fail: bool,
}

fn missing(pid: u32, attribute: &'static str) -> QueryError {
    QueryError::Attribute {
        pid,
        attribute,
        reason: "permission denied".to_string(),
    }
}

impl Handle for FakeProcess {
    fn pid(&self) -> u32 { self.pid }
    fn name(&self) -> Result<String, QueryError> { self.name.clone().ok_or_else(|| missing(self.pid, "name")) }
    fn cpu_percent(&self) -> Result<f64, QueryError> { self.cpu_percent.ok_or_else(|| missing(self.pid, "cpu_percent")) }
    fn memory_percent(&self) -> Result<f32, QueryError> { self.memory_percent.ok_or_else(|| missing(self.pid, "memory_percent")) }
    fn status(&self) -> Result<String, QueryError> { self.status.clone().ok_or_else(|| missing(self.pid, "status")) }
    fn create_time(&self) -> Result<i64, QueryError> { self.create_time.ok_or_else(|| missing(self.pid, "create_time")) }
    fn exe(&self) -> Result<PathBuf, QueryError> { self.exe.clone().ok_or_else(|| missing(self.pid, "exe")) }
}

impl Host for FakeHost {
    fn pids(&self) -> Result<Vec<u32>, QueryError> {
        match self.table_fails {
            true => Err(QueryError::ProcessTable("proc unavailable".to_string())),
            false => Ok(self.processes.iter().map(|process| process.pid).collect()),
        }
    }

    fn open(&self, pid: u32) -> Result<Box<dyn Handle>, QueryError> {
        match self.processes.iter().find(|process| process.pid == pid && !process.vanished) {
            Some(process) => Ok(Box::new(process.clone())),
            None => Err(missing(pid, "handle")),
        }
    }

    fn cpu_percent(&self, _: Duration) -> Result<f64, QueryError> {
        match self.stats_fail {
            true => Err(QueryError::Cpu("no cpu counters".to_string())),
            false => Ok(12.5),
        }
    }

    fn virtual_memory(&self) -> Result<MemoryInfo, QueryError> {
        Ok(MemoryInfo {
            total: 16 * 1024 * 1024 * 1024,
            available: 8 * 1024 * 1024 * 1024,
            used: 6 * 1024 * 1024 * 1024,
            free: 2 * 1024 * 1024 * 1024,
            used_percent: 50.0,
        })
    }

    fn cpu_count(&self) -> Result<u64, QueryError> { Ok(8) }
}
