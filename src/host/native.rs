use super::{Handle, Host};
use crate::{error::QueryError, system::MemoryInfo};
use psutil::{cpu, memory, process};
use std::fmt::Display;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use std::thread;

/// The machine this binary runs on, queried through psutil.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native;

struct NativeHandle {
    inner: process::Process,
}

#[inline]
fn attribute(pid: u32, attribute: &'static str, err: impl Display) -> QueryError {
    QueryError::Attribute {
        pid,
        attribute,
        reason: err.to_string(),
    }
}

fn label(status: process::Status) -> String { format!("{status:?}").to_lowercase() }

impl Handle for NativeHandle {
    fn pid(&self) -> u32 { self.inner.pid() }

    fn name(&self) -> Result<String, QueryError> { self.inner.name().map_err(|err| attribute(self.pid(), "name", err)) }

    fn cpu_percent(&self) -> Result<f64, QueryError> {
        let times = self.inner.cpu_times().map_err(|err| attribute(self.pid(), "cpu_percent", err))?;
        let busy = (times.user() + times.system()).as_secs_f64();

        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        let alive = now.saturating_sub(self.inner.create_time()).as_secs_f64();

        match alive > 0.0 {
            true => Ok(busy / alive * 100.0),
            false => Ok(0.0),
        }
    }

    fn memory_percent(&self) -> Result<f32, QueryError> { self.inner.memory_percent().map_err(|err| attribute(self.pid(), "memory_percent", err)) }

    fn status(&self) -> Result<String, QueryError> { self.inner.status().map(label).map_err(|err| attribute(self.pid(), "status", err)) }

    fn create_time(&self) -> Result<i64, QueryError> {
        i64::try_from(self.inner.create_time().as_millis()).map_err(|err| attribute(self.pid(), "create_time", err))
    }

    fn exe(&self) -> Result<PathBuf, QueryError> { self.inner.exe().map_err(|err| attribute(self.pid(), "exe", err)) }
}

impl Host for Native {
    fn pids(&self) -> Result<Vec<u32>, QueryError> { process::pids().map_err(|err| QueryError::ProcessTable(err.to_string())) }

    fn open(&self, pid: u32) -> Result<Box<dyn Handle>, QueryError> {
        match process::Process::new(pid) {
            Ok(inner) => Ok(Box::new(NativeHandle { inner })),
            Err(err) => Err(attribute(pid, "handle", err)),
        }
    }

    fn cpu_percent(&self, interval: Duration) -> Result<f64, QueryError> {
        let mut collector = cpu::CpuPercentCollector::new().map_err(|err| QueryError::Cpu(err.to_string()))?;
        thread::sleep(interval);

        collector.cpu_percent().map(f64::from).map_err(|err| QueryError::Cpu(err.to_string()))
    }

    fn virtual_memory(&self) -> Result<MemoryInfo, QueryError> {
        let memory = memory::virtual_memory().map_err(|err| QueryError::Memory(err.to_string()))?;

        Ok(MemoryInfo {
            total: memory.total(),
            available: memory.available(),
            used: memory.used(),
            free: memory.free(),
            used_percent: f64::from(memory.percent()),
        })
    }

    fn cpu_count(&self) -> Result<u64, QueryError> { Ok(cpu::cpu_count()) }
}
