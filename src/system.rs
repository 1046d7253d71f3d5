use crate::{error::QueryError, host::Host};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

/// Window over which the aggregate CPU usage is sampled.
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    #[serde(rename = "usedPercent")]
    pub used_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SystemStats {
    pub cpu_percent: f64,
    pub memory_info: MemoryInfo,
    pub cpu_count: u64,
}

/// Samples aggregate CPU usage, then reads memory and core count.
///
/// Blocks for [`CPU_SAMPLE_INTERVAL`]; async callers should run this on a
/// blocking worker.
pub fn collect_stats<H: Host + ?Sized>(host: &H) -> Result<SystemStats, QueryError> {
    let cpu_percent = host.cpu_percent(CPU_SAMPLE_INTERVAL)?;
    let memory_info = host.virtual_memory()?;
    let cpu_count = host.cpu_count()?;

    Ok(SystemStats { cpu_percent, memory_info, cpu_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{fake::FakeHost, Native};
    use std::time::Instant;

    #[test]
    fn test_collect_stats_native() {
        let started = Instant::now();
        let stats = collect_stats(&Native).unwrap();

        assert!(started.elapsed() >= CPU_SAMPLE_INTERVAL);
        assert!(stats.cpu_count >= 1);
        assert!(stats.memory_info.total >= stats.memory_info.available);
        assert!(stats.cpu_percent >= 0.0);
    }

    #[test]
    fn test_collect_stats_fails_on_cpu_error() {
        let host = FakeHost { stats_fail: true, ..Default::default() };
        let err = collect_stats(&host).unwrap_err();

        assert!(matches!(err, QueryError::Cpu(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_memory_info_wire_names() {
        let stats = collect_stats(&FakeHost::default()).unwrap();
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["cpu_count"], 8);
        assert_eq!(value["memory_info"]["usedPercent"], 50.0);
        assert!(value["memory_info"].get("used_percent").is_none());
    }
}
