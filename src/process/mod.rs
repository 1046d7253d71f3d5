pub mod control;
pub mod filter;

use crate::{error::QueryError, host::Handle, host::Host};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use control::{start_process, stop_process};
pub use filter::list_third_party_processes;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f32,
    #[schema(example = "running")]
    pub status: String,
    /// Milliseconds since the unix epoch, 0 when unknown.
    pub create_time: i64,
}

/// Reads a single process.
///
/// Returns `None` when the name cannot be read. Every other attribute falls
/// back to its default on failure so the process is still reported.
pub fn inspect(handle: &dyn Handle) -> Option<ProcessInfo> {
    let name = match handle.name() {
        Ok(name) => name,
        Err(err) => {
            log::trace!("skipping process: {err}");
            return None;
        }
    };

    Some(ProcessInfo {
        name,
        pid: handle.pid(),
        cpu_percent: handle.cpu_percent().unwrap_or(0.0),
        memory_percent: handle.memory_percent().unwrap_or(0.0),
        status: handle.status().unwrap_or_else(|_| "unknown".to_string()),
        create_time: handle.create_time().unwrap_or(0),
    })
}

/// Opens every live process, keeping the handles that could be opened.
pub(crate) fn handles<H: Host + ?Sized>(host: &H) -> Result<Vec<Box<dyn Handle>>, QueryError> {
    let handles = host
        .pids()?
        .into_iter()
        .filter_map(|pid| match host.open(pid) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::trace!("skipping process: {err}");
                None
            }
        })
        .collect();

    Ok(handles)
}

/// Lists every running process whose name can be read.
pub fn list_processes<H: Host + ?Sized>(host: &H) -> Result<Vec<ProcessInfo>, QueryError> {
    let processes: Vec<ProcessInfo> = handles(host)?.iter().filter_map(|handle| inspect(handle.as_ref())).collect();

    log::debug!("listed processes (count={})", processes.len());
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        fake::{FakeHost, FakeProcess},
        Native,
    };

    #[test]
    fn test_name_failure_excludes_process() {
        let host = FakeHost {
            processes: vec![
                FakeProcess::healthy(10, "nginx", "/usr/sbin/nginx"),
                FakeProcess {
                    name: None,
                    ..FakeProcess::healthy(11, "ghost", "/usr/bin/ghost")
                },
            ],
            ..Default::default()
        };

        let processes = list_processes(&host).unwrap();

        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].pid, 10);
    }

    #[test]
    fn test_attribute_failures_fall_back_to_defaults() {
        let host = FakeHost {
            processes: vec![FakeProcess::bare(42, "worker")],
            ..Default::default()
        };

        let processes = list_processes(&host).unwrap();

        assert_eq!(
            processes,
            vec![ProcessInfo {
                pid: 42,
                name: "worker".to_string(),
                cpu_percent: 0.0,
                memory_percent: 0.0,
                status: "unknown".to_string(),
                create_time: 0,
            }]
        );
    }

    #[test]
    fn test_vanished_process_is_skipped() {
        let host = FakeHost {
            processes: vec![
                FakeProcess {
                    vanished: true,
                    ..FakeProcess::healthy(7, "short-lived", "/tmp/short-lived")
                },
                FakeProcess::healthy(8, "postgres", "/usr/bin/postgres"),
            ],
            ..Default::default()
        };

        let pids: Vec<u32> = list_processes(&host).unwrap().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![8]);
    }

    #[test]
    fn test_process_table_failure_is_an_error() {
        let host = FakeHost { table_fails: true, ..Default::default() };
        assert!(matches!(list_processes(&host), Err(QueryError::ProcessTable(_))));
    }

    #[test]
    fn test_healthy_attributes_are_reported() {
        let host = FakeHost {
            processes: vec![FakeProcess::healthy(3, "redis-server", "/usr/bin/redis-server")],
            ..Default::default()
        };

        let process = &list_processes(&host).unwrap()[0];

        assert_eq!(process.cpu_percent, 1.5);
        assert_eq!(process.memory_percent, 0.25);
        assert_eq!(process.status, "running");
        assert_eq!(process.create_time, 1_700_000_000_000);
    }

    #[test]
    fn test_list_processes_native_contains_current_process() {
        let processes = list_processes(&Native).unwrap();
        let current = std::process::id();

        assert!(processes.iter().any(|process| process.pid == current));
    }
}
