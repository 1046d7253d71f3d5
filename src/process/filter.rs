//! Separates third-party processes from the host OS's own services.

use super::{handles, inspect, ProcessInfo};
use crate::{error::QueryError, host::Handle, host::Host};

/// Names of core OS processes, compared case-insensitively.
pub const SYSTEM_PROCESSES: [&str; 10] = [
    "systemd",
    "init",
    "svchost.exe",
    "explorer.exe",
    "wininit.exe",
    "services.exe",
    "launchd",
    "kernel_task",
    "dock",
    "windowserver",
];

/// Executable locations of macOS, Linux and Windows system services.
pub const SYSTEM_PATHS: [&str; 3] = ["/System/Library/", "/usr/lib/", "C:\\Windows\\System32"];

pub fn is_system_name(name: &str) -> bool { SYSTEM_PROCESSES.iter().any(|system| system.eq_ignore_ascii_case(name)) }

pub fn is_system_path(path: &str) -> bool { SYSTEM_PATHS.iter().any(|system| path.contains(system)) }

/// An unresolvable executable path does not count against the process.
pub fn is_third_party(info: &ProcessInfo, handle: &dyn Handle) -> bool {
    if is_system_name(&info.name) {
        return false;
    }

    match handle.exe() {
        Ok(exe) => !is_system_path(&exe.to_string_lossy()),
        Err(_) => true,
    }
}

/// Lists running processes that are not part of the operating system.
pub fn list_third_party_processes<H: Host + ?Sized>(host: &H) -> Result<Vec<ProcessInfo>, QueryError> {
    let mut processes = Vec::new();

    for handle in handles(host)? {
        let Some(info) = inspect(handle.as_ref()) else { continue };

        if is_third_party(&info, handle.as_ref()) {
            processes.push(info);
        }
    }

    log::debug!("listed third-party processes (count={})", processes.len());
    Ok(processes)
}
