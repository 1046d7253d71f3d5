use crate::error::ControlError;
use nix::{sys::signal, sys::signal::Signal, unistd::Pid};
use psutil::process::Process;
use std::process::{Command, Stdio};

/// Launches `command` and returns its pid without waiting for it.
///
/// The child is detached from our stdio and is never reaped.
pub fn start_process(command: &str, args: &[String]) -> Result<u32, ControlError> {
    let child = Command::new(command).args(args).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
    let pid = child.id();

    log::info!("started process (pid={pid}, command={command}, args={args:?})");
    Ok(pid)
}

/// Sends SIGKILL to a live process.
pub fn stop_process(pid: i64) -> Result<(), ControlError> {
    // kill(2) treats 0 and negative ids as process groups
    let target = match i32::try_from(pid) {
        Ok(target) if target > 0 => target,
        _ => return Err(ControlError::NotFound(format!("invalid pid {pid}"))),
    };

    if let Err(err) = Process::new(target as u32) {
        return Err(ControlError::NotFound(err.to_string()));
    }

    signal::kill(Pid::from_raw(target), Signal::SIGKILL)?;
    log::info!("stopped process (pid={pid})");

    Ok(())
}
