use thiserror::Error;

/// An OS metrics query could not be answered.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("failed to enumerate processes: {0}")]
    ProcessTable(String),

    #[error("failed to read {attribute} of process {pid}: {reason}")]
    Attribute { pid: u32, attribute: &'static str, reason: String },

    #[error("failed to sample cpu usage: {0}")]
    Cpu(String),

    #[error("failed to read memory usage: {0}")]
    Memory(String),
}

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Process not found: {0}")]
    NotFound(String),

    #[error("Failed to start process: {0}")]
    Launch(#[from] std::io::Error),

    #[error("Failed to stop process: {0}")]
    Signal(#[from] nix::Error),
}
