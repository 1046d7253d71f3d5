pub mod config;
pub mod error;
pub mod helpers;
pub mod host;
pub mod process;
pub mod system;

pub use error::{ControlError, QueryError};
pub use host::{Host, Native, SharedHost};
pub use process::{list_processes, list_third_party_processes, start_process, stop_process, ProcessInfo};
pub use system::{collect_stats, MemoryInfo, SystemStats};
