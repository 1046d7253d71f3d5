use serde::{Deserialize, Serialize};
use taskmgr::{helpers, ProcessInfo, SystemStats};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ApiResponse {
    #[schema(example = "2024-01-01T12:00:00+01:00")]
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_stats: Option<SystemStats>,
    pub processes: Vec<ProcessInfo>,
}

impl ApiResponse {
    pub fn new(system_stats: Option<SystemStats>, processes: Vec<ProcessInfo>) -> Self {
        Self {
            timestamp: helpers::timestamp(),
            system_stats,
            processes,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StartProcessRequest {
    #[serde(default)]
    #[schema(example = "/usr/bin/sleep")]
    pub command: String,
    #[serde(default)]
    #[schema(example = json!(["30"]))]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ProcessResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
}

impl ProcessResponse {
    pub fn started(pid: u32) -> Self {
        Self {
            success: true,
            message: "Process started successfully".to_string(),
            pid: Some(pid),
        }
    }

    pub fn stopped(pid: i64) -> Self {
        Self {
            success: true,
            message: format!("Process {pid} stopped successfully"),
            pid: None,
        }
    }

    pub fn failed(message: String) -> Self { Self { success: false, message, pid: None } }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "Not Found")]
    pub message: String,
}
