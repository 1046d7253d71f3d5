use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub daemon: Daemon,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Daemon {
    pub address: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daemon: Daemon {
                address: "0.0.0.0".to_string(),
                port: 7000,
            },
        }
    }
}

impl Config {
    pub fn get_address(&self) -> String { format!("{}:{}", self.daemon.address, self.daemon.port) }

    /// Applies one-off overrides from the command line.
    pub fn with_overrides(mut self, address: Option<String>, port: Option<u16>) -> Self {
        if let Some(address) = address {
            self.daemon.address = address;
        }
        if let Some(port) = port {
            self.daemon.port = port;
        }
        self
    }
}
