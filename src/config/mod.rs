pub mod structs;

use crate::helpers;

use colored::Colorize;
use macros_rs::{crashln, string};
use std::{fs, path::Path};
use structs::Config;

/// Parses a config file, writing the defaults first when it does not exist.
pub fn load(config_path: &Path) -> anyhow::Result<Config> {
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(config_path, toml::to_string(&Config::default())?)?;
        log::info!("created config file (path={})", config_path.display());
    }

    let contents = fs::read_to_string(config_path)?;
    Ok(toml::from_str(&contents)?)
}

/// Reads `~/.taskmgr/config.toml`.
pub fn read() -> Config {
    match home::home_dir() {
        Some(path) => match load(&path.join(".taskmgr").join("config.toml")) {
            Ok(config) => config,
            Err(err) => crashln!("{} Cannot read config.\n{}", *helpers::FAIL, string!(err).white()),
        },
        None => crashln!("{} Impossible to get your home directory", *helpers::FAIL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = env::temp_dir().join(format!("taskmgr-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_writes_defaults() {
        let dir = scratch("defaults");
        let path = dir.join("config.toml");

        let config = load(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.daemon.port, 7000);
        assert_eq!(config.get_address(), "0.0.0.0:7000");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_existing_file() {
        let dir = scratch("existing");
        let path = dir.join("config.toml");

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "[daemon]\naddress = \"127.0.0.1\"\nport = 8080\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.get_address(), "127.0.0.1:8080");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = scratch("malformed");
        let path = dir.join("config.toml");

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "[daemon]\nport = \"not a port\"\n").unwrap();

        assert!(load(&path).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some("127.0.0.1".to_string()), None);
        assert_eq!(config.get_address(), "127.0.0.1:7000");
    }
}
