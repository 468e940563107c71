use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".roster.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

impl RosterConfig {
    /// Load configuration.
    ///
    /// An explicitly given path must exist. Without one, `.roster.yml` in
    /// the working directory is used when present and defaults apply when
    /// it is not: the server runs without any project setup.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(RosterError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Self::from_file(p)
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
