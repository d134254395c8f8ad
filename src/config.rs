use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::credential::{Credential, DEFAULT_BASE_PATH};
use crate::error::EhopError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub key_file: Option<PathBuf>,
    pub verify_tls: bool,
    pub base_path: String,
    pub timeout: Option<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            key_file: None,
            verify_tls: false, // appliances ship self-signed certificates
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: None,
        }
    }
}

impl UserConfig {
    pub fn load() -> Self {
        Self::load_in(Self::get_config_dir().ok().as_deref())
    }

    /// Without a config directory (no home) the defaults apply.
    pub fn load_in(config_dir: Option<&Path>) -> Self {
        match config_dir {
            Some(dir) => Self::load_from(&dir.join("config.json")),
            None => {
                debug!("no home directory, using default config");
                Self::default()
            }
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or
    /// cannot be parsed.
    pub fn load_from(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %config_path.display(), "no user config, using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "ignoring unreadable user config");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_config_dir()?;
        self.save_to(&config_dir.join("config.json"))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    fn get_config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Unable to find home directory"))?;

        Ok(PathBuf::from(home).join(".ehop"))
    }
}

/// A JSON key file mapping appliance hostnames to API keys:
///
/// ```json
/// { "eh.example.com": "0123456789abcdef" }
/// ```
#[derive(Debug, Clone)]
pub struct KeyFile {
    path: PathBuf,
    keys: BTreeMap<String, String>,
}

impl KeyFile {
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read(&path).map_err(|source| EhopError::KeyFileRead {
            path: path.clone(),
            source,
        })?;
        let keys = serde_json::from_slice(&content).map_err(|source| EhopError::KeyFileFormat {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, keys })
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// The credential for a key file holding exactly one appliance.
    pub fn credential(&self) -> crate::Result<Credential> {
        let mut entries = self.keys.iter();
        match (entries.next(), entries.next()) {
            (Some((hostname, key)), None) => Ok(Credential::new(key, hostname)),
            (None, _) => Err(EhopError::KeyFileEmpty(self.path.clone())),
            (Some(_), Some(_)) => Err(EhopError::KeyFileAmbiguous(self.path.clone())),
        }
    }

    pub fn credential_for(&self, hostname: &str) -> crate::Result<Credential> {
        self.keys
            .get(hostname)
            .map(|key| Credential::new(key, hostname))
            .ok_or_else(|| EhopError::UnknownHost(hostname.to_string()))
    }
}
