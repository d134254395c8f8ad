use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::{KeyFile, UserConfig};
use crate::credential::Credential;
use crate::http::ClientOptions;
use crate::utils::parse_timeout;

/// Connection flags shared by every command that talks to an appliance.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub host: Option<String>,
    pub key: Option<String>,
    pub key_file: Option<PathBuf>,
    pub base_path: Option<String>,
    pub scheme: Option<String>,
    pub verify_tls: bool,
    pub timeout: Option<String>,
}

impl ConnectionOptions {
    /// Picks the credential: an explicit host and key win, otherwise the key
    /// file from the flags or the user config is used.
    pub fn credential(&self, config: &UserConfig) -> Result<Credential> {
        let credential = match (&self.host, &self.key) {
            (Some(host), Some(key)) => Credential::new(key, host),
            (None, Some(_)) => bail!("--key needs --host"),
            (host, None) => {
                let path = self
                    .key_file
                    .as_ref()
                    .or(config.key_file.as_ref())
                    .context("No credentials: pass --host and --key, or --key-file")?;
                let keys = KeyFile::load(path)?;
                match host {
                    Some(host) => keys.credential_for(host)?,
                    None => keys.credential()?,
                }
            }
        };

        let base_path = self.base_path.as_deref().unwrap_or(&config.base_path);
        let credential = credential.with_base_path(base_path);
        Ok(match &self.scheme {
            Some(scheme) => credential.with_scheme(scheme),
            None => credential,
        })
    }

    pub fn client_options(&self, config: &UserConfig) -> Result<ClientOptions> {
        let timeout = self
            .timeout
            .as_deref()
            .or(config.timeout.as_deref())
            .map(parse_timeout)
            .transpose()?;

        Ok(ClientOptions {
            verify_tls: self.verify_tls || config.verify_tls,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_host_and_key() {
        let options = ConnectionOptions {
            host: Some("eh.example.com".to_string()),
            key: Some("abc".to_string()),
            ..Default::default()
        };
        let cred = options.credential(&UserConfig::default()).unwrap();
        assert_eq!(cred.url_for("devices"), "https://eh.example.com/api/v1/devices");
        assert_eq!(cred.api_key(), "abc");
    }

    #[test]
    fn test_key_without_host_rejected() {
        let options = ConnectionOptions {
            key: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(options.credential(&UserConfig::default()).is_err());
    }

    #[test]
    fn test_no_credentials_at_all() {
        let err = ConnectionOptions::default()
            .credential(&UserConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("No credentials"));
    }

    #[test]
    fn test_key_file_from_config_with_host_selection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.json");
        std::fs::write(&path, r#"{"eda1.local": "k1", "eda2.local": "k2"}"#).unwrap();

        let config = UserConfig {
            key_file: Some(path),
            base_path: "/api/v2/".to_string(),
            ..Default::default()
        };
        let options = ConnectionOptions {
            host: Some("eda2.local".to_string()),
            scheme: Some("http".to_string()),
            ..Default::default()
        };

        let cred = options.credential(&config).unwrap();
        assert_eq!(cred.api_key(), "k2");
        assert_eq!(cred.url_for("devices"), "http://eda2.local/api/v2/devices");
    }

    #[test]
    fn test_client_options_merge() {
        let config = UserConfig {
            verify_tls: true,
            timeout: Some("10s".to_string()),
            ..Default::default()
        };
        let options = ConnectionOptions::default().client_options(&config).unwrap();
        assert!(options.verify_tls);
        assert_eq!(options.timeout, Some(Duration::from_secs(10)));

        let flags = ConnectionOptions {
            timeout: Some("500ms".to_string()),
            ..Default::default()
        };
        let options = flags.client_options(&UserConfig::default()).unwrap();
        assert!(!options.verify_tls);
        assert_eq!(options.timeout, Some(Duration::from_millis(500)));
    }
}
