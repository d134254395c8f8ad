use std::fmt;
use std::path::Path;

use crate::config::KeyFile;
use crate::error::Result;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_BASE_PATH: &str = "/api/v1/";

/// API key and target address of one appliance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    hostname: String,
    base_path: String,
    scheme: String,
}

impl Credential {
    pub fn new(api_key: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            hostname: hostname.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn from_key_file(path: impl AsRef<Path>) -> Result<Self> {
        KeyFile::load(path)?.credential()
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    // plain concatenation, no slash handling
    pub fn url_for(&self, call_path: &str) -> String {
        format!(
            "{}://{}{}{}",
            self.scheme, self.hostname, self.base_path, call_path
        )
    }

    pub fn authorization(&self) -> String {
        format!("ExtraHop apikey={}", self.api_key)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"****")
            .field("hostname", &self.hostname)
            .field("base_path", &self.base_path)
            .field("scheme", &self.scheme)
            .finish()
    }
}
