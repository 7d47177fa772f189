//! Portal configuration.
//!
//! Values come from built-in defaults, then an optional JSON file, then
//! command-line/environment overrides applied by the binary.
//!
//! ```json
//! {
//!   "access_code": "CAMILA-2025",
//!   "locale": "es",
//!   "submit_delay_ms": 600,
//!   "preview": { "scale": 0.22 }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::access::{AccessCode, AccessGate};
use crate::compositor::PreviewFrame;
use crate::detail::DEFAULT_SUBMIT_DELAY;
use crate::error::{PortalError, PortalResult};
use crate::location::MemoryLocation;
use crate::registry::{DisplayLocale, TemplateRegistry};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default gallery heading.
pub const DEFAULT_SITE_HEADING: &str = "mariacamilasolorza.com site";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Secret required at the access gate
    pub access_code: Option<String>,
    pub locale: DisplayLocale,
    pub site_heading: String,
    /// Cosmetic "Submitting…" delay on the gate
    pub gate_delay_ms: u64,
    /// Delay before a contact form reports sent
    pub submit_delay_ms: u64,
    pub preview: PreviewFrame,
    /// Base URL the `code` query parameter is echoed onto
    pub base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            access_code: None,
            locale: DisplayLocale::default(),
            site_heading: DEFAULT_SITE_HEADING.to_string(),
            gate_delay_ms: 0,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY.as_millis() as u64,
            preview: PreviewFrame::default(),
            base_url: "http://localhost/".to_string(),
        }
    }
}

impl PortalConfig {
    /// Default config file location (`<config dir>/templates-portal/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("templates-portal").join(CONFIG_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> PortalResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load `path` if given, else the default location if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> PortalResult<Self> {
        if let Some(path) = path {
            tracing::info!("Loading config from {:?}", path);
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => {
                tracing::info!("Loading config from {:?}", default);
                Self::from_file(&default)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Check every value the portal cannot start without.
    pub fn validate(&self) -> PortalResult<()> {
        self.access_code()?;
        self.preview.validate()?;
        MemoryLocation::new(&self.base_url)?;
        Ok(())
    }

    pub fn access_code(&self) -> PortalResult<AccessCode> {
        match &self.access_code {
            Some(code) => AccessCode::new(code.clone()),
            None => Err(PortalError::Config(
                "no access code configured (use --access-code or PORTAL_ACCESS_CODE)".to_string(),
            )),
        }
    }

    pub fn access_gate(&self) -> PortalResult<AccessGate> {
        Ok(AccessGate::new(self.access_code()?))
    }

    pub fn registry(&self) -> PortalResult<TemplateRegistry> {
        TemplateRegistry::builtin(self.locale)
    }

    pub fn location(&self) -> PortalResult<MemoryLocation> {
        MemoryLocation::new(&self.base_url)
    }

    pub fn gate_delay(&self) -> Duration {
        Duration::from_millis(self.gate_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
