//! API settings
//!
//! The settings object the host application carries for API access. The
//! profile views read the service registry (`web_account_types`) from it and
//! pass it through to the identity refresh collaborator.

use crate::error::ProfileError;
use crate::services::ServiceRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default endpoint for name lookups.
pub const DEFAULT_NAME_LOOKUP_URL: &str = "https://core.blockstack.org/v1/names/{name}";

/// Default endpoint for address balance lookups.
pub const DEFAULT_BITCOIN_ADDRESS_LOOKUP_URL: &str =
    "https://core.blockstack.org/v1/addresses/bitcoin/{address}";

/// Environment variable overriding [`ApiSettings::name_lookup_url`].
pub const ENV_NAME_LOOKUP_URL: &str = "PROFILES_NAME_LOOKUP_URL";

/// Environment variable overriding [`ApiSettings::bitcoin_address_lookup_url`].
pub const ENV_BITCOIN_ADDRESS_LOOKUP_URL: &str = "PROFILES_BITCOIN_ADDRESS_LOOKUP_URL";

/// API and service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Known social-account services
    pub web_account_types: ServiceRegistry,
    /// Name lookup endpoint, `{name}` substituted
    pub name_lookup_url: String,
    /// Address lookup endpoint, `{address}` substituted
    pub bitcoin_address_lookup_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            web_account_types: ServiceRegistry::builtin(),
            name_lookup_url: DEFAULT_NAME_LOOKUP_URL.to_string(),
            bitcoin_address_lookup_url: DEFAULT_BITCOIN_ADDRESS_LOOKUP_URL.to_string(),
        }
    }
}

impl ApiSettings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(content)
            .map_err(|e| ProfileError::config(format!("Invalid JSON: {e}")))
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        toml::from_str(content).map_err(|e| ProfileError::config(format!("Invalid TOML: {e}")))
    }

    /// Load settings from a file, choosing the format by extension.
    ///
    /// `.toml` files are parsed as TOML, everything else as JSON. The loaded
    /// settings are validated before being returned.
    pub fn load_from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProfileError::io(path.display().to_string(), e.to_string()))?;

        let settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!(
            path = %path.display(),
            services = settings.web_account_types.len(),
            "Loaded API settings"
        );
        Ok(settings)
    }

    /// Apply overrides from the process environment.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(std::env::vars());
    }

    /// Apply overrides from an iterator of `(name, value)` pairs.
    pub fn merge_with_vars(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            match key.as_str() {
                ENV_NAME_LOOKUP_URL => self.name_lookup_url = value,
                ENV_BITCOIN_ADDRESS_LOOKUP_URL => self.bitcoin_address_lookup_url = value,
                _ => {}
            }
        }
    }

    /// Validate the settings.
    ///
    /// # Validation Rules
    /// - Every service has a non-empty icon class
    /// - A URL template, when present, is non-empty
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (name, entry) in self.web_account_types.iter() {
            if entry.icon_class.trim().is_empty() {
                return Err(ProfileError::config(format!(
                    "service {name} has an empty icon class"
                )));
            }
            if entry.url_template.as_deref().is_some_and(str::is_empty) {
                return Err(ProfileError::config(format!(
                    "service {name} has an empty URL template"
                )));
            }
        }
        Ok(())
    }
}
