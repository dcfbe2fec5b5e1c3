//! # Service Registry
//!
//! Known social-account service types and the lookups views perform on them:
//! icon class, profile URL derivation, proof-URL capability, and the kind of
//! proof a service asks for.
//!
//! # Invariants
//!
//! - Lookups never fail: an unknown service yields an empty icon class and
//!   the conventional `http://{service}.com/{identifier}` URL
//! - A URL template is used only when it contains [`IDENTIFIER_MARKER`]

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Substitution marker inside a service URL template.
pub const IDENTIFIER_MARKER: &str = "{identifier}";

/// Services whose rows offer a proof URL field.
pub const PROOF_URL_SERVICES: &[&str] = &[
    "instagram",
    "github",
    "twitter",
    "facebook",
    "linkedin",
    "hackernews",
];

/// Check if a service accepts a proof URL.
pub fn supports_proof_url(service: &str) -> bool {
    PROOF_URL_SERVICES.contains(&service)
}

// =============================================================================
// ServiceKind
// =============================================================================

/// What a service's proof demonstrates ownership of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// A currency address (bitcoin, ethereum)
    Currency,
    /// A public key (pgp, ssh)
    Key,
    /// A social or code-hosting account
    Social,
}

impl ServiceKind {
    /// Classify a service name.
    pub fn of(service: &str) -> Self {
        match service {
            "bitcoin" | "ethereum" => Self::Currency,
            "pgp" | "ssh" => Self::Key,
            _ => Self::Social,
        }
    }

    /// Noun used in prompt copy for this kind.
    pub fn proof_noun(self) -> &'static str {
        match self {
            Self::Currency => "address",
            Self::Key => "key",
            Self::Social => "account",
        }
    }
}

// =============================================================================
// ServiceType
// =============================================================================

/// Registry entry for one service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    /// Human label, e.g. "GitHub"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Icon class rendered next to the account
    pub icon_class: String,
    /// Profile URL template containing [`IDENTIFIER_MARKER`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,
}

impl ServiceType {
    /// Create an entry with an icon class only.
    pub fn new(icon_class: impl Into<String>) -> Self {
        Self {
            label: None,
            icon_class: icon_class.into(),
            url_template: None,
        }
    }

    /// Set the URL template.
    #[must_use]
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Expand the URL template for an identifier.
    ///
    /// Returns `None` when there is no template or it lacks the marker.
    pub fn expand_url(&self, identifier: &str) -> Option<String> {
        self.url_template
            .as_deref()
            .filter(|template| template.contains(IDENTIFIER_MARKER))
            .map(|template| template.replacen(IDENTIFIER_MARKER, identifier, 1))
    }
}

// =============================================================================
// ServiceRegistry
// =============================================================================

/// Typed mapping from service name to [`ServiceType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRegistry {
    services: IndexMap<String, ServiceType>,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            services: IndexMap::new(),
        }
    }

    /// Registry of the services the profile editor ships with.
    pub fn builtin() -> Self {
        let entries = [
            ("twitter", "Twitter", "fa-twitter", Some("https://twitter.com/{identifier}")),
            ("facebook", "Facebook", "fa-facebook", Some("https://facebook.com/{identifier}")),
            ("github", "GitHub", "fa-github-alt", Some("https://github.com/{identifier}")),
            ("instagram", "Instagram", "fa-instagram", Some("https://instagram.com/{identifier}")),
            ("linkedin", "LinkedIn", "fa-linkedin", Some("https://www.linkedin.com/in/{identifier}")),
            (
                "hackernews",
                "Hacker News",
                "fa-hacker-news",
                Some("https://news.ycombinator.com/user?id={identifier}"),
            ),
            (
                "bitcoin",
                "Bitcoin",
                "fa-bitcoin",
                Some("https://explorer.blockstack.org/address/{identifier}"),
            ),
            (
                "ethereum",
                "Ethereum",
                "fa-link",
                Some("https://tradeblock.com/ethereum/account/{identifier}"),
            ),
            (
                "pgp",
                "PGP",
                "fa-key",
                Some("https://pgp.mit.edu/pks/lookup?search={identifier}&op=vindex&fingerprint=on"),
            ),
            ("ssh", "SSH", "fa-key", None),
        ];

        entries
            .into_iter()
            .map(|(name, label, icon, template)| {
                let mut entry = ServiceType::new(icon).with_label(label);
                entry.url_template = template.map(str::to_string);
                (name.to_string(), entry)
            })
            .collect()
    }

    /// Check if a service is registered.
    pub fn contains(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }

    /// Get a service entry.
    pub fn get(&self, service: &str) -> Option<&ServiceType> {
        self.services.get(service)
    }

    /// Register or replace a service entry.
    pub fn insert(&mut self, service: impl Into<String>, entry: ServiceType) {
        self.services.insert(service.into(), entry);
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceType)> {
        self.services.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Icon class for a service; empty when unknown.
    pub fn icon_class(&self, service: &str) -> &str {
        self.get(service)
            .map(|entry| entry.icon_class.as_str())
            .unwrap_or("")
    }

    /// Profile URL for an account on a service.
    ///
    /// Uses the service's template when it contains the marker, otherwise
    /// `http://{service}.com/{identifier}`.
    pub fn account_url(&self, service: &str, identifier: &str) -> String {
        self.get(service)
            .and_then(|entry| entry.expand_url(identifier))
            .unwrap_or_else(|| format!("http://{service}.com/{identifier}"))
    }
}

impl FromIterator<(String, ServiceType)> for ServiceRegistry {
    fn from_iter<T: IntoIterator<Item = (String, ServiceType)>>(iter: T) -> Self {
        Self {
            services: iter.into_iter().collect(),
        }
    }
}
