//! # Identity Model
//!
//! Local identities, their profile documents, and the address ledger that
//! gates creation of new identities.
//!
//! # Invariants
//!
//! - Identity keys are unique; the mapping preserves insertion order so cards
//!   render in the order the store produced them
//! - An identity is displayable only once it has a non-empty domain name
//! - A new identity can be created only while the ledger's next unused index
//!   lies within the allocated address list

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Profile
// =============================================================================

/// A person profile document.
///
/// The document is owned and interpreted by the external profile library;
/// this type only reads the few fields the views display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Value);

impl Profile {
    /// Wrap a raw profile document.
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Build a profile with a single avatar image.
    pub fn with_avatar(url: impl Into<String>) -> Self {
        Self(serde_json::json!({
            "@type": "Person",
            "image": [{ "@type": "ImageObject", "name": "avatar", "contentUrl": url.into() }],
        }))
    }

    /// Borrow the raw document.
    pub fn document(&self) -> &Value {
        &self.0
    }

    /// Content URL of the first image named `avatar`, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.0
            .get("image")?
            .as_array()?
            .iter()
            .find(|image| image.get("name").and_then(Value::as_str) == Some("avatar"))
            .and_then(|image| image.get("contentUrl"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

// =============================================================================
// Identity
// =============================================================================

/// A local identity record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Registered or pending domain name; unset until one is assigned
    #[serde(default)]
    pub domain_name: Option<String>,
    /// Address that owns this identity
    pub owner_address: String,
    /// Profile document
    #[serde(default)]
    pub profile: Profile,
    /// Whether the name registration has completed
    #[serde(default)]
    pub registered: bool,
}

impl Identity {
    /// Create an identity keyed by a bare owner address (no name yet).
    pub fn new(owner_address: impl Into<String>) -> Self {
        Self {
            owner_address: owner_address.into(),
            ..Self::default()
        }
    }

    /// Set the domain name.
    #[must_use]
    pub fn with_domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.domain_name = Some(domain_name.into());
        self
    }

    /// Set the profile document.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the registration status.
    #[must_use]
    pub fn with_registered(mut self, registered: bool) -> Self {
        self.registered = registered;
        self
    }

    /// The domain name, treating an empty string as absent.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Check if this identity is ready to be shown as a card.
    pub fn is_displayable(&self) -> bool {
        self.domain_name().is_some()
    }

    /// Check if the registration is still pending.
    pub fn is_pending(&self) -> bool {
        !self.registered
    }

    /// Check if a username can still be added to this identity.
    ///
    /// True while the identity is stored under its own owner address.
    pub fn can_add_username(&self, key: &str) -> bool {
        self.owner_address == key
    }
}

// =============================================================================
// IdentityMap
// =============================================================================

/// Local identities keyed by domain name (or owner address before a name
/// exists), in store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityMap {
    identities: IndexMap<String, Identity>,
}

impl IdentityMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get identity by key.
    pub fn get(&self, key: &str) -> Option<&Identity> {
        self.identities.get(key)
    }

    /// Iterate all `(key, identity)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Identity)> {
        self.identities.iter().map(|(key, id)| (key.as_str(), id))
    }

    /// Iterate identities that have a domain name.
    pub fn displayable(&self) -> impl Iterator<Item = (&str, &Identity)> {
        self.iter().filter(|(_, identity)| identity.is_displayable())
    }

    /// All keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.identities.keys().map(String::as_str)
    }

    /// Number of identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Check if there are no identities.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.identities.contains_key(key)
    }

    /// Insert an identity (upsert semantics).
    pub fn insert(&mut self, key: impl Into<String>, identity: Identity) {
        self.identities.insert(key.into(), identity);
    }
}

impl FromIterator<(String, Identity)> for IdentityMap {
    fn from_iter<T: IntoIterator<Item = (String, Identity)>>(iter: T) -> Self {
        Self {
            identities: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// AddressLedger
// =============================================================================

/// Allocated identity addresses and the cursor to the next unused one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLedger {
    /// Derived identity addresses, in derivation order
    pub addresses: Vec<String>,
    /// Index of the next address not yet bound to an identity
    #[serde(rename = "addressIndex")]
    pub next_unused_index: usize,
}

impl AddressLedger {
    /// Create a ledger.
    pub fn new(addresses: Vec<String>, next_unused_index: usize) -> Self {
        Self {
            addresses,
            next_unused_index,
        }
    }

    /// Check if an unused address slot exists.
    ///
    /// Equivalent to `next_unused_index + 1 <= addresses.len()`.
    pub fn has_unused_address(&self) -> bool {
        self.next_unused_index < self.addresses.len()
    }

    /// The next unused address, if one exists.
    pub fn next_unused_address(&self) -> Option<&str> {
        self.addresses
            .get(self.next_unused_index)
            .map(String::as_str)
    }

    /// Number of allocated addresses.
    pub fn allocated(&self) -> usize {
        self.addresses.len()
    }
}
