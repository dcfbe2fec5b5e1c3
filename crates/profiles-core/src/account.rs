//! Social account proof entries.

use serde::{Deserialize, Serialize};

/// Maximum identifier length shown before truncation.
pub const MAX_DISPLAY_IDENTIFIER_CHARS: usize = 40;

/// Marker appended to a truncated identifier.
pub const ELLIPSIS: &str = "...";

/// One social account attached to an identity.
///
/// An empty identifier means "remove this account" and is never a saved
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    /// Service name, matched against the service registry
    pub service: String,
    /// Username or key identifier on the service
    pub identifier: String,
    /// Link to the externally hosted proof
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    /// Whether the proof has been verified
    #[serde(default)]
    pub verified: bool,
    /// Address of the identity that owns the account
    pub owner_address: String,
}

impl SocialAccount {
    /// Create an unverified account without a proof URL.
    pub fn new(
        service: impl Into<String>,
        identifier: impl Into<String>,
        owner_address: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            identifier: identifier.into(),
            proof_url: None,
            verified: false,
            owner_address: owner_address.into(),
        }
    }

    /// Set the proof URL.
    #[must_use]
    pub fn with_proof_url(mut self, proof_url: impl Into<String>) -> Self {
        self.proof_url = Some(proof_url.into());
        self
    }

    /// Set the verified flag.
    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Check if verification still needs to happen for this account.
    pub fn needs_verification(&self) -> bool {
        !self.verified && !self.identifier.is_empty()
    }

    /// Identifier shortened for display.
    pub fn display_identifier(&self) -> String {
        truncate_identifier(&self.identifier)
    }
}

/// Truncate an identifier to [`MAX_DISPLAY_IDENTIFIER_CHARS`] characters,
/// appending [`ELLIPSIS`] when anything was cut.
pub fn truncate_identifier(identifier: &str) -> String {
    match identifier.char_indices().nth(MAX_DISPLAY_IDENTIFIER_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &identifier[..cut]),
        None => identifier.to_string(),
    }
}
