//! # Store Snapshot
//!
//! The slice of host application state the profile views observe. Hosts
//! build a fresh snapshot whenever their store changes and hand it to the
//! view; views cache it read-only and never mutate the store themselves.

use profiles_core::{AddressLedger, ApiSettings, IdentityMap};
use serde::{Deserialize, Serialize};

/// Injected state for the identity list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileStoreSnapshot {
    /// Local identities keyed by domain name
    pub local_identities: IdentityMap,
    /// Names the user's addresses own on-chain
    pub names_owned: Vec<String>,
    /// Message of the last failed profile creation, if any
    pub create_profile_error: Option<String>,
    /// Identity addresses and next unused index
    pub identity_account: AddressLedger,
    /// API and service settings
    pub api: ApiSettings,
    /// Encrypted backup phrase, opaque to this crate
    pub encrypted_backup_phrase: String,
}

impl ProfileStoreSnapshot {
    /// Create an empty snapshot with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The create error, treating an empty message as absent.
    pub fn create_profile_error(&self) -> Option<&str> {
        self.create_profile_error
            .as_deref()
            .filter(|message| !message.is_empty())
    }

    /// Number of local identities.
    pub fn identity_count(&self) -> usize {
        self.local_identities.len()
    }
}
