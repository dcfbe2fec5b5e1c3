//! # IdentityBridge: Abstract Identity Operations
//!
//! This module defines the `IdentityBridge` trait, which abstracts the
//! identity operations that need keys, storage, or the network. The views
//! call into it and observe the outcome through the next store snapshot;
//! nothing here returns the created identity or the refreshed mapping.
//!
//! ## Design
//!
//! ```text
//! profiles-app (pure)          host (runtime)
//! ┌──────────────────┐        ┌──────────────────┐
//! │ IdentityListView │        │ identity store   │
//! │   ┌────────────┐ │        │   implements     │
//! │   │IdentityBridge◄────────│   IdentityBridge │
//! │   └────────────┘ │        │                  │
//! └──────────────────┘        └──────────────────┘
//! ```

use async_trait::async_trait;
use profiles_core::{ApiSettings, IdentityMap, ProfileError};
use std::sync::Arc;

/// Bridge trait for identity operations.
///
/// Implementations dispatch the work and report completion by updating the
/// host store. An `Err` means the request could not be dispatched at all.
#[async_trait]
pub trait IdentityBridge: Send + Sync {
    /// Refresh local identities from the name service.
    ///
    /// # Arguments
    /// * `api` - API settings for lookups
    /// * `addresses` - Allocated identity addresses
    /// * `identities` - Identities currently known locally
    /// * `names_owned` - Names already known to be owned
    async fn refresh_identities(
        &self,
        api: &ApiSettings,
        addresses: &[String],
        identities: &IdentityMap,
        names_owned: &[String],
    ) -> Result<(), ProfileError>;

    /// Create a new profile bound to the address at `address_index`.
    ///
    /// Success shows up as a new identity in the store; a wrong password
    /// or backend failure shows up as the store's create error.
    async fn create_new_profile(
        &self,
        encrypted_backup_phrase: &str,
        password: &str,
        address_index: usize,
    ) -> Result<(), ProfileError>;

    /// Clear the store's create error.
    fn reset_create_new_profile_error(&self);
}

/// Shared bridge handle.
pub type BoxedIdentityBridge = Arc<dyn IdentityBridge>;
