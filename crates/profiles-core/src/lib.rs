//! Profiles Core - Identity Profile Model
//!
//! Pure data types shared by the profile views and their hosts:
//!
//! - Identities: `Identity`, `IdentityMap`, `Profile`, `AddressLedger`
//! - Social proofs: `SocialAccount` and identifier display helpers
//! - Services: `ServiceRegistry`, `ServiceType`, `ServiceKind`
//! - Configuration: `ApiSettings`
//! - Errors: `ProfileError`
//!
//! Nothing in this crate performs I/O beyond loading a settings file; key
//! derivation, backup phrases, and name registration belong to external
//! collaborators.

#![forbid(unsafe_code)]

pub mod account;
pub mod config;
pub mod error;
pub mod identity;
pub mod services;

pub use account::{truncate_identifier, SocialAccount, ELLIPSIS, MAX_DISPLAY_IDENTIFIER_CHARS};
pub use config::ApiSettings;
pub use error::ProfileError;
pub use identity::{AddressLedger, Identity, IdentityMap, Profile};
pub use services::{
    supports_proof_url, ServiceKind, ServiceRegistry, ServiceType, IDENTIFIER_MARKER,
    PROOF_URL_SERVICES,
};
