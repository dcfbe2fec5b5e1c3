//! # View Module
//!
//! Headless view models for the profile screens. Each view caches the state
//! it was handed, keeps a few UI-only fields, and describes what to draw
//! through plain serializable render types.

pub mod display;
pub mod identity_list;
pub mod prompt;
pub mod social_account;

pub use identity_list::{
    identity_count_grew, request_refresh, Alert, AlertStatus, CreateRequest, IdentityCard,
    IdentityListRender, IdentityListView, PasswordPromptRender, StateTransition,
};
pub use prompt::{PasswordPrompt, PASSWORD_FIELD};
pub use social_account::{
    AccountRow, Chevron, FieldRender, RowEditor, RowStatus, RowSummary, SocialAccountEditor,
    SocialAccountHandler, SocialAccountRender, VerificationInfo,
};
