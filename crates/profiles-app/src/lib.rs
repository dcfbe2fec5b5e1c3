//! Profiles App - Headless Profile Screens
//!
//! Portable view models for the profile management screens:
//!
//! - `IdentityListView`: identity cards and the password-gated create flow
//! - `SocialAccountEditor`: one collapsible social-account proof row
//!
//! # Architecture
//!
//! Views hold a cached projection of host state plus UI-only fields. They
//! never mutate host state: requests go out through [`IdentityBridge`] or
//! [`SocialAccountHandler`], and results come back as a new
//! [`ProfileStoreSnapshot`] or an updated account.
//!
//! # Example
//!
//! ```ignore
//! use profiles_app::{IdentityListView, ProfileStoreSnapshot};
//!
//! let mut view = IdentityListView::new(snapshot);
//! view.on_attach(&bridge).await;
//!
//! view.open_prompt(&bridge);
//! view.set_field("password", "correct horse")?;
//! view.submit(&bridge).await?;
//!
//! // Later, when the host store changes:
//! let transition = view.on_state_changed(next_snapshot);
//! if transition.creation_succeeded {
//!     println!("{} cards", view.render().cards.len());
//! }
//! ```

#![forbid(unsafe_code)]

pub mod bridge;
pub mod store;
pub mod ui;
pub mod views;

pub use bridge::{BoxedIdentityBridge, IdentityBridge};
pub use store::ProfileStoreSnapshot;
pub use ui::UiIdentityList;
pub use views::{
    IdentityListRender, IdentityListView, SocialAccountEditor, SocialAccountHandler,
    SocialAccountRender, StateTransition,
};

pub use profiles_core::{
    AddressLedger, ApiSettings, Identity, IdentityMap, Profile, ProfileError, ServiceRegistry,
    SocialAccount,
};
