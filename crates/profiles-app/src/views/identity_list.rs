//! # Identity List View
//!
//! Lists local identities as cards and drives the password-gated profile
//! creation flow.
//!
//! # Invariants
//!
//! - Only identities with a non-empty domain name produce a card
//! - Submission is refused while no unused address exists or a request is
//!   already in flight
//! - A create error newly present in the store ends the in-flight request;
//!   an error that was already cached is stale and ignored
//! - Growth of the identity count ends the request as a success: the
//!   password is discarded and the prompt closes
//!
//! # Lifecycle
//!
//! ```text
//! on_attach ──► refresh_identities
//! open_prompt ──► set_field("password") ──► submit ──► create_new_profile
//!                                                        │
//! on_state_changed ◄─────────────── store update ◄───────┘
//! ```

use crate::bridge::IdentityBridge;
use crate::store::ProfileStoreSnapshot;
use crate::views::display::local_profile_url;
use crate::views::prompt::PasswordPrompt;
use profiles_core::{IdentityMap, ProfileError};
use serde::{Deserialize, Serialize};

/// Heading above the card list.
pub const LIST_HEADING: &str = "My Profiles";

/// Heading of the password prompt.
pub const PROMPT_HEADING: &str = "Enter your password to create a new profile";

/// Alert shown when the store reports a create error.
pub const CREATE_ERROR_MESSAGE: &str = "Incorrect password";

/// Label of the create affordance.
pub const CREATE_LABEL: &str = "+ Create";

/// Submit label while idle.
pub const SUBMIT_LABEL: &str = "Create new profile";

/// Submit label while a request is in flight.
pub const SUBMIT_PROCESSING_LABEL: &str = "Creating...";

/// Check whether the identity count strictly increased between two updates.
///
/// This is the signal the view treats as "creation succeeded". Any growth
/// counts, including growth caused by an unrelated refresh.
#[must_use]
pub fn identity_count_grew(previous: &IdentityMap, next: &IdentityMap) -> bool {
    previous.len() < next.len()
}

// =============================================================================
// Render Types
// =============================================================================

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Failure the user should act on
    Danger,
}

/// Dismissible inline alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// User-facing message
    pub message: String,
    /// Severity
    pub status: AlertStatus,
    /// Raw error reported by the store or bridge
    pub detail: String,
}

/// Summary card for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCard {
    /// Mapping key of the identity
    pub key: String,
    /// Domain name shown as the card label
    pub label: String,
    /// Registration still pending
    pub pending: bool,
    /// Avatar URL, empty when the profile has none
    pub avatar_url: String,
    /// Route of the local profile page
    pub url: String,
    /// Owner address
    pub owner_address: String,
    /// Whether a username can still be added
    pub can_add_username: bool,
}

/// Password prompt contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPromptRender {
    /// Prompt heading
    pub heading: String,
    /// Create error alert, if any
    pub alert: Option<Alert>,
    /// Placeholder of the password field
    pub password_placeholder: String,
    /// Submit button label
    pub submit_label: String,
    /// Whether the submit button is enabled
    pub submit_enabled: bool,
}

/// Everything the host needs to draw the identity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityListRender {
    /// List heading
    pub heading: String,
    /// One card per displayable identity, in store order
    pub cards: Vec<IdentityCard>,
    /// Prompt contents while the prompt is open
    pub prompt: Option<PasswordPromptRender>,
    /// Create affordance label
    pub create_label: String,
}

/// Outcome of applying a store update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateTransition {
    /// A create error went from absent to present
    pub creation_failed: bool,
    /// The identity count grew
    pub creation_succeeded: bool,
}

/// Arguments of one `create_new_profile` dispatch, captured under the
/// view's lock so the bridge can be awaited without holding it.
#[derive(Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Encrypted backup phrase from the store
    pub encrypted_backup_phrase: String,
    /// Password entered in the prompt
    pub password: String,
    /// Index of the address the new identity will use
    pub address_index: usize,
}

impl std::fmt::Debug for CreateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateRequest")
            .field("password", &"<redacted>")
            .field("address_index", &self.address_index)
            .finish_non_exhaustive()
    }
}

/// Ask the bridge to refresh identities for a store snapshot.
///
/// Free-standing so callers sharing a view can clone the snapshot and
/// release their lock before awaiting.
pub async fn request_refresh<B>(store: &ProfileStoreSnapshot, bridge: &B)
where
    B: IdentityBridge + ?Sized,
{
    if let Err(e) = bridge
        .refresh_identities(
            &store.api,
            &store.identity_account.addresses,
            &store.local_identities,
            &store.names_owned,
        )
        .await
    {
        tracing::warn!(error = %e, "Identity refresh dispatch failed");
    }
}

// =============================================================================
// IdentityListView
// =============================================================================

/// View model for the identity list screen.
#[derive(Debug, Clone, Default)]
pub struct IdentityListView {
    store: ProfileStoreSnapshot,
    prompt: PasswordPrompt,
}

impl IdentityListView {
    /// Create a view over an initial store snapshot.
    pub fn new(store: ProfileStoreSnapshot) -> Self {
        Self {
            store,
            prompt: PasswordPrompt::new(),
        }
    }

    /// Cached store snapshot.
    pub fn store(&self) -> &ProfileStoreSnapshot {
        &self.store
    }

    /// Password prompt state.
    pub fn prompt(&self) -> &PasswordPrompt {
        &self.prompt
    }

    /// Whether an unused identity address exists.
    pub fn has_available_address(&self) -> bool {
        self.store.identity_account.has_unused_address()
    }

    /// Whether submit is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.has_available_address() && !self.prompt.is_processing()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Request an identity refresh when the view is first shown.
    ///
    /// The result arrives later through [`Self::on_state_changed`]. A
    /// dispatch failure is logged and otherwise ignored.
    pub async fn on_attach<B>(&self, bridge: &B)
    where
        B: IdentityBridge + ?Sized,
    {
        tracing::trace!("on_attach");
        request_refresh(&self.store, bridge).await;
    }

    /// Apply a new store snapshot.
    pub fn on_state_changed(&mut self, next: ProfileStoreSnapshot) -> StateTransition {
        tracing::trace!(
            identities = next.identity_count(),
            has_error = next.create_profile_error().is_some(),
            "on_state_changed"
        );

        let had_error = self.store.create_profile_error().is_some();
        let transition = StateTransition {
            creation_failed: !had_error && next.create_profile_error().is_some(),
            creation_succeeded: identity_count_grew(
                &self.store.local_identities,
                &next.local_identities,
            ),
        };

        match next.create_profile_error() {
            Some(message) if !had_error => self.prompt.fail(message),
            Some(_) => {}
            None if had_error => self.prompt.clear_error(),
            None => {}
        }

        if transition.creation_succeeded {
            self.prompt.complete();
        }

        self.store = next;
        transition
    }

    // =========================================================================
    // User Actions
    // =========================================================================

    /// Open the password prompt, clearing any previous error.
    pub fn open_prompt<B>(&mut self, bridge: &B)
    where
        B: IdentityBridge + ?Sized,
    {
        tracing::trace!("open_prompt");
        bridge.reset_create_new_profile_error();
        self.prompt.open();
    }

    /// Close the password prompt, discarding the entered password.
    pub fn close_prompt(&mut self) {
        tracing::trace!("close_prompt");
        self.prompt.close();
    }

    /// Bind a prompt field value.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ProfileError> {
        self.prompt.set_field(name, value)
    }

    /// Submit the password and request a new profile.
    ///
    /// # Errors
    /// * [`ProfileError::NoUnusedAddress`] - every allocated address is used
    /// * [`ProfileError::AlreadyProcessing`] - a request is already in flight
    ///
    /// A bridge failure is not returned; it becomes the prompt's error and
    /// ends processing, exactly like a store-reported create error.
    pub async fn submit<B>(&mut self, bridge: &B) -> Result<(), ProfileError>
    where
        B: IdentityBridge + ?Sized,
    {
        let request = self.begin_submit()?;
        let dispatched = bridge
            .create_new_profile(
                &request.encrypted_backup_phrase,
                &request.password,
                request.address_index,
            )
            .await;
        if let Err(e) = dispatched {
            self.dispatch_failed(request.address_index, &e);
        }
        Ok(())
    }

    /// Check the submit guards, mark the prompt as processing, and capture
    /// the arguments for `create_new_profile`.
    ///
    /// # Errors
    /// Same guards as [`Self::submit`].
    pub fn begin_submit(&mut self) -> Result<CreateRequest, ProfileError> {
        tracing::trace!("submit");
        let ledger = &self.store.identity_account;
        if !ledger.has_unused_address() {
            return Err(ProfileError::no_unused_address(
                ledger.next_unused_index,
                ledger.allocated(),
            ));
        }
        if self.prompt.is_processing() {
            return Err(ProfileError::AlreadyProcessing);
        }

        let request = CreateRequest {
            encrypted_backup_phrase: self.store.encrypted_backup_phrase.clone(),
            password: self.prompt.password().to_string(),
            address_index: ledger.next_unused_index,
        };
        self.prompt.begin_processing();
        Ok(request)
    }

    /// Record that the bridge could not dispatch a create request.
    ///
    /// Ignored once the request has already been resolved by a store update.
    pub fn dispatch_failed(&mut self, address_index: usize, error: &ProfileError) {
        tracing::warn!(error = %error, address_index, "Profile creation dispatch failed");
        if self.prompt.is_processing() {
            self.prompt.fail(error.to_string());
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Cards for all displayable identities, in store order.
    pub fn cards(&self) -> Vec<IdentityCard> {
        self.store
            .local_identities
            .displayable()
            .filter_map(|(key, identity)| {
                let label = identity.domain_name()?.to_string();
                Some(IdentityCard {
                    key: key.to_string(),
                    url: local_profile_url(&label),
                    label,
                    pending: identity.is_pending(),
                    avatar_url: identity.profile.avatar_url().unwrap_or_default().to_string(),
                    owner_address: identity.owner_address.clone(),
                    can_add_username: identity.can_add_username(key),
                })
            })
            .collect()
    }

    /// Describe the screen.
    pub fn render(&self) -> IdentityListRender {
        let prompt = self.prompt.is_open().then(|| PasswordPromptRender {
            heading: PROMPT_HEADING.to_string(),
            alert: self.prompt.error().map(|detail| Alert {
                message: CREATE_ERROR_MESSAGE.to_string(),
                status: AlertStatus::Danger,
                detail: detail.to_string(),
            }),
            password_placeholder: "Password".to_string(),
            submit_label: if self.prompt.is_processing() {
                SUBMIT_PROCESSING_LABEL
            } else {
                SUBMIT_LABEL
            }
            .to_string(),
            submit_enabled: self.can_submit(),
        });

        IdentityListRender {
            heading: LIST_HEADING.to_string(),
            cards: self.cards(),
            prompt,
            create_label: CREATE_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use profiles_core::{AddressLedger, ApiSettings, Identity, Profile};

    struct NoopBridge;

    #[async_trait]
    impl IdentityBridge for NoopBridge {
        async fn refresh_identities(
            &self,
            _api: &ApiSettings,
            _addresses: &[String],
            _identities: &IdentityMap,
            _names_owned: &[String],
        ) -> Result<(), ProfileError> {
            Ok(())
        }

        async fn create_new_profile(
            &self,
            _encrypted_backup_phrase: &str,
            _password: &str,
            _address_index: usize,
        ) -> Result<(), ProfileError> {
            Ok(())
        }

        fn reset_create_new_profile_error(&self) {}
    }

    fn identities(keys: &[(&str, Option<&str>)]) -> IdentityMap {
        keys.iter()
            .map(|(key, domain)| {
                let mut identity = Identity::new(format!("1{key}"));
                identity.domain_name = domain.map(str::to_string);
                (key.to_string(), identity)
            })
            .collect()
    }

    fn snapshot(map: IdentityMap, next_index: usize) -> ProfileStoreSnapshot {
        ProfileStoreSnapshot {
            local_identities: map,
            identity_account: AddressLedger::new(vec!["1A".into(), "1B".into()], next_index),
            encrypted_backup_phrase: "ciphertext".to_string(),
            ..ProfileStoreSnapshot::default()
        }
    }

    #[test]
    fn test_count_growth() {
        let one = identities(&[("a", None)]);
        let two = identities(&[("a", None), ("b", None)]);
        assert!(identity_count_grew(&one, &two));
        assert!(!identity_count_grew(&two, &one));
        assert!(!identity_count_grew(&two, &two));
    }

    #[test]
    fn test_cards_skip_unnamed_identities() {
        let map = identities(&[("alice.id", Some("alice.id")), ("1B", None), ("x", Some(""))]);
        let view = IdentityListView::new(snapshot(map, 0));
        let cards = view.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].label, "alice.id");
        assert_eq!(cards[0].url, "/profiles/alice.id/local");
        assert!(cards[0].pending);
        assert_eq!(cards[0].avatar_url, "");
    }

    #[test]
    fn test_card_fields() {
        let mut map = IdentityMap::new();
        map.insert(
            "1Owner",
            Identity::new("1Owner")
                .with_domain_name("bob.id")
                .with_registered(true)
                .with_profile(Profile::with_avatar("https://img/bob.png")),
        );
        let view = IdentityListView::new(snapshot(map, 0));
        let card = &view.cards()[0];
        assert!(!card.pending);
        assert!(card.can_add_username);
        assert_eq!(card.avatar_url, "https://img/bob.png");
        assert_eq!(card.owner_address, "1Owner");
    }

    #[test]
    fn test_error_ends_processing() {
        let mut view = IdentityListView::new(snapshot(IdentityMap::new(), 0));
        view.prompt.open();
        view.prompt.begin_processing();

        let mut next = view.store().clone();
        next.create_profile_error = Some("bad password".to_string());
        let transition = view.on_state_changed(next);

        assert!(transition.creation_failed);
        assert!(!view.prompt().is_processing());
        assert!(view.prompt().is_open());
        let render = view.render();
        let alert = render.prompt.and_then(|p| p.alert).unwrap();
        assert_eq!(alert.message, CREATE_ERROR_MESSAGE);
        assert_eq!(alert.detail, "bad password");
    }

    #[test]
    fn test_stale_error_keeps_retry_in_flight() {
        let mut view = IdentityListView::new(snapshot(IdentityMap::new(), 0));
        view.prompt.open();
        view.begin_submit().unwrap();

        let mut failed = view.store().clone();
        failed.create_profile_error = Some("bad password".to_string());
        assert!(view.on_state_changed(failed.clone()).creation_failed);

        view.set_field("password", "second try").unwrap();
        view.begin_submit().unwrap();

        // Unrelated update that still carries the old error.
        let mut unrelated = failed;
        unrelated.names_owned = vec!["carol.id".to_string()];
        let transition = view.on_state_changed(unrelated);

        assert!(!transition.creation_failed);
        assert!(view.prompt().is_processing());
        assert!(!view.can_submit());
        assert_eq!(view.begin_submit(), Err(ProfileError::AlreadyProcessing));
    }

    #[test]
    fn test_open_prompt_leaves_cached_store_untouched() {
        let mut store = snapshot(IdentityMap::new(), 0);
        store.create_profile_error = Some("bad password".to_string());
        let mut view = IdentityListView::new(store.clone());

        view.open_prompt(&NoopBridge);

        assert_eq!(view.store(), &store);
        assert!(view.render().prompt.unwrap().alert.is_none());
    }

    #[test]
    fn test_dispatch_failure_after_resolution_is_ignored() {
        let mut view = IdentityListView::new(snapshot(identities(&[("a", None)]), 0));
        view.prompt.open();
        view.begin_submit().unwrap();
        view.on_state_changed(snapshot(identities(&[("a", None), ("b", None)]), 1));

        view.dispatch_failed(0, &ProfileError::bridge("create_new_profile", "late"));
        assert_eq!(view.prompt().error(), None);
    }

    #[test]
    fn test_growth_closes_prompt() {
        let mut view = IdentityListView::new(snapshot(identities(&[("a", None)]), 0));
        view.prompt.open();
        view.set_field("password", "hunter2").unwrap();
        view.prompt.begin_processing();

        let next = snapshot(identities(&[("a", None), ("b", Some("b.id"))]), 1);
        let transition = view.on_state_changed(next);

        assert!(transition.creation_succeeded);
        assert!(!view.prompt().is_open());
        assert!(!view.prompt().is_processing());
        assert_eq!(view.prompt().password(), "");
        assert!(view.render().prompt.is_none());
    }

    #[test]
    fn test_submit_disabled_without_unused_address() {
        let view = IdentityListView::new(snapshot(IdentityMap::new(), 2));
        assert!(!view.has_available_address());
        assert!(!view.can_submit());
    }

    #[test]
    fn test_render_labels() {
        let mut view = IdentityListView::new(snapshot(IdentityMap::new(), 0));
        let render = view.render();
        assert_eq!(render.heading, LIST_HEADING);
        assert_eq!(render.create_label, CREATE_LABEL);
        assert!(render.prompt.is_none());

        view.prompt.open();
        let prompt = view.render().prompt.unwrap();
        assert_eq!(prompt.submit_label, SUBMIT_LABEL);
        assert!(prompt.submit_enabled);
        assert!(prompt.alert.is_none());

        view.prompt.begin_processing();
        let prompt = view.render().prompt.unwrap();
        assert_eq!(prompt.submit_label, SUBMIT_PROCESSING_LABEL);
        assert!(!prompt.submit_enabled);
    }
}
