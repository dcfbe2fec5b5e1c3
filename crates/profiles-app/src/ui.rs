//! UI-facing facade for profiles-app.
//!
//! Hosts that share a view between an event loop and a store subscription
//! hold it behind [`UiIdentityList`], which pairs the view with its bridge.
//!
//! The lock is never held across a bridge call: a host may deliver the
//! resulting store update through this same facade before the call returns.

use async_lock::RwLock;
use profiles_core::ProfileError;
use std::sync::Arc;

use crate::bridge::BoxedIdentityBridge;
use crate::store::ProfileStoreSnapshot;
use crate::views::{
    request_refresh, IdentityListRender, IdentityListView, StateTransition, PASSWORD_FIELD,
};

/// Shared identity list view wired to its bridge.
#[derive(Clone)]
pub struct UiIdentityList {
    inner: Arc<RwLock<IdentityListView>>,
    bridge: BoxedIdentityBridge,
}

impl UiIdentityList {
    /// Wrap a view and the bridge it dispatches to.
    pub fn new(view: IdentityListView, bridge: BoxedIdentityBridge) -> Self {
        Self {
            inner: Arc::new(RwLock::new(view)),
            bridge,
        }
    }

    /// Shared view handle.
    pub fn raw(&self) -> &Arc<RwLock<IdentityListView>> {
        &self.inner
    }

    /// Attach the view, requesting an identity refresh.
    pub async fn attach(&self) {
        tracing::trace!("on_attach");
        let store = self.inner.read().await.store().clone();
        request_refresh(&store, self.bridge.as_ref()).await;
    }

    /// Deliver a store update.
    pub async fn state_changed(&self, next: ProfileStoreSnapshot) -> StateTransition {
        self.inner.write().await.on_state_changed(next)
    }

    /// Open the password prompt.
    pub async fn open_prompt(&self) {
        self.inner.write().await.open_prompt(self.bridge.as_ref());
    }

    /// Close the password prompt.
    pub async fn close_prompt(&self) {
        self.inner.write().await.close_prompt();
    }

    /// Update the entered password.
    pub async fn set_password(&self, password: impl Into<String>) -> Result<(), ProfileError> {
        self.inner.write().await.set_field(PASSWORD_FIELD, password)
    }

    /// Submit the password prompt.
    pub async fn submit(&self) -> Result<(), ProfileError> {
        let request = self.inner.write().await.begin_submit()?;
        let dispatched = self
            .bridge
            .create_new_profile(
                &request.encrypted_backup_phrase,
                &request.password,
                request.address_index,
            )
            .await;
        if let Err(e) = dispatched {
            self.inner
                .write()
                .await
                .dispatch_failed(request.address_index, &e);
        }
        Ok(())
    }

    /// Describe the screen.
    pub async fn render(&self) -> IdentityListRender {
        self.inner.read().await.render()
    }
}
