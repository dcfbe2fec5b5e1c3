//! # Social Account Editor
//!
//! One collapsible row for a social-account proof. The row holds no
//! authoritative copy of the account: edits are forwarded to a
//! [`SocialAccountHandler`] and the parent hands back an updated
//! [`SocialAccount`] through [`SocialAccountEditor::set_account`].
//!
//! # Invariants
//!
//! - A service missing from the registry renders nothing
//! - Blurring the identifier field with an empty value is a delete request
//! - Verification UI is shown iff the account is unverified and has an
//!   identifier

use crate::views::display::{placeholder_text, service_tag};
use profiles_core::{supports_proof_url, ServiceRegistry, SocialAccount};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Callbacks owned by the parent of a social account row.
///
/// Every method defaults to a no-op so a parent implements only the
/// callbacks it cares about.
pub trait SocialAccountHandler {
    /// The identifier field changed.
    fn on_change(&mut self, _service: &str, _identifier: &str) {}

    /// The account should be removed.
    fn on_delete(&mut self, _service: &str) {}

    /// The proof URL field changed.
    fn on_proof_url_change(&mut self, _service: &str, _proof_url: &str) {}

    /// The user asked to verify the account.
    fn on_verify(&mut self, _service: &str, _identifier: &str) {}
}

// =============================================================================
// Render Types
// =============================================================================

/// Verification status shown on the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    /// Proof verified
    Verified,
    /// Unverified and collapsed
    Pending,
    /// Unverified and being edited
    Editing,
}

/// Expand/collapse indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chevron {
    /// Row is collapsed
    Down,
    /// Row is expanded
    Up,
}

/// Text summary of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSummary {
    /// A configured account
    Account {
        /// Identifier, truncated for display
        identifier: String,
        /// Service tag, e.g. `@github`
        service_tag: String,
    },
    /// An unconfigured slot inviting a proof
    Placeholder {
        /// Prompt copy
        prompt: String,
    },
}

/// An editable text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRender {
    /// Field name
    pub name: String,
    /// Field label
    pub label: String,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Current value
    pub value: String,
}

/// Verification call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInfo {
    /// Service being verified
    pub service: String,
    /// Address the proof must reference
    pub owner_address: String,
    /// Identifier, truncated for display
    pub display_identifier: String,
    /// Profile URL of the account
    pub account_url: String,
}

/// Expanded row contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEditor {
    /// Identifier field
    pub identifier: FieldRender,
    /// Proof URL field, for services that accept one
    pub proof_url: Option<FieldRender>,
    /// Verification block
    pub verification: Option<VerificationInfo>,
}

/// A rendered account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Icon class of the service
    pub icon_class: String,
    /// Whether this is a placeholder slot
    pub placeholder: bool,
    /// Verification status
    pub status: RowStatus,
    /// Whether the row is collapsed
    pub collapsed: bool,
    /// Expand/collapse indicator
    pub chevron: Chevron,
    /// Summary text
    pub summary: RowSummary,
    /// Expanded contents
    pub editor: Option<RowEditor>,
}

/// Result of rendering a social account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialAccountRender {
    /// Service unknown to the registry
    Unknown,
    /// Known service, but not rendered as a list item
    Hidden,
    /// A visible row
    Row(AccountRow),
}

impl SocialAccountRender {
    /// The row, if one is visible.
    pub fn row(&self) -> Option<&AccountRow> {
        match self {
            Self::Row(row) => Some(row),
            Self::Unknown | Self::Hidden => None,
        }
    }
}

// =============================================================================
// SocialAccountEditor
// =============================================================================

/// View model for one social account row.
#[derive(Debug, Clone)]
pub struct SocialAccountEditor {
    account: SocialAccount,
    registry: Arc<ServiceRegistry>,
    list_item: bool,
    placeholder: bool,
    collapsed: bool,
}

impl SocialAccountEditor {
    /// Create a collapsed list-item row.
    pub fn new(account: SocialAccount, registry: Arc<ServiceRegistry>) -> Self {
        Self {
            account,
            registry,
            list_item: true,
            placeholder: false,
            collapsed: true,
        }
    }

    /// Mark the row as a placeholder slot.
    #[must_use]
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set whether the row renders as a list item.
    #[must_use]
    pub fn list_item(mut self, list_item: bool) -> Self {
        self.list_item = list_item;
        self
    }

    /// Account currently shown.
    pub fn account(&self) -> &SocialAccount {
        &self.account
    }

    /// Replace the account with the parent's latest copy.
    pub fn set_account(&mut self, account: SocialAccount) {
        self.account = account;
    }

    /// Whether the row is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Collapse the row.
    pub fn collapse(&mut self) {
        self.collapsed = true;
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Whether the service is in the registry.
    pub fn is_known_service(&self) -> bool {
        self.registry.contains(&self.account.service)
    }

    /// Profile URL of the account.
    pub fn account_url(&self) -> String {
        self.registry
            .account_url(&self.account.service, &self.account.identifier)
    }

    /// Icon class of the service; empty when unknown.
    pub fn icon_class(&self) -> &str {
        self.registry.icon_class(&self.account.service)
    }

    /// Identifier truncated for display.
    pub fn display_identifier(&self) -> String {
        self.account.display_identifier()
    }

    /// Whether verification instructions apply to this account.
    pub fn should_show_verification(&self) -> bool {
        self.account.needs_verification()
    }

    /// Whether the verification block is currently on screen.
    pub fn verification_visible(&self) -> bool {
        self.should_show_verification() && !self.collapsed
    }

    /// Whether this row offers a proof URL field.
    pub fn offers_proof_url(&self) -> bool {
        supports_proof_url(&self.account.service)
    }

    // =========================================================================
    // Field Events
    // =========================================================================

    /// Forward an identifier edit.
    pub fn identifier_changed<H>(&self, value: &str, handler: &mut H)
    where
        H: SocialAccountHandler + ?Sized,
    {
        handler.on_change(&self.account.service, value);
    }

    /// Handle the identifier field losing focus.
    ///
    /// An empty value collapses the row and requests deletion. Returns
    /// whether deletion was requested.
    pub fn identifier_blurred<H>(&mut self, value: &str, handler: &mut H) -> bool
    where
        H: SocialAccountHandler + ?Sized,
    {
        if !value.is_empty() {
            return false;
        }
        tracing::trace!(service = %self.account.service, "identifier cleared, deleting account");
        self.collapse();
        handler.on_delete(&self.account.service);
        true
    }

    /// Forward a proof URL edit. Ignored for services without proof URLs.
    pub fn proof_url_changed<H>(&self, value: &str, handler: &mut H) -> bool
    where
        H: SocialAccountHandler + ?Sized,
    {
        if !self.offers_proof_url() {
            return false;
        }
        handler.on_proof_url_change(&self.account.service, value);
        true
    }

    /// Forward a verify request. Ignored unless the verification block is
    /// on screen.
    pub fn verify_clicked<H>(&self, handler: &mut H) -> bool
    where
        H: SocialAccountHandler + ?Sized,
    {
        if !self.verification_visible() {
            return false;
        }
        handler.on_verify(&self.account.service, &self.account.identifier);
        true
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn status(&self) -> RowStatus {
        if self.account.verified {
            RowStatus::Verified
        } else if self.collapsed {
            RowStatus::Pending
        } else {
            RowStatus::Editing
        }
    }

    fn summary(&self) -> RowSummary {
        if self.placeholder {
            RowSummary::Placeholder {
                prompt: placeholder_text(&self.account.service),
            }
        } else {
            RowSummary::Account {
                identifier: self.display_identifier(),
                service_tag: service_tag(&self.account.service),
            }
        }
    }

    fn editor(&self) -> Option<RowEditor> {
        if self.collapsed || self.placeholder {
            return None;
        }

        let verification_visible = self.verification_visible();
        let proof_url = (verification_visible && self.offers_proof_url()).then(|| FieldRender {
            name: "proofUrl".to_string(),
            label: "Proof URL".to_string(),
            placeholder: Some("Paste Proof URL here".to_string()),
            value: self.account.proof_url.clone().unwrap_or_default(),
        });
        let verification = verification_visible.then(|| VerificationInfo {
            service: self.account.service.clone(),
            owner_address: self.account.owner_address.clone(),
            display_identifier: self.display_identifier(),
            account_url: self.account_url(),
        });

        Some(RowEditor {
            identifier: FieldRender {
                name: "identifier".to_string(),
                label: "Username".to_string(),
                placeholder: None,
                value: self.account.identifier.clone(),
            },
            proof_url,
            verification,
        })
    }

    /// Describe the row.
    pub fn render(&self) -> SocialAccountRender {
        if !self.is_known_service() {
            return SocialAccountRender::Unknown;
        }
        if !self.list_item {
            return SocialAccountRender::Hidden;
        }

        SocialAccountRender::Row(AccountRow {
            icon_class: self.icon_class().to_string(),
            placeholder: self.placeholder,
            status: self.status(),
            collapsed: self.collapsed,
            chevron: if self.collapsed {
                Chevron::Down
            } else {
                Chevron::Up
            },
            summary: self.summary(),
            editor: self.editor(),
        })
    }
}
