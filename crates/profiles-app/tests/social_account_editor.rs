//! Integration tests for the social account editor
//!
//! Covers the callback contract with the parent (change, delete, proof URL,
//! verify), verification visibility, and registry-driven rendering.

use profiles_app::views::{RowStatus, RowSummary, SocialAccountHandler, SocialAccountRender};
use profiles_app::{ApiSettings, ServiceRegistry, SocialAccount, SocialAccountEditor};
use profiles_core::ServiceType;
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Change(String, String),
    Delete(String),
    ProofUrl(String, String),
    Verify(String, String),
}

/// Parent that applies edits to its own copy of the account.
#[derive(Default)]
struct Parent {
    events: Vec<Event>,
    account: Option<SocialAccount>,
}

impl SocialAccountHandler for Parent {
    fn on_change(&mut self, service: &str, identifier: &str) {
        self.events.push(Event::Change(service.into(), identifier.into()));
        if let Some(account) = self.account.as_mut() {
            account.identifier = identifier.to_string();
        }
    }

    fn on_delete(&mut self, service: &str) {
        self.events.push(Event::Delete(service.into()));
        self.account = None;
    }

    fn on_proof_url_change(&mut self, service: &str, proof_url: &str) {
        self.events.push(Event::ProofUrl(service.into(), proof_url.into()));
    }

    fn on_verify(&mut self, service: &str, identifier: &str) {
        self.events.push(Event::Verify(service.into(), identifier.into()));
    }
}

/// Parent that ignores every callback.
struct Silent;

impl SocialAccountHandler for Silent {}

fn registry() -> Arc<ServiceRegistry> {
    Arc::new(ApiSettings::default().web_account_types)
}

fn row(service: &str, identifier: &str) -> SocialAccountEditor {
    SocialAccountEditor::new(SocialAccount::new(service, identifier, "1Owner"), registry())
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_edit_flows_through_parent() {
    let account = SocialAccount::new("twitter", "jac", "1Owner");
    let mut parent = Parent {
        account: Some(account.clone()),
        ..Parent::default()
    };
    let mut editor = SocialAccountEditor::new(account, registry());
    editor.toggle();

    editor.identifier_changed("jack", &mut parent);
    // The row only reflects the edit once the parent hands the account back.
    assert_eq!(editor.account().identifier, "jac");
    editor.set_account(parent.account.clone().unwrap());
    assert_eq!(editor.account().identifier, "jack");
    assert_eq!(editor.account_url(), "https://twitter.com/jack");

    assert_eq!(parent.events, vec![Event::Change("twitter".into(), "jack".into())]);
}

#[test]
fn test_clearing_identifier_deletes_account() {
    let account = SocialAccount::new("github", "alice", "1Owner");
    let mut parent = Parent {
        account: Some(account.clone()),
        ..Parent::default()
    };
    let mut editor = SocialAccountEditor::new(account, registry());
    editor.toggle();

    editor.identifier_changed("", &mut parent);
    assert!(editor.identifier_blurred("", &mut parent));

    assert!(editor.is_collapsed());
    assert!(parent.account.is_none());
    assert_eq!(
        parent.events,
        vec![
            Event::Change("github".into(), String::new()),
            Event::Delete("github".into()),
        ]
    );
}

#[test]
fn test_proof_url_only_for_capable_services() {
    let mut parent = Parent::default();

    assert!(row("linkedin", "al").proof_url_changed("https://linkedin.com/post/1", &mut parent));
    assert!(!row("ssh", "ssh-ed25519 AAAA").proof_url_changed("https://x", &mut parent));
    assert!(!row("bitcoin", "1BTC").proof_url_changed("https://x", &mut parent));

    assert_eq!(
        parent.events,
        vec![Event::ProofUrl("linkedin".into(), "https://linkedin.com/post/1".into())]
    );
}

#[test]
fn test_verify_requires_visible_instructions() {
    let mut parent = Parent::default();

    let mut editor = row("hackernews", "pg");
    assert!(!editor.verify_clicked(&mut parent));
    editor.toggle();
    assert!(editor.verify_clicked(&mut parent));

    let mut verified = SocialAccountEditor::new(
        SocialAccount::new("hackernews", "pg", "1Owner").with_verified(true),
        registry(),
    );
    verified.toggle();
    assert!(!verified.verify_clicked(&mut parent));

    assert_eq!(parent.events, vec![Event::Verify("hackernews".into(), "pg".into())]);
}

#[test]
fn test_silent_handler_still_collapses_on_delete() {
    let mut editor = row("facebook", "zuck");
    editor.toggle();
    assert!(editor.identifier_blurred("", &mut Silent));
    assert!(editor.is_collapsed());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_long_identifier_display() {
    let key = "A".repeat(64);
    let mut editor = row("pgp", &key);
    editor.toggle();

    let render = editor.render();
    let row = render.row().unwrap();
    match &row.summary {
        RowSummary::Account { identifier, service_tag } => {
            assert_eq!(identifier, &format!("{}...", "A".repeat(40)));
            assert_eq!(service_tag, "@pgp");
        }
        other => panic!("unexpected summary {other:?}"),
    }
    let editor_render = row.editor.as_ref().unwrap();
    assert_eq!(editor_render.identifier.value, key);
    assert_eq!(
        editor_render.verification.as_ref().unwrap().display_identifier,
        format!("{}...", "A".repeat(40))
    );
}

#[test]
fn test_status_transitions() {
    let mut editor = row("instagram", "kevin");
    assert_eq!(editor.render().row().unwrap().status, RowStatus::Pending);
    editor.toggle();
    assert_eq!(editor.render().row().unwrap().status, RowStatus::Editing);
}

#[test]
fn test_registry_from_settings_file_shape() {
    let settings = ApiSettings::from_json_str(
        r#"{ "webAccountTypes": { "gh": { "iconClass": "fa-github", "urlTemplate": "https://gh.com/{identifier}" } } }"#,
    )
    .unwrap();
    let registry = Arc::new(settings.web_account_types);

    let known = SocialAccountEditor::new(SocialAccount::new("gh", "alice", "1A"), registry.clone());
    assert_eq!(known.account_url(), "https://gh.com/alice");
    assert_eq!(known.render().row().unwrap().icon_class, "fa-github");

    let unknown = SocialAccountEditor::new(SocialAccount::new("twitter", "jack", "1A"), registry);
    assert_eq!(unknown.render(), SocialAccountRender::Unknown);
}

#[test]
fn test_registry_without_template_falls_back() {
    let mut registry = ServiceRegistry::empty();
    registry.insert("keybase", ServiceType::new("fa-key"));
    let editor = SocialAccountEditor::new(
        SocialAccount::new("keybase", "max", "1A"),
        Arc::new(registry),
    );
    assert_eq!(editor.account_url(), "http://keybase.com/max");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_verification_iff_unverified_with_identifier(
        identifier in "[a-z0-9]{0,10}",
        verified in any::<bool>(),
    ) {
        let editor = SocialAccountEditor::new(
            SocialAccount::new("github", identifier.clone(), "1Owner").with_verified(verified),
            registry(),
        );
        prop_assert_eq!(
            editor.should_show_verification(),
            !verified && !identifier.is_empty()
        );
    }

    #[test]
    fn prop_non_empty_blur_never_deletes(value in "[a-z0-9]{1,20}") {
        let mut editor = row("github", "alice");
        editor.toggle();
        let mut parent = Parent::default();
        prop_assert!(!editor.identifier_blurred(&value, &mut parent));
        prop_assert!(!editor.is_collapsed());
        prop_assert!(parent.events.is_empty());
    }
}
