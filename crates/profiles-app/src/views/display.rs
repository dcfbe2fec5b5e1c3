//! Display formatting shared by the profile views.

use profiles_core::ServiceKind;

/// Route of the local profile page for a domain name.
#[must_use]
pub fn local_profile_url(domain_name: &str) -> String {
    format!("/profiles/{domain_name}/local")
}

/// Upper-case the first character of a word.
///
/// # Example
/// ```rust,ignore
/// use profiles_app::views::display::capitalize;
///
/// assert_eq!(capitalize("bitcoin"), "Bitcoin");
/// ```
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prompt copy shown in a placeholder row for a service.
#[must_use]
pub fn placeholder_text(service: &str) -> String {
    let kind = ServiceKind::of(service);
    match kind {
        ServiceKind::Key => format!("Prove your {} {}", service.to_uppercase(), kind.proof_noun()),
        ServiceKind::Currency | ServiceKind::Social => {
            format!("Prove your {} {}", capitalize(service), kind.proof_noun())
        }
    }
}

/// Tag shown after an account identifier, e.g. `@github`.
#[must_use]
pub fn service_tag(service: &str) -> String {
    format!("@{service}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_text() {
        assert_eq!(placeholder_text("bitcoin"), "Prove your Bitcoin address");
        assert_eq!(placeholder_text("ethereum"), "Prove your Ethereum address");
        assert_eq!(placeholder_text("pgp"), "Prove your PGP key");
        assert_eq!(placeholder_text("ssh"), "Prove your SSH key");
        assert_eq!(placeholder_text("twitter"), "Prove your Twitter account");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_local_profile_url() {
        assert_eq!(local_profile_url("alice.id"), "/profiles/alice.id/local");
    }
}
