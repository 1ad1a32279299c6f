// src/core/linkedin.rs
//! LinkedIn lookups. The profile API requires OAuth, so only the public
//! username is extracted from the URL and the rest of the shape stays empty.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::types::LinkedinData;

static PROFILE_URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/([^/?#\s]+)").ok());

/// Username segment following `linkedin.com/in/`, if any.
pub fn extract_username(profile_url: &str) -> Option<&str> {
    PROFILE_URL_RE
        .as_ref()?
        .captures(profile_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the LinkedIn skeleton for a profile URL. `None` means the URL does
/// not look like a LinkedIn profile.
pub fn parse_linkedin_profile(profile_url: &str) -> Option<LinkedinData> {
    match extract_username(profile_url) {
        Some(username) => {
            info!("Processed LinkedIn profile URL for: {}", username);
            Some(LinkedinData::stub(profile_url, username))
        }
        None => {
            warn!("Not a LinkedIn profile URL: {}", profile_url);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_username() {
        assert_eq!(extract_username("https://linkedin.com/in/jdoe"), Some("jdoe"));
        assert_eq!(
            extract_username("https://www.linkedin.com/in/jane-doe-123/"),
            Some("jane-doe-123")
        );
        assert_eq!(
            extract_username("https://www.linkedin.com/in/jdoe?trk=public"),
            Some("jdoe")
        );
        assert_eq!(extract_username("https://example.com"), None);
        assert_eq!(extract_username("https://linkedin.com/company/acme"), None);
        assert_eq!(extract_username("https://linkedin.com/in/"), None);
    }

    #[test]
    fn test_parse_linkedin_profile_stub() {
        let data = parse_linkedin_profile("https://linkedin.com/in/jdoe").unwrap();
        assert_eq!(data.profile.username, "jdoe");
        assert_eq!(data.profile.profile_url, "https://linkedin.com/in/jdoe");
        assert_eq!(data.profile.name, "");
        assert_eq!(data.profile.headline, "");
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_parse_linkedin_profile_rejects_other_urls() {
        assert!(parse_linkedin_profile("https://example.com").is_none());
    }
}
