//! Keyword tables for the compliance-disclosure checks.
//!
//! Matching is deliberately plain: case-insensitive substring presence,
//! evaluated against a lower-cased copy of the page text.

/// Privacy-disclosure phrases
pub const PRIVACY_KEYWORDS: &[&str] = &["privacy policy", "privacy notice"];

/// Terms-of-service phrases
pub const TERMS_KEYWORDS: &[&str] = &[
    "terms of use",
    "terms of service",
    "terms & conditions",
];

/// Contact/support/about indicators
pub const CONTACT_KEYWORDS: &[&str] = &["contact us", "support", "about us", "help"];

/// Grievance-redressal officer phrases mandated for Indian intermediaries
pub const GRIEVANCE_KEYWORDS: &[&str] = &["grievance", "nodal officer", "compliance officer"];

/// Registered-address phrases
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "registered address",
    "corporate office",
    "building",
    "floor",
];

/// In-text cues that the site serves an Indian audience
pub const INDIAN_CONTEXT_KEYWORDS: &[&str] = &["rupee", "india", "delhi", "mumbai", "bangalore"];

/// Check whether any keyword from the table occurs in the text.
/// `text_lower` must already be lower-cased.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_matches_substring() {
        assert!(contains_any("read our privacy policy here", PRIVACY_KEYWORDS));
        assert!(contains_any("email support for help", CONTACT_KEYWORDS));
        assert!(!contains_any("nothing relevant", PRIVACY_KEYWORDS));
    }

    #[test]
    fn test_contains_any_is_case_sensitive_by_contract() {
        // Callers lower-case the text first; the tables are all lower-case.
        assert!(!contains_any("PRIVACY POLICY", PRIVACY_KEYWORDS));
    }
}
