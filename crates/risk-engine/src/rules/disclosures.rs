//! Universal disclosure checks applied to every site regardless of region.

use shared_types::Severity;

use crate::heuristics::HeuristicResult;
use crate::patterns::{contains_any, CONTACT_KEYWORDS, PRIVACY_KEYWORDS, TERMS_KEYWORDS};

const MISSING_PRIVACY_WEIGHT: f64 = 20.0;
const MISSING_TERMS_WEIGHT: f64 = 10.0;
const MISSING_CONTACT_WEIGHT: f64 = 10.0;

/// Check for the privacy/terms/contact disclosures every legitimate site
/// carries. Checks are independent; a page can fail all three.
pub fn check_core_disclosures(text_lower: &str, result: &mut HeuristicResult) {
    if !contains_any(text_lower, PRIVACY_KEYWORDS) {
        result.record(
            "Global Data Protection Principles",
            "Missing 'Privacy Policy'. This is a critical transparency failure for any legitimate site.",
            Severity::High,
            MISSING_PRIVACY_WEIGHT,
        );
    }

    if !contains_any(text_lower, TERMS_KEYWORDS) {
        result.record(
            "Consumer Transparency",
            "Missing 'Terms of Service/Use'. Users cannot know their rights.",
            Severity::Medium,
            MISSING_TERMS_WEIGHT,
        );
    }

    if !contains_any(text_lower, CONTACT_KEYWORDS) {
        result.record(
            "Trust & Credibility",
            "No obvious 'Contact' or 'Support' section found.",
            Severity::Low,
            MISSING_CONTACT_WEIGHT,
        );
    }
}

/// Shared with the regional rules: the address check only fires when no
/// contact mechanism exists either.
pub fn has_contact_indicator(text_lower: &str) -> bool {
    contains_any(text_lower, CONTACT_KEYWORDS)
}
