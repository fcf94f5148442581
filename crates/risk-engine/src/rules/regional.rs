//! Regional disclosure checks for sites serving an Indian audience.
//!
//! Indian intermediaries and e-commerce entities must display a grievance
//! officer and a reachable physical address; the weights here are higher
//! than the universal checks because the omissions are statutory.

use shared_types::Severity;

use crate::heuristics::HeuristicResult;
use crate::patterns::{contains_any, ADDRESS_KEYWORDS, GRIEVANCE_KEYWORDS};
use crate::rules::disclosures;

const MISSING_GRIEVANCE_WEIGHT: f64 = 25.0;
const MISSING_ADDRESS_WEIGHT: f64 = 20.0;

pub fn check_indian_disclosures(text_lower: &str, result: &mut HeuristicResult) {
    if !contains_any(text_lower, GRIEVANCE_KEYWORDS) {
        result.record(
            "IT Rules, 2021 (India)",
            "Mandatory 'Grievance Officer' details are missing.",
            Severity::High,
            MISSING_GRIEVANCE_WEIGHT,
        );
    }

    let has_address = contains_any(text_lower, ADDRESS_KEYWORDS);
    if !has_address && !disclosures::has_contact_indicator(text_lower) {
        result.record(
            "Consumer Protection Rules, 2020",
            "No physical contact address or clear contact mechanism found.",
            Severity::Medium,
            MISSING_ADDRESS_WEIGHT,
        );
    }
}
