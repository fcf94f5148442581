//! Heuristic compliance scanner: pure keyword checks over the page text.
//!
//! No I/O happens here. Weights accumulate additively and are not capped;
//! the fuser owns clamping.

use shared_types::{Severity, Violation};
use url::Url;

use crate::region::Region;
use crate::rules;

/// Accumulated output of the heuristic scanner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicResult {
    pub violations: Vec<Violation>,
    pub score_impact: f64,
}

impl HeuristicResult {
    pub(crate) fn record(
        &mut self,
        act: &str,
        reason: &str,
        severity: Severity,
        weight: f64,
    ) {
        self.violations.push(Violation::new(act, reason, severity));
        self.score_impact += weight;
    }
}

/// Scan page text for compliance-disclosure gaps.
///
/// Empty text runs every check and fails them all; an unreadable page is
/// itself a disclosure-failure signal.
pub fn scan_page(url: &Url, text: &str) -> HeuristicResult {
    let text_lower = text.to_lowercase();
    let region = Region::infer(url, &text_lower);

    let mut result = HeuristicResult::default();
    rules::disclosures::check_core_disclosures(&text_lower, &mut result);
    if region == Region::India {
        rules::regional::check_indian_disclosures(&text_lower, &mut result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_empty_text_fails_every_core_check() {
        let result = scan_page(&url("http://example.com"), "");
        assert_eq!(result.violations.len(), 3);
        assert_eq!(result.score_impact, 40.0);
    }

    #[test]
    fn test_compliant_page_is_clean() {
        let text = "Read our Privacy Policy and Terms of Service. Contact Us for help.";
        let result = scan_page(&url("https://example.com"), text);
        assert!(result.violations.is_empty());
        assert_eq!(result.score_impact, 0.0);
    }

    #[test]
    fn test_indian_tld_adds_regional_checks_on_empty_text() {
        let result = scan_page(&url("http://shop.co.in"), "");
        // 3 core failures + grievance + address/contact
        assert_eq!(result.violations.len(), 5);
        assert_eq!(result.score_impact, 85.0);
    }

    #[test]
    fn test_regional_checks_triggered_by_text_cues() {
        let text = "Prices listed in rupee. Privacy Policy. Terms of Service. Contact Us.";
        let result = scan_page(&url("https://shop.com"), text);
        // Core checks pass; grievance officer is still missing, and the
        // contact indicator satisfies the address check.
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].act, "IT Rules, 2021 (India)");
        assert_eq!(result.score_impact, 25.0);
    }

    #[test]
    fn test_violations_preserve_check_order() {
        let result = scan_page(&url("http://shop.co.in"), "");
        let acts: Vec<&str> = result.violations.iter().map(|v| v.act.as_str()).collect();
        assert_eq!(
            acts,
            vec![
                "Global Data Protection Principles",
                "Consumer Transparency",
                "Trust & Credibility",
                "IT Rules, 2021 (India)",
                "Consumer Protection Rules, 2020",
            ]
        );
    }
}
