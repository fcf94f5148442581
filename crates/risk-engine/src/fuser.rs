//! Verdict fuser: folds every collector signal into the final report.
//!
//! The rule sequence here is order-sensitive; reordering the steps changes
//! scores. The weights are tuned policy, not derivation.

use std::collections::HashSet;

use shared_types::{DomainAge, ScanDetails, ScanReport, Severity, Verdict, Violation};
use url::Url;

use crate::audit::AiAuditResult;
use crate::heuristics::HeuristicResult;

const AI_WEIGHT: f64 = 0.6;
const HEURISTIC_WEIGHT: f64 = 0.4;
const AI_OVERRIDE_THRESHOLD: f64 = 80.0;
const HTTP_PENALTY: f64 = 15.0;
const YOUNG_DOMAIN_PENALTY: f64 = 20.0;
const YOUNG_DOMAIN_DAYS: f64 = 30.0;

/// All partial signals collected for one scan, ready for fusion.
#[derive(Debug, Clone)]
pub struct CollectedSignals {
    pub phishing_flag: bool,
    pub domain_age: DomainAge,
    pub heuristic: HeuristicResult,
    pub ai: AiAuditResult,
}

/// Fuse the collected signals into the final report.
///
/// Either signal source can force a high-severity outcome on its own: the
/// blend is floored at the raw heuristic impact, and an AI score above 80
/// cannot be averaged away.
pub fn fuse(raw_url: &str, url: &Url, signals: CollectedSignals) -> ScanReport {
    let CollectedSignals {
        phishing_flag,
        domain_age,
        heuristic,
        ai,
    } = signals;
    let AiAuditResult {
        score: ai_score,
        violations: ai_violations,
        summary,
    } = ai;
    let HeuristicResult {
        violations: mut all_violations,
        score_impact,
    } = heuristic;

    // Heuristic findings first, each collector's internal order preserved.
    all_violations.extend(ai_violations);

    let mut score = AI_WEIGHT * ai_score + HEURISTIC_WEIGHT * score_impact;
    score = score.max(score_impact);
    if ai_score > AI_OVERRIDE_THRESHOLD {
        score = score.max(ai_score);
    }

    let mut advisories = Vec::new();

    if phishing_flag {
        score = 100.0;
        all_violations.insert(0, phishing_violation());
    }

    if url.scheme() != "https" {
        score += HTTP_PENALTY;
        advisories.push("Unsecured HTTP connection (Data privacy risk)".to_string());
    }

    if domain_age.younger_than(YOUNG_DOMAIN_DAYS) {
        score += YOUNG_DOMAIN_PENALTY;
        if let DomainAge::Days(days) = domain_age {
            advisories.push(format!(
                "Newly registered domain ({} days old). High scam potential.",
                days.floor() as i64
            ));
        }
    }

    let violations = dedup_violations(all_violations);
    let risk_score = score.min(100.0);
    let verdict = Verdict::from_score(risk_score);

    // Per-violation derivation first, then the connection/age advisories
    // as their own entries.
    let mut issues: Vec<String> = violations
        .iter()
        .map(|violation| format!("{}: {}", violation.act, violation.reason))
        .collect();
    issues.extend(advisories);

    let summary = if summary.is_empty() {
        "Scan complete.".to_string()
    } else {
        summary
    };

    ScanReport {
        url: raw_url.to_string(),
        risk_score,
        verdict,
        violations,
        summary,
        issues,
        details: ScanDetails {
            phishing_flag,
            domain_age_days: domain_age,
            ai_score,
        },
    }
}

fn phishing_violation() -> Violation {
    Violation::new(
        "IT Act, 2000 (Section 66D)",
        "Detected in global phishing database (Cheating by personation).",
        Severity::Critical,
    )
}

/// Keep the first occurrence of each (act, reason) identity.
fn dedup_violations(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen = HashSet::new();
    violations
        .into_iter()
        .filter(|violation| {
            let (act, reason) = violation.identity();
            seen.insert((act.to_string(), reason.to_string()))
        })
        .collect()
}
