//! End-to-end pipeline tests.
//!
//! Collector endpoints point at an unroutable local port so the reputation
//! and registry lookups exercise their fail-soft paths; the model is a
//! canned generator.

use std::time::Duration;

use async_trait::async_trait;
use risk_engine::{EngineConfig, RiskEngine, TextGenerator};
use shared_types::{DomainAge, ScanRequest, Verdict};

struct CannedGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

fn offline_config() -> EngineConfig {
    EngineConfig {
        phishtank_url: "http://127.0.0.1:9/checkurl".to_string(),
        rdap_url: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(2),
    }
}

fn engine(reply: &'static str) -> RiskEngine<CannedGenerator> {
    RiskEngine::new(offline_config(), CannedGenerator(reply)).unwrap()
}

#[tokio::test]
async fn scan_of_empty_http_page_is_risky() {
    // Empty text short-circuits the audit, every core disclosure check
    // fails (40), and the http scheme adds 15: final score 55.
    let engine = engine(r#"{"riskScore": 99, "summary": "unused", "violations": []}"#);
    let request = ScanRequest {
        url: "http://example.com".to_string(),
        page_text: String::new(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.risk_score, 55.0);
    assert_eq!(report.verdict, Verdict::Risky);
    assert_eq!(report.violations.len(), 3);
    assert_eq!(report.details.ai_score, 0.0);
    assert!(!report.details.phishing_flag);
    assert_eq!(report.details.domain_age_days, DomainAge::Unknown);
    assert!(report
        .issues
        .contains(&"Unsecured HTTP connection (Data privacy risk)".to_string()));
}

#[tokio::test]
async fn scan_of_compliant_page_is_safe() {
    let engine = engine(r#"{"riskScore": 10, "summary": "Looks compliant", "violations": []}"#);
    let request = ScanRequest {
        url: "https://example.com".to_string(),
        page_text: "Privacy Policy. Terms of Service. Contact Us.".to_string(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.risk_score, 6.0);
    assert_eq!(report.verdict, Verdict::Safe);
    assert!(report.violations.is_empty());
    assert_eq!(report.summary, "Looks compliant");
}

#[tokio::test]
async fn malformed_model_reply_degrades_but_scan_completes() {
    let engine = engine("I refuse to answer in JSON.");
    let request = ScanRequest {
        url: "https://example.com".to_string(),
        page_text: "Privacy Policy. Terms of Service. Contact Us.".to_string(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.risk_score, 0.0);
    assert_eq!(report.verdict, Verdict::Safe);
    assert_eq!(report.summary, "Automated legal audit unavailable.");
}

#[tokio::test]
async fn model_violations_merge_after_heuristic_findings() {
    let engine = engine(
        r#"{"riskScore": 30, "summary": "Gaps found", "violations": [
            {"act": "GDPR", "reason": "No consent banner.", "severity": "High"}
        ]}"#,
    );
    let request = ScanRequest {
        url: "https://example.com".to_string(),
        // Privacy policy missing; terms and contact present.
        page_text: "Terms of Service. Contact Us. Cookie settings.".to_string(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.violations.len(), 2);
    assert_eq!(report.violations[0].act, "Global Data Protection Principles");
    assert_eq!(report.violations[1].act, "GDPR");
    // 0.6 * 30 + 0.4 * 20 = 26, floored at 20 stays 26.
    assert_eq!(report.risk_score, 26.0);
    assert_eq!(report.verdict, Verdict::Moderate);
}

#[tokio::test]
async fn unparseable_url_yields_the_failed_report() {
    let engine = engine(r#"{"riskScore": 0, "summary": "", "violations": []}"#);
    let request = ScanRequest {
        url: "not a url".to_string(),
        page_text: String::new(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.url, "not a url");
    assert_eq!(report.risk_score, 0.0);
    assert_eq!(report.verdict, Verdict::Safe);
    assert_eq!(report.issues, vec!["Scan failed".to_string()]);
}

#[tokio::test]
async fn non_http_scheme_yields_the_failed_report() {
    let engine = engine(r#"{"riskScore": 0, "summary": "", "violations": []}"#);
    let request = ScanRequest {
        url: "ftp://example.com/file".to_string(),
        page_text: String::new(),
    };

    let report = engine.scan(&request).await;

    assert_eq!(report.issues, vec!["Scan failed".to_string()]);
}
