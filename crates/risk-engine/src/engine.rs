//! Risk engine orchestrator: fan out the collectors, fan in, fuse.

use std::time::Duration;

use shared_types::{DomainAge, ScanDetails, ScanReport, ScanRequest, Verdict};
use url::Url;

use crate::audit::{ComplianceAuditor, TextGenerator};
use crate::collectors::{DomainAgeLookup, PhishingLookup};
use crate::fuser::{self, CollectedSignals};
use crate::heuristics;

/// External endpoints and transport tuning for one engine instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub phishtank_url: String,
    pub rdap_url: String,
    /// Cap on each outbound collector call. A hanging dependency delays
    /// the whole scan, so the transport enforces a deadline.
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            phishtank_url: "https://checkurl.phishtank.com/checkurl/".to_string(),
            rdap_url: "https://rdap.org".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Orchestrates one scan end to end. Holds clients and configuration only;
/// no state is shared between requests.
pub struct RiskEngine<G> {
    phishing: PhishingLookup,
    domain_age: DomainAgeLookup,
    auditor: ComplianceAuditor<G>,
}

impl<G: TextGenerator> RiskEngine<G> {
    pub fn new(config: EngineConfig, generator: G) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            phishing: PhishingLookup::new(client.clone(), config.phishtank_url),
            domain_age: DomainAgeLookup::new(client, config.rdap_url),
            auditor: ComplianceAuditor::new(generator),
        })
    }

    /// Scan one page. Never fails: every failure mode, including an
    /// unparseable target URL, degrades to a well-formed report.
    pub async fn scan(&self, request: &ScanRequest) -> ScanReport {
        let url = match Url::parse(&request.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            _ => {
                tracing::warn!(url = %request.url, "rejecting unparseable scan target");
                return failed_report(&request.url);
            }
        };

        // The three collectors are independent; issue them concurrently
        // and join before fusion. No partial-result fusion.
        let (phishing_flag, domain_age, ai) = tokio::join!(
            self.phishing.check(&url),
            self.domain_age.age_in_days(&url),
            self.auditor.audit(&url, &request.page_text),
        );

        let heuristic = heuristics::scan_page(&url, &request.page_text);

        fuser::fuse(
            &request.url,
            &url,
            CollectedSignals {
                phishing_flag,
                domain_age,
                heuristic,
                ai,
            },
        )
    }
}

/// Whole-report safe default for failures that escape the collectors.
fn failed_report(url: &str) -> ScanReport {
    ScanReport {
        url: url.to_string(),
        risk_score: 0.0,
        verdict: Verdict::Safe,
        violations: Vec::new(),
        summary: "System error during analysis. Proceed with caution.".to_string(),
        issues: vec!["Scan failed".to_string()],
        details: ScanDetails {
            phishing_flag: false,
            domain_age_days: DomainAge::Unknown,
            ai_score: 0.0,
        },
    }
}
