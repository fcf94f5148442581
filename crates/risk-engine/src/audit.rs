//! AI compliance auditor: the one component allowed to consult the model.
//!
//! The model is an opaque text-completion capability behind
//! [`TextGenerator`]; provider wiring lives with the caller. Everything the
//! model sends back is treated as untrusted free text and parsed through a
//! tagged result, never trusted to be pure JSON.

use async_trait::async_trait;
use serde::Deserialize;
use shared_types::Violation;
use url::Url;

use crate::region::Region;

/// Upper bound on page text embedded in the prompt, in characters.
pub const MAX_AUDIT_CHARS: usize = 15_000;

/// Opaque text-completion capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Parsed audit signal. Scores are clamped to [0, 100] at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct AiAuditResult {
    pub score: f64,
    pub violations: Vec<Violation>,
    pub summary: String,
}

impl AiAuditResult {
    /// Safe default used whenever the model cannot be consulted or its
    /// response cannot be parsed.
    pub fn unavailable() -> Self {
        Self {
            score: 0.0,
            violations: Vec::new(),
            summary: "Automated legal audit unavailable.".to_string(),
        }
    }

    fn insufficient_content() -> Self {
        Self {
            score: 0.0,
            violations: Vec::new(),
            summary: "Insufficient content to audit; no obvious threats found.".to_string(),
        }
    }
}

/// Outcome of parsing the raw model response. The fuser only ever consumes
/// the parsed projection; `Malformed` keeps the raw text for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum AiParseResult {
    Parsed(AiAuditResult),
    Malformed(String),
}

impl AiParseResult {
    /// Collapse to the audit signal, substituting the safe default for a
    /// malformed response.
    pub fn into_audit_result(self) -> AiAuditResult {
        match self {
            AiParseResult::Parsed(result) => result,
            AiParseResult::Malformed(raw) => {
                tracing::warn!(raw_len = raw.len(), "discarding malformed audit response");
                AiAuditResult::unavailable()
            }
        }
    }
}

/// Expected shape of the model's JSON reply. `riskScore` is required;
/// summary and violations degrade gracefully when omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuditResponse {
    risk_score: f64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    violations: Vec<Violation>,
}

/// Parse a raw model response into an audit signal.
///
/// Models wrap JSON in prose or code fences, so this takes the span from
/// the first `{` through the last `}` and parses that substring.
pub fn parse_response(raw: &str) -> AiParseResult {
    let candidate = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return AiParseResult::Malformed(raw.to_string()),
    };

    match serde_json::from_str::<AuditResponse>(candidate) {
        Ok(response) => AiParseResult::Parsed(AiAuditResult {
            score: response.risk_score.clamp(0.0, 100.0),
            violations: response.violations,
            summary: if response.summary.is_empty() {
                "Legal scan completed.".to_string()
            } else {
                response.summary
            },
        }),
        Err(_) => AiParseResult::Malformed(raw.to_string()),
    }
}

/// Runs the compliance audit against whatever generator it was built with.
pub struct ComplianceAuditor<G> {
    generator: G,
}

impl<G: TextGenerator> ComplianceAuditor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Audit the page text. Never fails: generation errors and malformed
    /// responses both resolve to the safe default, and empty text skips
    /// the model call entirely.
    pub async fn audit(&self, url: &Url, text: &str) -> AiAuditResult {
        let trimmed = truncate_chars(text.trim(), MAX_AUDIT_CHARS);
        if trimmed.is_empty() {
            return AiAuditResult::insufficient_content();
        }

        let prompt = build_prompt(url, trimmed);
        match self.generator.generate(&prompt).await {
            Ok(raw) => parse_response(&raw).into_audit_result(),
            Err(err) => {
                tracing::warn!(error = %err, "audit generation failed");
                AiAuditResult::unavailable()
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn build_prompt(url: &Url, text: &str) -> String {
    let region = Region::infer(url, &text.to_lowercase());
    format!(
        r#"You are a senior cyber-security and legal compliance auditor.
Your goal is to accurately assess the RISK LEVEL of a website based on its content.

CONTEXT:
URL: "{url}"
Inferred jurisdiction: {jurisdiction}

EVALUATION CRITERIA:
1. Universal trust indicators: presence of "Privacy Policy", "Terms of Service",
   and "Contact Us" (physical address/email); professional language vs. poor grammar.
2. Key legal compliance for the inferred jurisdiction:
   - India: IT Rules 2021 (Grievance Officer), DPDP Act (consent), E-Commerce Rules (country of origin).
   - EU/US: GDPR/CCPA (cookie consent, data rights).
3. Dark patterns and risk flags: false urgency, forced action, hidden costs,
   high-yield financial promises.

INPUT TEXT FROM WEBSITE:
"{text}"

TASK:
Return a single JSON object analyzing the risk.
Risk score scale:
0-20: Safe (legitimate business/site)
21-49: Moderate (missing some non-critical disclosures)
50-79: Risky (major compliance failures, suspicious elements)
80-100: Dangerous (scam, phishing, illegal)

OUTPUT FORMAT (JSON ONLY):
{{
  "riskScore": number,
  "summary": "Brief, professional assessment of safety and compliance.",
  "violations": [
    {{
      "act": "Act name or standard (e.g. 'Global Trust Standards' or 'IT Rules 2021')",
      "reason": "Specific observed failure.",
      "severity": "High" | "Medium" | "Low"
    }}
  ]
}}"#,
        url = url,
        jurisdiction = region.jurisdiction_hint(),
        text = text,
    )
}
