//! Phishing-reputation lookup against a PhishTank-style check endpoint.

use serde::Deserialize;
use url::Url;

use crate::error::CollectorError;

/// POSTs the target URL to the reputation database and reads the verdict.
pub struct PhishingLookup {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Default, Deserialize)]
struct CheckUrlEnvelope {
    #[serde(default)]
    results: CheckUrlRecord,
}

#[derive(Debug, Default, Deserialize)]
struct CheckUrlRecord {
    #[serde(default)]
    in_database: bool,
    #[serde(default)]
    verified: bool,
}

impl PhishingLookup {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Fail-soft boundary: any lookup error resolves to "not flagged".
    /// A down reputation service must not block the scan.
    pub async fn check(&self, url: &Url) -> bool {
        match self.query(url).await {
            Ok(flagged) => flagged,
            Err(err) => {
                tracing::warn!(error = %err, "phishing lookup failed; treating as not flagged");
                false
            }
        }
    }

    /// Flagged only when the database lists the URL and the listing is
    /// verified.
    async fn query(&self, url: &Url) -> Result<bool, CollectorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("url", url.as_str()), ("format", "json")])
            .send()
            .await?
            .error_for_status()?;

        let envelope: CheckUrlEnvelope = response.json().await?;
        Ok(envelope.results.in_database && envelope.results.verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: CheckUrlEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!envelope.results.in_database);
        assert!(!envelope.results.verified);
    }

    #[test]
    fn test_envelope_parses_full_record() {
        let raw = r#"{"results":{"in_database":true,"verified":true,"url":"http://bad.example"}}"#;
        let envelope: CheckUrlEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.results.in_database && envelope.results.verified);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_soft() {
        let lookup = PhishingLookup::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9/checkurl".to_string(),
        );
        let url = Url::parse("https://example.com").unwrap();
        assert!(!lookup.check(&url).await);
    }
}
