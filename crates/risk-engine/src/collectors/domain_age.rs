//! Domain-age lookup via RDAP registration metadata.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_types::DomainAge;
use url::Url;

use crate::error::CollectorError;

/// Resolves the registration date for the target's hostname and computes
/// its age in days.
pub struct DomainAgeLookup {
    client: reqwest::Client,
    rdap_base: String,
}

#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    event_action: String,
    event_date: String,
}

impl DomainAgeLookup {
    pub fn new(client: reqwest::Client, rdap_base: String) -> Self {
        Self { client, rdap_base }
    }

    /// Fail-soft boundary: any lookup error resolves to `Unknown`.
    pub async fn age_in_days(&self, url: &Url) -> DomainAge {
        match self.query(url).await {
            Ok(age) => age,
            Err(err) => {
                tracing::warn!(error = %err, "domain age lookup failed; treating as unknown");
                DomainAge::Unknown
            }
        }
    }

    async fn query(&self, url: &Url) -> Result<DomainAge, CollectorError> {
        let host = url.host_str().ok_or(CollectorError::MissingHost)?;
        let endpoint = format!("{}/domain/{}", self.rdap_base.trim_end_matches('/'), host);

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await?
            .error_for_status()?;
        let record: RdapDomain = response.json().await?;

        let registered = record
            .events
            .iter()
            .find(|event| event.event_action == "registration")
            .ok_or(CollectorError::NoRegistrationDate)?;
        let registered: DateTime<Utc> = registered.event_date.parse()?;

        let age = Utc::now().signed_duration_since(registered);
        Ok(DomainAge::Days(age.num_seconds() as f64 / 86_400.0))
    }
}
