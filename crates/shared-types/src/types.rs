use serde::{Deserialize, Serialize};

/// A request to scan one page: the URL under evaluation plus the visible
/// text extracted from it (and any linked policy pages).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub url: String,
    #[serde(default)]
    pub page_text: String,
}

/// Severity of a single compliance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A violated law, standard, or trust category.
///
/// Two violations are the same finding when their (act, reason) pair
/// matches exactly; severity is not part of the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub act: String,
    pub reason: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(act: impl Into<String>, reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            act: act.into(),
            reason: reason.into(),
            severity,
        }
    }

    /// Deduplication identity: case-sensitive (act, reason) pair.
    pub fn identity(&self) -> (&str, &str) {
        (&self.act, &self.reason)
    }
}

/// Categorical risk label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Moderate,
    Risky,
    Dangerous,
}

impl Verdict {
    /// Map a clamped risk score to its verdict band. Bands are inclusive at
    /// their lower bound: 80 is DANGEROUS, 50 is RISKY, 20 is MODERATE.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Verdict::Dangerous
        } else if score >= 50.0 {
            Verdict::Risky
        } else if score >= 20.0 {
            Verdict::Moderate
        } else {
            Verdict::Safe
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Verdict::Safe => "SAFE",
            Verdict::Moderate => "MODERATE",
            Verdict::Risky => "RISKY",
            Verdict::Dangerous => "DANGEROUS",
        };
        write!(f, "{}", label)
    }
}

/// Domain registration age in days, or Unknown when the registry lookup
/// failed or carried no creation date.
///
/// Serializes as a JSON number, or the string "unknown".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainAge {
    Days(f64),
    Unknown,
}

impl DomainAge {
    pub fn younger_than(&self, days: f64) -> bool {
        matches!(self, DomainAge::Days(age) if *age < days)
    }
}

impl Serialize for DomainAge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DomainAge::Days(days) => serializer.serialize_f64(*days),
            DomainAge::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for DomainAge {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Days(f64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Days(days) => Ok(DomainAge::Days(days)),
            Repr::Label(label) if label == "unknown" => Ok(DomainAge::Unknown),
            Repr::Label(label) => Err(serde::de::Error::custom(format!(
                "unexpected domain age label: {label}"
            ))),
        }
    }
}

/// Raw collector readings surfaced alongside the fused verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDetails {
    pub phishing_flag: bool,
    pub domain_age_days: DomainAge,
    pub ai_score: f64,
}

/// Final output of one scan. Built fresh per request and never mutated
/// after construction; persistence is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub url: String,
    pub risk_score: f64,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub summary: String,
    pub issues: Vec<String>,
    pub details: ScanDetails,
}
