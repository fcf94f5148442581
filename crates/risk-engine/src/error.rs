//! Failure taxonomy for the signal collectors.
//!
//! Every variant maps to a documented safe default at its collector
//! boundary (`false`, `Unknown`, or the unavailable audit result); nothing
//! here propagates past the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scan target has no host")]
    MissingHost,

    #[error("registry record has no registration date")]
    NoRegistrationDate,

    #[error("bad registration timestamp: {0}")]
    BadTimestamp(#[from] chrono::ParseError),
}
