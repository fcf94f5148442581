//! Signal collectors: independent, parallelizable lookups that turn the
//! raw scan input into typed partial signals. Each performs at most one
//! outbound call and resolves to a safe default on any failure.

pub mod domain_age;
pub mod phishing;

pub use domain_age::DomainAgeLookup;
pub use phishing::PhishingLookup;
