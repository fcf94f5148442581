pub mod types;

pub use types::{DomainAge, ScanDetails, ScanReport, ScanRequest, Severity, Verdict, Violation};
