//! Website risk-scoring pipeline.
//!
//! Fans out three independent signal collectors (phishing reputation,
//! domain age, AI compliance audit), runs the heuristic disclosure scan,
//! and fuses everything into one deterministic [`shared_types::ScanReport`].
//! Every external failure degrades to a conservative default; callers never
//! see an error.

pub mod audit;
pub mod collectors;
pub mod engine;
pub mod error;
pub mod fuser;
pub mod heuristics;
pub mod patterns;
pub mod region;
pub mod rules;

pub use audit::{AiAuditResult, AiParseResult, ComplianceAuditor, TextGenerator};
pub use engine::{EngineConfig, RiskEngine};
pub use fuser::CollectedSignals;
pub use heuristics::HeuristicResult;
