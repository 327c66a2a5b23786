//! Funnel metrics and risk analysis for the marketing audit quiz.
//!
//! The [`audit`] module holds the two-stage pipeline: the funnel calculator turns nine
//! answer codes into lead, client, and budget targets, and the risk analyzer turns
//! those figures into a localized report. [`access`] carries the role entitlements the
//! HTTP layer consults before running the analysis.

pub mod access;
pub mod audit;
pub mod config;
pub mod error;
pub mod telemetry;

pub use audit::{
    calculate_funnel, generate_analysis, AnalysisResult, AuditAnswers, FunnelMetrics,
    RiskLevel,
};
