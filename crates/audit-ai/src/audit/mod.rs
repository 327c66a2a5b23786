pub mod analysis;
pub mod answers;
pub mod funnel;
mod locale;
pub mod router;
pub mod service;
pub mod tables;

pub use analysis::{
    AnalysisResult, LocaleCatalog, RecommendationKind, RiskAnalyzer, RiskAssessment, RiskFactor,
    RiskLevel,
};
pub use answers::{AnswerError, AuditAnswers, Question};
pub use funnel::{FunnelCalculator, FunnelMetrics, FunnelStage, FunnelStageKind};
pub use locale::Locale;
pub use router::audit_router;
pub use service::{AuditProfile, AuditReport, AuditService, AuditSubmission};
pub use tables::{LookupTable, LookupTables, TableError, TableKind};

/// Computes funnel metrics against the shipped lookup tables.
pub fn calculate_funnel(answers: &AuditAnswers) -> FunnelMetrics {
    FunnelCalculator::standard().calculate(answers)
}

/// Runs the deferred analysis with the shipped catalog and the default latency.
///
/// Unknown locale tags resolve to the default locale.
pub async fn generate_analysis(
    answers: &AuditAnswers,
    metrics: &FunnelMetrics,
    locale: &str,
) -> AnalysisResult {
    RiskAnalyzer::standard()
        .analyze_deferred(answers, metrics, Locale::resolve(locale))
        .await
}
