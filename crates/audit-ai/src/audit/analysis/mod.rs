mod catalog;
mod recommendations;
mod scoring;
pub mod template;

#[cfg(test)]
mod tests;

pub use catalog::{LocaleCatalog, RecommendationTemplates, Translation};
pub use recommendations::{RecommendationKind, MAX_RECOMMENDATIONS};
pub use scoring::{RiskAssessment, RiskComponent, RiskFactor, RiskLevel};

use super::answers::AuditAnswers;
use super::funnel::FunnelMetrics;
use super::locale::Locale;
use recommendations::select_recommendations;
use scoring::score_risk;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default latency of the simulated analysis pass.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// Display-ready analysis of one audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub recommendations: Vec<String>,
    pub strategy: Vec<String>,
    pub summary: String,
}

/// Rule engine turning answers and funnel metrics into a localized report.
///
/// Scoring and recommendation selection never look at the locale; only the final
/// rendering step consults the catalog.
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    catalog: Arc<LocaleCatalog>,
    delay: Duration,
}

impl RiskAnalyzer {
    pub fn new(catalog: Arc<LocaleCatalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    pub fn standard() -> Self {
        Self::new(LocaleCatalog::shared(), DEFAULT_ANALYSIS_DELAY)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// Risk score and the rule hits behind it, without any text.
    pub fn assess(&self, answers: &AuditAnswers, metrics: &FunnelMetrics) -> RiskAssessment {
        score_risk(answers, metrics)
    }

    pub fn analyze(
        &self,
        answers: &AuditAnswers,
        metrics: &FunnelMetrics,
        locale: Locale,
    ) -> AnalysisResult {
        let assessment = self.assess(answers, metrics);
        let kinds = select_recommendations(answers, metrics);
        let translation = self.catalog.translation(locale);

        debug!(
            %locale,
            score = assessment.score,
            level = assessment.level.label(),
            rules = assessment.components.len(),
            recommendations = kinds.len(),
            "risk analysis computed"
        );

        AnalysisResult {
            risk_level: assessment.level,
            risk_score: assessment.score,
            recommendations: kinds
                .into_iter()
                .map(|kind| translation.recommendation(kind, metrics))
                .collect(),
            strategy: translation.strategy(),
            summary: translation.summary(answers.niche, metrics),
        }
    }

    /// [`RiskAnalyzer::analyze`] after the configured delay. Dropping the future before
    /// it resolves has no side effects.
    pub async fn analyze_deferred(
        &self,
        answers: &AuditAnswers,
        metrics: &FunnelMetrics,
        locale: Locale,
    ) -> AnalysisResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.analyze(answers, metrics, locale)
    }
}
