use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::analysis::{AnalysisResult, LocaleCatalog, RiskAnalyzer};
use super::answers::AuditAnswers;
use super::funnel::{FunnelCalculator, FunnelMetrics, FunnelStage};
use super::locale::Locale;
use super::tables::{LookupTables, TableError};
use crate::access::{AccessDenied, Feature, UserRole};
use crate::config::AnalysisConfig;

/// One completed quiz as received from the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSubmission {
    pub answers: AuditAnswers,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Localized names for the niche and ad platform the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProfile {
    pub niche: String,
    pub ad_platform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub answers: AuditAnswers,
    pub locale: Locale,
    pub role: UserRole,
    pub profile: AuditProfile,
    pub metrics: FunnelMetrics,
    pub stages: Vec<FunnelStage>,
    pub analysis: Option<AnalysisResult>,
    /// Set when the role's plan does not include the analysis.
    pub analysis_locked: bool,
    pub generated_at: DateTime<Utc>,
}

/// Service composing the funnel calculator, the entitlement gate, and the analyzer.
#[derive(Debug, Clone)]
pub struct AuditService {
    calculator: FunnelCalculator,
    analyzer: Arc<RiskAnalyzer>,
    default_locale: Locale,
}

impl AuditService {
    /// Fails when `tables` would make the funnel math divide by zero.
    pub fn new(
        tables: Arc<LookupTables>,
        catalog: Arc<LocaleCatalog>,
        config: AnalysisConfig,
    ) -> Result<Self, TableError> {
        Ok(Self {
            calculator: FunnelCalculator::new(tables)?,
            analyzer: Arc::new(RiskAnalyzer::new(catalog, config.delay)),
            default_locale: config.default_locale,
        })
    }

    pub fn standard(config: AnalysisConfig) -> Result<Self, TableError> {
        Self::new(LookupTables::shared(), LocaleCatalog::shared(), config)
    }

    pub fn analyzer(&self) -> &RiskAnalyzer {
        &self.analyzer
    }

    /// Missing or unsupported tags map to the configured default locale.
    pub fn resolve_locale(&self, tag: Option<&str>) -> Locale {
        tag.and_then(Locale::parse).unwrap_or(self.default_locale)
    }

    pub fn funnel(&self, answers: &AuditAnswers) -> (FunnelMetrics, Vec<FunnelStage>) {
        let metrics = self.calculator.calculate(answers);
        (metrics, metrics.stages().to_vec())
    }

    /// Runs the full pipeline. The analysis is skipped, not failed, for roles without it.
    pub async fn submit(&self, submission: AuditSubmission) -> AuditReport {
        let AuditSubmission {
            answers,
            locale,
            role,
        } = submission;

        let locale = self.resolve_locale(locale.as_deref());
        let (metrics, stages) = self.funnel(&answers);

        info!(
            %role,
            %locale,
            target_clients = metrics.target_clients,
            required_leads = metrics.required_leads,
            estimated_budget = metrics.estimated_budget,
            "audit submitted"
        );

        let analysis_locked = !role.has_access(Feature::Ai);
        let analysis = if analysis_locked {
            debug!(%role, "analysis skipped for plan without ai access");
            None
        } else {
            Some(
                self.analyzer
                    .analyze_deferred(&answers, &metrics, locale)
                    .await,
            )
        };

        let translation = self.analyzer.catalog().translation(locale);
        let profile = AuditProfile {
            niche: translation.niche_name(answers.niche),
            ad_platform: translation.platform_name(answers.ad_platform),
        };

        AuditReport {
            answers,
            locale,
            role,
            profile,
            metrics,
            stages,
            analysis,
            analysis_locked,
            generated_at: Utc::now(),
        }
    }

    /// Analysis on its own, refused for roles whose plan lacks it.
    pub async fn analyze(
        &self,
        answers: &AuditAnswers,
        locale: Option<&str>,
        role: UserRole,
    ) -> Result<AnalysisResult, AccessDenied> {
        role.require(Feature::Ai)?;

        let locale = self.resolve_locale(locale);
        let metrics = self.calculator.calculate(answers);
        Ok(self.analyzer.analyze_deferred(answers, &metrics, locale).await)
    }
}
