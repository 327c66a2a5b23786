use super::super::answers::AuditAnswers;
use super::super::funnel::FunnelMetrics;
use serde::{Deserialize, Serialize};

const BASE_SCORE: i32 = 20;
const MAX_SCORE: i32 = 95;

/// Budget per target client above which spend is flagged as heavy.
const BUDGET_PER_CLIENT_CEILING: u64 = 50;

/// Severity band for a clamped risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// `Low` is never produced: the base score already sits inside the medium band.
    pub fn classify(score: u8) -> Self {
        match score {
            0..=40 => RiskLevel::Medium,
            41..=70 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Rule that contributed points to a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    NoCrm,
    PartialCrm,
    NoSalesTeam,
    PartialSalesTeam,
    WeakSocialPresence,
    NoAdvertising,
    LowConversion,
    UnknownConversion,
    HeavyBudget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskComponent {
    pub factor: RiskFactor,
    pub points: u8,
}

/// Clamped score with the rule hits that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub components: Vec<RiskComponent>,
}

pub(crate) fn score_risk(answers: &AuditAnswers, metrics: &FunnelMetrics) -> RiskAssessment {
    let mut components = Vec::new();
    let mut hit = |factor: RiskFactor, points: u8| {
        components.push(RiskComponent { factor, points });
    };

    if answers.has_crm == 1 {
        hit(RiskFactor::NoCrm, 25);
    }
    if answers.has_crm == 3 {
        hit(RiskFactor::PartialCrm, 15);
    }

    if answers.has_sales_team == 1 {
        hit(RiskFactor::NoSalesTeam, 20);
    }
    if answers.has_sales_team == 3 {
        hit(RiskFactor::PartialSalesTeam, 15);
    }

    if answers.weak_social_presence() {
        hit(RiskFactor::WeakSocialPresence, 15);
    }

    if answers.runs_no_ads() {
        hit(RiskFactor::NoAdvertising, 25);
    }

    // Both conversion checks run; code 5 ("don't know") only matches the second.
    if answers.conversion_rate <= 1 {
        hit(RiskFactor::LowConversion, 20);
    }
    if answers.conversion_rate == 5 {
        hit(RiskFactor::UnknownConversion, 25);
    }

    if metrics.estimated_budget
        > metrics
            .target_clients
            .saturating_mul(BUDGET_PER_CLIENT_CEILING)
    {
        hit(RiskFactor::HeavyBudget, 15);
    }

    let raw: i32 = BASE_SCORE
        + components
            .iter()
            .map(|component| i32::from(component.points))
            .sum::<i32>();
    let score = raw.clamp(0, MAX_SCORE) as u8;

    RiskAssessment {
        score,
        level: RiskLevel::classify(score),
        components,
    }
}
