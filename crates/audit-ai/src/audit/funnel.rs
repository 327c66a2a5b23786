use super::answers::AuditAnswers;
use super::tables::{LookupTables, TableError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lead, client, and budget targets derived from one set of answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelMetrics {
    pub target_clients: u64,
    pub required_leads: u64,
    pub estimated_budget: u64,
    pub potential_losses: u64,
    /// Percentage points, e.g. `4.0` means 4%.
    pub conversion_rate: f64,
    pub cost_per_lead: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStageKind {
    Impressions,
    Clicks,
    Leads,
    Clients,
}

impl FunnelStageKind {
    pub fn label(self) -> &'static str {
        match self {
            FunnelStageKind::Impressions => "Impressions",
            FunnelStageKind::Clicks => "Clicks",
            FunnelStageKind::Leads => "Leads",
            FunnelStageKind::Clients => "Clients",
        }
    }
}

/// One bar of the funnel visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: FunnelStageKind,
    pub value: u64,
}

impl FunnelMetrics {
    /// Display stages from widest to narrowest.
    pub fn stages(&self) -> [FunnelStage; 4] {
        [
            FunnelStage {
                stage: FunnelStageKind::Impressions,
                value: self.required_leads.saturating_mul(50),
            },
            FunnelStage {
                stage: FunnelStageKind::Clicks,
                value: self.required_leads.saturating_mul(10),
            },
            FunnelStage {
                stage: FunnelStageKind::Leads,
                value: self.required_leads,
            },
            FunnelStage {
                stage: FunnelStageKind::Clients,
                value: self.target_clients,
            },
        ]
    }
}

const CRM_GAP_LOSS: f64 = 0.15;
const SALES_TEAM_GAP_LOSS: f64 = 0.1;
const SOCIAL_GAP_LOSS: f64 = 0.1;
const NO_ADS_LOSS: f64 = 0.2;

/// Stateless calculator over a shared set of lookup tables.
#[derive(Debug, Clone)]
pub struct FunnelCalculator {
    tables: Arc<LookupTables>,
}

impl FunnelCalculator {
    /// Refuses tables that fail [`LookupTables::validate`], so a zero divisor is reported
    /// here instead of surfacing later as zero counts.
    pub fn new(tables: Arc<LookupTables>) -> Result<Self, TableError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Calculator over [`LookupTables::shared`], which is checked when first built.
    pub fn standard() -> Self {
        Self {
            tables: LookupTables::shared(),
        }
    }

    pub fn calculate(&self, answers: &AuditAnswers) -> FunnelMetrics {
        let monthly_revenue = self.tables.revenue_goal.get(answers.revenue_goal);
        let avg_check = self.tables.average_check.get(answers.average_check);
        let conversion_rate = self.tables.conversion.get(answers.conversion_rate);
        let cost_per_lead = self.tables.cost_per_lead.get(answers.niche);

        let target_clients = ceil_count(monthly_revenue / avg_check);
        let required_leads = ceil_count(target_clients as f64 / (conversion_rate / 100.0));
        let estimated_budget = ceil_count(required_leads as f64 * cost_per_lead);

        let mut loss_multiplier = 1.0;
        if answers.lacks_crm() {
            loss_multiplier += CRM_GAP_LOSS;
        }
        if answers.lacks_sales_team() {
            loss_multiplier += SALES_TEAM_GAP_LOSS;
        }
        if answers.weak_social_presence() {
            loss_multiplier += SOCIAL_GAP_LOSS;
        }
        if answers.runs_no_ads() {
            loss_multiplier += NO_ADS_LOSS;
        }

        let potential_losses = ceil_count(estimated_budget as f64 * (loss_multiplier - 1.0));

        FunnelMetrics {
            target_clients,
            required_leads,
            estimated_budget,
            potential_losses,
            conversion_rate,
            cost_per_lead,
        }
    }
}

/// Rounds up to a whole count. Values that are not finite and positive become zero.
fn ceil_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.ceil() as u64
    } else {
        0
    }
}
