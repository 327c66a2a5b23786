use std::sync::Arc;
use std::time::Duration;

use crate::audit::analysis::RiskAnalyzer;
use crate::audit::answers::AuditAnswers;
use crate::audit::funnel::{FunnelCalculator, FunnelMetrics};
use crate::audit::tables::{LookupTable, LookupTables};

pub(super) fn analyzer() -> RiskAnalyzer {
    RiskAnalyzer::standard().with_delay(Duration::ZERO)
}

pub(super) fn calculator() -> FunnelCalculator {
    FunnelCalculator::standard()
}

/// Every answer at a code that triggers no risk rule; 4% conversion.
pub(super) fn healthy_answers() -> AuditAnswers {
    AuditAnswers {
        is_owner: 0,
        has_crm: 0,
        has_sales_team: 0,
        social_media: 0,
        niche: 0,
        ad_platform: 0,
        revenue_goal: 1,
        average_check: 1,
        conversion_rate: 2,
    }
}

/// No CRM, no sales team, weak social presence, no ads, 2% conversion.
pub(super) fn struggling_answers() -> AuditAnswers {
    AuditAnswers {
        is_owner: 0,
        has_crm: 1,
        has_sales_team: 1,
        social_media: 2,
        niche: 0,
        ad_platform: 4,
        revenue_goal: 1,
        average_check: 1,
        conversion_rate: 1,
    }
}

/// Standard tables with leads costing a single unit, keeping budget per client low.
pub(super) fn lean_tables() -> Arc<LookupTables> {
    let mut tables = LookupTables::standard();
    tables.cost_per_lead = LookupTable::from_values(&[1.0; 6], 1.0);
    Arc::new(tables)
}

pub(super) fn metrics_for(answers: &AuditAnswers) -> FunnelMetrics {
    calculator().calculate(answers)
}
