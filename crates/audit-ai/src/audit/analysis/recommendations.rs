use super::super::answers::AuditAnswers;
use super::super::funnel::FunnelMetrics;
use serde::{Deserialize, Serialize};

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Language-neutral recommendation slot, rendered later through a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Crm,
    SalesTeam,
    SocialMedia,
    Advertising,
    Conversion,
    LossAlert,
    ReadyToScale,
}

/// Recommendations in priority order, capped at [`MAX_RECOMMENDATIONS`].
///
/// Later entries are dropped when the cap is hit; nothing is reordered.
pub(crate) fn select_recommendations(
    answers: &AuditAnswers,
    metrics: &FunnelMetrics,
) -> Vec<RecommendationKind> {
    let checks = [
        (answers.lacks_crm(), RecommendationKind::Crm),
        (answers.lacks_sales_team(), RecommendationKind::SalesTeam),
        (answers.weak_social_presence(), RecommendationKind::SocialMedia),
        (answers.runs_no_ads(), RecommendationKind::Advertising),
        (
            answers.conversion_rate <= 1 || answers.conversion_rate == 5,
            RecommendationKind::Conversion,
        ),
        (metrics.potential_losses > 0, RecommendationKind::LossAlert),
    ];

    let mut selected: Vec<RecommendationKind> = checks
        .into_iter()
        .filter_map(|(applies, kind)| applies.then_some(kind))
        .collect();

    if selected.is_empty() {
        selected.push(RecommendationKind::ReadyToScale);
    }

    selected.truncate(MAX_RECOMMENDATIONS);
    selected
}
