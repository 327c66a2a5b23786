use crate::infra::parse_answers;
use audit_ai::access::UserRole;
use audit_ai::audit::{AuditAnswers, AuditReport, AuditService, AuditSubmission};
use audit_ai::config::AppConfig;
use audit_ai::error::AppError;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Nine comma-separated answer codes in question order, e.g. 0,1,1,2,0,4,1,1,5
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: AuditAnswers,
    /// Locale for the generated text (en, ru, kg). Defaults to the configured locale.
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Plan to evaluate entitlements for (user, pro, business, enterprise, admin)
    #[arg(long, default_value_t = UserRole::Pro)]
    pub(crate) role: UserRole,
    /// Override the simulated analysis latency in milliseconds
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
}

pub(crate) async fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs {
        answers,
        locale,
        role,
        delay_ms,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(delay_ms) = delay_ms {
        config.analysis.delay = Duration::from_millis(delay_ms);
    }

    let service = AuditService::standard(config.analysis)?;
    let report = service
        .submit(AuditSubmission {
            answers,
            locale,
            role,
        })
        .await;

    print!("{}", render_report(&report));
    Ok(())
}

pub(crate) fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    let metrics = &report.metrics;

    out.push_str("Marketing audit\n");
    out.push_str(&format!(
        "Profile: {} niche, advertising via {} (locale {}, plan {})\n",
        report.profile.niche, report.profile.ad_platform, report.locale, report.role
    ));
    out.push_str(&format!(
        "Generated {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str("\nFunnel metrics\n");
    out.push_str(&format!("- Target clients: {}\n", metrics.target_clients));
    out.push_str(&format!("- Required leads: {}\n", metrics.required_leads));
    out.push_str(&format!("- Estimated budget: ${}\n", metrics.estimated_budget));
    out.push_str(&format!("- Potential losses: ${}\n", metrics.potential_losses));
    out.push_str(&format!(
        "- Conversion rate: {}%, cost per lead: ${}\n",
        metrics.conversion_rate, metrics.cost_per_lead
    ));

    out.push_str("\nFunnel stages\n");
    for stage in &report.stages {
        out.push_str(&format!("- {}: {}\n", stage.stage.label(), stage.value));
    }

    match &report.analysis {
        Some(analysis) => {
            out.push_str(&format!(
                "\nRisk: {} ({}/100)\n",
                analysis.risk_level.label().to_uppercase(),
                analysis.risk_score
            ));
            out.push_str(&format!("{}\n", analysis.summary));

            out.push_str("\nRecommendations\n");
            for recommendation in &analysis.recommendations {
                out.push_str(&format!("- {recommendation}\n"));
            }

            out.push_str("\nStrategy\n");
            for (index, phase) in analysis.strategy.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", index + 1, phase));
            }
        }
        None if report.analysis_locked => {
            out.push_str(&format!(
                "\nAnalysis: not included in the {} plan\n",
                report.role
            ));
        }
        None => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_ai::config::AnalysisConfig;

    fn service() -> AuditService {
        AuditService::standard(AnalysisConfig {
            delay: Duration::ZERO,
            ..AnalysisConfig::default()
        })
        .expect("shipped tables validate")
    }

    #[tokio::test]
    async fn render_includes_analysis_for_pro_plan() {
        let answers = parse_answers("0,1,1,2,0,4,1,1,5").expect("valid codes");
        let report = service()
            .submit(AuditSubmission {
                answers,
                locale: Some("en".to_string()),
                role: UserRole::Pro,
            })
            .await;

        let text = render_report(&report);

        assert!(text.contains("Profile: E-commerce niche, advertising via None"));
        assert!(text.contains("- Required leads: 5000"));
        assert!(text.contains("Risk: CRITICAL (95/100)"));
        assert!(text.contains("4. Phase 4"));
    }

    #[tokio::test]
    async fn render_marks_locked_analysis() {
        let answers = parse_answers("0,0,0,0,0,0,1,1,2").expect("valid codes");
        let report = service()
            .submit(AuditSubmission {
                answers,
                locale: None,
                role: UserRole::User,
            })
            .await;

        let text = render_report(&report);

        assert!(text.contains("- Impressions: 125000"));
        assert!(text.contains("Analysis: not included in the user plan"));
        assert!(!text.contains("Recommendations"));
    }
}
