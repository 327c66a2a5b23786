use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::common::*;
use crate::audit::analysis::{LocaleCatalog, RiskAnalyzer};
use crate::audit::locale::Locale;

#[test]
fn unsupported_locale_matches_english() {
    let answers = struggling_answers();
    let metrics = metrics_for(&answers);

    let english = analyzer().analyze(&answers, &metrics, Locale::En);
    let french = analyzer().analyze(&answers, &metrics, Locale::resolve("fr"));

    assert_eq!(english, french);
}

#[test]
fn english_summary_substitutes_profile_values() {
    let answers = struggling_answers();
    let metrics = metrics_for(&answers);

    let result = analyzer().analyze(&answers, &metrics, Locale::En);

    assert_eq!(
        result.summary,
        "Based on your E-commerce business profile, you need approximately 5000 leads per month to reach your revenue target. The estimated return on ad spend is 0.1x."
    );
}

#[test]
fn summary_falls_back_to_raw_niche_code() {
    let mut answers = healthy_answers();
    answers.niche = 9;
    let metrics = metrics_for(&answers);

    let result = analyzer().analyze(&answers, &metrics, Locale::En);

    assert!(result.summary.contains("your 9 business profile"));
    assert_eq!(metrics.cost_per_lead, 15.0);
}

#[test]
fn russian_output_uses_local_names_and_separators() {
    let mut answers = healthy_answers();
    answers.niche = 2;
    answers.has_crm = 2;
    answers.conversion_rate = 1;
    let metrics = metrics_for(&answers);

    let result = analyzer().analyze(&answers, &metrics, Locale::Ru);

    assert!(result.summary.contains("(Услуги)"));
    assert!(result.summary.contains(&metrics.required_leads.to_string()));
    let alert = result.recommendations.last().expect("loss alert present");
    assert!(alert.contains(&format!(
        "${}",
        crate::audit::analysis::template::format_amount(metrics.potential_losses, "\u{a0}")
    )));
}

#[test]
fn every_locale_has_four_strategy_phases() {
    let answers = healthy_answers();
    let metrics = metrics_for(&answers);

    for locale in Locale::ALL {
        let result = analyzer().analyze(&answers, &metrics, locale);
        assert_eq!(result.strategy.len(), 4, "locale {locale}");
        assert!(result.strategy.iter().all(|phase| !phase.is_empty()));
    }
}

#[test]
fn catalog_without_locale_falls_back() {
    let english = LocaleCatalog::standard().translation(Locale::En).clone();
    let catalog = LocaleCatalog::new(HashMap::from([(Locale::En, english.clone())]), Locale::En)
        .expect("fallback present");

    assert_eq!(catalog.translation(Locale::Kg), &english);
    assert_eq!(catalog.locales(), vec![Locale::En]);
    assert!(LocaleCatalog::new(HashMap::new(), Locale::En).is_none());
    assert_eq!(
        LocaleCatalog::standard().locales(),
        vec![Locale::En, Locale::Ru, Locale::Kg]
    );
}

#[tokio::test]
async fn deferred_analysis_waits_for_configured_delay() {
    let answers = struggling_answers();
    let metrics = metrics_for(&answers);
    let analyzer = RiskAnalyzer::new(LocaleCatalog::shared(), Duration::from_millis(25));

    let started = Instant::now();
    let deferred = analyzer.analyze_deferred(&answers, &metrics, Locale::Kg).await;

    assert!(started.elapsed() >= Duration::from_millis(25));
    assert_eq!(deferred, analyzer.analyze(&answers, &metrics, Locale::Kg));
}
