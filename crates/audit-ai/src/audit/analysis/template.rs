//! Placeholder substitution and number formatting for localized text.

use super::super::funnel::FunnelMetrics;

/// Replaces every `{name}` in `template` with its value. Unknown placeholders are left
/// untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Groups digits in threes: `264000` → `264,000` with a `,` separator.
pub fn format_amount(amount: u64, separator: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Return multiple shown in the summary, one decimal place, or `"0"` when the budget
/// gives nothing to divide by.
pub fn format_roi(metrics: &FunnelMetrics) -> String {
    let budget = metrics.estimated_budget as f64;
    if budget == 0.0 || budget.is_nan() {
        return "0".to_string();
    }

    let cost_per_lead = budget / metrics.required_leads.max(1) as f64;
    let roi = (metrics.target_clients as f64 * cost_per_lead * 3.0) / budget;
    if roi.is_finite() {
        format_tenths(roi)
    } else {
        "0".to_string()
    }
}

/// One decimal place with exact halves rounded up, where `{:.1}` would round them to even.
fn format_tenths(value: f64) -> String {
    // Only odd multiples of 0.25 sit exactly on a half-tenth in binary.
    let quarters = value * 4.0;
    if value >= 0.0 && quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (quarters as u64 * 5 + 1) / 2;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{value:.1}")
}
