use audit_ai::audit::AuditAnswers;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses `0,1,1,2,0,4,1,1,5` into answers, in question order.
pub(crate) fn parse_answers(raw: &str) -> Result<AuditAnswers, String> {
    let responses = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>()
                .map_err(|err| format!("failed to parse '{part}' as an answer code ({err})"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    AuditAnswers::from_responses(&responses).map_err(|err| err.to_string())
}
