use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::answers::AuditAnswers;
use super::funnel::{FunnelMetrics, FunnelStage};
use super::locale::Locale;
use super::service::{AuditReport, AuditService, AuditSubmission};
use crate::access::UserRole;
use crate::error::AppError;

/// Raw form state: nine responses in question order, `-1` for unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsesSubmission {
    pub responses: Vec<i32>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelResponse {
    pub metrics: FunnelMetrics,
    pub stages: Vec<FunnelStage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalesResponse {
    pub default: Locale,
    pub supported: Vec<Locale>,
}

/// Router builder exposing the audit endpoints.
pub fn audit_router(service: Arc<AuditService>) -> Router {
    Router::new()
        .route("/api/v1/audit", post(submit_handler))
        .route("/api/v1/audit/responses", post(responses_handler))
        .route("/api/v1/audit/funnel", post(funnel_handler))
        .route("/api/v1/audit/analysis", post(analysis_handler))
        .route("/api/v1/audit/locales", get(locales_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<AuditService>>,
    Json(submission): Json<AuditSubmission>,
) -> Json<AuditReport> {
    Json(service.submit(submission).await)
}

pub(crate) async fn responses_handler(
    State(service): State<Arc<AuditService>>,
    Json(payload): Json<ResponsesSubmission>,
) -> Result<Json<AuditReport>, AppError> {
    let ResponsesSubmission {
        responses,
        locale,
        role,
    } = payload;

    let answers = AuditAnswers::from_responses(&responses)?;
    let report = service
        .submit(AuditSubmission {
            answers,
            locale,
            role,
        })
        .await;
    Ok(Json(report))
}

pub(crate) async fn funnel_handler(
    State(service): State<Arc<AuditService>>,
    Json(answers): Json<AuditAnswers>,
) -> Json<FunnelResponse> {
    let (metrics, stages) = service.funnel(&answers);
    Json(FunnelResponse { metrics, stages })
}

pub(crate) async fn analysis_handler(
    State(service): State<Arc<AuditService>>,
    Json(submission): Json<AuditSubmission>,
) -> Result<Json<AnalysisResult>, AppError> {
    let analysis = service
        .analyze(
            &submission.answers,
            submission.locale.as_deref(),
            submission.role,
        )
        .await?;
    Ok(Json(analysis))
}

pub(crate) async fn locales_handler(
    State(service): State<Arc<AuditService>>,
) -> Json<LocalesResponse> {
    Json(LocalesResponse {
        default: service.resolve_locale(None),
        supported: service.analyzer().catalog().locales(),
    })
}
