use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

use super::domain::RebateEligibilityForm;
use super::evaluation::{EligibilityEvaluator, EligibilityReport};
use super::policy::PolicyConstants;
use crate::error::AppError;

/// Router exposing the eligibility check and the active policy table.
pub fn eligibility_router(policy: Arc<PolicyConstants>) -> Router {
    Router::new()
        .route("/api/v1/driveev/eligibility", post(eligibility_handler))
        .route("/api/v1/driveev/policy", get(policy_handler))
        .with_state(policy)
}

pub(crate) async fn eligibility_handler(
    State(policy): State<Arc<PolicyConstants>>,
    Json(form): Json<RebateEligibilityForm>,
) -> Result<Json<EligibilityReport>, AppError> {
    let evaluator = EligibilityEvaluator::from_form(form, &policy).map_err(|error| {
        warn!(%error, "rejected rebate application");
        error
    })?;

    let report = evaluator.report();
    info!(
        vehicle_type = %evaluator.record().vehicle_type,
        eligible = report.eligible,
        drive_plus = report.drive_plus_eligible,
        payable_amount = %report.payable_amount,
        "evaluated rebate application"
    );

    Ok(Json(report))
}

pub(crate) async fn policy_handler(State(policy): State<Arc<PolicyConstants>>) -> Response {
    (StatusCode::OK, Json(policy.as_ref().clone())).into_response()
}
