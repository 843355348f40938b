//! Investment route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::{CreateInvestmentRequest, Investment, InvestmentStatus};
use domain::services::InvestmentLifecycle;
use persistence::repositories::InvestmentRepository;
use persistence::PgInvestmentStore;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_investment_created, record_investment_transition};

/// Create investment routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_investment))
        .route("/:investment_id", get(get_investment))
        .route("/:investment_id/accept", post(accept_investment))
        .route("/:investment_id/decline", post(decline_investment))
        .route("/:investment_id/confirm", post(confirm_investment))
        .route("/:investment_id/withdraw", post(withdraw_investment))
        .route("/:investment_id/deactivate", post(deactivate_investment))
}

fn lifecycle(state: &AppState) -> InvestmentLifecycle<PgInvestmentStore> {
    InvestmentLifecycle::new(PgInvestmentStore::new(state.pool.clone()))
}

/// Create a new investment request.
///
/// POST /api/v1/investments
#[axum::debug_handler]
pub async fn create_investment(
    State(state): State<AppState>,
    Json(request): Json<CreateInvestmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let investment = lifecycle(&state).create_investment(request).await?;
    record_investment_created();

    Ok((StatusCode::CREATED, Json(investment)))
}

/// Get an investment by ID.
///
/// GET /api/v1/investments/{investment_id}
#[axum::debug_handler]
pub async fn get_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = InvestmentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(investment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Investment not found".to_string()))?;

    Ok((StatusCode::OK, Json(Investment::from(entity))))
}

async fn transition(
    state: AppState,
    investment_id: Uuid,
    target: InvestmentStatus,
) -> Result<(StatusCode, Json<Investment>), ApiError> {
    let investment = lifecycle(&state).transition(investment_id, target).await?;
    record_investment_transition(&target.to_string());

    Ok((StatusCode::OK, Json(investment)))
}

/// Founder accepts an investment request.
///
/// POST /api/v1/investments/{investment_id}/accept
#[axum::debug_handler]
pub async fn accept_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    transition(state, investment_id, InvestmentStatus::Pending).await
}

/// Founder declines an investment request.
///
/// POST /api/v1/investments/{investment_id}/decline
#[axum::debug_handler]
pub async fn decline_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    transition(state, investment_id, InvestmentStatus::Declined).await
}

/// Confirm an accepted investment.
///
/// POST /api/v1/investments/{investment_id}/confirm
#[axum::debug_handler]
pub async fn confirm_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    transition(state, investment_id, InvestmentStatus::Confirmed).await
}

/// Investor withdraws an investment.
///
/// POST /api/v1/investments/{investment_id}/withdraw
#[axum::debug_handler]
pub async fn withdraw_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    transition(state, investment_id, InvestmentStatus::Withdrawn).await
}

/// Deactivate a confirmed investment.
///
/// POST /api/v1/investments/{investment_id}/deactivate
#[axum::debug_handler]
pub async fn deactivate_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    transition(state, investment_id, InvestmentStatus::Inactive).await
}
