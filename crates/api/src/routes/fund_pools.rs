//! Fund pool route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    CreateFundPoolRequest, FundPool, FundPoolDetails, Investment, InvestmentStatus,
    ListInvestmentsQuery, ListInvestmentsResponse,
};
use persistence::entities::InvestmentStatusDb;
use persistence::repositories::{FundPoolRepository, InvestmentRepository};
use shared::pagination::{PageWindow, Pagination};

use crate::app::AppState;
use crate::error::ApiError;

/// Create fund pool routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fund_pool))
        .route("/:pool_id", get(get_fund_pool))
        .route("/:pool_id/investments", get(list_pool_investments))
}

/// Create a new fund pool for a startup.
///
/// POST /api/v1/fund-pools
#[axum::debug_handler]
pub async fn create_fund_pool(
    State(state): State<AppState>,
    Json(request): Json<CreateFundPoolRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = FundPoolRepository::new(state.pool.clone());
    let entity = repo.create(request.startup_id, request.fund_goal).await?;
    let pool = FundPool::from(entity);

    info!(
        fund_pool_id = %pool.id,
        startup_id = %pool.startup_id,
        fund_goal = pool.fund_goal,
        "Created fund pool"
    );

    Ok((StatusCode::CREATED, Json(pool)))
}

/// Get a fund pool with its confirmed total.
///
/// GET /api/v1/fund-pools/{pool_id}
#[axum::debug_handler]
pub async fn get_fund_pool(
    State(state): State<AppState>,
    Path(pool_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = FundPoolRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(pool_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Fund pool not found".to_string()))?;

    let investment_repo = InvestmentRepository::new(state.pool.clone());
    let confirmed_total = investment_repo.sum_confirmed(pool_id).await?;

    let details = FundPoolDetails::from_pool(FundPool::from(entity), confirmed_total);

    Ok((StatusCode::OK, Json(details)))
}

/// List investments in a fund pool.
///
/// GET /api/v1/fund-pools/{pool_id}/investments?status=&page=&per_page=
#[axum::debug_handler]
pub async fn list_pool_investments(
    State(state): State<AppState>,
    Path(pool_id): Path<Uuid>,
    Query(query): Query<ListInvestmentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pool_repo = FundPoolRepository::new(state.pool.clone());
    pool_repo
        .find_by_id(pool_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Fund pool not found".to_string()))?;

    // Unknown status values are ignored rather than rejected.
    let status_filter = query
        .status
        .as_deref()
        .and_then(InvestmentStatus::parse)
        .map(InvestmentStatusDb::from);

    let window = PageWindow::new(query.page, query.per_page);

    let repo = InvestmentRepository::new(state.pool.clone());
    let total = repo.count_for_pool(pool_id, status_filter).await?;
    let entities = repo
        .list_for_pool(pool_id, status_filter, window.limit(), window.offset())
        .await?;
    let investments: Vec<Investment> = entities.into_iter().map(Investment::from).collect();

    info!(
        fund_pool_id = %pool_id,
        investment_count = investments.len(),
        total = total,
        "Listed investments"
    );

    Ok((
        StatusCode::OK,
        Json(ListInvestmentsResponse {
            data: investments,
            pagination: Pagination::for_window(window, total),
        }),
    ))
}
