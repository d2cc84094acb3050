//! Handlers for business directory endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::business::{BusinessListQuery, BusinessResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists businesses, optionally filtered by search term and category.
///
/// # Endpoint
///
/// `GET /api/businesses?search=&category=`
///
/// # Filtering
///
/// - `search` - case-insensitive substring match against name or description
/// - `category` - case-insensitive exact match
///
/// Predicates combine with AND. Absent or empty parameters do not filter.
/// Results keep their append order; no predicate match yields `[]`, not 404.
pub async fn business_list_handler(
    State(state): State<AppState>,
    Query(query): Query<BusinessListQuery>,
) -> Result<Json<Vec<BusinessResponse>>, AppError> {
    let filter = query.into_filter();
    let businesses = state.business_service.list_businesses(&filter).await?;

    Ok(Json(businesses.into_iter().map(Into::into).collect()))
}

/// Returns a single business by id.
///
/// # Endpoint
///
/// `GET /api/businesses/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no business has the given id.
pub async fn business_detail_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BusinessResponse>, AppError> {
    let business = state.business_service.get_business(&id).await?;

    Ok(Json(business.into()))
}
