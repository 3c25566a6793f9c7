use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::businesses::dtos::{BusinessFilterQuery, BusinessResponseDto};
use crate::features::businesses::services::BusinessService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List businesses with pagination and optional filters
#[utoipa::path(
    get,
    path = "/api/businesses",
    params(BusinessFilterQuery, PaginationQuery),
    responses(
        (status = 200, description = "Paginated business list", body = ApiResponse<Vec<BusinessResponseDto>>),
        (status = 404, description = "Unknown category or location slug")
    ),
    tag = "businesses"
)]
pub async fn list_businesses(
    State(service): State<Arc<BusinessService>>,
    Query(filter): Query<BusinessFilterQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<BusinessResponseDto>>>> {
    let (businesses, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(businesses),
        None,
        Some(Meta { total }),
    )))
}

/// Get business by slug
#[utoipa::path(
    get,
    path = "/api/businesses/{slug}",
    params(
        ("slug" = String, Path, description = "Business slug")
    ),
    responses(
        (status = 200, description = "Business found", body = ApiResponse<BusinessResponseDto>),
        (status = 404, description = "Business not found")
    ),
    tag = "businesses"
)]
pub async fn get_business(
    State(service): State<Arc<BusinessService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BusinessResponseDto>>> {
    let business = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(business), None, None)))
}
