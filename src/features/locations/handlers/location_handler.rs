use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::LocationResponseDto;
use crate::features::locations::services::LocationService;
use crate::shared::types::ApiResponse;

/// List all active locations
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List of locations", body = ApiResponse<Vec<LocationResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let locations = service.list().await?;
    Ok(Json(ApiResponse::success(Some(locations), None, None)))
}

/// Get location by slug
#[utoipa::path(
    get,
    path = "/api/locations/{slug}",
    params(
        ("slug" = String, Path, description = "Location slug")
    ),
    responses(
        (status = 200, description = "Location found", body = ApiResponse<LocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let location = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(location), None, None)))
}
