use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryDetailDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Query params for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    /// If true, return tree structure. Default: false (flat list)
    #[serde(default)]
    pub tree: bool,
}

/// List all active categories
///
/// Returns categories as flat list or tree structure based on `tree` query param.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("tree" = Option<bool>, Query, description = "Return tree structure if true")
    ),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    if query.tree {
        let tree = service.list_tree().await?;
        let value = serde_json::to_value(tree).unwrap();
        Ok(Json(ApiResponse::success(Some(value), None, None)))
    } else {
        let categories = service.list().await?;
        let value = serde_json::to_value(categories).unwrap();
        Ok(Json(ApiResponse::success(Some(value), None, None)))
    }
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Get category detail by id
///
/// Returns the category with its direct children (in display order) and the
/// root-first breadcrumb of ancestors.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/detail",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryDetailDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_detail(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CategoryDetailDto>>> {
    let detail = service.resolve(id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::features::categories::routes;
    use crate::features::categories::services::category_service_tests::{
        category, InMemoryCategoryStore,
    };
    use crate::features::categories::services::CategoryService;

    fn test_server() -> TestServer {
        let store = InMemoryCategoryStore::new(vec![
            category(1, None, 0, 0, "Food"),
            category(5, Some(1), 1, 0, "Restaurants"),
            category(10, Some(5), 2, 0, "Pizza"),
        ]);
        let service = Arc::new(CategoryService::with_store(Arc::new(store)));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_categories_envelope() {
        let server = test_server();

        let response = server.get("/api/categories").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_category_detail_breadcrumb_and_children() {
        let server = test_server();

        let response = server.get("/api/categories/5/detail").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        let data = &body["data"];
        assert_eq!(data["id"], 5);
        assert_eq!(data["child_count"], 1);
        assert_eq!(data["children"][0]["id"], 10);
        let crumb_ids: Vec<i64> = data["breadcrumb"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["id"].as_i64().unwrap())
            .collect();
        assert_eq!(crumb_ids, vec![1, 5]);
    }

    #[tokio::test]
    async fn test_get_category_detail_missing_is_404() {
        let server = test_server();

        let response = server.get("/api/categories/404/detail").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_get_category_by_slug() {
        let server = test_server();

        let response = server.get("/api/categories/restaurants").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["id"], 5);
    }
}
