use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::businesses::dtos::{BusinessFilterQuery, BusinessResponseDto};
use crate::features::businesses::models::Business;
use crate::shared::types::PaginationQuery;

/// Service for business listings
pub struct BusinessService {
    pool: PgPool,
}

impl BusinessService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Paginated list of active businesses with optional free-text search and
    /// category/location slug filters. Returns the page plus the total count
    /// for the same filter set.
    pub async fn list(
        &self,
        filter: &BusinessFilterQuery,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<BusinessResponseDto>, i64)> {
        let search_pattern = filter
            .q
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{}%", q.to_lowercase()));

        // Slug filters resolve to ids first; an unknown slug is a 404, not an
        // empty page.
        let category_id = match filter.category.as_deref().filter(|s| !s.is_empty()) {
            Some(slug) => Some(self.resolve_category_id(slug).await?),
            None => None,
        };
        let location_id = match filter.location.as_deref().filter(|s| !s.is_empty()) {
            Some(slug) => Some(self.resolve_location_id(slug).await?),
            None => None,
        };

        let businesses = sqlx::query_as::<_, Business>(
            r#"
            SELECT id, category_id, location_id, name, slug, description, address, phone, website, is_active, created_at, updated_at
            FROM businesses
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(name) LIKE $1 OR LOWER(description) LIKE $1)
              AND ($2::int IS NULL OR category_id = $2)
              AND ($3::int IS NULL OR location_id = $3)
            ORDER BY name
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(search_pattern.as_deref())
        .bind(category_id)
        .bind(location_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list businesses: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM businesses
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(name) LIKE $1 OR LOWER(description) LIKE $1)
              AND ($2::int IS NULL OR category_id = $2)
              AND ($3::int IS NULL OR location_id = $3)
            "#,
        )
        .bind(search_pattern.as_deref())
        .bind(category_id)
        .bind(location_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count businesses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((businesses.into_iter().map(|b| b.into()).collect(), total))
    }

    /// Get business by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<BusinessResponseDto> {
        let business = sqlx::query_as::<_, Business>(
            r#"
            SELECT id, category_id, location_id, name, slug, description, address, phone, website, is_active, created_at, updated_at
            FROM businesses
            WHERE slug = $1 AND is_active = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get business by slug {}: {:?}", slug, e);
            AppError::Database(e)
        })?;

        business
            .map(|b| b.into())
            .ok_or_else(|| AppError::NotFound(format!("Business '{}' not found", slug)))
    }

    async fn resolve_category_id(&self, slug: &str) -> Result<i32> {
        sqlx::query_scalar::<_, i32>(
            "SELECT id FROM categories WHERE slug = $1 AND is_active = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve category slug {}: {:?}", slug, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    async fn resolve_location_id(&self, slug: &str) -> Result<i32> {
        sqlx::query_scalar::<_, i32>(
            "SELECT id FROM locations WHERE slug = $1 AND is_active = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve location slug {}: {:?}", slug, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", slug)))
    }
}
