use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::LocationResponseDto;
use crate::features::locations::models::Location;

/// Service for location operations
pub struct LocationService {
    pool: PgPool,
}

impl LocationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active locations
    pub async fn list(&self) -> Result<Vec<LocationResponseDto>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, slug, region, display_order, is_active, created_at, updated_at
            FROM locations
            WHERE is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list locations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(locations.into_iter().map(|l| l.into()).collect())
    }

    /// Get location by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<LocationResponseDto> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, slug, region, display_order, is_active, created_at, updated_at
            FROM locations
            WHERE slug = $1 AND is_active = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get location by slug {}: {:?}", slug, e);
            AppError::Database(e)
        })?;

        location
            .map(|l| l.into())
            .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", slug)))
    }
}
