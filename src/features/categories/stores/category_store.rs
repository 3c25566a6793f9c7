use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Persistence contract for categories.
///
/// The service layer only ever does point lookups and child listings, so the
/// contract stays small enough to fake in tests.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Point lookup by id. Returns `None` when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>>;

    /// Active category by slug. Returns `None` when no row matches.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Direct children of a category, ordered ascending by `display_order`.
    async fn find_children_by_parent_id(&self, parent_id: i32) -> Result<Vec<Category>>;

    /// All active categories, ordered for display.
    async fn list_active(&self) -> Result<Vec<Category>>;
}

/// Postgres-backed category store.
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, icon, level, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch category by id {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, icon, level, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE slug = $1 AND is_active = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch category by slug {}: {:?}", slug, e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    async fn find_children_by_parent_id(&self, parent_id: i32) -> Result<Vec<Category>> {
        let children = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, icon, level, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE parent_id = $1 AND is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch children of category {}: {:?}", parent_id, e);
            AppError::Database(e)
        })?;

        Ok(children)
    }

    async fn list_active(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, icon, level, display_order, is_active, created_at, updated_at
            FROM categories
            WHERE is_active = TRUE
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }
}
