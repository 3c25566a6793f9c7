use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
///
/// `level` is the depth from the root (root = 0) and is kept consistent with
/// the `parent_id` chain by the import jobs that write this table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub level: i32,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
