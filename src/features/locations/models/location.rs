use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for location
#[derive(Debug, Clone, FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
