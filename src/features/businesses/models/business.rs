use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for business
#[derive(Debug, Clone, FromRow)]
pub struct Business {
    pub id: i32,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
