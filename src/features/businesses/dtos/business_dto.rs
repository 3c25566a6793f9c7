use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::businesses::models::Business;

/// Response DTO for business
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessResponseDto {
    pub id: i32,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl From<Business> for BusinessResponseDto {
    fn from(b: Business) -> Self {
        Self {
            id: b.id,
            category_id: b.category_id,
            location_id: b.location_id,
            name: b.name,
            slug: b.slug,
            description: b.description,
            address: b.address,
            phone: b.phone,
            website: b.website,
        }
    }
}

/// Filter params for the business listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BusinessFilterQuery {
    /// Free-text search over name and description
    pub q: Option<String>,

    /// Category slug filter
    pub category: Option<String>,

    /// Location slug filter
    pub location: Option<String>,
}
