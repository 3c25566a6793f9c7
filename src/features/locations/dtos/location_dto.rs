use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::models::Location;

/// Response DTO for location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub display_order: i32,
}

impl From<Location> for LocationResponseDto {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            name: l.name,
            slug: l.slug,
            region: l.region,
            display_order: l.display_order,
        }
    }
}
