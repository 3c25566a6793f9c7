//! Category taxonomy for the directory.
//!
//! Categories form a strict tree: every row optionally references a parent
//! row, roots have no parent. The table is populated by offline import jobs
//! and is read-only here.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories (flat or `?tree=true`) |
//! | GET | `/api/categories/{slug}` | No | Get category by slug |
//! | GET | `/api/categories/{id}/detail` | No | Category with children and breadcrumb |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::CategoryService;
