//! Business listings, the main content of the directory.
//!
//! Rows are written by offline import jobs; this feature only reads them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/businesses` | No | Paginated list with search and filters |
//! | GET | `/api/businesses/{slug}` | No | Get business by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BusinessService;
