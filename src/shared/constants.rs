/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Upper bound on the category breadcrumb walk. The category table promises
/// a forest, but a cyclic parent chain would otherwise loop forever.
pub const MAX_BREADCRUMB_DEPTH: usize = 50;
