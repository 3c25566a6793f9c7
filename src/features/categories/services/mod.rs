mod category_service;

pub use category_service::CategoryService;

#[cfg(test)]
pub(crate) use category_service::tests as category_service_tests;
