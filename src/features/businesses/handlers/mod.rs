mod business_handler;

pub use business_handler::*;
