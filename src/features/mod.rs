pub mod businesses;
pub mod categories;
pub mod locations;
