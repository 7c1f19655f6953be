pub mod aggregation;
pub mod filter;
pub mod loader;
pub mod service;
