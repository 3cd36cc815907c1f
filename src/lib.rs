pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod schema;
pub mod topology;

pub use config::PricingConfig;
pub use error::{QuoteError, Result};
pub use schema::Schema;
