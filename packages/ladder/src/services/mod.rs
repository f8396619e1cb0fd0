//! Services: aggregation, standings, validation and the standings cache.

pub mod audit;
pub mod standings;
pub mod standings_cache;
pub mod validation;

pub use audit::compute_audit;
pub use standings::compute_standings;
pub use validation::{validate, DataQualityWarning};
