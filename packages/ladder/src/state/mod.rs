//! Engine state: the façade embedders hold.

pub mod engine;

pub use engine::LadderEngine;
