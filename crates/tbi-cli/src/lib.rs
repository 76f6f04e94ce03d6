//! CLI library components for the TBI interpretation engine.

pub mod logging;
pub mod sources;
pub mod store;
