//! Utility modules.
//!
//! - [`ids`]: Slug derivation from source names

pub mod ids;
