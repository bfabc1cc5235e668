//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: browser console logging macros (tracing off-WASM)
//! - **query**: query-string value escaping for in-app links

pub mod console_macros;
pub mod query;

pub use query::*;
