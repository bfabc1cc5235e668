//! Infrastructure Services
//!
//! - **client**: HTTP client for the restaurant registration endpoint
//! - **config**: build-time configuration and global settings
//! - **navigation**: router-backed `Navigator`
//! - **notifications**: toast queue implementing `Notifier`
//!
//! The services are WASM-first: async traits carry no Send bounds.

pub mod client;
pub mod config;
pub mod navigation;
pub mod notifications;
