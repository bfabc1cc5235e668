//! This crate contains the restaurant sign-up page and the pieces it is built from.

pub mod app;
pub use app::SignUp;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
