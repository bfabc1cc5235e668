//! User Interface Components
//!
//! Reusable Dioxus components for the sign-up page:
//!
//! - **forms**: the restaurant sign-up form
//! - **display**: toast notifications
//! - **input**: form inputs and inline validation messages

pub mod display;
pub mod forms;
pub mod input;
