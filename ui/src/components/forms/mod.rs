pub mod sign_up_form;

pub use sign_up_form::*;
