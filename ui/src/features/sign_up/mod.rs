pub mod capabilities;
pub mod controller;
pub mod form_validation;
pub mod types;


pub use capabilities::*;
pub use controller::*;
pub use form_validation::*;
pub use types::*;
