pub mod sign_up;

pub use sign_up::SignUp;
