// Client-side access to the restaurant backend
//
// - errors: client error type shared with the sign-up controller
// - registration_client: reqwest-based `RestaurantRegistrar`

pub mod errors;
pub mod registration_client;

pub use errors::{ClientError, ClientResult};
pub use registration_client::RegistrationClient;
