//! Capabilities the sign-up controller depends on.
//!
//! The page wires these to the HTTP client, the toast queue and the router;
//! tests wire them to in-memory fakes.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;

use super::types::RegistrationRequest;
use crate::services::client::ClientError;

/// The outbound call that persists a registration server-side
#[async_trait(?Send)]
pub trait RestaurantRegistrar {
    async fn register_restaurant(&self, request: &RegistrationRequest) -> Result<(), ClientError>;
}

/// Shows transient success/error messages to the user
pub trait Notifier {
    fn success(&self, message: &str, action: Option<ToastAction>);
    fn error(&self, message: &str);
}

/// Moves the user to another view
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// A labelled button attached to a notification
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    on_click: Rc<dyn Fn()>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Rc::new(on_click),
        }
    }

    pub fn invoke(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ToastAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Rc::ptr_eq(&self.on_click, &other.on_click)
    }
}

#[async_trait(?Send)]
impl<T: RestaurantRegistrar + ?Sized> RestaurantRegistrar for Rc<T> {
    async fn register_restaurant(&self, request: &RegistrationRequest) -> Result<(), ClientError> {
        (**self).register_restaurant(request).await
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn success(&self, message: &str, action: Option<ToastAction>) {
        (**self).success(message, action)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn go_to(&self, path: &str) {
        (**self).go_to(path)
    }
}
