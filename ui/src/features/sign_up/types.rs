// Core types for the restaurant sign-up page - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Registration payload sent to the backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

/// Per-field validation messages shown under each input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub restaurant_name: Option<String>,
    pub manager_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.restaurant_name.is_none()
            && self.manager_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Current values of the four form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

impl SignUpForm {
    /// Snapshot of the current field values, passed unchanged to the submit handler
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            restaurant_name: self.restaurant_name.clone(),
            manager_name: self.manager_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// What a call to `SignUpController::submit` ended up doing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the registration
    Registered,
    /// The outbound call failed; the user saw the generic error toast
    Failed,
    /// Local validation failed; nothing was sent
    Rejected(FormErrors),
    /// Another submission was still in flight; nothing was sent
    AlreadySubmitting,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum SignUpAction {
    SetRestaurantName(String),
    SetManagerName(String),
    SetEmail(String),
    SetPhone(String),
    SetSubmitting(bool),
    SetErrors(FormErrors),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpState {
    pub form: SignUpForm,
    pub is_submitting: bool,
    pub errors: FormErrors,
}

impl SignUpState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            SignUpAction::SetRestaurantName(value) => {
                self.form.restaurant_name = value;
                self.errors.restaurant_name = None;
            }
            SignUpAction::SetManagerName(value) => {
                self.form.manager_name = value;
                self.errors.manager_name = None;
            }
            SignUpAction::SetEmail(value) => {
                self.form.email = value;
                self.errors.email = None;
            }
            SignUpAction::SetPhone(value) => {
                self.form.phone = value;
                self.errors.phone = None;
            }
            SignUpAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            SignUpAction::SetErrors(errors) => {
                self.errors = errors;
            }
        }
    }
}
