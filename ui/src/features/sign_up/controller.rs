use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, instrument, warn};

use super::capabilities::{Navigator, Notifier, RestaurantRegistrar, ToastAction};
use super::form_validation::validate_registration;
use super::types::{RegistrationRequest, SubmitOutcome};
use crate::utils::encode_query_value;

pub const SUCCESS_MESSAGE: &str = "Restaurante cadastrado com sucesso.";
pub const ERROR_MESSAGE: &str = "Erro ao cadastrar restaurante.";
pub const LOGIN_ACTION_LABEL: &str = "Login";
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Path of the sign-in view pre-filled with `email`
pub fn sign_in_path(email: &str) -> String {
    format!("{}?email={}", SIGN_IN_ROUTE, encode_query_value(email))
}

/// Drives a single registration attempt: validate, call the registrar once,
/// then show exactly one notification.
pub struct SignUpController<R, N, V> {
    registrar: R,
    notifier: N,
    navigator: V,
    submitting: AtomicBool,
}

impl<R, N, V> SignUpController<R, N, V>
where
    R: RestaurantRegistrar,
    N: Notifier,
    V: Navigator + Clone + 'static,
{
    pub fn new(registrar: R, notifier: N, navigator: V) -> Self {
        Self {
            registrar,
            notifier,
            navigator,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    #[instrument(skip_all)]
    pub async fn submit(&self, input: RegistrationRequest) -> SubmitOutcome {
        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            debug!("Registration already in flight, ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        };

        if let Err(errors) = validate_registration(&input) {
            info!("Registration form has invalid fields, nothing sent");
            return SubmitOutcome::Rejected(errors);
        }

        match self.registrar.register_restaurant(&input).await {
            Ok(()) => {
                info!("Restaurant registered");
                let navigator = self.navigator.clone();
                let path = sign_in_path(&input.email);
                let login = ToastAction::new(LOGIN_ACTION_LABEL, move || navigator.go_to(&path));
                self.notifier.success(SUCCESS_MESSAGE, Some(login));
                SubmitOutcome::Registered
            }
            Err(e) => {
                warn!(error = %e, "Restaurant registration failed");
                self.notifier.error(ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Holds the in-flight flag for the duration of one submission
struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
