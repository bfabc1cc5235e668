use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::Toaster;
use crate::components::forms::SignUpFormComponent;
use crate::features::sign_up::{
    Notifier, SignUpAction, SignUpController, SignUpForm, SignUpState, SubmitOutcome,
    ERROR_MESSAGE, SIGN_IN_ROUTE,
};
use crate::services::client::RegistrationClient;
use crate::services::config::get_global_config;
use crate::services::navigation::{use_router_navigator, RouterNavigator};
use crate::services::notifications::{use_toast_queue, ToastQueue};
use crate::{console_error, console_info};

type PageController = SignUpController<RegistrationClient, ToastQueue, RouterNavigator>;

/// Restaurant sign-up page. Must be rendered inside a `Router`.
#[component]
pub fn SignUp() -> Element {
    let config = use_hook(get_global_config);
    let mut state = use_signal(SignUpState::default);
    let toasts = use_toast_queue(config.notifications.toast_duration_ms);
    let navigator = use_router_navigator();

    let controller: Option<Rc<PageController>> = use_hook(|| {
        match RegistrationClient::new(&config.api) {
            Ok(client) => {
                console_info!("[SignUp] Registering against {}", client.endpoint());
                Some(Rc::new(SignUpController::new(client, toasts, navigator)))
            }
            Err(e) => {
                console_error!("[SignUp] Registration client unavailable: {}", e);
                None
            }
        }
    });

    // In-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_submit = move |form: SignUpForm| {
        let Some(controller) = controller.clone() else {
            toasts.error(ERROR_MESSAGE);
            return;
        };

        dispatch.call(SignUpAction::SetSubmitting(true));
        spawn(async move {
            if let SubmitOutcome::Rejected(errors) = controller.submit(form.to_request()).await {
                dispatch.call(SignUpAction::SetErrors(errors));
            }
            dispatch.call(SignUpAction::SetSubmitting(false));
        });
    };

    rsx! {
        document::Title { "Cadastro" }

        div {
            class: "auth-page",

            Link {
                class: "header-link",
                to: SIGN_IN_ROUTE,
                "Fazer login"
            }

            div {
                class: "auth-card",

                div {
                    class: "auth-heading",
                    h1 {
                        class: "form-title",
                        "Criar conta grátis"
                    }
                    p {
                        class: "form-subtitle",
                        "Seja um parceiro e comece suas vendas!"
                    }
                }

                SignUpFormComponent {
                    state: state,
                    dispatch: dispatch,
                    on_submit: on_submit
                }
            }
        }

        Toaster { queue: toasts }
    }
}
