use dioxus::prelude::*;

use crate::components::input::{FieldError, InputType, ValidatedInput};
use crate::features::sign_up::{SignUpAction, SignUpForm, SignUpState};

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormComponentProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
    pub on_submit: EventHandler<SignUpForm>,
}

#[component]
pub fn SignUpFormComponent(props: SignUpFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let current = state();

    rsx! {
        form {
            class: "sign-up-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                if !state().is_submitting {
                    on_submit.call(state().form.clone());
                }
            },

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "restaurantName",
                    "Nome do estabelecimento"
                }
                ValidatedInput {
                    id: "restaurantName".to_string(),
                    value: current.form.restaurant_name.clone(),
                    input_type: InputType::Text,
                    invalid: current.errors.restaurant_name.is_some(),
                    disabled: current.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetRestaurantName(value));
                    }
                }
                FieldError { message: current.errors.restaurant_name.clone() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "managerName",
                    "Seu nome"
                }
                ValidatedInput {
                    id: "managerName".to_string(),
                    value: current.form.manager_name.clone(),
                    input_type: InputType::Text,
                    invalid: current.errors.manager_name.is_some(),
                    disabled: current.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetManagerName(value));
                    }
                }
                FieldError { message: current.errors.manager_name.clone() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "email",
                    "Seu e-mail"
                }
                ValidatedInput {
                    id: "email".to_string(),
                    value: current.form.email.clone(),
                    input_type: InputType::Email,
                    invalid: current.errors.email.is_some(),
                    disabled: current.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetEmail(value));
                    }
                }
                FieldError { message: current.errors.email.clone() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "phone",
                    "Seu celular"
                }
                ValidatedInput {
                    id: "phone".to_string(),
                    value: current.form.phone.clone(),
                    input_type: InputType::Tel,
                    invalid: current.errors.phone.is_some(),
                    disabled: current.is_submitting,
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetPhone(value));
                    }
                }
                FieldError { message: current.errors.phone.clone() }
            }

            button {
                class: "submit-button",
                r#type: "submit",
                disabled: current.is_submitting,
                if current.is_submitting {
                    "Cadastrando..."
                } else {
                    "Finalizar cadastro"
                }
            }

            p {
                class: "terms-notice",
                "Ao continuar, você concorda com os nossos "
                a { class: "terms-link", href: "#", "termos de serviço" }
                " e "
                a { class: "terms-link", href: "#", "políticas de privacidade" }
                "."
            }
        }
    }
}
