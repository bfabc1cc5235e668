use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Inline validation message rendered under a form field
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "validation-feedback invalid",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
