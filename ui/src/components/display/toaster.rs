use dioxus::prelude::*;

use crate::services::notifications::{Toast, ToastQueue};

#[derive(Props, PartialEq, Clone)]
pub struct ToasterProps {
    pub queue: ToastQueue,
}

/// Renders the queue's toasts stacked in a corner of the page
#[component]
pub fn Toaster(props: ToasterProps) -> Element {
    let queue = props.queue;

    rsx! {
        div {
            class: "toaster",
            aria_live: "polite",
            for toast in queue.toasts() {
                ToastCard {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    queue: queue
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ToastCardProps {
    pub toast: Toast,
    pub queue: ToastQueue,
}

#[component]
pub fn ToastCard(props: ToastCardProps) -> Element {
    let id = props.toast.id;
    let queue = props.queue;
    let class = props.toast.kind.css_class();
    let action_label = props.toast.action.as_ref().map(|action| action.label.clone());

    rsx! {
        div {
            class: "{class}",
            role: "status",
            span {
                class: "toast-message",
                "{props.toast.message}"
            }
            if let Some(label) = action_label {
                button {
                    class: "toast-action",
                    r#type: "button",
                    onclick: move |_| queue.activate(id),
                    "{label}"
                }
            }
            button {
                class: "toast-close",
                r#type: "button",
                aria_label: "Fechar",
                onclick: move |_| queue.dismiss(id),
                "×"
            }
        }
    }
}
