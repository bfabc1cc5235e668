use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub input_type: InputType,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let class = if props.invalid {
        "input-field input-invalid"
    } else {
        "input-field"
    };

    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: "{class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            disabled: props.disabled,
            aria_invalid: props.invalid,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
