use dioxus::prelude::*;
use ui::SignUp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::SignUp {})]
    #[route("/sign-up")]
    SignUp {},
    #[route("/sign-in?:email")]
    SignIn { email: String },
}

/// Landing view for the "Login" action of the sign-up toast; shows the
/// submitted email pre-filled.
#[component]
fn SignIn(email: String) -> Element {
    let mut email_value = use_signal(|| email.clone());

    rsx! {
        document::Title { "Login" }

        div {
            class: "auth-page",

            Link {
                class: "header-link",
                to: Route::SignUp {},
                "Novo estabelecimento"
            }

            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h1 {
                        class: "form-title",
                        "Acessar painel"
                    }
                    p {
                        class: "form-subtitle",
                        "Acompanhe suas vendas pelo painel do parceiro!"
                    }
                }
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "email",
                        "Seu e-mail"
                    }
                    input {
                        id: "email",
                        class: "input-field",
                        r#type: "email",
                        value: "{email_value}",
                        oninput: move |event| email_value.set(event.value())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sign_in_route_keeps_submitted_email() {
        let route = Route::from_str("/sign-in?email=ana@test.com").unwrap();
        assert_eq!(
            route,
            Route::SignIn {
                email: "ana@test.com".to_string()
            }
        );
    }

    #[test]
    fn test_sign_in_route_decodes_escaped_plus() {
        let route = Route::from_str("/sign-in?email=ana%2Bpizza@test.com").unwrap();
        assert_eq!(
            route,
            Route::SignIn {
                email: "ana+pizza@test.com".to_string()
            }
        );
    }
}
