//! Login page: validated email/password form against `POST /login`.

use dioxus::prelude::*;
use serde_json::json;

use api::{endpoints, validation, ApiConfig, LoginResponse, RequestOverrides};
use ui::{use_document_title, use_request, use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut validation_errors = use_signal(Vec::<String>::new);

    let login = use_request::<LoginResponse>(|| endpoints::login(&ApiConfig::default(), "", ""));

    use_document_title("Level-UP | Login");

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        let errors = validation::validate_login(&email_value, &password_value);
        if !errors.is_empty() {
            validation_errors.set(errors);
            return;
        }
        validation_errors.set(Vec::new());

        spawn(async move {
            let overrides = RequestOverrides::new()
                .body(json!({ "email": email_value, "password": password_value }));
            if let Ok(response) = login.send_with(overrides).await {
                store::session_store().set_token(&response.access_token);
                session.set(SessionState {
                    user_id: Some(response.user_id),
                });
                nav.push(Route::Dashboard {});
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div { class: "card auth-card",
                h2 { "Login" }
                form {
                    onsubmit: handle_submit,
                    input {
                        class: "form-control",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        class: "form-control",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: login.loading(),
                        if login.loading() { "Logging in..." } else { "Login" }
                    }
                }
                p {
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "SignUp" }
                }
                if !validation_errors().is_empty() {
                    div { class: "alert alert-danger",
                        ul {
                            for message in validation_errors() {
                                li { "{message}" }
                            }
                        }
                    }
                }
                if let Some(err) = login.error() {
                    div { class: "alert alert-danger", "{err}" }
                }
            }
        }
    }
}
