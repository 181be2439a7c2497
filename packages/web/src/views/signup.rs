//! Signup page: validated account creation against `POST /users`.

use dioxus::prelude::*;
use serde_json::{json, Value};

use api::{endpoints, validation, ApiConfig, RequestOverrides};
use ui::{use_document_title, use_request};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut validation_errors = use_signal(Vec::<String>::new);

    let signup = use_request::<Value>(|| endpoints::signup(&ApiConfig::default(), "", "", ""));

    use_document_title("Level-UP | SignUp");

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let username_value = username.peek().clone();
        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        let errors = validation::validate_signup(&username_value, &email_value, &password_value);
        if !errors.is_empty() {
            validation_errors.set(errors);
            return;
        }
        validation_errors.set(Vec::new());

        spawn(async move {
            let overrides = RequestOverrides::new().body(json!({
                "username": username_value,
                "email": email_value,
                "password": password_value,
            }));
            if signup.send_with(overrides).await.is_ok() {
                nav.push(Route::Login {});
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div { class: "card auth-card",
                h2 { "Sign Up" }
                form {
                    onsubmit: handle_submit,
                    input {
                        class: "form-control",
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
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
                        disabled: signup.loading(),
                        if signup.loading() { "Signing up..." } else { "Sign Up" }
                    }
                }
                p {
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
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
                if let Some(err) = signup.error() {
                    div { class: "alert alert-danger", "{err}" }
                }
            }
        }
    }
}
