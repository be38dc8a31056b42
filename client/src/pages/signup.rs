//! Account registration.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::{Notice, NoticeBanner};
use crate::net::api;
use crate::net::types::{MessageResponse, SignUpRequest};
use crate::pages::login::UNKNOWN_ERROR;
use crate::util::guard::LOGIN_PATH;
use crate::util::task::{sleep, spawn};

/// Delay between a successful signup and the redirect to login.
pub(crate) const REDIRECT_DELAY: Duration = Duration::from_secs(2);
pub(crate) const NO_MESSAGE: &str = "Signup failed: No message received.";

/// Build the signup body, requiring every field. Account, name and email are trimmed.
pub(crate) fn build_request(account: &str, name: &str, email: &str, password: &str) -> Result<SignUpRequest, &'static str> {
    let (account, name, email) = (account.trim(), name.trim(), email.trim());
    if account.is_empty() || name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    Ok(SignUpRequest {
        account: account.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// The confirmation text, or the failure message when the backend sent none.
pub(crate) fn confirmation(response: MessageResponse) -> Result<String, &'static str> {
    response.message.filter(|m| !m.is_empty()).ok_or(NO_MESSAGE)
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let account = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        notice.set(None);
        let request = match build_request(
            &account.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                notice.set(Some(Notice::error(message)));
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        spawn(async move {
            match api::sign_up(&request).await.map(confirmation) {
                Ok(Ok(message)) => {
                    notice.set(Some(Notice::success(message)));
                    sleep(REDIRECT_DELAY).await;
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Ok(Err(message)) => notice.set(Some(Notice::error(message))),
                Err(e) => notice.set(Some(Notice::error(e.message_or(UNKNOWN_ERROR)))),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=label
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign Up"</h1>
                <NoticeBanner slot=notice/>
                <form class="login-form" on:submit=on_submit>
                    {field("Account", "text", "username", account)}
                    {field("Name", "text", "name", name)}
                    {field("Email Address", "email", "email", email)}
                    {field("Password", "password", "new-password", password)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="login-card__footer">
                    <a href="/login">"Already have an account? Sign In"</a>
                </p>
            </div>
        </div>
    }
}
