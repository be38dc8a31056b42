//! Account + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::{Notice, NoticeBanner};
use crate::net::api;
use crate::net::types::SignInResponse;
use crate::util::auth::{sign_in, use_session};
use crate::util::guard::LANDING_PATH;
use crate::util::task::spawn;

pub(crate) const NO_TOKEN_MESSAGE: &str = "Login failed: No token received.";
pub(crate) const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Trim the account and require both fields.
pub(crate) fn validate_credentials(account: &str, password: &str) -> Result<(String, String), &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() {
        return Err("Enter both account and password.");
    }
    Ok((account.to_owned(), password.to_owned()))
}

/// The issued token, or the message to show when the backend sent none.
pub(crate) fn issued_token(response: SignInResponse) -> Result<String, &'static str> {
    response.token.filter(|token| !token.is_empty()).ok_or(NO_TOKEN_MESSAGE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        notice.set(None);
        let (account_value, password_value) =
            match validate_credentials(&account.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(message) => {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
            };
        busy.set(true);
        let navigate = navigate.clone();
        spawn(async move {
            match api::sign_in(&account_value, &password_value).await.map(issued_token) {
                Ok(Ok(token)) => {
                    sign_in(session, &token);
                    navigate(LANDING_PATH, NavigateOptions::default());
                }
                Ok(Err(message)) => notice.set(Some(Notice::error(message))),
                Err(e) => notice.set(Some(Notice::error(e.message_or(UNKNOWN_ERROR)))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <NoticeBanner slot=notice/>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Account"
                        autocomplete="username"
                        prop:value=move || account.get()
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <p class="login-card__footer">
                    <a href="/signup">"Don't have an account? Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
