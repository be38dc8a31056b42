//! Navigation chrome around authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{sign_out, use_session};
use crate::util::guard::LOGIN_PATH;

/// Admin-only navigation entries as `(href, label)`.
const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/transactions", "All Transactions"),
    ("/admin/transaction-management", "Transaction Management"),
    ("/admin/users", "Users"),
    ("/admin/permissions", "Permissions"),
];

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let is_authenticated = move || session.with(|state| state.session.is_authenticated());
    let is_super_admin = move || session.with(|state| state.session.is_super_admin());

    let on_logout = move |_| {
        sign_out(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <header class="layout__nav toolbar">
                <a class="toolbar__brand" href="/">"MiniBill"</a>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <a class="toolbar__link" href="/">"Home"</a>
                <Show when=is_authenticated>
                    <a class="toolbar__link" href="/my-transactions">"My Transactions"</a>
                </Show>
                <Show when=is_super_admin>
                    {ADMIN_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a class="toolbar__link" href=*href>{*label}</a> })
                        .collect_view()}
                </Show>
                <span class="toolbar__spacer"></span>
                <Show when=is_authenticated>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </Show>
            </header>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
