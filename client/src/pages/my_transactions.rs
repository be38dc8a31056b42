//! The signed-in user's own transactions.

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};
use crate::components::transaction_table::TransactionTable;
use crate::net::api;
use crate::net::types::Transaction;
use crate::util::auth::{current_token, use_session};
use crate::util::task::spawn;

#[component]
pub fn MyTransactionsPage() -> impl IntoView {
    let session = use_session();
    let rows = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let token = current_token(session);
    spawn(async move {
        match api::fetch_my_transactions(token.as_deref()).await {
            Ok(list) => rows.set(list),
            Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch transactions.")))),
        }
        loading.set(false);
    });

    view! {
        <div class="page page--transactions">
            <header class="page__header">
                <h1>"My Transactions"</h1>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=|| view! { <p class="page-status">"No transactions yet."</p> }
                >
                    <TransactionTable rows=rows/>
                </Show>
            </Show>
        </div>
    }
}
