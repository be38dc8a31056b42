//! Admin view of every transaction, with paid-status edits and deletion.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::components::transaction_table::TransactionTable;
use crate::net::api::{self, TransactionPatch};
use crate::net::types::Transaction;
use crate::util::auth::{current_token, use_session};
use crate::util::format::short_id;
use crate::util::task::spawn;

const NOTICE_TTL: Duration = Duration::from_secs(3);

#[component]
pub fn AllTransactionsPage() -> impl IntoView {
    let session = use_session();
    let rows = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let editing = RwSignal::new(None::<Transaction>);
    let edit_paid = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Transaction>);

    let reload = move || {
        let token = current_token(session);
        spawn(async move {
            match api::fetch_all_transactions(token.as_deref()).await {
                Ok(list) => rows.set(list),
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch all transactions.")))),
            }
            loading.set(false);
        });
    };
    reload();

    let on_edit = Callback::new(move |tx: Transaction| {
        edit_paid.set(tx.is_paid);
        editing.set(Some(tx));
    });
    let on_delete = Callback::new(move |tx: Transaction| deleting.set(Some(tx)));

    let on_edit_confirm = move |_| {
        let Some(tx) = editing.get_untracked() else {
            return;
        };
        editing.set(None);
        let patch = TransactionPatch { is_paid: Some(edit_paid.get_untracked()), ..TransactionPatch::default() };
        let token = current_token(session);
        spawn(async move {
            match api::update_transaction(token.as_deref(), &tx.uuid, &patch).await {
                Ok(()) => {
                    flash(notice, Notice::success("Transaction updated."), NOTICE_TTL);
                    reload();
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Update failed.")))),
            }
        });
    };

    let on_delete_confirm = Callback::new(move |()| {
        let Some(tx) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let token = current_token(session);
        spawn(async move {
            match api::delete_transaction(token.as_deref(), &tx.uuid).await {
                Ok(()) => {
                    flash(notice, Notice::success("Transaction deleted."), NOTICE_TTL);
                    reload();
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Delete failed.")))),
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| deleting.set(None));

    view! {
        <div class="page page--transactions">
            <header class="page__header">
                <h1>"All Transactions"</h1>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=|| view! { <p class="page-status">"No transactions yet."</p> }
                >
                    <TransactionTable rows=rows show_user=true on_edit=on_edit on_delete=on_delete/>
                </Show>
            </Show>

            {move || {
                editing
                    .get()
                    .map(|tx| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>"Edit Transaction"</h2>
                                    <p class="dialog__meta">
                                        {format!(
                                            "{} · {}",
                                            short_id(&tx.uuid),
                                            tx.catalog_name.clone().unwrap_or_default(),
                                        )}
                                    </p>
                                    <label class="dialog__field dialog__field--inline">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || edit_paid.get()
                                            on:change=move |ev| edit_paid.set(event_target_checked(&ev))
                                        />
                                        "Paid"
                                    </label>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                                        <button class="btn btn--primary" on:click=on_edit_confirm>"Save"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                deleting
                    .get()
                    .map(|tx| {
                        view! {
                            <ConfirmDialog
                                title="Delete transaction"
                                message=format!(
                                    "Delete transaction {}? This cannot be undone.",
                                    short_id(&tx.uuid),
                                )
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
