//! Transaction table shared by the member and admin transaction pages.

#[cfg(test)]
#[path = "transaction_table_test.rs"]
mod transaction_table_test;

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::util::format::{AmountNote, date, datetime, money, paid_label, short_id};

/// Caption under the amount when it differs from the catalog price.
pub(crate) fn amount_caption(tx: &Transaction) -> Option<&'static str> {
    match (tx.amount, tx.catalog_price) {
        (Some(amount), Some(price)) => AmountNote::of(amount, price).label(),
        _ => None,
    }
}

/// `name (account)`, falling back to whichever half is present.
pub(crate) fn user_caption(tx: &Transaction) -> String {
    match (tx.user_name.as_deref(), tx.user_account.as_deref()) {
        (Some(name), Some(account)) => format!("{name} ({account})"),
        (Some(only), None) | (None, Some(only)) => only.to_owned(),
        (None, None) => tx.user_uuid.as_deref().map(short_id).unwrap_or_default(),
    }
}

fn optional_money(value: Option<f64>) -> String {
    value.map(money).unwrap_or_default()
}

#[component]
pub fn TransactionTable(
    #[prop(into)] rows: Signal<Vec<Transaction>>,
    #[prop(optional)] show_user: bool,
    #[prop(optional)] on_edit: Option<Callback<Transaction>>,
    #[prop(optional)] on_delete: Option<Callback<Transaction>>,
) -> impl IntoView {
    let has_actions = on_edit.is_some() || on_delete.is_some();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    {show_user.then(|| view! { <th>"User"</th> })}
                    <th>"Item"</th>
                    <th>"Price"</th>
                    <th class="data-table__num">"Amount"</th>
                    <th>"Due"</th>
                    <th>"Created"</th>
                    <th>"Status"</th>
                    {has_actions.then(|| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                <For each=move || rows.get() key=|tx| tx.uuid.clone() let:tx>
                    <tr>
                        <td class="data-table__mono">{short_id(&tx.uuid)}</td>
                        {show_user.then(|| view! { <td>{user_caption(&tx)}</td> })}
                        <td>
                            <div class="data-table__primary">{tx.catalog_name.clone().unwrap_or_default()}</div>
                            <div class="data-table__secondary">
                                {tx.catalog_description.clone().unwrap_or_default()}
                            </div>
                        </td>
                        <td>{optional_money(tx.catalog_price)}</td>
                        <td class="data-table__num">
                            <div class="data-table__primary">{optional_money(tx.amount)}</div>
                            {amount_caption(&tx).map(|note| view! { <div class="data-table__secondary">{note}</div> })}
                        </td>
                        <td>{date(tx.dateline.as_deref())}</td>
                        <td>{datetime(tx.created_at.as_deref())}</td>
                        <td>
                            <span class={if tx.is_paid { "chip chip--success" } else { "chip chip--warning" }}>
                                {paid_label(tx.is_paid)}
                            </span>
                        </td>
                        {has_actions
                            .then(|| {
                                let edit_tx = tx.clone();
                                let delete_tx = tx.clone();
                                view! {
                                    <td class="data-table__actions">
                                        {on_edit
                                            .map(|cb| {
                                                view! {
                                                    <button class="btn" on:click=move |_| cb.run(edit_tx.clone())>
                                                        "Edit"
                                                    </button>
                                                }
                                            })}
                                        {on_delete
                                            .map(|cb| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| cb.run(delete_tx.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                }
                            })}
                    </tr>
                </For>
            </tbody>
        </table>
    }
}
