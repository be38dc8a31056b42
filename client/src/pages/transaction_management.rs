//! Admin form for recording a transaction on behalf of a user.
//!
//! The charged amount is the selected item's price times the quantity; only
//! active catalog items are offered.

#[cfg(test)]
#[path = "transaction_management_test.rs"]
mod transaction_management_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::net::api;
use crate::net::types::{CatalogItem, UserAccount};
use crate::util::auth::{current_token, use_session};
use crate::util::format::money;
use crate::util::task::spawn;

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Leading integer of a quantity field; blank, zero or unparseable input reads as 1.
pub(crate) fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..].chars().take_while(char::is_ascii_digit).count();
    match raw[..sign_len + digits].parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn total_amount(price: f64, quantity: i64) -> f64 {
    price * quantity as f64
}

/// Check the form before submitting; the first missing piece wins.
pub(crate) fn validate(user_id: &str, catalog_id: &str, quantity: i64) -> Result<(), &'static str> {
    if user_id.is_empty() {
        return Err("Select a user.");
    }
    if catalog_id.is_empty() {
        return Err("Select a catalog item.");
    }
    if quantity <= 0 {
        return Err("Quantity must be greater than 0.");
    }
    Ok(())
}

pub(crate) fn active_only(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.into_iter().filter(|item| item.active).collect()
}

#[component]
pub fn TransactionManagementPage() -> impl IntoView {
    let session = use_session();
    let users = RwSignal::new(Vec::<UserAccount>::new());
    let items = RwSignal::new(Vec::<CatalogItem>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let selected_user = RwSignal::new(String::new());
    let selected_item = RwSignal::new(String::new());
    let quantity = RwSignal::new(1_i64);

    let token = current_token(session);
    spawn(async move {
        let (users_result, items_result) =
            futures::join!(api::fetch_users(token.as_deref()), api::fetch_catalog(token.as_deref()));
        match users_result.and_then(|u| items_result.map(|c| (u, c))) {
            Ok((user_list, catalog)) => {
                users.set(user_list);
                items.set(active_only(catalog));
            }
            Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch data.")))),
        }
        loading.set(false);
    });

    let unit_price = move || {
        let id = selected_item.get();
        items.with(|list| list.iter().find(|item| item.uuid == id).map_or(0.0, |item| item.price))
    };
    let total = move || total_amount(unit_price(), quantity.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let user_id = selected_user.get_untracked();
        let catalog_id = selected_item.get_untracked();
        if let Err(message) = validate(&user_id, &catalog_id, quantity.get_untracked()) {
            notice.set(Some(Notice::error(message)));
            return;
        }
        let amount = untrack(total);
        let user_name = users.with_untracked(|list| {
            list.iter().find(|u| u.uuid == user_id).map(|u| u.name.clone()).unwrap_or_default()
        });
        submitting.set(true);
        notice.set(None);
        let token = current_token(session);
        spawn(async move {
            match api::create_transaction(token.as_deref(), &catalog_id, amount, Some(&user_id)).await {
                Ok(()) => {
                    let text = format!("Created a transaction for {user_name}. Total: {}", money(amount));
                    flash(notice, Notice::success(text), NOTICE_TTL);
                    selected_user.set(String::new());
                    selected_item.set(String::new());
                    quantity.set(1);
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to create transaction.")))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="page page--transaction-management">
            <header class="page__header">
                <h1>"Transaction Management"</h1>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <form class="form-card" on:submit=on_submit>
                    <label class="form-card__field">
                        "User"
                        <select
                            prop:value=move || selected_user.get()
                            on:change=move |ev| selected_user.set(event_target_value(&ev))
                        >
                            <option value="">"Select a user"</option>
                            <For each=move || users.get() key=|u| u.uuid.clone() let:user>
                                <option value=user.uuid.clone()>
                                    {format!("{} ({}) - {}", user.name, user.account, user.email)}
                                </option>
                            </For>
                        </select>
                    </label>
                    <label class="form-card__field">
                        "Catalog item"
                        <select
                            prop:value=move || selected_item.get()
                            on:change=move |ev| selected_item.set(event_target_value(&ev))
                        >
                            <option value="">"Select an item"</option>
                            <For each=move || items.get() key=|item| item.uuid.clone() let:item>
                                <option value=item.uuid.clone()>
                                    {format!("{} - {}", item.name, money(item.price))}
                                </option>
                            </For>
                        </select>
                    </label>
                    <label class="form-card__field">
                        "Quantity"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| quantity.set(parse_quantity(&event_target_value(&ev)))
                        />
                    </label>
                    <Show when=move || !selected_item.with(String::is_empty)>
                        <p class="form-card__summary">
                            {move || format!("Unit price {} × {} = {}", money(unit_price()), quantity.get(), money(total()))}
                        </p>
                    </Show>
                    <div class="form-card__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Create Transaction" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
