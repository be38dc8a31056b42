//! Catalog listing with admin create/edit/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing page for every signed-in user. Edit controls render only for
//! super administrators; the backend enforces the same rule. Every mutation
//! is followed by a full re-fetch.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice::{Notice, NoticeBanner};
use crate::net::api;
use crate::net::types::{CatalogForm, CatalogItem};
use crate::util::auth::{current_token, use_session};
use crate::util::format::money;
use crate::util::task::spawn;

/// Which item the editor dialog is working on.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Editor {
    Closed,
    Create,
    Edit(String),
}

/// Validate editor input into a request body.
pub(crate) fn parse_form(name: &str, description: &str, price: &str, active: bool) -> Result<CatalogForm, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    let price = price.trim().parse::<f64>().map_err(|_| "Price must be a number.")?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be zero or more.");
    }
    Ok(CatalogForm { name: name.to_owned(), description: description.trim().to_owned(), price, active })
}

pub(crate) fn status_label(active: bool) -> &'static str {
    if active { "Available" } else { "Unavailable" }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    let is_admin = move || session.with(|state| state.session.is_super_admin());

    let items = RwSignal::new(Vec::<CatalogItem>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let editor = RwSignal::new(Editor::Closed);
    let form_name = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_price = RwSignal::new(String::from("0"));
    let form_active = RwSignal::new(true);
    let delete_target = RwSignal::new(None::<CatalogItem>);

    let reload = move || {
        let token = current_token(session);
        spawn(async move {
            match api::fetch_catalog(token.as_deref()).await {
                Ok(list) => items.set(list),
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch catalog.")))),
            }
            loading.set(false);
        });
    };
    reload();

    let open_editor = move |item: Option<CatalogItem>| {
        let form = item.as_ref().map(CatalogForm::from).unwrap_or_default();
        form_name.set(form.name);
        form_description.set(form.description);
        form_price.set(form.price.to_string());
        form_active.set(form.active);
        editor.set(item.map_or(Editor::Create, |item| Editor::Edit(item.uuid)));
    };
    let close_editor = move || editor.set(Editor::Closed);

    let on_save = move |_| {
        let form = match parse_form(
            &form_name.get_untracked(),
            &form_description.get_untracked(),
            &form_price.get_untracked(),
            form_active.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                notice.set(Some(Notice::error(message)));
                return;
            }
        };
        let target = editor.get_untracked();
        let token = current_token(session);
        spawn(async move {
            let result = match &target {
                Editor::Edit(id) => api::update_catalog(token.as_deref(), id, &form).await,
                _ => api::create_catalog(token.as_deref(), &form).await,
            };
            match result {
                Ok(()) => {
                    notice.set(None);
                    close_editor();
                    reload();
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to save catalog item.")))),
            }
        });
    };

    let on_delete_confirm = Callback::new(move |()| {
        let Some(item) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        let token = current_token(session);
        spawn(async move {
            match api::delete_catalog(token.as_deref(), &item.uuid).await {
                Ok(()) => reload(),
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to delete catalog item.")))),
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <div class="page page--catalog">
            <header class="page__header">
                <h1>"Catalog"</h1>
                <Show when=is_admin>
                    <button class="btn btn--primary" on:click=move |_| open_editor(None)>
                        "+ New Item"
                    </button>
                </Show>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| view! { <p class="page-status">"No catalog items yet."</p> }
                >
                    <div class="catalog-grid">
                        <For each=move || items.get() key=|item| item.uuid.clone() let:item>
                            {
                                let edit_item = item.clone();
                                let delete_item = item.clone();
                                view! {
                                    <article class="catalog-card">
                                        <header class="catalog-card__header">
                                            <h2>{item.name.clone()}</h2>
                                            <span class={if item.active { "chip chip--success" } else { "chip" }}>
                                                {status_label(item.active)}
                                            </span>
                                        </header>
                                        <p class="catalog-card__description">{item.description.clone()}</p>
                                        <p class="catalog-card__price">{money(item.price)}</p>
                                        <Show when=is_admin>
                                            <div class="catalog-card__actions">
                                                <button
                                                    class="btn"
                                                    on:click={
                                                        let edit_item = edit_item.clone();
                                                        move |_| open_editor(Some(edit_item.clone()))
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click={
                                                        let delete_item = delete_item.clone();
                                                        move |_| delete_target.set(Some(delete_item.clone()))
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </Show>
                                    </article>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </Show>

            <Show when=move || editor.get() != Editor::Closed>
                <div class="dialog-backdrop" on:click=move |_| close_editor()>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || if matches!(editor.get(), Editor::Edit(_)) { "Edit Item" } else { "New Item" }}
                        </h2>
                        <label class="dialog__field">
                            "Name"
                            <input
                                type="text"
                                prop:value=move || form_name.get()
                                on:input=move |ev| form_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__field">
                            "Description"
                            <textarea
                                rows="3"
                                prop:value=move || form_description.get()
                                on:input=move |ev| form_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="dialog__field">
                            "Price"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form_price.get()
                                on:input=move |ev| form_price.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__field dialog__field--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || form_active.get()
                                on:change=move |ev| form_active.set(event_target_checked(&ev))
                            />
                            "Available"
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close_editor()>"Cancel"</button>
                            <button class="btn btn--primary" on:click=on_save>
                                {move || if matches!(editor.get(), Editor::Edit(_)) { "Save" } else { "Create" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                delete_target
                    .get()
                    .map(|item| {
                        view! {
                            <ConfirmDialog
                                title="Delete item"
                                message=format!("Are you sure you want to delete \"{}\"?", item.name)
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
