//! Admin table of user accounts with edit and delete.

#[cfg(test)]
#[path = "user_management_test.rs"]
mod user_management_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::net::api;
use crate::net::types::{MessageResponse, UserAccount, UserUpdate};
use crate::util::auth::{current_token, use_session};
use crate::util::format::date;
use crate::util::task::spawn;

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Update body from the edit dialog; a blank password leaves it unchanged.
pub(crate) fn build_update(name: &str, email: &str, password: &str) -> UserUpdate {
    UserUpdate {
        name: name.to_owned(),
        email: email.to_owned(),
        password: Some(password).filter(|p| !p.trim().is_empty()).map(str::to_owned),
    }
}

/// Notice text after a delete: the server's message when it sent one.
pub(crate) fn deleted_message(response: &MessageResponse) -> String {
    response
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "User deleted.".to_owned())
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let session = use_session();
    let users = RwSignal::new(Vec::<UserAccount>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let editing = RwSignal::new(None::<UserAccount>);
    let form_name = RwSignal::new(String::new());
    let form_email = RwSignal::new(String::new());
    let form_password = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<UserAccount>);

    let reload = move || {
        let token = current_token(session);
        spawn(async move {
            match api::fetch_users(token.as_deref()).await {
                Ok(list) => users.set(list),
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch users.")))),
            }
            loading.set(false);
        });
    };
    reload();

    let open_editor = move |user: UserAccount| {
        form_name.set(user.name.clone());
        form_email.set(user.email.clone());
        form_password.set(String::new());
        editing.set(Some(user));
    };
    let close_editor = move || {
        editing.set(None);
        form_password.set(String::new());
    };

    let on_save = move |_| {
        let Some(user) = editing.get_untracked() else {
            return;
        };
        let update = build_update(
            &form_name.get_untracked(),
            &form_email.get_untracked(),
            &form_password.get_untracked(),
        );
        let token = current_token(session);
        spawn(async move {
            match api::update_user(token.as_deref(), &user.uuid, &update).await {
                Ok(()) => {
                    close_editor();
                    reload();
                    flash(notice, Notice::success("User updated."), NOTICE_TTL);
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to update user.")))),
            }
        });
    };

    let on_delete_confirm = Callback::new(move |()| {
        let Some(user) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let token = current_token(session);
        spawn(async move {
            match api::delete_user(token.as_deref(), &user.uuid).await {
                Ok(response) => {
                    reload();
                    flash(notice, Notice::success(deleted_message(&response)), NOTICE_TTL);
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to delete user.")))),
            }
        });
    });
    let on_delete_cancel = Callback::new(move |()| deleting.set(None));

    view! {
        <div class="page page--users">
            <header class="page__header">
                <h1>"Users"</h1>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !users.with(Vec::is_empty)
                    fallback=|| view! { <p class="page-status">"No users found."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Account"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || users.get() key=|u| u.uuid.clone() let:user>
                                {
                                    let edit_user = user.clone();
                                    let delete_user = user.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__mono">{user.account.clone()}</td>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <span class={if user.active { "chip chip--success" } else { "chip" }}>
                                                    {if user.active { "Active" } else { "Disabled" }}
                                                </span>
                                            </td>
                                            <td>{date(user.created_at.as_deref())}</td>
                                            <td class="data-table__actions">
                                                <button class="btn" on:click=move |_| open_editor(edit_user.clone())>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| deleting.set(Some(delete_user.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || editing.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| close_editor()>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || {
                                editing.with(|u| u.as_ref().map(|u| format!("Edit {}", u.account)).unwrap_or_default())
                            }}
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
                            "Email"
                            <input
                                type="email"
                                prop:value=move || form_email.get()
                                on:input=move |ev| form_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__field">
                            "New password"
                            <input
                                type="password"
                                placeholder="Leave blank to keep the current password"
                                autocomplete="new-password"
                                prop:value=move || form_password.get()
                                on:input=move |ev| form_password.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close_editor()>"Cancel"</button>
                            <button class="btn btn--primary" on:click=on_save>"Save"</button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                deleting
                    .get()
                    .map(|user| {
                        view! {
                            <ConfirmDialog
                                title="Delete user"
                                message=format!("Are you sure you want to delete user \"{}\"?", user.account)
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
