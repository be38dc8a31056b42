//! Admin assignment of permission tiers to users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users come from the joined `users/permissions/all` listing. When that call
//! fails the page falls back to the plain user list with nothing assigned, so
//! tiers can still be granted. Each select change maps to at most one of
//! assign, update or remove, followed by a re-fetch.

#[cfg(test)]
#[path = "permission_management_test.rs"]
mod permission_management_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Permission, UserPermission};
use crate::state::session::{ADMIN_LEVEL, tier_class, tier_label};
use crate::util::auth::{current_token, use_session};
use crate::util::task::spawn;

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// What a select change asks the backend to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PermissionChange {
    None,
    Assign(String),
    Update(String),
    Remove,
}

impl PermissionChange {
    pub(crate) fn success_text(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Assign(_) => Some("Permission assigned."),
            Self::Update(_) => Some("Permission updated."),
            Self::Remove => Some("Permission removed."),
        }
    }
}

/// Map the user's current assignment and the newly selected permission id
/// (empty for "remove") to a single backend call.
pub(crate) fn plan_change(current: Option<&str>, selected: &str) -> PermissionChange {
    let assigned = current.is_some_and(|id| !id.is_empty());
    match (selected.is_empty(), assigned) {
        (true, true) => PermissionChange::Remove,
        (true, false) => PermissionChange::None,
        (false, true) if current == Some(selected) => PermissionChange::None,
        (false, true) => PermissionChange::Update(selected.to_owned()),
        (false, false) => PermissionChange::Assign(selected.to_owned()),
    }
}

/// Level shown in the chip; level 0 reads as no permission.
pub(crate) fn shown_level(entry: &UserPermission) -> Option<u32> {
    entry.permission_level.filter(|level| *level != 0)
}

pub(crate) fn option_label(permission: &Permission) -> String {
    let level = permission.permission_level;
    if level >= ADMIN_LEVEL {
        format!("Level {level} ({})", tier_label(Some(level)))
    } else {
        format!("Level {level}")
    }
}

async fn load_entries(token: Option<&str>) -> Result<Vec<UserPermission>, ApiError> {
    match api::fetch_users_with_permissions(token).await {
        Ok(entries) => Ok(entries),
        Err(e) => {
            log::warn!("user permission listing failed, using plain users: {e}");
            let users = api::fetch_users(token).await?;
            Ok(users.iter().map(UserPermission::unassigned).collect())
        }
    }
}

async fn apply(token: Option<&str>, user_id: &str, change: &PermissionChange) -> Result<(), ApiError> {
    match change {
        PermissionChange::None => Ok(()),
        PermissionChange::Assign(permission_id) => api::assign_user_permission(token, user_id, permission_id).await,
        PermissionChange::Update(permission_id) => api::update_user_permission(token, user_id, permission_id).await,
        PermissionChange::Remove => api::remove_user_permission(token, user_id).await,
    }
}

#[component]
pub fn PermissionManagementPage() -> impl IntoView {
    let session = use_session();
    let permissions = RwSignal::new(Vec::<Permission>::new());
    let entries = RwSignal::new(Vec::<UserPermission>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let reload = move || {
        let token = current_token(session);
        spawn(async move {
            let result = match api::fetch_permissions(token.as_deref()).await {
                Ok(list) => {
                    permissions.set(list);
                    load_entries(token.as_deref()).await
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => entries.set(list),
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to fetch data.")))),
            }
            loading.set(false);
        });
    };
    reload();

    let on_select = move |user_id: String, selected: String| {
        let current = entries.with_untracked(|list| {
            list.iter().find(|entry| entry.user_uuid == user_id).and_then(|entry| entry.permission_id.clone())
        });
        let change = plan_change(current.as_deref(), &selected);
        if change == PermissionChange::None {
            return;
        }
        let token = current_token(session);
        spawn(async move {
            match apply(token.as_deref(), &user_id, &change).await {
                Ok(()) => {
                    if let Some(text) = change.success_text() {
                        flash(notice, Notice::success(text), NOTICE_TTL);
                    }
                    reload();
                }
                Err(e) => notice.set(Some(Notice::error(e.message_or("Failed to update permission.")))),
            }
        });
    };

    view! {
        <div class="page page--permissions">
            <header class="page__header">
                <h1>"Permissions"</h1>
            </header>
            <NoticeBanner slot=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !entries.with(Vec::is_empty)
                    fallback=|| view! { <p class="page-status">"No users found."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Account"</th>
                                <th>"Email"</th>
                                <th>"Current"</th>
                                <th>"Assign"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || entries.get()
                                key=|entry| (entry.user_uuid.clone(), entry.permission_id.clone())
                                let:entry
                            >
                                {
                                    let level = shown_level(&entry);
                                    let user_id = entry.user_uuid.clone();
                                    let selected = entry.permission_id.clone().unwrap_or_default();
                                    let none_selected = selected.is_empty();
                                    view! {
                                        <tr>
                                            <td>{entry.name.clone()}</td>
                                            <td class="data-table__mono">{entry.account.clone()}</td>
                                            <td>{entry.email.clone()}</td>
                                            <td>
                                                <span class=tier_class(level)>{tier_label(level)}</span>
                                            </td>
                                            <td>
                                                <select on:change=move |ev| on_select(user_id.clone(), event_target_value(&ev))>
                                                    <option value="" selected=none_selected>
                                                        "Remove permission"
                                                    </option>
                                                    {move || {
                                                        permissions
                                                            .get()
                                                            .into_iter()
                                                            .map(|p| {
                                                                let label = option_label(&p);
                                                                let is_current = p.uuid == selected;
                                                                view! {
                                                                    <option value=p.uuid selected=is_current>
                                                                        {label}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
