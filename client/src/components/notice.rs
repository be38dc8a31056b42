//! Inline success/error banners shown above page content.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::util::task::{sleep, spawn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the user plus its severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Show `notice` now and clear it after `after`, unless something newer
/// replaced it in the meantime.
pub fn flash(slot: RwSignal<Option<Notice>>, notice: Notice, after: Duration) {
    slot.set(Some(notice.clone()));
    spawn(async move {
        sleep(after).await;
        if slot.get_untracked().as_ref() == Some(&notice) {
            slot.set(None);
        }
    });
}

/// Renders the notice in `slot`, if any.
#[component]
pub fn NoticeBanner(slot: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        slot.get().map(|notice| {
            let class = notice.class();
            view! {
                <div class=class role="alert">
                    <span>{notice.text}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| slot.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
