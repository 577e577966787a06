//! Non-blocking user messages shown in a banner above the panels.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Holds the notice currently on screen; a new one replaces the old
#[derive(Clone, Copy)]
pub struct NoticeService {
    pub current: RwSignal<Option<Notice>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.current.set(Some(Notice::info(message)));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.current.set(Some(Notice::error(message)));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notice() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found in context")
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = use_notice();

    view! {
        {move || notices.current.get().map(|notice| view! {
            <div class=notice.css_class() role="alert">
                <span class="notice__text">{notice.message.clone()}</span>
                <button class="button button--icon" on:click=move |_| notices.dismiss()>
                    "×"
                </button>
            </div>
        })}
    }
}
