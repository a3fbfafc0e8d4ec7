//! Transient Notices
//!
//! Toast queue shared through context. Every user action reports its
//! outcome here; the `Toasts` component renders and expires them.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Error => "toast toast-error",
            NoticeKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u32>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Queue a notice and return its id
    pub fn push(&self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> u32 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                title: title.into(),
                message: message.into(),
            })
        });
        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> u32 {
        self.push(NoticeKind::Success, title, message)
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u32 {
        self.push(NoticeKind::Error, title, message)
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> u32 {
        self.push(NoticeKind::Info, title, message)
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    /// Reactive snapshot of the queue
    pub fn list(&self) -> Vec<Notice> {
        self.items.get()
    }

    pub fn last(&self) -> Option<Notice> {
        self.items.with_untracked(|items| items.last().cloned())
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let owner = Owner::new();
        owner.set();

        let notices = Notices::new();
        let first = notices.success("Following", "You started following Cafe");
        let second = notices.error("Error", "Failed");
        assert_ne!(first, second);
        assert_eq!(notices.list().len(), 2);

        notices.dismiss(first);
        let remaining = notices.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, NoticeKind::Error);
        assert_eq!(notices.last().map(|n| n.title), Some("Error".to_string()));
    }
}
