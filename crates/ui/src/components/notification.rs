use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use progress_core::NotificationStyle;
use services::{CompletionNotice, notify};

/// A completion notice currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: CompletionNotice,
}

/// Stack of visible completion toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifications {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifications {
    /// Show a toast and schedule its removal once the notice expires.
    pub fn push(mut self, notice: CompletionNotice) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);

        let ttl = notice.expires_after;
        self.toasts.write().push(Toast { id, notice });

        // Root-owned: the caller's scope may unmount before the notice expires.
        spawn_forever(async move {
            tokio::time::sleep(ttl).await;
            self.dismiss(id);
        });
        id
    }

    /// Remove a toast. Unknown ids, or a host that is already gone, are ignored.
    pub fn dismiss(mut self, id: u64) {
        if let Ok(mut toasts) = self.toasts.try_write() {
            toasts.retain(|toast| toast.id != id);
        }
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

pub fn use_notifications_provider() -> Notifications {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| Notifications { toasts, next_id })
}

/// Announce a completion in the configured style.
pub fn announce(style: NotificationStyle, notice: CompletionNotice, notifications: Notifications) {
    if let Some(notice) = notify(style, notice) {
        notifications.push(notice);
    }
}

#[component]
pub fn NotificationHost() -> Element {
    let notifications = use_context::<Notifications>();
    let toasts = notifications.toasts();

    rsx! {
        div { class: "notification-host",
            for toast in toasts {
                ToastCard {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_close: move |id| notifications.dismiss(id),
                }
            }
        }
    }
}

#[component]
pub fn ToastCard(toast: Toast, on_close: EventHandler<u64>) -> Element {
    let id = toast.id;
    let notice = toast.notice;

    rsx! {
        div { class: "completion-notification", role: "status",
            div { class: "notification-content",
                h4 { "🎉 {notice.heading}" }
                p { "{notice.message}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(id),
                    "Close"
                }
            }
        }
    }
}
