//! Transient success and error notices stacked in a corner of the screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use schooldesk_app::notice::Notice;
use schooldesk_domain::error::DashboardError;

const LIFETIME_MS: u32 = 5000;
/// Older toasts are dropped once this many are visible.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

impl Toast {
    fn class(&self) -> &'static str {
        if self.notice.is_error() {
            "toast toast-error"
        } else {
            "toast toast-success"
        }
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Default)]
struct ToastQueue {
    items: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Handle for raising toasts from any view below [`ToastContainer`].
#[derive(Clone, Copy)]
pub struct ToastProvider {
    queue: RwSignal<ToastQueue>,
}

impl ToastProvider {
    /// Show `notice` and schedule its removal.
    pub fn push(&self, notice: Notice) {
        let Some(id) = self.queue.try_update(|q| q.push(notice)) else {
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    /// Report a failed load. Abandoned requests stay silent.
    pub fn load_failed(&self, what: &str, err: &DashboardError) {
        if err.is_cancelled() {
            return;
        }
        leptos::logging::warn!("failed to fetch {what}: {err}");
        self.push(Notice::error(format!("Failed to fetch {what}")));
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// The provider installed by the nearest [`ToastContainer`].
///
/// Panics outside a `ToastContainer`, which wraps the whole app.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Provides [`ToastProvider`] to `children` and renders the toast stack.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let provider = ToastProvider {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || provider.queue.with(|q| q.items.clone())
                key=|toast| toast.id
                let(toast)
            >
                <div class=toast.class() role="status">
                    <button class="toast-dismiss" on:click=move |_| provider.dismiss(toast.id)>
                        "\u{00D7}"
                    </button>
                    {toast.notice.text().to_string()}
                </div>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::success("Result added successfully"));
        let second = queue.push(Notice::error("Failed to add result"));
        assert_eq!((first, second), (0, 1));
        assert_eq!(queue.items.len(), 2);
    }

    #[test]
    fn should_drop_oldest_beyond_visible_limit() {
        let mut queue = ToastQueue::default();
        for n in 0..6 {
            queue.push(Notice::success(format!("notice {n}")));
        }
        let ids: Vec<u32> = queue.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 4, 5]);
    }

    #[test]
    fn should_dismiss_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let keep = queue.push(Notice::success("Logout successfully."));
        let gone = queue.push(Notice::error("Failed to log out."));
        queue.dismiss(gone);
        queue.dismiss(99);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, keep);
    }
}
