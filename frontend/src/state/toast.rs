use leptos::*;
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600 text-white",
            ToastKind::Error => "bg-red-600 text-white",
            ToastKind::Info => "bg-blue-600 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::debug!("toast: {}", message),
        }
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));
        self.schedule_dismiss(id);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(TOAST_DURATION.as_millis() as u32, move || {
            // The host may already be gone after a route change.
            let _ = queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_default()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" role="status" aria-live="polite">
            <For
                each=move || queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast px-4 py-3 rounded shadow cursor-pointer {}", toast.kind.classes())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "saved");
        let second = queue.push(ToastKind::Error, "failed");
        assert!(second > first);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].message, "saved");
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one");
        let second = queue.push(ToastKind::Info, "two");
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }
}
