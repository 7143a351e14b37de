//! Toast notifications.

use std::time::Duration;

use dioxus::prelude::*;

/// Status feedback sink used by the registration flow.
pub trait Notifier {
    /// Show an indeterminate "in progress" notice.
    fn loading(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    /// Remove every visible notice.
    fn dismiss(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// How long the toast stays up. Loading toasts stay until dismissed.
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            ToastKind::Loading => None,
            ToastKind::Success => Some(Duration::from_millis(2000)),
            ToastKind::Error => Some(Duration::from_millis(4000)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Signal-backed toast stack, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    fn push(&self, kind: ToastKind, message: &str) -> u64 {
        let mut next_id = self.next_id;
        let id = *next_id.read();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn remove(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

impl Notifier for Toaster {
    fn loading(&self, message: &str) {
        self.push(ToastKind::Loading, message);
    }

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn dismiss(&self) {
        let mut toasts = self.toasts;
        toasts.write().clear();
    }
}

/// Provides a [`Toaster`] to its children and renders the toast stack above them.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toaster { toasts, next_id });

    rsx! {
        {children}
        ToastHost {}
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
fn ToastHost() -> Element {
    let toaster = use_toaster();

    rsx! {
        div { class: "fixed top-4 inset-x-0 z-[60] flex flex-col items-center gap-2 pointer-events-none",
            for toast in toaster.toasts() {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toaster = use_toaster();
    let id = toast.id;
    let lifetime = toast.kind.lifetime();

    use_future(move || async move {
        if let Some(lifetime) = lifetime {
            sleep(lifetime).await;
            toaster.remove(id);
        }
    });

    let (accent, icon) = match toast.kind {
        ToastKind::Loading => ("border-indigo-500/40", "…"),
        ToastKind::Success => ("border-green-500/40", "✓"),
        ToastKind::Error => ("border-red-500/40", "!"),
    };

    rsx! {
        div {
            class: "pointer-events-auto flex items-center gap-3 rounded-lg bg-[#2b2d31] border {accent} px-4 py-2 text-sm text-gray-100 shadow-lg",
            role: "status",
            span { class: "font-bold", "{icon}" }
            span { "{toast.message}" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
