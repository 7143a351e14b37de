//! Modal coordination.
//!
//! Each modal is addressed through its own [`ModalHandle`]. The app provides a
//! [`ModalContext`] holding the login and register handles; components read it
//! from context and pass the handles on explicitly.

use dioxus::prelude::*;

use crate::log_debug;

/// The modals the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Login,
    Register,
}

/// Open/close control for one modal.
pub trait ModalHandle {
    fn is_open(&self) -> bool;
    fn on_open(&self);
    fn on_close(&self);
}

/// Signal-backed modal handle.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalSignal {
    kind: ModalKind,
    open: Signal<bool>,
}

impl ModalSignal {
    pub fn new(kind: ModalKind, open: Signal<bool>) -> Self {
        Self { kind, open }
    }
}

impl ModalHandle for ModalSignal {
    fn is_open(&self) -> bool {
        *self.open.read()
    }

    fn on_open(&self) {
        log_debug!("opening {:?} modal", self.kind);
        let mut open = self.open;
        open.set(true);
    }

    fn on_close(&self) {
        let mut open = self.open;
        open.set(false);
    }
}

/// Both modal handles, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalContext {
    pub login: ModalSignal,
    pub register: ModalSignal,
}

/// Provides [`ModalContext`] to its children. Every modal starts closed.
#[component]
pub fn ModalProvider(children: Element) -> Element {
    let login = use_signal(|| false);
    let register = use_signal(|| false);

    use_context_provider(|| ModalContext {
        login: ModalSignal::new(ModalKind::Login, login),
        register: ModalSignal::new(ModalKind::Register, register),
    });

    children
}

/// Read the modal handles provided by [`ModalProvider`].
pub fn use_modals() -> ModalContext {
    use_context::<ModalContext>()
}
