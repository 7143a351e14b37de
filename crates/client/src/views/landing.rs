use dioxus::prelude::*;

use crate::components::modals::{LoginModal, RegisterModal};
use crate::components::ui::{Button, ButtonVariant};
use crate::modal::{use_modals, ModalHandle};

/// Landing page with the entry points into the auth modals.
#[component]
pub fn Landing() -> Element {
    let modals = use_modals();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-[#0f0f1a] via-[#1a1a2e] to-[#16213e] flex items-center justify-center px-4",
            div { class: "w-full max-w-sm space-y-4 text-center",
                h1 { class: "text-3xl font-bold text-white", "Welcome" }
                p { class: "text-gray-400", "Create an account to get started." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| modals.register.on_open(),
                    "Create account"
                }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| modals.login.on_open(),
                    "I already have an account"
                }
            }
        }
        RegisterModal {}
        LoginModal {}
    }
}
