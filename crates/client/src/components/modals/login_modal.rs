use dioxus::prelude::*;

use crate::components::modals::ModalContainer;
use crate::components::ui::{Button, ButtonVariant};
use crate::modal::{use_modals, ModalHandle};

/// Destination of a finished signup. Only the switch back to the signup form
/// lives here; signing in is provided by the host application.
#[component]
pub fn LoginModal() -> Element {
    let modals = use_modals();

    rsx! {
        ModalContainer {
            is_open: modals.login.is_open(),
            title: "Welcome back!".to_string(),
            on_close: move |_| modals.login.on_close(),
            div { class: "space-y-4 text-center",
                p { class: "text-sm text-gray-300",
                    "Sign in with the email and password you registered with."
                }
                div { class: "flex justify-center gap-1 items-center text-sm text-gray-400",
                    span { "No account yet?" }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| {
                            modals.login.on_close();
                            modals.register.on_open();
                        },
                        "Create one"
                    }
                }
            }
        }
    }
}
