//! Overlay frame shared by the auth modals.

use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Renders nothing while closed.
///
/// ```text
/// +-------------------------------------------+
/// |  Title                                [X] |
/// |-------------------------------------------|
/// |  children                                 |
/// +-------------------------------------------+
/// ```
#[component]
pub fn ModalContainer(
    is_open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative w-full max-w-md max-h-[90vh] mx-4 bg-[#2b2d31] rounded-xl shadow-2xl flex flex-col overflow-hidden",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                div { class: "flex items-center justify-between px-6 py-4 border-b border-[#3f4147]",
                    h2 { class: "text-xl font-bold text-white", "{title}" }
                    button {
                        class: "text-[#b5bac1] hover:text-white transition-colors",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        svg {
                            class: "w-5 h-5",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M6 18L18 6M6 6l12 12",
                            }
                        }
                    }
                }
                div { class: "flex-1 overflow-y-auto px-6 py-6", {children} }
            }
        }
    }
}
