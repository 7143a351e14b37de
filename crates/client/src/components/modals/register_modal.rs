//! Signup form modal.

use dioxus::prelude::*;
use signup_shared::{FieldErrors, FormField};

use crate::api_client::ApiClient;
use crate::components::modals::ModalContainer;
use crate::components::ui::{Button, ButtonVariant, FieldInput};
use crate::controller::{RegistrationController, RegistrationView};
use crate::form::FormState;
use crate::log_debug;
use crate::modal::{use_modals, ModalContext, ModalHandle, ModalSignal};
use crate::toast::{use_toaster, Toaster};

/// Form values and loading flag of a mounted [`RegisterModal`].
#[derive(Clone, Copy)]
struct RegisterFormSignals {
    form: Signal<FormState>,
    loading: Signal<bool>,
}

impl RegistrationView for RegisterFormSignals {
    fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    fn set_loading(&self, loading: bool) {
        let mut signal = self.loading;
        signal.set(loading);
    }

    fn show_errors(&self, errors: &FieldErrors) {
        let mut form = self.form;
        form.write().set_errors(errors.clone());
    }

    fn reset_form(&self) {
        let mut form = self.form;
        form.write().reset();
    }
}

type SignalController = RegistrationController<ApiClient, Toaster, ModalSignal, RegisterFormSignals>;

fn controller(
    api: ApiClient,
    toaster: Toaster,
    modals: ModalContext,
    view: RegisterFormSignals,
) -> SignalController {
    RegistrationController::new(api, toaster, modals.login, modals.register, view)
}

#[component]
pub fn RegisterModal() -> Element {
    let modals = use_modals();
    let toaster = use_toaster();
    let api = use_context::<ApiClient>();
    let mut form = use_signal(FormState::new);
    let loading = use_signal(|| false);
    let view = RegisterFormSignals { form, loading };

    let submit_api = api.clone();
    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let values = form.read().values().clone();
        let controller = controller(submit_api.clone(), toaster, modals, view);
        spawn(async move {
            if let Err(err) = controller.submit(values).await {
                log_debug!("registration submit ended without an account: {err}");
            }
        });
    };

    rsx! {
        ModalContainer {
            is_open: modals.register.is_open(),
            title: "Create your account!".to_string(),
            on_close: move |_| modals.register.on_close(),
            form { class: "space-y-5", onsubmit,
                for field in FormField::ALL {
                    FieldInput {
                        key: "{field.id()}",
                        field,
                        value: form.read().value(field).to_string(),
                        error: form.read().error(field).map(str::to_string),
                        oninput: move |value: String| form.write().set(field, value),
                    }
                }
                Button {
                    r#type: "submit".to_string(),
                    variant: ButtonVariant::Primary,
                    disabled: loading(),
                    if loading() {
                        "Registering…"
                    } else {
                        "Register"
                    }
                }
                div { class: "w-full flex justify-center gap-1 items-center text-sm text-gray-400",
                    span { "Already have an account?" }
                    Button {
                        variant: ButtonVariant::Link,
                        disabled: loading(),
                        onclick: move |_| controller(api.clone(), toaster, modals, view).go_to_login(),
                        "Sign in"
                    }
                }
            }
        }
    }
}
