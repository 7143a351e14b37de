//! Signup client - Dioxus web application
//!
//! Registration modal for the web/desktop client: form state, validation,
//! the `POST /user` call and the modal/toast transitions around it.

pub mod api_client;
pub mod config;
pub mod controller;
pub mod form;
pub mod logging;
pub mod modal;
pub mod toast;

#[cfg(test)]
mod test_support;

pub mod components;
pub mod views;

pub use api_client::{ApiClient, RegistrationApi};
pub use config::ClientConfig;
pub use controller::{RegistrationController, RegistrationView, SubmitError};
pub use form::FormState;
pub use modal::{ModalContext, ModalHandle, ModalKind, ModalProvider};
pub use toast::{Notifier, ToastProvider, Toaster};
