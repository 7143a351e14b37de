//! Registration submit flow.
//!
//! [`RegistrationController`] runs validate -> POST -> UI transition. Every
//! collaborator is handed in at construction so the flow can run against the
//! Dioxus signals in the app and against plain fakes in tests.

use signup_shared::{ApiError, FieldErrors, RegistrationForm, ValidationSchema};

use crate::api_client::RegistrationApi;
use crate::modal::ModalHandle;
use crate::toast::Notifier;
use crate::{log_debug, log_error, log_info, log_warn};

pub const LOADING_MESSAGE: &str = "Registering...";
pub const SUCCESS_MESSAGE: &str = "Registered";

/// UI state the controller drives: the loading flag, inline field errors and
/// the form values.
pub trait RegistrationView {
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
    fn show_errors(&self, errors: &FieldErrors);
    fn reset_form(&self);
}

/// Why a submit did not create an account.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The form failed validation; nothing was sent.
    #[error("invalid form: {0}")]
    Invalid(FieldErrors),
    /// A previous submit is still waiting for the server.
    #[error("a registration request is already in flight")]
    InFlight,
    /// The server refused the request and said why.
    #[error("registration rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Anything else. Logged, not shown to the user.
    #[error("registration failed: {0}")]
    Failed(ApiError),
}

pub struct RegistrationController<A, N, M, V> {
    api: A,
    notifier: N,
    login: M,
    register: M,
    view: V,
    schema: ValidationSchema,
}

impl<A, N, M, V> RegistrationController<A, N, M, V>
where
    A: RegistrationApi,
    N: Notifier,
    M: ModalHandle,
    V: RegistrationView,
{
    pub fn new(api: A, notifier: N, login: M, register: M, view: V) -> Self {
        Self {
            api,
            notifier,
            login,
            register,
            view,
            schema: ValidationSchema::registration(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Validate `form` and, if it passes, send it to the backend.
    ///
    /// Exactly one request is issued per accepted call. The loading flag is set
    /// for the duration of that request only.
    pub async fn submit(&self, form: RegistrationForm) -> Result<(), SubmitError> {
        if let Err(errors) = self.schema.validate(&form) {
            log_debug!("registration form rejected: {errors}");
            self.view.show_errors(&errors);
            return Err(SubmitError::Invalid(errors));
        }
        if self.view.is_loading() {
            log_warn!("ignoring registration submit while a request is in flight");
            return Err(SubmitError::InFlight);
        }
        self.view.show_errors(&FieldErrors::new());

        self.view.set_loading(true);
        self.notifier.loading(LOADING_MESSAGE);

        let result = self.api.register_user(&form).await;

        self.notifier.dismiss();
        self.view.set_loading(false);

        match result {
            Ok(()) => {
                log_info!("registration accepted");
                self.notifier.success(SUCCESS_MESSAGE);
                self.view.reset_form();
                self.go_to_login();
                Ok(())
            }
            Err(err) => Err(self.report_failure(err)),
        }
    }

    /// Swap the register modal for the login modal.
    pub fn go_to_login(&self) {
        self.register.on_close();
        self.login.on_open();
    }

    fn report_failure(&self, err: ApiError) -> SubmitError {
        let message = err.server_message();
        match (err, message) {
            (ApiError::Http { status, .. }, Some(message)) => {
                log_warn!("registration rejected with HTTP {status}: {message}");
                self.notifier.error(&message);
                SubmitError::Rejected { status, message }
            }
            (err, _) => {
                log_error!("registration request failed: {err}");
                SubmitError::Failed(err)
            }
        }
    }
}
