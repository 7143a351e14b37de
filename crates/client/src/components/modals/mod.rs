//! Auth modals.

pub mod login_modal;
pub mod modal_container;
pub mod register_modal;

pub use login_modal::LoginModal;
pub use modal_container::ModalContainer;
pub use register_modal::RegisterModal;
