//! View components for the application.

pub mod landing;

pub use landing::Landing;
