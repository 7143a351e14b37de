//! UI primitives (Button, FieldInput)

pub mod button;
pub mod input;

pub use button::*;
pub use input::*;
