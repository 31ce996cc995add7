//! Domain models for the reception desk.

mod patient;
mod visit;

pub use patient::*;
pub use visit::*;
