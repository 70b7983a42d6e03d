//! Application layer: processor settings and error types

pub mod errors;
pub mod settings;

pub use errors::*;
pub use settings::*;
