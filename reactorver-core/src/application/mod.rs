//! Application Layer - shared error types

pub mod errors;

pub use errors::*;
