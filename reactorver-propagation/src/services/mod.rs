//! Propagation services
//!
//! The session registry, plugin execution injection and the model processor
//! driving a descriptor read.

pub mod plugins;
pub mod processor;
pub mod registry;

pub use processor::{Outcome, ReactorModelProcessor};
pub use registry::{SESSION_PROPERTY_KEY, SessionRegistry};
