//! Reactorver - reactor version propagation
//!
//! Wires the configuration gate, descriptor reader and session registry into
//! a ready-to-use processor.

mod app;

pub use app::{SetupError, create_processor, init_logging};
pub use reactorver_core::{Configuration, init_tracing};
pub use reactorver_propagation::{Outcome, ProcessorSettings, ReactorModelProcessor};

// Re-export for convenience
pub use reactorver_core;
pub use reactorver_propagation;
