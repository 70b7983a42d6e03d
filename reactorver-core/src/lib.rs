//! Reactorver Core - descriptor model, configuration and logging
//!
//! Shared foundation for the reactor version propagation engine:
//!
//! # Modules
//!
//! - [`config`]: Build configuration (`.mvn/reactorver.*` and `REACTORVER__*`
//!   environment overrides) and the [`ConfigurationGate`] consulted before a
//!   descriptor is processed
//! - [`domain`]: Descriptor model, artifact identity ([`Gav`]) and version
//!   placeholder rules
//! - [`application`]: Shared error types
//! - [`infrastructure`]: quick-xml based `pom.xml` reader
//! - [`logging`]: Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! reactorver-core/
//! ├── domain/           # Model, Gav, version rules
//! ├── application/      # Error types
//! ├── infrastructure/
//! │   └── parsers/      # Descriptor readers
//! └── config/           # Configuration and validation
//! ```
//!
//! # Logging
//!
//! ```rust,ignore
//! use reactorver_core::{init_tracing, config::LoggingConfig};
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{Configuration, ConfigurationGate, FileConfigurationGate};
pub use domain::{Gav, Model};
pub use logging::init_tracing;
