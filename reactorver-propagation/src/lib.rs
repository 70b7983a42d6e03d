//! Reactorver Propagation - reactor version propagation engine
//!
//! Stamps the version calculated for a multi-module build onto every module
//! descriptor the host reads, along with the parent and dependency references
//! that point back into the same build.
//!
//! The host calls the processor once per descriptor, in any order, possibly
//! through a new processor each time. State crosses those calls only through
//! a property bag holding the encoded [`Session`].
//!
//! # Flow
//!
//! 1. [`ReactorModelProcessor::start_build`] publishes a session carrying the
//!    calculated version (unless the build skips version computation)
//! 2. [`ReactorModelProcessor::provision`] restores the session, checks the
//!    configuration gate, rewrites versions, discovers declared modules and
//!    registers a persisting plugin execution once per module
//! 3. The session is written back into the bag
//!
//! # Usage
//!
//! ```rust,ignore
//! use reactorver_propagation::{ReactorModelProcessor, SessionRegistry, ProcessorSettings};
//!
//! let mut processor = ReactorModelProcessor::new(
//!     SessionRegistry::with_provider(provider.clone()),
//!     gate,
//!     Arc::new(PomReader::new()),
//!     ProcessorSettings::from_properties(&system_properties),
//! );
//! processor.start_build(provider, &root, &mut bag)?;
//! let (model, outcome) = processor.read_file(&root.join("pom.xml"), &mut bag)?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! reactorver-propagation/
//! ├── domain/         # Session, provider, property bag
//! ├── application/    # Settings, error types
//! └── services/       # Registry, plugin injection, processor
//! ```

pub mod application;
pub mod domain;
pub mod services;

pub use application::*;
pub use domain::*;
pub use services::*;
