//! Domain models for reactor version propagation

pub mod properties;
pub mod provider;
pub mod session;

pub use properties::PropertyBag;
pub use provider::{Metadata, StaticVersionInfo, VersionInfoProvider};
pub use session::{ManagedFlag, Session, SessionError};
