//! Domain Layer - descriptor model and artifact identity
//!
//! Pure data types shared by the reader, the configuration gate and the
//! propagation engine. Nothing in here touches the file system.

pub mod descriptor;
pub mod gav;
pub mod version;

pub use descriptor::*;
pub use gav::Gav;
pub use version::{PROJECT_VERSION, is_placeholder, is_version_shared};
