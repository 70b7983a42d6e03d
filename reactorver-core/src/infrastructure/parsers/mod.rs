//! Descriptor readers

pub mod maven;
pub mod traits;

pub use maven::PomReader;
pub use traits::DescriptorReader;
