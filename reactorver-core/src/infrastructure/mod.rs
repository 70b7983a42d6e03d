//! Infrastructure Layer - file system facing implementations

pub mod parsers;

pub use parsers::{DescriptorReader, PomReader};
