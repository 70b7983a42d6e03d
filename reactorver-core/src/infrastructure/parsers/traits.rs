//! Traits for descriptor readers

use std::path::Path;

use crate::application::errors::ParseError;
use crate::domain::descriptor::Model;

/// Reads a project descriptor from disk
///
/// The propagation engine uses this to peek at the identity of declared
/// modules the host has not loaded yet. Implementations must not apply any
/// version rewriting.
pub trait DescriptorReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Model, ParseError>;

    /// Get the descriptor file name this reader handles
    fn file_name(&self) -> &'static str {
        crate::domain::descriptor::DESCRIPTOR_FILE_NAME
    }
}
