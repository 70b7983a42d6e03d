//! Version information provider
//!
//! The version itself is computed elsewhere from repository history; the
//! engine only consumes the result through [`VersionInfoProvider`].

use std::collections::HashMap;
use std::fmt;

/// Metadata published alongside a calculated version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metadata {
    CalculatedVersion,
    BaseVersion,
    BaseTag,
    BaseTagType,
    BranchName,
    QualifiedBranchName,
    CommitDistance,
    CommitTimestamp,
    Dirty,
    GitSha1Full,
    GitSha1Short,
    HeadTags,
    HeadAnnotatedTags,
    HeadLightweightTags,
    HeadVersionTags,
    HeadVersionAnnotatedTags,
    HeadVersionLightweightTags,
    NextMajorVersion,
    NextMinorVersion,
    NextPatchVersion,
}

impl Metadata {
    /// Property-style key of this metadata
    pub fn key(&self) -> &'static str {
        match self {
            Self::CalculatedVersion => "calculated_version",
            Self::BaseVersion => "base_version",
            Self::BaseTag => "base_tag",
            Self::BaseTagType => "base_tag_type",
            Self::BranchName => "branch_name",
            Self::QualifiedBranchName => "qualified_branch_name",
            Self::CommitDistance => "commit_distance",
            Self::CommitTimestamp => "commit_timestamp",
            Self::Dirty => "dirty",
            Self::GitSha1Full => "git_sha1_full",
            Self::GitSha1Short => "git_sha1_8",
            Self::HeadTags => "head_tags",
            Self::HeadAnnotatedTags => "head_annotated_tags",
            Self::HeadLightweightTags => "head_lightweight_tags",
            Self::HeadVersionTags => "head_version_tags",
            Self::HeadVersionAnnotatedTags => "head_version_annotated_tags",
            Self::HeadVersionLightweightTags => "head_version_lightweight_tags",
            Self::NextMajorVersion => "next_major_version",
            Self::NextMinorVersion => "next_minor_version",
            Self::NextPatchVersion => "next_patch_version",
        }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Source of the calculated version and its metadata
pub trait VersionInfoProvider: Send + Sync {
    /// The version to stamp on every module of the build
    fn version(&self) -> String;

    /// Metadata value, `None` when the calculator cannot supply it
    fn meta(&self, metadata: Metadata) -> Option<String>;
}

/// Provider over precomputed values
#[derive(Debug, Clone, Default)]
pub struct StaticVersionInfo {
    version: String,
    metadata: HashMap<Metadata, String>,
}

impl StaticVersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_meta(mut self, metadata: Metadata, value: impl Into<String>) -> Self {
        self.metadata.insert(metadata, value.into());
        self
    }
}

impl VersionInfoProvider for StaticVersionInfo {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn meta(&self, metadata: Metadata) -> Option<String> {
        match metadata {
            Metadata::CalculatedVersion => Some(self.version.clone()),
            other => self.metadata.get(&other).cloned(),
        }
    }
}
