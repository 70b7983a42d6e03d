//! Artifact identity
//!
//! A [`Gav`] identifies a buildable module across every place it can be
//! referenced: its own descriptor, a child's `<parent>` block, or another
//! module's `<dependency>`. Identity is `groupId:artifactId`; the version is
//! carried along for reporting only and never takes part in comparisons.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::descriptor::{Dependency, Model, Parent};

/// Version-independent artifact identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gav {
    group_id: String,
    artifact_id: String,
    #[serde(default)]
    version: Option<String>,
}

impl Gav {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
        }
    }

    /// Identity of a descriptor, inheriting group id and version from the
    /// parent reference when they are not declared.
    pub fn from_model(model: &Model) -> Self {
        let parent = model.parent.as_ref();
        let group_id = model
            .group_id
            .clone()
            .or_else(|| parent.and_then(|p| p.group_id.clone()))
            .unwrap_or_default();
        let version = model
            .version
            .clone()
            .or_else(|| parent.and_then(|p| p.version.clone()));

        Self::new(
            group_id,
            model.artifact_id.clone().unwrap_or_default(),
            version,
        )
    }

    pub fn from_parent(parent: &Parent) -> Self {
        Self::new(
            parent.group_id.clone().unwrap_or_default(),
            parent.artifact_id.clone().unwrap_or_default(),
            parent.version.clone(),
        )
    }

    pub fn from_dependency(dependency: &Dependency) -> Self {
        Self::new(
            dependency.group_id.clone().unwrap_or_default(),
            dependency.artifact_id.clone().unwrap_or_default(),
            dependency.version.clone(),
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl PartialEq for Gav {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl Eq for Gav {}

impl Hash for Gav {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}
