//! Propagation session
//!
//! The session accumulates what is known about the reactor across descriptor
//! reads: the root group id, every artifact recognised as part of this build,
//! whether each one already received its plugin execution, and which module
//! descriptors were discovered on disk.
//!
//! The host may drop the in-memory instance between reads, so the session is a
//! plain value with a pure [`Session::encode`] / [`Session::decode`] pair. The
//! provider handle is not part of the encoded form and has to be re-attached
//! after decoding.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reactorver_core::domain::Gav;
use serde::{Deserialize, Serialize};

use super::provider::VersionInfoProvider;

/// Whether an artifact received its version-persisting plugin execution
///
/// Starts [`ManagedFlag::Unset`] and is resolved exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagedFlag {
    Unset,
    /// A plugin execution was added
    Managed,
    /// Handled, but no execution was added (author-declared plugin or skip switch)
    Declined,
}

impl ManagedFlag {
    /// Resolve an unset flag; resolving twice is rejected
    pub fn resolve(self, managed: bool) -> Result<Self, ManagedFlag> {
        match self {
            Self::Unset if managed => Ok(Self::Managed),
            Self::Unset => Ok(Self::Declined),
            resolved => Err(resolved),
        }
    }

    pub fn is_unset(self) -> bool {
        self == Self::Unset
    }

    fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Managed => Some(true),
            Self::Declined => Some(false),
        }
    }

    fn from_option(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Managed,
            Some(false) => Self::Declined,
        }
    }
}

/// Session encoding and state errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode session: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Corrupted session: {message}")]
    Corrupted { message: String },

    #[error("Artifact {gav} is not part of the reactor")]
    UnknownProject { gav: Gav },

    #[error("Artifact {gav} was already resolved as {flag:?}")]
    AlreadyResolved { gav: Gav, flag: ManagedFlag },
}

/// Reactor state shared by every descriptor read of one build
#[derive(Clone)]
pub struct Session {
    calculated_version: String,
    root_directory: PathBuf,
    root_group_id: Option<String>,
    projects: Vec<Gav>,
    managed: HashMap<Gav, ManagedFlag>,
    module_pom_paths: Vec<String>,
    provider: Option<Arc<dyn VersionInfoProvider>>,
}

impl Session {
    /// Start a session for a build rooted at `root_directory`
    pub fn new(provider: Arc<dyn VersionInfoProvider>, root_directory: impl Into<PathBuf>) -> Self {
        let mut session = Self::with_version(provider.version(), root_directory);
        session.provider = Some(provider);
        session
    }

    /// Session over an already-known version, without provider
    pub fn with_version(
        calculated_version: impl Into<String>,
        root_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            calculated_version: calculated_version.into(),
            root_directory: root_directory.into(),
            root_group_id: None,
            projects: Vec::new(),
            managed: HashMap::new(),
            module_pom_paths: Vec::new(),
            provider: None,
        }
    }

    pub fn calculated_version(&self) -> &str {
        &self.calculated_version
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn root_group_id(&self) -> Option<&str> {
        self.root_group_id.as_deref()
    }

    /// Record the root group id; returns false when one was already set
    pub fn establish_root(&mut self, group_id: impl Into<String>) -> bool {
        if self.root_group_id.is_some() {
            return false;
        }
        self.root_group_id = Some(group_id.into());
        true
    }

    /// Known projects, in discovery order
    pub fn projects(&self) -> &[Gav] {
        &self.projects
    }

    pub fn contains(&self, gav: &Gav) -> bool {
        self.managed.contains_key(gav)
    }

    /// Register a project; returns false when it was already known
    pub fn add_project(&mut self, gav: Gav) -> bool {
        if self.contains(&gav) {
            return false;
        }
        self.managed.insert(gav.clone(), ManagedFlag::Unset);
        self.projects.push(gav);
        true
    }

    /// Plugin handling state, `None` for an unknown project
    pub fn managed_flag(&self, gav: &Gav) -> Option<ManagedFlag> {
        self.managed.get(gav).copied()
    }

    /// Resolve the plugin handling state of a known project, at most once
    pub fn resolve_managed(
        &mut self,
        gav: &Gav,
        managed: bool,
    ) -> Result<ManagedFlag, SessionError> {
        let flag = self
            .managed
            .get_mut(gav)
            .ok_or_else(|| SessionError::UnknownProject { gav: gav.clone() })?;

        *flag = flag.resolve(managed).map_err(|flag| SessionError::AlreadyResolved {
            gav: gav.clone(),
            flag,
        })?;
        Ok(*flag)
    }

    /// Absolute paths of discovered module descriptors, in discovery order
    pub fn module_pom_paths(&self) -> &[String] {
        &self.module_pom_paths
    }

    pub fn add_module_pom_path(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.module_pom_paths.contains(&path) {
            return false;
        }
        self.module_pom_paths.push(path);
        true
    }

    pub fn provider(&self) -> Option<&Arc<dyn VersionInfoProvider>> {
        self.provider.as_ref()
    }

    pub fn attach_provider(&mut self, provider: Arc<dyn VersionInfoProvider>) {
        self.provider = Some(provider);
    }

    /// Encode the session as a JSON document
    pub fn encode(&self) -> Result<String, SessionError> {
        let document = SessionDocument {
            calculated_version: self.calculated_version.clone(),
            multi_module_project_directory: self.root_directory.clone(),
            root_project_group_id: self.root_group_id.clone(),
            projects: self.projects.clone(),
            module_pom_paths: self.module_pom_paths.clone(),
            gav_managed_with_plugins: self
                .projects
                .iter()
                .map(|gav| ManagedEntry {
                    gav: gav.clone(),
                    managed: self
                        .managed_flag(gav)
                        .unwrap_or(ManagedFlag::Unset)
                        .as_option(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(SessionError::Encode)
    }

    /// Rebuild a session from [`Session::encode`] output
    ///
    /// The returned session has no provider attached.
    pub fn decode(content: &str) -> Result<Self, SessionError> {
        let document: SessionDocument =
            serde_json::from_str(content).map_err(SessionError::Decode)?;

        let mut session = Self::with_version(
            document.calculated_version,
            document.multi_module_project_directory,
        );
        session.root_group_id = document.root_project_group_id;

        for gav in document.projects {
            if !session.add_project(gav.clone()) {
                return Err(SessionError::Corrupted {
                    message: format!("duplicate project {}", gav),
                });
            }
        }

        for entry in document.gav_managed_with_plugins {
            match session.managed.get_mut(&entry.gav) {
                Some(flag) => *flag = ManagedFlag::from_option(entry.managed),
                None => {
                    return Err(SessionError::Corrupted {
                        message: format!("managed entry {} is not a known project", entry.gav),
                    });
                }
            }
        }

        for path in document.module_pom_paths {
            session.add_module_pom_path(path);
        }

        Ok(session)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("calculated_version", &self.calculated_version)
            .field("root_directory", &self.root_directory)
            .field("root_group_id", &self.root_group_id)
            .field("projects", &self.projects)
            .field("module_pom_paths", &self.module_pom_paths)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDocument {
    calculated_version: String,
    multi_module_project_directory: PathBuf,
    root_project_group_id: Option<String>,
    #[serde(default)]
    projects: Vec<Gav>,
    #[serde(default)]
    module_pom_paths: Vec<String>,
    #[serde(default)]
    gav_managed_with_plugins: Vec<ManagedEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ManagedEntry {
    #[serde(flatten)]
    gav: Gav,
    managed: Option<bool>,
}
