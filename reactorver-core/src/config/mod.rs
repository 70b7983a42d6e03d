//! Configuration management
//!
//! Per-build configuration lives under `<root>/.mvn/reactorver.{toml,json,yaml}`
//! and can be overridden with `REACTORVER__*` environment variables. The
//! [`ConfigurationGate`] is the view the propagation engine consults before
//! touching any descriptor.

pub mod validation;

pub use validation::{Validate, ValidationError};

use std::path::{Component, Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Directory, relative to the build root, holding extension configuration
pub const EXTENSION_DIRECTORY: &str = ".mvn";

/// Configuration file stem inside [`EXTENSION_DIRECTORY`]
pub const CONFIGURATION_FILE_STEM: &str = "reactorver";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "REACTORVER";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Qualifier rule applied to branches matching `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPolicy {
    pub pattern: String,
    #[serde(default = "BranchPolicy::default_transformations")]
    pub transformations: Vec<String>,
}

impl BranchPolicy {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            transformations: Self::default_transformations(),
        }
    }

    fn default_transformations() -> Vec<String> {
        vec![
            "REMOVE_UNEXPECTED_CHARS".to_string(),
            "LOWERCASE_EN".to_string(),
        ]
    }
}

/// Build-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Directories, relative to the build root, whose descriptors are never touched
    pub exclusions: Vec<String>,
    /// Do not register any flatten plugin execution
    pub skip_pom_update: bool,
    pub maven_like: bool,
    pub auto_increment_patch: bool,
    pub use_commit_distance: bool,
    pub use_dirty: bool,
    pub fail_if_dirty: bool,
    pub use_default_branching_policy: bool,
    pub use_git_commit_timestamp: bool,
    pub use_git_commit_id: bool,
    pub git_commit_id_length: u8,
    pub non_qualifier_branches: String,
    pub regex_version_tag: Option<String>,
    pub branch_policies: Vec<BranchPolicy>,
    pub logging: LoggingConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            exclusions: Vec::new(),
            skip_pom_update: false,
            maven_like: true,
            auto_increment_patch: true,
            use_commit_distance: false,
            use_dirty: false,
            fail_if_dirty: false,
            use_default_branching_policy: true,
            use_git_commit_timestamp: false,
            use_git_commit_id: false,
            git_commit_id_length: 8,
            non_qualifier_branches: "master".to_string(),
            regex_version_tag: None,
            branch_policies: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Configuration {
    /// Load configuration for the build rooted at `root_directory`
    ///
    /// A missing configuration file yields defaults; a present but unreadable
    /// one is an error.
    pub fn load_from_root(root_directory: &Path) -> Result<Self, ConfigLoadError> {
        let file_stem = root_directory
            .join(EXTENSION_DIRECTORY)
            .join(CONFIGURATION_FILE_STEM);

        debug!(path = %file_stem.display(), "Looking for configuration");

        let builder = config::Config::builder()
            .add_source(config::File::from(file_stem.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("exclusions")
                    .try_parsing(true),
            );

        let config: Configuration = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|source| ConfigLoadError::File {
                path: file_stem.clone(),
                source,
            })?;

        config.validate()?;

        info!(
            exclusions = config.exclusions.len(),
            skip_pom_update = config.skip_pom_update,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Excluded directories resolved against the build root
    pub fn excluded_directories(&self, root_directory: &Path) -> Vec<PathBuf> {
        self.exclusions
            .iter()
            .map(|exclusion| normalize(&root_directory.join(exclusion)))
            .collect()
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Cannot read configuration file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Decides which descriptors take part in version propagation
pub trait ConfigurationGate: Send + Sync {
    /// Returns true when the descriptor at `path` must be left untouched
    fn is_ignored(&self, path: &Path) -> bool;

    /// The configuration in effect for this build
    fn effective_config(&self) -> Result<Configuration, ConfigLoadError>;
}

/// Gate backed by the configuration file of the build root
///
/// The file is read on first use and cached for the life of the gate.
#[derive(Debug)]
pub struct FileConfigurationGate {
    root_directory: PathBuf,
    configuration: OnceCell<Configuration>,
}

impl FileConfigurationGate {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            configuration: OnceCell::new(),
        }
    }

    /// Gate with an already-loaded configuration
    pub fn with_configuration(
        root_directory: impl Into<PathBuf>,
        configuration: Configuration,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            configuration: OnceCell::with_value(configuration),
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    fn configuration(&self) -> Result<&Configuration, ConfigLoadError> {
        self.configuration
            .get_or_try_init(|| Configuration::load_from_root(&self.root_directory))
    }
}

impl ConfigurationGate for FileConfigurationGate {
    fn is_ignored(&self, path: &Path) -> bool {
        let configuration = match self.configuration() {
            Ok(configuration) => configuration,
            Err(e) => {
                warn!(error = %e, "Configuration unavailable, no exclusion applied");
                return false;
            }
        };

        let directory = match path.parent() {
            Some(parent) => normalize(parent),
            None => return false,
        };

        configuration
            .excluded_directories(&self.root_directory)
            .iter()
            .any(|excluded| directory.starts_with(excluded))
    }

    fn effective_config(&self) -> Result<Configuration, ConfigLoadError> {
        self.configuration().cloned()
    }
}

/// Canonical form of a path, falling back to a lexical clean-up when the
/// path does not exist
fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
