//! Processor tunables
//!
//! Plain key/value switches handed over by the host (system properties),
//! with an environment variable fallback: `reactorver.flatten.version` is
//! also read from `REACTORVER_FLATTEN_VERSION`.

use std::collections::BTreeMap;

use tracing::warn;

pub const SKIP_KEY: &str = "reactorver.skip";
pub const FLATTEN_KEY: &str = "reactorver.flatten";
pub const FLATTEN_VERSION_KEY: &str = "reactorver.flatten.version";
pub const REPLACEMENT_PHASE_KEY: &str = "reactorver.pom-replacement-phase";

pub const DEFAULT_FLATTEN_VERSION: &str = "1.2.2";
pub const DEFAULT_FLATTEN_PHASE: &str = "validate";
pub const DEFAULT_ATTACH_PHASE: &str = "prepare-package";

/// How the rewritten version is persisted for each module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceStrategy {
    /// Attach the in-memory descriptor as a build artifact
    Attach,
    /// Write a flattened descriptor with the flatten plugin
    Flatten,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    pub skip: bool,
    pub strategy: PersistenceStrategy,
    pub flatten_version: String,
    /// Overrides the default phase of either strategy
    pub replacement_phase: Option<String>,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            skip: false,
            strategy: PersistenceStrategy::Attach,
            flatten_version: DEFAULT_FLATTEN_VERSION.to_string(),
            replacement_phase: None,
        }
    }
}

impl ProcessorSettings {
    /// Resolve settings from host properties, then environment, then defaults
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        Self::from_lookup(|key| {
            properties
                .get(key)
                .cloned()
                .or_else(|| std::env::var(env_key(key)).ok())
        })
    }

    /// Resolve settings through an arbitrary lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flatten = parse_flag(FLATTEN_KEY, lookup(FLATTEN_KEY));

        Self {
            skip: parse_flag(SKIP_KEY, lookup(SKIP_KEY)),
            strategy: if flatten {
                PersistenceStrategy::Flatten
            } else {
                PersistenceStrategy::Attach
            },
            flatten_version: lookup(FLATTEN_VERSION_KEY)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.flatten_version),
            replacement_phase: lookup(REPLACEMENT_PHASE_KEY).filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn flatten_phase(&self) -> &str {
        self.replacement_phase
            .as_deref()
            .unwrap_or(DEFAULT_FLATTEN_PHASE)
    }

    pub fn attach_phase(&self) -> &str {
        self.replacement_phase
            .as_deref()
            .unwrap_or(DEFAULT_ATTACH_PHASE)
    }
}

/// `reactorver.flatten.version` -> `REACTORVER_FLATTEN_VERSION`
fn env_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

fn parse_flag(key: &str, value: Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        None | Some("") => false,
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        Some(v) => {
            warn!(key, value = v, "Unrecognized boolean value, treating as false");
            false
        }
    }
}
