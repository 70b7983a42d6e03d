//! Test helper functions for reactorver-propagation

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reactorver_core::config::FileConfigurationGate;
use reactorver_core::domain::Gav;
use reactorver_core::infrastructure::PomReader;
use reactorver_propagation::{
    ProcessorSettings, ReactorModelProcessor, SESSION_PROPERTY_KEY, Session, SessionRegistry,
    StaticVersionInfo, VersionInfoProvider,
};
use tempfile::TempDir;

use super::fixtures;

/// Property bag shared by every read of one build
pub type Bag = BTreeMap<String, String>;

/// Create a temporary directory for testing
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `content` at `relative` under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directory");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Root, `a` and `b` descriptors of the two-module build
pub fn two_module_tree() -> TempDir {
    let dir = create_temp_dir();
    write_file(dir.path(), "pom.xml", fixtures::root_pom());
    write_file(dir.path(), "a/pom.xml", fixtures::module_a_pom());
    write_file(dir.path(), "b/pom.xml", fixtures::module_b_pom());
    dir
}

/// Same layout, every module bound to `${revision}`
pub fn revision_tree() -> TempDir {
    let dir = create_temp_dir();
    write_file(dir.path(), "pom.xml", fixtures::revision_root_pom());
    write_file(dir.path(), "a/pom.xml", fixtures::revision_module_a_pom());
    write_file(dir.path(), "b/pom.xml", fixtures::revision_module_b_pom());
    dir
}

pub fn provider(version: &str) -> Arc<dyn VersionInfoProvider> {
    Arc::new(StaticVersionInfo::new(version))
}

/// A processor as the host would create it for one read
pub fn processor(
    root: &Path,
    provider: Arc<dyn VersionInfoProvider>,
    settings: ProcessorSettings,
) -> ReactorModelProcessor {
    ReactorModelProcessor::new(
        SessionRegistry::with_provider(provider),
        Arc::new(FileConfigurationGate::new(root)),
        Arc::new(PomReader::new()),
        settings,
    )
}

/// Initialise the build session and return the bag holding it
pub fn start_build(root: &Path, provider: Arc<dyn VersionInfoProvider>) -> Bag {
    let mut bag = Bag::new();
    processor(root, provider.clone(), ProcessorSettings::default())
        .start_build(provider, root, &mut bag)
        .expect("Failed to start build");
    bag
}

/// Decode the session currently stored in `bag`
pub fn stored_session(bag: &Bag) -> Session {
    let encoded = bag
        .get(SESSION_PROPERTY_KEY)
        .expect("Session property missing");
    Session::decode(encoded).expect("Stored session is not decodable")
}

pub fn artifact_ids(session: &Session) -> Vec<String> {
    session
        .projects()
        .iter()
        .map(|gav| gav.artifact_id().to_string())
        .collect()
}

pub fn gav(artifact_id: &str) -> Gav {
    Gav::new("com.x", artifact_id, None)
}

pub fn canonical(path: &Path) -> String {
    path.canonicalize()
        .expect("Failed to canonicalize")
        .to_string_lossy()
        .into_owned()
}
