//! Application setup and wiring

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use reactorver_core::config::{ConfigLoadError, ConfigurationGate, FileConfigurationGate};
use reactorver_core::infrastructure::PomReader;
use reactorver_core::init_tracing;
use reactorver_core::logging::LoggingError;
use reactorver_propagation::{
    ProcessorSettings, ReactorModelProcessor, SessionRegistry, VersionInfoProvider,
};

/// Create the processor of a build rooted at `root_directory`
///
/// `properties` are the host's system properties; they select the
/// persistence strategy and its tunables. The configuration file under the
/// root is loaded lazily, on the first descriptor read.
pub fn create_processor(
    root_directory: &Path,
    provider: Arc<dyn VersionInfoProvider>,
    properties: &BTreeMap<String, String>,
) -> ReactorModelProcessor {
    let settings = ProcessorSettings::from_properties(properties);
    tracing::debug!(
        root = %root_directory.display(),
        strategy = ?settings.strategy,
        skip = settings.skip,
        "Creating reactor model processor"
    );

    let gate: Arc<dyn ConfigurationGate> = Arc::new(FileConfigurationGate::new(root_directory));

    ReactorModelProcessor::new(
        SessionRegistry::with_provider(provider),
        gate,
        Arc::new(PomReader::new()),
        settings,
    )
}

/// Error raised while setting up logging from the build configuration
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Configuration(#[from] ConfigLoadError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Install the tracing subscriber configured for the build at `root_directory`
pub fn init_logging(root_directory: &Path) -> Result<(), SetupError> {
    let configuration = FileConfigurationGate::new(root_directory).effective_config()?;
    init_tracing(&configuration.logging)?;
    Ok(())
}
