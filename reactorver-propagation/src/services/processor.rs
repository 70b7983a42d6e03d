//! Reactor model processor
//!
//! Invoked by the host once per descriptor it loads, in no guaranteed order
//! and possibly through a new processor instance each time. Every read
//! restores the session from the property bag, extends the set of known
//! projects, rewrites the versions that belong to this build and writes the
//! session back.

use std::path::Path;
use std::sync::Arc;

use reactorver_core::application::errors::ParseError;
use reactorver_core::config::{Configuration, ConfigurationGate};
use reactorver_core::domain::{Gav, Model, is_placeholder, is_version_shared};
use reactorver_core::infrastructure::DescriptorReader;
use tracing::{debug, info, instrument, warn};

use crate::application::errors::ProcessError;
use crate::application::settings::{PersistenceStrategy, ProcessorSettings};
use crate::domain::{ManagedFlag, Metadata, PropertyBag, Session, VersionInfoProvider};
use crate::services::plugins::{
    EXTENSION_VERSION, add_attach_plugin, add_flatten_plugin, is_flatten_plugin_declared,
};
use crate::services::registry::SessionRegistry;

/// What a descriptor read did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No session for this build, version computation was skipped
    Inactive,
    /// The descriptor has no file location
    NoSource,
    /// The descriptor lives under an excluded directory
    Ignored,
    /// The descriptor belongs to a build with another root group id
    ForeignRoot,
    /// The descriptor is not (yet) a known project of this build
    OutOfScope,
    /// Versions were rewritten and the session stored
    Provisioned,
}

impl Outcome {
    pub fn is_provisioned(self) -> bool {
        self == Self::Provisioned
    }
}

/// Rewrites descriptor versions with the calculated version of the build
pub struct ReactorModelProcessor {
    registry: SessionRegistry,
    gate: Arc<dyn ConfigurationGate>,
    reader: Arc<dyn DescriptorReader>,
    settings: ProcessorSettings,
}

impl ReactorModelProcessor {
    pub fn new(
        registry: SessionRegistry,
        gate: Arc<dyn ConfigurationGate>,
        reader: Arc<dyn DescriptorReader>,
        settings: ProcessorSettings,
    ) -> Self {
        Self {
            registry,
            gate,
            reader,
            settings,
        }
    }

    pub fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    /// Build-session initialisation: publish a session, unless skipped
    pub fn start_build(
        &mut self,
        provider: Arc<dyn VersionInfoProvider>,
        root_directory: &Path,
        bag: &mut dyn PropertyBag,
    ) -> Result<Option<Session>, ProcessError> {
        if self.settings.skip {
            self.registry.skip();
            return Ok(None);
        }

        let session = self.registry.initialize(provider, root_directory, bag)?;
        Ok(Some(session))
    }

    /// The session of this build as currently stored in `bag`
    pub fn active_session(
        &mut self,
        bag: &dyn PropertyBag,
    ) -> Result<Option<Session>, ProcessError> {
        Ok(self.registry.active_session(bag)?)
    }

    /// Read the descriptor at `path` and provision it
    pub fn read_file(
        &mut self,
        path: &Path,
        bag: &mut dyn PropertyBag,
    ) -> Result<(Model, Outcome), ProcessError> {
        let mut model = self.reader.read(path)?;
        let outcome = self.provision(&mut model, Some(path), bag)?;
        Ok((model, outcome))
    }

    /// Rewrite `model` in place for the current build
    ///
    /// `location` is the descriptor file the model was read from. Module
    /// discovery only runs when it names a regular file.
    #[instrument(skip(self, model, bag))]
    pub fn provision(
        &mut self,
        model: &mut Model,
        location: Option<&Path>,
        bag: &mut dyn PropertyBag,
    ) -> Result<Outcome, ProcessError> {
        let Some(mut session) = self.registry.active_session(bag)? else {
            return Ok(Outcome::Inactive);
        };
        let Some(location) = location else {
            return Ok(Outcome::NoSource);
        };

        // fails before any mutation of the model or the session
        let configuration = self
            .gate
            .effective_config()
            .map_err(|source| ProcessError::Configuration {
                path: location.to_path_buf(),
                source,
            })?;

        if self.gate.is_ignored(location) {
            debug!(path = %location.display(), "Descriptor ignored by configuration");
            return Ok(Outcome::Ignored);
        }

        info!(path = %location.display(), "Processing descriptor");
        let calculated_version = session.calculated_version().to_string();

        // identity as declared, before any rewrite
        let project = Gav::from_model(model);

        match session.root_group_id() {
            None => {
                session.establish_root(project.group_id());
                register(&mut session, project.clone(), model.version.as_deref());
            }
            Some(root) if root != project.group_id() => {
                debug!(path = %location.display(), root, "Skipping descriptor of another build");
                return Ok(Outcome::ForeignRoot);
            }
            Some(_) => {}
        }

        if !session.contains(&project) {
            debug!(artifact = %project, "Descriptor is not part of the reactor yet");
            return Ok(Outcome::OutOfScope);
        }

        if location.is_file() {
            self.discover_modules(&mut session, model, location);
        }

        let initial_project_version = model
            .version
            .as_mut()
            .map(|version| std::mem::replace(version, calculated_version.clone()));

        let mut initial_parent_version = None;
        if let Some(parent) = model.parent.as_mut() {
            initial_parent_version = parent.version.clone();
            let parent_gav = Gav::from_parent(parent);
            if session.contains(&parent_gav)
                || is_version_shared(
                    initial_project_version.as_deref(),
                    initial_parent_version.as_deref(),
                )
            {
                register(&mut session, parent_gav, initial_parent_version.as_deref());
                parent.version = Some(calculated_version.clone());
            }
        }

        for dependency in &mut model.dependencies {
            let dependency_gav = Gav::from_dependency(dependency);
            let references_own_version = is_placeholder(dependency.version.as_deref())
                && dependency.version == initial_project_version;

            if session.contains(&dependency_gav) || references_own_version {
                register(
                    &mut session,
                    dependency_gav,
                    initial_parent_version.as_deref(),
                );
                dependency.version = Some(calculated_version.clone());
            }
        }

        if session.managed_flag(&project).is_some_and(ManagedFlag::is_unset) {
            let managed = self.manage_plugin_addition(model, &project, &configuration);
            session
                .resolve_managed(&project, managed)
                .map_err(|source| ProcessError::Session {
                    path: location.to_path_buf(),
                    source,
                })?;
        }

        update_scm_tag(&session, model);

        self.registry
            .store(session, bag)
            .map_err(|source| ProcessError::SessionEncoding {
                path: location.to_path_buf(),
                source,
            })?;

        Ok(Outcome::Provisioned)
    }

    /// Register the modules declared by the descriptor at `location`
    ///
    /// Failures are logged and the module skipped. A module descriptor that
    /// cannot be parsed is not registered but its path is still recorded.
    fn discover_modules(&self, session: &mut Session, model: &Model, location: &Path) {
        if model.modules.is_empty() {
            return;
        }

        let directory = match location.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let directory = match directory.canonicalize() {
            Ok(directory) => directory,
            Err(e) => {
                warn!(
                    path = %directory.display(),
                    error = %e,
                    "Cannot resolve descriptor directory"
                );
                return;
            }
        };

        for module in &model.modules {
            let mut module_path = directory.join(module);
            if !module_path.exists() {
                info!(path = %module_path.display(), "Declared module not found");
                continue;
            }
            if module_path.is_dir() {
                module_path.push(self.reader.file_name());
            }

            let module_path = match module_path.canonicalize() {
                Ok(path) => path,
                Err(e) => {
                    warn!(
                        path = %module_path.display(),
                        error = %e,
                        "Cannot read module descriptor"
                    );
                    continue;
                }
            };
            let Some(recorded_path) = module_path.to_str().map(str::to_owned) else {
                warn!(
                    path = %module_path.display(),
                    "Module descriptor path is not valid UTF-8, skipping"
                );
                continue;
            };

            match self.reader.read(&module_path) {
                Ok(module_model) => {
                    let module_version = module_model.version.clone();
                    register(
                        session,
                        Gav::from_model(&module_model),
                        module_version.as_deref(),
                    );
                }
                Err(e @ ParseError::Io { .. }) => {
                    warn!(error = %e, "Cannot read module descriptor");
                    continue;
                }
                Err(e) => {
                    warn!(
                        path = %module_path.display(),
                        error = %e,
                        "Cannot parse module descriptor"
                    );
                }
            }

            debug!(path = %recorded_path, "Module descriptor recorded");
            session.add_module_pom_path(recorded_path);
        }
    }

    /// Pick the persistence mechanism for `project`; returns true when a
    /// plugin execution was added
    fn manage_plugin_addition(
        &self,
        model: &mut Model,
        project: &Gav,
        configuration: &Configuration,
    ) -> bool {
        match self.settings.strategy {
            PersistenceStrategy::Flatten if configuration.skip_pom_update => {
                info!(
                    artifact = %project,
                    "Pom update skipped, no flatten plugin execution is defined"
                );
                false
            }
            PersistenceStrategy::Flatten if is_flatten_plugin_declared(model) => {
                info!(
                    artifact = %project,
                    "Flatten plugin already declared, keeping the declared execution"
                );
                false
            }
            PersistenceStrategy::Flatten => {
                info!(
                    artifact = %project,
                    version = %self.settings.flatten_version,
                    phase = self.settings.flatten_phase(),
                    "Adding flatten plugin execution"
                );
                add_flatten_plugin(
                    model,
                    &self.settings.flatten_version,
                    self.settings.flatten_phase(),
                );
                true
            }
            PersistenceStrategy::Attach => {
                info!(
                    artifact = %project,
                    phase = self.settings.attach_phase(),
                    "Adding attach-modified-poms execution"
                );
                add_attach_plugin(model, EXTENSION_VERSION, self.settings.attach_phase());
                true
            }
        }
    }
}

/// Add `gav` to the known projects, logging the first registration only
fn register(session: &mut Session, gav: Gav, logged_version: Option<&str>) {
    if session.contains(&gav) {
        return;
    }
    info!(artifact = %gav, version = ?logged_version, "Handling artifact version");
    session.add_project(gav);
}

fn update_scm_tag(session: &Session, model: &mut Model) {
    let Some(scm) = model.scm.as_mut() else {
        return;
    };
    let Some(provider) = session.provider() else {
        debug!("No version provider attached, scm tag left untouched");
        return;
    };

    if is_version_from_tag(provider.as_ref()) {
        scm.tag = Some(session.calculated_version().to_string());
    } else if let Some(commit) = provider.meta(Metadata::GitSha1Full) {
        scm.tag = Some(commit);
    }
}

/// True when the base tag is one of the annotated version tags on HEAD
fn is_version_from_tag(provider: &dyn VersionInfoProvider) -> bool {
    let head_tags = provider
        .meta(Metadata::HeadVersionAnnotatedTags)
        .unwrap_or_default();
    let base_tag = provider.meta(Metadata::BaseTag).unwrap_or_default();
    head_tags.split(',').any(|tag| tag == base_tag)
}
