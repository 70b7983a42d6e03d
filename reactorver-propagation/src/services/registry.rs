//! Session registry
//!
//! Resolves the single [`Session`] of the current build. The property bag is
//! the source of truth: a resident copy is only reused while the bag still
//! holds exactly what this registry last wrote.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::errors::RegistryError;
use crate::domain::{PropertyBag, Session, VersionInfoProvider};

/// Property key holding the encoded session
pub const SESSION_PROPERTY_KEY: &str = "reactorver-session";

#[derive(Debug, Clone)]
enum RegistryState {
    /// Nothing seen yet by this instance
    Fresh,
    /// Version computation was skipped for this build
    Skipped,
    /// A session exists; `encoded` is the bag value it corresponds to
    Active { session: Session, encoded: String },
}

pub struct SessionRegistry {
    provider: Option<Arc<dyn VersionInfoProvider>>,
    state: RegistryState,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            provider: None,
            state: RegistryState::Fresh,
        }
    }

    /// Registry that re-attaches `provider` to sessions restored from the bag
    pub fn with_provider(provider: Arc<dyn VersionInfoProvider>) -> Self {
        Self {
            provider: Some(provider),
            state: RegistryState::Fresh,
        }
    }

    /// Create the build session and publish it into the bag
    pub fn initialize(
        &mut self,
        provider: Arc<dyn VersionInfoProvider>,
        root_directory: &Path,
        bag: &mut dyn PropertyBag,
    ) -> Result<Session, RegistryError> {
        let session = Session::new(provider.clone(), root_directory);
        info!(
            version = session.calculated_version(),
            root = %root_directory.display(),
            "Build session initialized"
        );

        self.provider = Some(provider);
        self.store(session.clone(), bag)?;
        Ok(session)
    }

    /// Record that no session will exist for this build
    pub fn skip(&mut self) {
        info!("Version computation skipped, descriptors are left untouched");
        self.state = RegistryState::Skipped;
    }

    /// The session of this build, or `None` when propagation is inactive
    pub fn active_session(
        &mut self,
        bag: &dyn PropertyBag,
    ) -> Result<Option<Session>, RegistryError> {
        let Some(stored) = bag.get(SESSION_PROPERTY_KEY) else {
            return match self.state {
                RegistryState::Active { .. } => Err(RegistryError::MissingSession {
                    key: SESSION_PROPERTY_KEY,
                }),
                _ => Ok(None),
            };
        };

        match &self.state {
            RegistryState::Skipped => return Ok(None),
            RegistryState::Active { session, encoded } if *encoded == stored => {
                return Ok(Some(session.clone()));
            }
            _ => {}
        }

        debug!("Restoring session from build properties");
        let mut session = Session::decode(&stored).map_err(|source| RegistryError::Restore {
            key: SESSION_PROPERTY_KEY,
            source,
        })?;
        if let Some(provider) = &self.provider {
            session.attach_provider(provider.clone());
        }
        self.state = RegistryState::Active {
            session: session.clone(),
            encoded: stored,
        };
        Ok(Some(session))
    }

    /// Encode `session` into the bag and keep it resident
    pub fn store(
        &mut self,
        session: Session,
        bag: &mut dyn PropertyBag,
    ) -> Result<(), RegistryError> {
        let encoded = session.encode().map_err(|source| RegistryError::Store {
            key: SESSION_PROPERTY_KEY,
            source,
        })?;
        bag.set(SESSION_PROPERTY_KEY, encoded.clone());
        self.state = RegistryState::Active { session, encoded };
        Ok(())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
