//! Configuration validation module

use crate::config::{Configuration, LoggingConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Versioning configuration error: {message}")]
    Versioning { message: String },

    #[error("Exclusion configuration error: {message}")]
    Exclusion { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn versioning(message: impl Into<String>) -> Self {
        Self::Versioning {
            message: message.into(),
        }
    }

    pub fn exclusion(message: impl Into<String>) -> Self {
        Self::Exclusion {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for Configuration {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(8..=40).contains(&self.git_commit_id_length) {
            return Err(ValidationError::versioning(format!(
                "git_commit_id_length must be between 8 and 40, got {}",
                self.git_commit_id_length
            )));
        }

        if let Some(pattern) = &self.regex_version_tag
            && pattern.trim().is_empty()
        {
            return Err(ValidationError::versioning(
                "regex_version_tag cannot be blank when set",
            ));
        }

        if self.branch_policies.iter().any(|p| p.pattern.trim().is_empty()) {
            return Err(ValidationError::versioning(
                "branch policy pattern cannot be blank",
            ));
        }

        if self.exclusions.iter().any(|e| e.trim().is_empty()) {
            return Err(ValidationError::exclusion("exclusion entries cannot be empty"));
        }

        self.logging.validate()
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" | "compact" => {}
            other => {
                return Err(ValidationError::logging(format!(
                    "unknown log format '{}', expected json, pretty or compact",
                    other
                )));
            }
        }

        if self.level.trim().is_empty() {
            return Err(ValidationError::logging("log level cannot be empty"));
        }

        Ok(())
    }
}
