//! Version string helpers

/// Placeholder that always resolves to the declaring project's own version
pub const PROJECT_VERSION: &str = "${project.version}";

/// Returns true when the version is a symbolic `${...}` placeholder,
/// resolved later by property interpolation
pub fn is_placeholder(version: Option<&str>) -> bool {
    version.is_some_and(|v| v.starts_with("${") && v.ends_with('}'))
}

/// Returns true when a project and its parent are bound to the same version:
/// the project inherits its version, both use the same placeholder, or the
/// parent reference is `${project.version}`.
pub fn is_version_shared(project_version: Option<&str>, parent_version: Option<&str>) -> bool {
    project_version.is_none()
        || (is_placeholder(project_version) && project_version == parent_version)
        || parent_version == Some(PROJECT_VERSION)
}
