//! Plugin executions that persist the rewritten version
//!
//! Two strategies exist: register a flatten plugin execution that writes a
//! resolved descriptor, or register this extension's own goal that attaches
//! the modified descriptor to the build. Both are idempotent against repeated
//! reads of the same descriptor.

use reactorver_core::domain::{Dependency, Model, Plugin, PluginExecution, XmlNode};

pub const FLATTEN_GROUP_ID: &str = "org.codehaus.mojo";
pub const FLATTEN_ARTIFACT_ID: &str = "flatten-maven-plugin";
pub const FLATTEN_EXECUTION_ID: &str = "reactorver-flatten-pom";
pub const FLATTEN_GOAL: &str = "flatten";

pub const EXTENSION_GROUP_ID: &str = "io.reactorver";
pub const EXTENSION_ARTIFACT_ID: &str = "reactorver-maven-plugin";
pub const ATTACH_MODIFIED_POMS_GOAL: &str = "attach-modified-poms";

/// Version of the extension plugin, embedded at build time
pub const EXTENSION_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Descriptor elements the flatten plugin resolves
const RESOLVED_POM_ELEMENTS: [&str; 24] = [
    "build",
    "ciManagement",
    "contributors",
    "dependencies",
    "description",
    "developers",
    "distributionManagement",
    "inceptionYear",
    "issueManagement",
    "mailingLists",
    "modules",
    "name",
    "organization",
    "parent",
    "pluginManagement",
    "pluginRepositories",
    "prerequisites",
    "profiles",
    "properties",
    "reporting",
    "repositories",
    "scm",
    "url",
    "version",
];

/// Returns true when the author already declared the flatten plugin
pub fn is_flatten_plugin_declared(model: &Model) -> bool {
    model
        .plugins()
        .iter()
        .any(|p| p.is(FLATTEN_GROUP_ID, FLATTEN_ARTIFACT_ID))
}

/// Append a flatten plugin with a single execution bound to `phase`
pub fn add_flatten_plugin(model: &mut Model, plugin_version: &str, phase: &str) {
    let mut plugin = Plugin::new(FLATTEN_GROUP_ID, FLATTEN_ARTIFACT_ID, plugin_version);
    plugin.executions.push(PluginExecution {
        id: Some(FLATTEN_EXECUTION_ID.to_string()),
        phase: Some(phase.to_string()),
        goals: vec![FLATTEN_GOAL.to_string()],
        configuration: Some(flatten_configuration()),
    });

    model.build_mut().plugins.push(plugin);
}

/// Execution configuration of the flatten plugin
pub fn flatten_configuration() -> XmlNode {
    let mut pom_elements = XmlNode::new("pomElements");
    pom_elements.add_child(XmlNode::with_value("dependencyManagement", "keep"));
    for element in RESOLVED_POM_ELEMENTS {
        pom_elements.add_child(XmlNode::with_value(element, "resolve"));
    }

    let mut configuration = XmlNode::new("configuration");
    configuration.add_child(XmlNode::with_value("flattenMode", "defaults"));
    configuration.add_child(XmlNode::with_value("updatePomFile", "true"));
    configuration.add_child(pom_elements);
    configuration
}

/// Ensure the extension plugin runs `attach-modified-poms` at `phase`
///
/// Reuses an existing plugin declaration (prepending one otherwise), an
/// existing execution bound to the phase, an existing goal and an existing
/// plugin-scoped dependency on the extension.
pub fn add_attach_plugin(model: &mut Model, plugin_version: &str, phase: &str) {
    let plugins = &mut model.build_mut().plugins;

    let index = match plugins
        .iter()
        .position(|p| p.matches(EXTENSION_GROUP_ID, EXTENSION_ARTIFACT_ID))
    {
        Some(index) => index,
        None => {
            plugins.insert(
                0,
                Plugin::new(EXTENSION_GROUP_ID, EXTENSION_ARTIFACT_ID, plugin_version),
            );
            0
        }
    };
    let plugin = &mut plugins[index];

    let execution = match plugin
        .executions
        .iter()
        .position(|e| e.phase.as_deref().is_some_and(|p| p.eq_ignore_ascii_case(phase)))
    {
        Some(position) => &mut plugin.executions[position],
        None => {
            plugin.executions.push(PluginExecution {
                phase: Some(phase.to_string()),
                ..Default::default()
            });
            let last = plugin.executions.len() - 1;
            &mut plugin.executions[last]
        }
    };

    if !execution.goals.iter().any(|g| g == ATTACH_MODIFIED_POMS_GOAL) {
        execution.goals.push(ATTACH_MODIFIED_POMS_GOAL.to_string());
    }

    if !plugin
        .dependencies
        .iter()
        .any(|d| d.matches(EXTENSION_GROUP_ID, EXTENSION_ARTIFACT_ID))
    {
        plugin.dependencies.push(Dependency::new(
            EXTENSION_GROUP_ID,
            EXTENSION_ARTIFACT_ID,
            Some(plugin_version.to_string()),
        ));
    }
}
