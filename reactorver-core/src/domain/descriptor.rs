//! Project descriptor model
//!
//! In-memory form of a `pom.xml`, limited to the parts version propagation
//! reads or mutates. Every field mirrors what the author declared: inherited
//! values are *not* filled in, so `version: None` means "inherited from the
//! parent".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conventional descriptor file name inside a module directory
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

/// A parsed project descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<Parent>,
    pub modules: Vec<String>,
    pub dependencies: Vec<Dependency>,
    pub build: Option<Build>,
    pub scm: Option<Scm>,
    pub properties: BTreeMap<String, String>,
}

impl Model {
    /// Returns the build section, creating an empty one if absent
    pub fn build_mut(&mut self) -> &mut Build {
        self.build.get_or_insert_with(Build::default)
    }

    /// Plugins declared in the build section, empty when there is none
    pub fn plugins(&self) -> &[Plugin] {
        self.build
            .as_ref()
            .map(|b| b.plugins.as_slice())
            .unwrap_or_default()
    }
}

/// `<parent>` reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub relative_path: Option<String>,
}

/// `<dependency>` reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub r#type: Option<String>,
    pub scope: Option<String>,
    pub classifier: Option<String>,
}

impl Dependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version,
            ..Default::default()
        }
    }

    /// Case-insensitive coordinate match
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        eq_ignore_case(self.group_id.as_deref(), group_id)
            && eq_ignore_case(self.artifact_id.as_deref(), artifact_id)
    }
}

/// `<build>` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub plugins: Vec<Plugin>,
}

/// `<plugin>` declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub executions: Vec<PluginExecution>,
    pub dependencies: Vec<Dependency>,
    pub configuration: Option<XmlNode>,
}

impl Plugin {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
            ..Default::default()
        }
    }

    /// Exact coordinate match
    pub fn is(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id.as_deref() == Some(group_id)
            && self.artifact_id.as_deref() == Some(artifact_id)
    }

    /// Case-insensitive coordinate match
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        eq_ignore_case(self.group_id.as_deref(), group_id)
            && eq_ignore_case(self.artifact_id.as_deref(), artifact_id)
    }
}

/// `<execution>` of a plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginExecution {
    pub id: Option<String>,
    pub phase: Option<String>,
    pub goals: Vec<String>,
    pub configuration: Option<XmlNode>,
}

/// `<scm>` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scm {
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
    pub url: Option<String>,
    pub tag: Option<String>,
}

/// Free-form XML element, used for plugin configuration blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlNode {
    pub name: String,
    pub value: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

fn eq_ignore_case(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case(expected))
}
