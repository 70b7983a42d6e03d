//! Maven descriptor reader

use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;

use super::traits::DescriptorReader;
use crate::application::errors::ParseError;
use crate::domain::descriptor::{
    Build, Dependency, Model, Parent, Plugin, PluginExecution, Scm, XmlNode,
};

/// Reader for Maven pom.xml files
#[derive(Debug, Clone, Copy, Default)]
pub struct PomReader;

impl PomReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse descriptor content into a [`Model`]
    pub fn read_str(&self, content: &str) -> Result<Model, ParseError> {
        self.read_bytes(content.as_bytes())
    }

    /// Parse raw descriptor bytes, honouring the encoding named in the XML
    /// declaration (UTF-8 when absent)
    pub fn read_bytes(&self, content: &[u8]) -> Result<Model, ParseError> {
        let root = Self::read_tree(content)?;
        if root.name != "project" {
            return Err(ParseError::UnexpectedRoot { element: root.name });
        }
        Ok(Self::model_from(&root))
    }

    /// Build a generic element tree from XML content using quick-xml
    fn read_tree(content: &[u8]) -> Result<XmlNode, ParseError> {
        let mut reader = Reader::from_reader(content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            let position = reader.buffer_position() as u64;
            let xml_error = |message: String| ParseError::Xml { position, message };
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let qname = e.name();
                    let name = reader
                        .decoder()
                        .decode(qname.as_ref())
                        .map_err(|e| xml_error(e.to_string()))?;
                    stack.push(XmlNode::new(name.into_owned()));
                }
                Ok(Event::Empty(e)) => {
                    let qname = e.name();
                    let name = reader
                        .decoder()
                        .decode(qname.as_ref())
                        .map_err(|e| xml_error(e.to_string()))?;
                    Self::attach(&mut stack, &mut root, XmlNode::new(name.into_owned()));
                }
                Ok(Event::End(_)) => {
                    if let Some(node) = stack.pop() {
                        Self::attach(&mut stack, &mut root, node);
                    }
                }
                Ok(Event::Text(t)) => {
                    let raw = reader
                        .decoder()
                        .decode(&t)
                        .map_err(|e| xml_error(e.to_string()))?;
                    let txt = unescape(&raw).map_err(|e| xml_error(e.to_string()))?;
                    Self::append_text(&mut stack, txt.trim());
                }
                Ok(Event::CData(c)) => {
                    let txt = reader
                        .decoder()
                        .decode(&c)
                        .map_err(|e| xml_error(e.to_string()))?;
                    Self::append_text(&mut stack, txt.trim());
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(xml_error(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::Xml {
                position: reader.buffer_position() as u64,
                message: format!("unclosed element '{}'", open.name),
            });
        }

        root.ok_or(ParseError::Empty)
    }

    fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
        match stack.last_mut() {
            Some(parent) => parent.add_child(node),
            None => {
                if root.is_none() {
                    *root = Some(node);
                }
            }
        }
    }

    fn append_text(stack: &mut [XmlNode], text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(node) = stack.last_mut() {
            match node.value.as_mut() {
                Some(value) => value.push_str(text),
                None => node.value = Some(text.to_string()),
            }
        }
    }

    fn model_from(project: &XmlNode) -> Model {
        Model {
            group_id: text_of(project, "groupId"),
            artifact_id: text_of(project, "artifactId"),
            version: text_of(project, "version"),
            packaging: text_of(project, "packaging"),
            parent: project.child("parent").map(|p| Parent {
                group_id: text_of(p, "groupId"),
                artifact_id: text_of(p, "artifactId"),
                version: text_of(p, "version"),
                relative_path: text_of(p, "relativePath"),
            }),
            modules: list_of(project, "modules", "module")
                .filter_map(|m| m.value.clone())
                .collect(),
            dependencies: list_of(project, "dependencies", "dependency")
                .map(Self::dependency_from)
                .collect(),
            build: project.child("build").map(|b| Build {
                plugins: list_of(b, "plugins", "plugin")
                    .map(Self::plugin_from)
                    .collect(),
            }),
            scm: project.child("scm").map(|s| Scm {
                connection: text_of(s, "connection"),
                developer_connection: text_of(s, "developerConnection"),
                url: text_of(s, "url"),
                tag: text_of(s, "tag"),
            }),
            properties: project
                .child("properties")
                .map(|props| {
                    props
                        .children
                        .iter()
                        .map(|p| (p.name.clone(), p.value.clone().unwrap_or_default()))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    fn dependency_from(node: &XmlNode) -> Dependency {
        Dependency {
            group_id: text_of(node, "groupId"),
            artifact_id: text_of(node, "artifactId"),
            version: text_of(node, "version"),
            r#type: text_of(node, "type"),
            scope: text_of(node, "scope"),
            classifier: text_of(node, "classifier"),
        }
    }

    fn plugin_from(node: &XmlNode) -> Plugin {
        Plugin {
            group_id: text_of(node, "groupId"),
            artifact_id: text_of(node, "artifactId"),
            version: text_of(node, "version"),
            executions: list_of(node, "executions", "execution")
                .map(|e| PluginExecution {
                    id: text_of(e, "id"),
                    phase: text_of(e, "phase"),
                    goals: list_of(e, "goals", "goal")
                        .filter_map(|g| g.value.clone())
                        .collect(),
                    configuration: e.child("configuration").cloned(),
                })
                .collect(),
            dependencies: list_of(node, "dependencies", "dependency")
                .map(Self::dependency_from)
                .collect(),
            configuration: node.child("configuration").cloned(),
        }
    }
}

impl DescriptorReader for PomReader {
    fn read(&self, path: &Path) -> Result<Model, ParseError> {
        let content = std::fs::read(path).map_err(|e| ParseError::io(path, e))?;
        self.read_bytes(&content)
    }
}

fn text_of(node: &XmlNode, name: &str) -> Option<String> {
    node.child(name)
        .and_then(|c| c.value.clone())
        .filter(|v| !v.is_empty())
}

fn list_of<'a>(
    node: &'a XmlNode,
    container: &str,
    entry: &'a str,
) -> impl Iterator<Item = &'a XmlNode> + 'a {
    node.child(container)
        .into_iter()
        .flat_map(move |c| c.children.iter().filter(move |n| n.name == entry))
}
