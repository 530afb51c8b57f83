use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One level of a lockfile dependency tree
///
/// The root node is the project itself; every node reachable through
/// `dependencies` is a package. Nodes are built by structural validation
/// of the raw JSON: a `version` that is not a string is ignored, a
/// `dependencies` value that is not an object is treated as empty, and a
/// child that is not an object becomes an empty node. Malformed input
/// therefore never fails to load, it just contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct DependencyNode {
    version: Option<String>,
    dependencies: IndexMap<String, DependencyNode>,
}

impl DependencyNode {
    pub fn new(version: Option<String>) -> Self {
        Self {
            version,
            dependencies: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a child dependency, keeping declaration order
    pub fn with_dependency(mut self, name: impl Into<String>, node: DependencyNode) -> Self {
        self.dependencies.insert(name.into(), node);
        self
    }

    /// Parses a lockfile document
    ///
    /// # Errors
    /// Returns an error only when the input is not valid JSON.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &DependencyNode)> {
        self.dependencies
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

impl From<Value> for DependencyNode {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        let version = match fields.remove("version") {
            Some(Value::String(version)) => Some(version),
            _ => None,
        };

        let dependencies = match fields.remove("dependencies") {
            Some(Value::Object(children)) => children
                .into_iter()
                .map(|(name, child)| (name, DependencyNode::from(child)))
                .collect(),
            _ => IndexMap::new(),
        };

        Self {
            version,
            dependencies,
        }
    }
}
