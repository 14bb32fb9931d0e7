//! Project nodes and their capability tags.
//!
//! A [`ProjectNode`] is one project in a multi-project build: a stable
//! identity, the capability tags its build evaluation declared, and the
//! ordered identities of the projects it references.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identity of a project, typically its canonical project file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a new project ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for ProjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Capability tags the profile classifier reacts to.
///
/// Tags are matched exactly (ordinal, case-sensitive). Any other tag is
/// carried on the node but ignored by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCapability {
    /// The project hosts an ASP.NET Core server runtime.
    AspNetCore,
    /// The project compiles to WebAssembly.
    WebAssembly,
}

impl KnownCapability {
    /// The tag string as declared by build evaluation.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::AspNetCore => "AspNetCore",
            Self::WebAssembly => "WebAssembly",
        }
    }

    /// Recognize a declared tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AspNetCore" => Some(Self::AspNetCore),
            "WebAssembly" => Some(Self::WebAssembly),
            _ => None,
        }
    }
}

impl fmt::Display for KnownCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordered set of capability tags declared on a node.
///
/// Declaration order is preserved because classification scans tags in the
/// order they were declared. A repeated tag keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Capabilities(Vec<String>);

impl Capabilities {
    /// An empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no tags were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `tag` was declared.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }
}

impl From<Vec<String>> for Capabilities {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<Capabilities> for Vec<String> {
    fn from(caps: Capabilities) -> Self {
        caps.0
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in iter {
            let tag = tag.into();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self(tags)
    }
}

/// Read-only capability lookup for a node.
///
/// Undeclared tags are simply absent; a lookup never fails.
pub trait CapabilityIndex {
    /// Returns `true` if the node declares `tag`.
    fn has_capability(&self, tag: &str) -> bool;

    /// Returns `true` if the node declares the well-known capability.
    fn has_known(&self, capability: KnownCapability) -> bool {
        self.has_capability(capability.tag())
    }
}

impl CapabilityIndex for Capabilities {
    fn has_capability(&self, tag: &str) -> bool {
        self.contains(tag)
    }
}

/// A project in the reference graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    id: ProjectId,
    #[serde(default, skip_serializing_if = "Capabilities::is_empty")]
    capabilities: Capabilities,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    references: Vec<ProjectId>,
}

impl ProjectNode {
    /// Create a node with no capabilities and no references.
    pub fn new(id: impl Into<ProjectId>) -> Self {
        Self {
            id: id.into(),
            capabilities: Capabilities::new(),
            references: Vec::new(),
        }
    }

    /// Replace the node's capability tags.
    #[must_use]
    pub fn with_capabilities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = tags.into_iter().collect();
        self
    }

    /// Replace the node's references, keeping the given order.
    #[must_use]
    pub fn with_references<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ProjectId>,
    {
        self.references = refs.into_iter().map(Into::into).collect();
        self
    }

    /// The node's identity.
    #[must_use]
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Declared capability tags.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Referenced identities in declaration order.
    ///
    /// Duplicates are kept: a project listed twice is an edge taken twice.
    #[must_use]
    pub fn references(&self) -> &[ProjectId] {
        &self.references
    }
}

impl CapabilityIndex for ProjectNode {
    fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.contains(tag)
    }
}
