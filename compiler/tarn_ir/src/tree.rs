//! The labeled parse tree consumed by the compiler.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::Tag;

/// One node of the input parse tree.
///
/// Trees are built once by an external reader and handed to the compiler,
/// which only ever reads them. The serde representation is
/// `{"tag": ..., "attributes": {...}, "children": [...]}` with the last two
/// fields optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    /// The node's tag, e.g. `"begin"` or `"call"`.
    pub tag: String,
    /// String-keyed attributes (`name`, `value`, `fun`, ...).
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub attributes: FxHashMap<String, String>,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a node with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        ParseNode {
            tag: tag.into(),
            attributes: FxHashMap::default(),
            children: Vec::new(),
        }
    }

    /// Add (or replace) an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: ParseNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ParseNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value.
    #[inline]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The grammar tag, if the spelling is one the compiler knows.
    #[inline]
    pub fn kind(&self) -> Option<Tag> {
        Tag::from_name(&self.tag)
    }
}
