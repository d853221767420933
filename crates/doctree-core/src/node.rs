// Doctree - Generic Structured Document Toolkit
//
// Copyright (c) 2026 Doctree contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The generic document tree: scalars, sequences, mappings, documents.

use std::fmt;

/// A typed leaf value.
///
/// Scalars carry the interpretation a front end assigned to a piece of
/// text. Decoders that perform no interpretation of their own construct
/// [`Scalar::String`] values with the raw text preserved verbatim.
///
/// # Examples
///
/// ```
/// use doctree_core::Scalar;
///
/// let s = Scalar::from("hello");
/// assert_eq!(s.as_str(), Some("hello"));
/// assert!(!s.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Null / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
}

impl Scalar {
    /// Returns true if this scalar is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the scalar as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the scalar as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the scalar as a float.
    ///
    /// Integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the scalar as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// An insertion-ordered key/value mapping.
///
/// Entry order is preserved exactly as pushed; lookups scan linearly.
/// This matches the document model of structured-text formats, where key
/// order is significant and must survive a decode/encode round trip.
///
/// Duplicate keys are permitted (the tree records what the input said);
/// [`Mapping::get`] returns the first match.
///
/// # Examples
///
/// ```
/// use doctree_core::{Mapping, Node};
///
/// let mut map = Mapping::new();
/// map.push("b", Node::from(2));
/// map.push("a", Node::from(1));
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.get("a"), Some(&Node::from(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Get the value for `key`, if present (first match wins).
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A node of the generic document tree.
///
/// # Examples
///
/// ```
/// use doctree_core::Node;
///
/// let list = Node::Sequence(vec![Node::from(1), Node::from(2)]);
/// assert_eq!(list.kind_name(), "seq");
/// assert_eq!(list.as_sequence().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf value.
    Scalar(Scalar),
    /// An ordered list of nodes.
    Sequence(Vec<Node>),
    /// An insertion-ordered key/value mapping.
    Mapping(Mapping),
}

impl Node {
    /// Construct a null scalar node.
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Construct a string scalar node with `text` preserved verbatim.
    pub fn string(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(text.into()))
    }

    /// Short kind label for diagnostics: `"scalar"`, `"seq"` or `"map"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "seq",
            Self::Mapping(_) => "map",
        }
    }

    /// Returns true if this node is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if this node is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns true if this node is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Try to get the node as a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the node as a string slice (string scalars only).
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Try to get the node as a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the node as a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Int(n))
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

/// Root container of a parsed document.
///
/// Holds exactly one top-level content node, whatever its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The single top-level content node.
    pub content: Node,
}

impl Document {
    /// Create a document wrapping `content`.
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let mut map = Mapping::new();
        map.push("zebra", Node::from(1));
        map.push("apple", Node::from(2));
        map.push("mango", Node::from(3));

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_mapping_get_first_match() {
        let mut map = Mapping::new();
        map.push("k", Node::from(1));
        map.push("k", Node::from(2));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("k"), Some(&Node::from(1)));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_mapping_from_iterator() {
        let map: Mapping = vec![
            ("a".to_string(), Node::from(1)),
            ("b".to_string(), Node::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(&Node::from(2)));
    }

    #[test]
    fn test_scalar_accessors() {
        assert!(Scalar::Null.is_null());
        assert_eq!(Scalar::Bool(true).as_bool(), Some(true));
        assert_eq!(Scalar::Int(42).as_int(), Some(42));
        assert_eq!(Scalar::Int(42).as_float(), Some(42.0));
        assert_eq!(Scalar::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Scalar::from("x").as_str(), Some("x"));
        assert_eq!(Scalar::Int(42).as_str(), None);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Int(-7).to_string(), "-7");
        assert_eq!(Scalar::from("text").to_string(), "text");
    }

    #[test]
    fn test_node_kind_names() {
        assert_eq!(Node::null().kind_name(), "scalar");
        assert_eq!(Node::Sequence(vec![]).kind_name(), "seq");
        assert_eq!(Node::Mapping(Mapping::new()).kind_name(), "map");
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::string("hello");
        assert!(node.is_scalar());
        assert_eq!(node.as_str(), Some("hello"));
        assert!(node.as_sequence().is_none());

        let seq = Node::Sequence(vec![Node::from(1)]);
        assert!(seq.is_sequence());
        assert_eq!(seq.as_sequence().unwrap().len(), 1);

        let map = Node::Mapping(Mapping::new());
        assert!(map.is_mapping());
        assert!(map.as_mapping().unwrap().is_empty());
    }

    #[test]
    fn test_string_node_preserves_whitespace() {
        let node = Node::string("  padded  ");
        assert_eq!(node.as_str(), Some("  padded  "));
    }

    #[test]
    fn test_document_holds_one_content_node() {
        let doc = Document::new(Node::Sequence(vec![]));
        assert!(doc.content.is_sequence());
    }
}
