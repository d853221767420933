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

//! YAML to doctree conversion.

use crate::error::{Result, YamlError};
use doctree_core::{Document, Mapping, Node};
use serde_yaml::Value as YamlValue;

/// Maximum nesting depth accepted during conversion.
///
/// The limit bounds stack use when walking hostile input. It is enforced
/// by this crate's conversion walk, below the parser's own recursion
/// limit, so callers always observe [`YamlError::TooDeep`] for depth
/// violations rather than a parser-specific failure.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parse a complete YAML document into a [`Document`].
///
/// Key order of mappings is preserved as written. An empty input parses
/// as a document whose content is a null scalar, per YAML semantics.
///
/// # Errors
///
/// - [`YamlError::Parse`] for malformed YAML
/// - [`YamlError::NonScalarKey`] for mapping keys that are not scalars
/// - [`YamlError::TooDeep`] for nesting beyond [`MAX_NESTING_DEPTH`]
///
/// # Examples
///
/// ```
/// use doctree_yaml::from_str;
///
/// let doc = from_str("- 1\n- two\n").unwrap();
/// let items = doc.content.as_sequence().unwrap();
/// assert_eq!(items.len(), 2);
/// ```
pub fn from_str(text: &str) -> Result<Document> {
    let value: YamlValue = serde_yaml::from_str(text)?;
    Ok(Document::new(value_to_node(value, 0)?))
}

fn value_to_node(value: YamlValue, depth: usize) -> Result<Node> {
    if depth > MAX_NESTING_DEPTH {
        return Err(YamlError::TooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    Ok(match value {
        YamlValue::Null => Node::null(),
        YamlValue::Bool(b) => Node::from(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::from(i)
            } else if let Some(f) = n.as_f64() {
                Node::from(f)
            } else {
                // u64 beyond i64 range with no float form; keep the digits.
                Node::string(n.to_string())
            }
        }
        YamlValue::String(s) => Node::from(s),
        YamlValue::Sequence(items) => {
            let converted = items
                .into_iter()
                .map(|item| value_to_node(item, depth + 1))
                .collect::<Result<Vec<Node>>>()?;
            Node::Sequence(converted)
        }
        YamlValue::Mapping(entries) => {
            let mut map = Mapping::with_capacity(entries.len());
            for (key, item) in entries {
                map.push(scalar_key(&key, depth)?, value_to_node(item, depth + 1)?);
            }
            Node::Mapping(map)
        }
        // Tags carry no structure of their own; convert the inner value.
        YamlValue::Tagged(tagged) => value_to_node(tagged.value, depth)?,
    })
}

fn scalar_key(key: &YamlValue, depth: usize) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        _ => Err(YamlError::NonScalarKey { depth }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctree_core::Scalar;

    #[test]
    fn test_scalar_document() {
        let doc = from_str("42").unwrap();
        assert_eq!(doc.content, Node::from(42));
    }

    #[test]
    fn test_empty_input_is_null() {
        let doc = from_str("").unwrap();
        assert_eq!(doc.content, Node::null());
    }

    #[test]
    fn test_mapping_key_order_preserved() {
        let doc = from_str("z: 1\na: 2\nm: 3\n").unwrap();
        let map = doc.content.as_mapping().unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_nested_structures() {
        let doc = from_str("outer:\n  inner: [1, 2.5, true, ~]\n").unwrap();
        let outer = doc.content.as_mapping().unwrap();
        let inner = outer
            .get("outer")
            .and_then(Node::as_mapping)
            .and_then(|m| m.get("inner"))
            .and_then(Node::as_sequence)
            .unwrap();

        assert_eq!(inner[0], Node::from(1));
        assert_eq!(inner[1], Node::from(2.5));
        assert_eq!(inner[2], Node::from(true));
        assert_eq!(inner[3], Node::null());
    }

    #[test]
    fn test_numeric_keys_become_strings() {
        let doc = from_str("1: one\ntrue: yes-key\n").unwrap();
        let map = doc.content.as_mapping().unwrap();
        assert_eq!(map.get("1").unwrap().as_str(), Some("one"));
        assert_eq!(map.get("true").unwrap().as_str(), Some("yes-key"));
    }

    #[test]
    fn test_non_scalar_key_rejected() {
        let err = from_str("[1, 2]: value\n").unwrap_err();
        assert!(matches!(err, YamlError::NonScalarKey { depth: 0 }));
    }

    #[test]
    fn test_depth_limit() {
        let depth = MAX_NESTING_DEPTH + 5;
        let text = format!("{}x{}", "[".repeat(depth), "]".repeat(depth));
        let err = from_str(&text).unwrap_err();
        assert!(matches!(err, YamlError::TooDeep { .. }));
    }

    #[test]
    fn test_malformed_input() {
        let err = from_str("[1, 2").unwrap_err();
        assert!(matches!(err, YamlError::Parse(_)));
    }

    #[test]
    fn test_tagged_value_unwraps() {
        let doc = from_str("!custom 7").unwrap();
        assert_eq!(doc.content.as_scalar(), Some(&Scalar::Int(7)));
    }
}
