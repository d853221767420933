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

//! YAML-backed snippet parsing.

use crate::from_yaml::from_str;
use doctree_core::{Node, SnippetError, SnippetParser};

/// Interprets text fragments as YAML snippets.
///
/// This is the production [`SnippetParser`] for decoders of flat formats:
/// a delimited-text cell holding `[2, 3]` becomes a real sequence node,
/// `42` becomes an integer, and a bare word becomes a string — all typing
/// is YAML's, not the decoder's.
///
/// # Examples
///
/// ```
/// use doctree_core::{Node, SnippetParser};
/// use doctree_yaml::YamlSnippetParser;
///
/// let parser = YamlSnippetParser;
/// assert_eq!(parser.parse("42").unwrap(), Node::from(42));
/// assert!(parser.parse("42").unwrap().is_scalar());
/// assert!(parser.parse("[2, 3]").unwrap().is_sequence());
/// assert!(parser.parse("[2, 3").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSnippetParser;

impl SnippetParser for YamlSnippetParser {
    fn parse(&self, text: &str) -> Result<Node, SnippetError> {
        from_str(text)
            .map(|doc| doc.content)
            .map_err(|err| SnippetError::new(err.to_string()))
    }
}
