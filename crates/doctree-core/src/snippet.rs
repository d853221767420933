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

//! The snippet-parsing strategy seam.

use crate::Node;
use thiserror::Error;

/// A fragment of text failed to parse as a structured value.
///
/// Callers that use snippet parsing opportunistically (try structured,
/// else keep the raw text) treat any `SnippetError` as "not structured"
/// and never inspect it further; the message exists for diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("snippet parse error: {message}")]
pub struct SnippetError {
    message: String,
}

impl SnippetError {
    /// Create an error with a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Strategy for interpreting a fragment of raw text as a structured value.
///
/// Decoders of flat formats (delimited text, key=value lines, ...) use a
/// `SnippetParser` to decide what a piece of cell text *means*: a grammar
/// implementation may recognize `[2, 3]` as a sequence or `42` as an
/// integer. All typing decisions live behind this one method, so the
/// grammar can be swapped without touching the decoder.
///
/// Any closure `Fn(&str) -> Result<Node, SnippetError>` is a
/// `SnippetParser`, which keeps tests and ad hoc strategies cheap:
///
/// ```
/// use doctree_core::{Node, SnippetError, SnippetParser};
///
/// let ints_only = |text: &str| {
///     text.parse::<i64>()
///         .map(Node::from)
///         .map_err(|e| SnippetError::new(e.to_string()))
/// };
///
/// assert_eq!(ints_only.parse("17").unwrap(), Node::from(17));
/// assert!(ints_only.parse("seventeen").is_err());
/// ```
pub trait SnippetParser {
    /// Attempt to parse `text` as a self-contained structured value.
    ///
    /// An `Err` carries no obligation on the caller beyond "do not use
    /// the text as structured data".
    fn parse(&self, text: &str) -> Result<Node, SnippetError>;
}

impl<F> SnippetParser for F
where
    F: Fn(&str) -> Result<Node, SnippetError>,
{
    fn parse(&self, text: &str) -> Result<Node, SnippetError> {
        self(text)
    }
}
