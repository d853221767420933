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

//! Core document tree model shared by all doctree format decoders.
//!
//! Every front end (YAML, delimited text, ...) produces the same generic,
//! order-preserving tree so that downstream processing never needs a
//! format-specific code path. The model has three node kinds:
//!
//! - [`Scalar`] — a typed leaf value (null, bool, int, float, string)
//! - [`Node::Sequence`] — an ordered list of nodes
//! - [`Mapping`] — an insertion-ordered list of key/value entries
//!
//! A [`Document`] is the root container holding exactly one content node.
//!
//! This crate also defines [`SnippetParser`], the strategy interface a
//! decoder uses to interpret a fragment of raw text as a structured value
//! (for example a delimited-text cell containing an inline list).
//!
//! # Examples
//!
//! ```
//! use doctree_core::{Document, Mapping, Node};
//!
//! let mut row = Mapping::new();
//! row.push("name", Node::string("alice"));
//! row.push("age", Node::from(30));
//!
//! let doc = Document::new(Node::Sequence(vec![Node::Mapping(row)]));
//! let rows = doc.content.as_sequence().unwrap();
//! assert_eq!(rows.len(), 1);
//! ```

mod node;
mod snippet;

pub use node::{Document, Mapping, Node, Scalar};
pub use snippet::{SnippetError, SnippetParser};
