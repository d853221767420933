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

//! YAML front end for the doctree document model.
//!
//! Two entry points:
//!
//! - [`from_str`] parses a complete YAML document into a
//!   [`Document`](doctree_core::Document).
//! - [`YamlSnippetParser`] implements the
//!   [`SnippetParser`](doctree_core::SnippetParser) strategy by treating a
//!   text fragment as a YAML snippet. Decoders of flat formats use it to
//!   recognize inline structure in otherwise untyped text.
//!
//! # Examples
//!
//! ```
//! use doctree_yaml::from_str;
//!
//! let doc = from_str("name: alice\nscores: [1, 2]\n").unwrap();
//! let map = doc.content.as_mapping().unwrap();
//! assert_eq!(map.get("name").unwrap().as_str(), Some("alice"));
//! assert!(map.get("scores").unwrap().is_sequence());
//! ```

mod error;
mod from_yaml;
mod snippet;

pub use error::{Result, YamlError};
pub use from_yaml::{from_str, MAX_NESTING_DEPTH};
pub use snippet::YamlSnippetParser;
