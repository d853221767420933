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

//! Streaming delimited-text decoder producing doctree documents.
//!
//! [`TabularDecoder`] turns a stream of delimited-text rows (header row
//! plus content rows) into one generic document: a sequence of mappings,
//! keyed and ordered by the header row. Downstream consumers see the same
//! tree a YAML or JSON front end would produce, so tabular input needs no
//! format-specific code path.
//!
//! Rows are pulled through the [`RowSource`] trait. [`CsvRowSource`]
//! implements it on the `csv` tokenizer, which handles quoting, escaping
//! and a configurable delimiter; any other row representation can plug in
//! its own implementation via
//! [`TabularDecoder::bind_source`].
//!
//! Cell typing is delegated entirely to an injected
//! [`SnippetParser`](doctree_core::SnippetParser) — see the decoder docs
//! for the resolution rules.
//!
//! # Examples
//!
//! ```
//! use doctree_csv::TabularDecoder;
//! use doctree_yaml::YamlSnippetParser;
//! use std::io::Cursor;
//!
//! let mut decoder = TabularDecoder::new(b',', YamlSnippetParser);
//! decoder.bind(Cursor::new("a,b\n1,\"[2, 3]\"\n"));
//!
//! let doc = decoder.decode().unwrap().expect("one document");
//! let row = doc.content.as_sequence().unwrap()[0].as_mapping().unwrap();
//! assert!(row.get("a").unwrap().is_scalar());
//! assert!(row.get("b").unwrap().is_sequence());
//! ```

mod decoder;
mod error;
mod source;

pub use decoder::{TabularDecoder, DEFAULT_MAX_ROWS};
pub use error::{CsvError, Result};
pub use source::{CsvRowSource, RowSource};
