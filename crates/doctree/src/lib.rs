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

//! # Doctree - Generic Structured Document Toolkit
//!
//! Doctree parses structured-text formats into one shared, order-preserving
//! document tree (scalars, sequences, mappings) so that downstream
//! processing never needs a format-specific code path. Delimited-text
//! input decodes to the same kind of tree a YAML parser produces: one
//! sequence of row mappings.
//!
//! ## Quick Start
//!
//! ```
//! use doctree::csv_to_document;
//!
//! let doc = csv_to_document("name,age\nalice,30\nbob,25\n")
//!     .unwrap()
//!     .expect("one document");
//!
//! let rows = doc.content.as_sequence().unwrap();
//! assert_eq!(rows.len(), 2);
//!
//! let alice = rows[0].as_mapping().unwrap();
//! assert_eq!(alice.get("name").unwrap().as_str(), Some("alice"));
//! // Cell text is typed by the YAML snippet parser, so "30" is an int.
//! assert_eq!(alice.get("age").unwrap().as_scalar().unwrap().as_int(), Some(30));
//! ```
//!
//! ## Crates
//!
//! - [`doctree_core`]: the node model and the [`SnippetParser`] seam
//! - `doctree-yaml`: YAML front end and snippet parser (feature = "yaml")
//! - `doctree-csv`: delimited-text decoder (feature = "csv")

// Re-export the node model
pub use doctree_core::{Document, Mapping, Node, Scalar, SnippetError, SnippetParser};

/// YAML conversion utilities (requires `yaml` feature)
#[cfg(feature = "yaml")]
pub mod yaml {
    pub use doctree_yaml::{from_str, YamlError, YamlSnippetParser, MAX_NESTING_DEPTH};
}

/// Delimited-text decoding utilities (requires `csv` feature)
#[cfg(feature = "csv")]
pub mod csv {
    pub use doctree_csv::{
        CsvError, CsvRowSource, RowSource, TabularDecoder, DEFAULT_MAX_ROWS,
    };
}

/// Decode comma-separated text into a document.
///
/// One-call convenience over [`csv::TabularDecoder`] with the YAML snippet
/// parser: cells holding inline YAML (numbers, lists, mappings) become
/// structured nodes, everything else stays raw text.
///
/// Returns `Ok(None)` when `input` is completely empty (no header row).
///
/// # Errors
///
/// Any [`csv::CsvError`] raised by the decoder, such as a content row
/// shorter than the header.
#[cfg(all(feature = "csv", feature = "yaml"))]
pub fn csv_to_document(input: &str) -> doctree_csv::Result<Option<Document>> {
    decode_delimited(input, b',')
}

/// Decode tab-separated text into a document.
///
/// See [`csv_to_document`]; only the delimiter differs.
#[cfg(all(feature = "csv", feature = "yaml"))]
pub fn tsv_to_document(input: &str) -> doctree_csv::Result<Option<Document>> {
    decode_delimited(input, b'\t')
}

#[cfg(all(feature = "csv", feature = "yaml"))]
fn decode_delimited(input: &str, delimiter: u8) -> doctree_csv::Result<Option<Document>> {
    let mut decoder = doctree_csv::TabularDecoder::new(delimiter, doctree_yaml::YamlSnippetParser);
    decoder.bind(std::io::Cursor::new(input.to_owned()));
    decoder.decode()
}

#[cfg(all(test, feature = "csv", feature = "yaml"))]
mod tests {
    use super::*;

    #[test]
    fn test_csv_to_document_types_cells() {
        let doc = csv_to_document("a,b,c\n1,true,word\n").unwrap().unwrap();
        let row = doc.content.as_sequence().unwrap()[0].as_mapping().unwrap();

        assert_eq!(row.get("a"), Some(&Node::from(1)));
        assert_eq!(row.get("b"), Some(&Node::from(true)));
        assert_eq!(row.get("c").unwrap().as_str(), Some("word"));
    }

    #[test]
    fn test_csv_to_document_empty_input() {
        assert!(csv_to_document("").unwrap().is_none());
    }

    #[test]
    fn test_tsv_to_document() {
        let doc = tsv_to_document("x\ty\n1\t2\n").unwrap().unwrap();
        let row = doc.content.as_sequence().unwrap()[0].as_mapping().unwrap();
        assert_eq!(row.get("y"), Some(&Node::from(2)));
    }
}
