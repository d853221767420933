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

//! Row stream to document conversion.

use crate::error::{CsvError, Result};
use crate::source::{CsvRowSource, RowSource};
use doctree_core::{Document, Mapping, Node, SnippetParser};
use std::io::Read;

/// Default maximum number of content rows per document.
///
/// Bounds worst-case memory to roughly `rows × columns × avg cell size`
/// on hostile or runaway input. Adjustable per decoder via
/// [`TabularDecoder::set_max_rows`].
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Streaming decoder from delimited-text rows to a document tree.
///
/// The first row of a session is the header: it fixes the field names,
/// their order, and the field count of every row object. Each subsequent
/// row becomes one mapping whose keys follow header order, and the whole
/// stream becomes a single document holding one sequence of those
/// mappings — indistinguishable downstream from a document parsed out of
/// any other structured-text format.
///
/// Cell text is interpreted by the injected [`SnippetParser`]: if the
/// parser recognizes a cell as a structured value (an inline list, say),
/// that node is used; otherwise the cell becomes a string scalar holding
/// the raw text verbatim. The decoder itself never types a cell.
///
/// A decoder is constructed once with a delimiter and a parser, then
/// bound to an input per session with [`bind`](Self::bind) (or
/// [`bind_source`](Self::bind_source) for a custom [`RowSource`]).
/// Sessions are strictly sequential: one caller, one decode at a time.
///
/// # Examples
///
/// ```
/// use doctree_core::{Node, SnippetError};
/// use doctree_csv::TabularDecoder;
/// use std::io::Cursor;
///
/// // Recognize integers; anything else stays raw text.
/// let ints = |text: &str| {
///     text.parse::<i64>()
///         .map(Node::from)
///         .map_err(|e| SnippetError::new(e.to_string()))
/// };
///
/// let mut decoder = TabularDecoder::new(b',', ints);
/// decoder.bind(Cursor::new("name,age\nalice,30\n"));
///
/// let doc = decoder.decode().unwrap().expect("one document");
/// let rows = doc.content.as_sequence().unwrap();
/// let alice = rows[0].as_mapping().unwrap();
/// assert_eq!(alice.get("name"), Some(&Node::string("alice")));
/// assert_eq!(alice.get("age"), Some(&Node::from(30)));
///
/// // The stream is consumed; further calls report end of stream.
/// assert!(decoder.decode().unwrap().is_none());
/// ```
pub struct TabularDecoder<P> {
    delimiter: u8,
    parser: P,
    source: Option<Box<dyn RowSource>>,
    exhausted: bool,
    max_rows: usize,
}

impl<P: SnippetParser> TabularDecoder<P> {
    /// Create a decoder splitting fields on `delimiter`, resolving cells
    /// with `parser`.
    ///
    /// No input is bound yet; call [`bind`](Self::bind) before
    /// [`decode`](Self::decode).
    pub fn new(delimiter: u8, parser: P) -> Self {
        Self {
            delimiter,
            parser,
            source: None,
            exhausted: false,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    /// Cap the number of content rows accepted per document.
    pub fn set_max_rows(&mut self, max_rows: usize) {
        self.max_rows = max_rows;
    }

    /// Bind a new input stream, starting a fresh decode session.
    ///
    /// The input is tokenized with the decoder's delimiter. Rebinding
    /// between sessions is allowed; the previous source is dropped.
    pub fn bind<R: Read + 'static>(&mut self, input: R) {
        let delimiter = self.delimiter;
        self.bind_source(CsvRowSource::new(input, delimiter));
    }

    /// Bind an already-constructed row source.
    ///
    /// For row representations that do not come from delimited text, or
    /// for sources with their own blank-row and error semantics.
    pub fn bind_source<S: RowSource + 'static>(&mut self, source: S) {
        self.source = Some(Box::new(source));
        self.exhausted = false;
    }

    /// Decode the entire remaining row stream into one document.
    ///
    /// Returns:
    ///
    /// - `Ok(Some(document))` — a document whose content is one sequence
    ///   of row mappings, in row-arrival order (possibly empty when the
    ///   header row was the only row)
    /// - `Ok(None)` — end of stream: the source was already drained, or a
    ///   prior call ended the session with a read error
    /// - `Err(_)` — a structural or source error; no partial document is
    ///   ever returned
    ///
    /// The content loop stops cleanly at end of stream or at a blank row
    /// (a blank row marks the natural end of the tabular block, not a
    /// failure). A read error inside the content loop poisons the decoder:
    /// every later call reports end of stream without touching the source.
    /// A failure on the very first (header) read does NOT poison it, so a
    /// caller may rebind and retry after such a failure.
    ///
    /// After a clean finish the decoder is not poisoned either; the next
    /// call re-reads the source, finds it drained at the header step, and
    /// reports end of stream that way.
    ///
    /// # Errors
    ///
    /// - [`CsvError::Unbound`] when no input was ever bound
    /// - [`CsvError::RowTooShort`] when a content row has fewer fields
    ///   than the header (rows are positional; extra trailing fields on
    ///   over-wide rows are silently ignored instead)
    /// - [`CsvError::RowLimit`] when the row cap is exceeded
    /// - [`CsvError::Read`] / [`CsvError::Io`] from the row source
    pub fn decode(&mut self) -> Result<Option<Document>> {
        if self.exhausted {
            return Ok(None);
        }
        let source = self.source.as_mut().ok_or(CsvError::Unbound)?;

        let header = match source.read_row()? {
            Some(fields) => fields,
            None => return Ok(None),
        };

        let mut rows: Vec<Node> = Vec::new();
        loop {
            let fields = match source.read_row() {
                Ok(Some(fields)) if !fields.is_empty() => fields,
                // End of stream or a blank row: the tabular block is over.
                Ok(_) => break,
                Err(err) => {
                    self.exhausted = true;
                    return Err(err);
                }
            };
            if rows.len() >= self.max_rows {
                self.exhausted = true;
                return Err(CsvError::RowLimit {
                    limit: self.max_rows,
                });
            }
            match row_object(&self.parser, &header, &fields, rows.len() + 1) {
                Ok(object) => rows.push(object),
                Err(err) => {
                    self.exhausted = true;
                    return Err(err);
                }
            }
        }

        Ok(Some(Document::new(Node::Sequence(rows))))
    }
}

/// Zip header names with resolved cells into one row mapping.
///
/// Iterates by header length: a short row is a structural error, extra
/// trailing cells on a long row are ignored.
fn row_object<P: SnippetParser>(
    parser: &P,
    header: &[String],
    fields: &[String],
    row: usize,
) -> Result<Node> {
    let mut object = Mapping::with_capacity(header.len());
    for (index, name) in header.iter().enumerate() {
        let cell = fields.get(index).ok_or(CsvError::RowTooShort {
            row,
            expected: header.len(),
            actual: fields.len(),
        })?;
        object.push(name.clone(), resolve_cell(parser, cell));
    }
    Ok(Node::Mapping(object))
}

/// Resolve one cell: structured if the parser recognizes it, else the raw
/// text as a string scalar. Unparseable cells are normal, not errors.
fn resolve_cell<P: SnippetParser>(parser: &P, text: &str) -> Node {
    match parser.parse(text) {
        Ok(node) => node,
        Err(_) => Node::string(text),
    }
}
