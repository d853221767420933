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

//! Pull-based row sources for the tabular decoder.

use crate::error::Result;
use std::io::Read;

/// A pull source of field rows.
///
/// Return values:
///
/// - `Ok(Some(fields))` — the next row, as ordered field strings
/// - `Ok(Some(vec![]))` — a successful but blank row (structurally
///   present, zero fields)
/// - `Ok(None)` — end of stream; the source has no more input
/// - `Err(_)` — a read failure (malformed quoting, I/O error, ...)
///
/// End of stream must be reported as `Ok(None)` and never as an empty
/// row, so consumers can tell a blank line from a drained source.
/// Reading is monotonic; no rewind is expected of implementations.
pub trait RowSource {
    /// Pull the next row.
    fn read_row(&mut self) -> Result<Option<Vec<String>>>;
}

/// A [`RowSource`] backed by the `csv` tokenizer.
///
/// Handles quoting and escaping, with a configurable field delimiter
/// (comma, tab, semicolon, ...). Field text is passed through untrimmed,
/// exactly as the tokenizer produced it.
///
/// The `csv` tokenizer skips physically blank lines rather than
/// surfacing them, so this source never returns `Ok(Some(vec![]))`;
/// that case exists for other [`RowSource`] implementations.
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvRowSource<R> {
    /// Wrap `input` in a tokenizer splitting fields on `delimiter`.
    ///
    /// Header handling and row-width policy belong to the decoder, so the
    /// tokenizer is configured headerless and width-flexible.
    pub fn new(input: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        Self { reader }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        let mut record = csv::StringRecord::new();
        if self.reader.read_record(&mut record)? {
            Ok(Some(record.iter().map(str::to_owned).collect()))
        } else {
            Ok(None)
        }
    }
}
