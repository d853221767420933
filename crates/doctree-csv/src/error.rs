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

//! Error types for delimited-text decoding.

use thiserror::Error;

/// Delimited-text decoding error types.
///
/// End of stream is not an error: [`TabularDecoder::decode`] reports it as
/// `Ok(None)`.
///
/// [`TabularDecoder::decode`]: crate::TabularDecoder::decode
#[derive(Debug, Error)]
pub enum CsvError {
    /// A content row has fewer fields than the header row.
    ///
    /// Rows are positional: every header field must have a cell. A row
    /// with *more* fields than the header is not an error; the trailing
    /// extras are ignored.
    #[error("row {row} has {actual} fields but the header has {expected}")]
    RowTooShort {
        /// 1-based content-row number (the header is not counted).
        row: usize,
        /// Field count of the header row.
        expected: usize,
        /// Field count of the offending content row.
        actual: usize,
    },

    /// Content-row count exceeded the configured limit.
    ///
    /// The limit bounds memory use on hostile or runaway input; see
    /// [`DEFAULT_MAX_ROWS`](crate::DEFAULT_MAX_ROWS).
    #[error("row count exceeds maximum of {limit}")]
    RowLimit {
        /// Maximum allowed content rows.
        limit: usize,
    },

    /// `decode` was called before any input was bound.
    #[error("no input bound; call bind() before decode()")]
    Unbound,

    /// The underlying tokenizer failed (malformed quoting, invalid UTF-8,
    /// or an I/O failure surfaced through it).
    #[error("CSV read error: {0}")]
    Read(#[from] csv::Error),

    /// I/O error from a row source that reads input directly.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with [`CsvError`].
pub type Result<T> = std::result::Result<T, CsvError>;
