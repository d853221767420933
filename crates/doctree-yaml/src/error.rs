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

//! Error types for YAML conversion.

use thiserror::Error;

/// YAML conversion error types.
#[derive(Debug, Error)]
pub enum YamlError {
    /// The input is not valid YAML.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A mapping key is itself a sequence or mapping; the doctree model
    /// keys mappings by string.
    #[error("mapping key at depth {depth} is not a scalar")]
    NonScalarKey {
        /// Nesting depth (0-based from the document root) of the mapping
        /// holding the offending key.
        depth: usize,
    },

    /// The document nests deeper than the conversion limit.
    #[error("nesting depth exceeds maximum of {limit}")]
    TooDeep {
        /// The enforced depth limit.
        limit: usize,
    },
}

/// Convenience type alias for `Result` with [`YamlError`].
pub type Result<T> = std::result::Result<T, YamlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_scalar_key_display() {
        let err = YamlError::NonScalarKey { depth: 2 };
        assert_eq!(err.to_string(), "mapping key at depth 2 is not a scalar");
    }

    #[test]
    fn test_too_deep_display() {
        let err = YamlError::TooDeep { limit: 100 };
        assert_eq!(err.to_string(), "nesting depth exceeds maximum of 100");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<YamlError>();
    }
}
