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

//! End-to-end tests through the facade API.

use doctree::{csv_to_document, tsv_to_document, Node};

#[test]
fn test_spec_example_two_people() {
    let doc = csv_to_document("name,age\nalice,30\nbob,25\n")
        .unwrap()
        .unwrap();
    let rows = doc.content.as_sequence().unwrap();
    assert_eq!(rows.len(), 2);

    let alice = rows[0].as_mapping().unwrap();
    assert_eq!(alice.get("name").unwrap().as_str(), Some("alice"));
    assert_eq!(alice.get("age"), Some(&Node::from(30)));

    let bob = rows[1].as_mapping().unwrap();
    assert_eq!(bob.get("name").unwrap().as_str(), Some("bob"));
    assert_eq!(bob.get("age"), Some(&Node::from(25)));
}

#[test]
fn test_structured_cell_becomes_sequence_node() {
    let doc = csv_to_document("a,b\n1,\"[2, 3]\"\n").unwrap().unwrap();
    let row = doc.content.as_sequence().unwrap()[0].as_mapping().unwrap();

    assert!(row.get("a").unwrap().is_scalar());
    let b = row.get("b").unwrap().as_sequence().unwrap();
    assert_eq!(b, [Node::from(2), Node::from(3)]);
}

#[test]
fn test_tsv_matches_csv() {
    let csv = csv_to_document("a,b\n1,2\n").unwrap().unwrap();
    let tsv = tsv_to_document("a\tb\n1\t2\n").unwrap().unwrap();
    assert_eq!(csv, tsv);
}

#[test]
fn test_facade_and_handrolled_decoder_agree() {
    let input = "k,v\nx,\"{a: 1}\"\n";

    let via_facade = csv_to_document(input).unwrap().unwrap();

    let mut decoder = doctree::csv::TabularDecoder::new(b',', doctree::yaml::YamlSnippetParser);
    decoder.bind(std::io::Cursor::new(input.to_owned()));
    let via_decoder = decoder.decode().unwrap().unwrap();

    assert_eq!(via_facade, via_decoder);
}

#[test]
fn test_empty_input_is_end_of_stream() {
    assert!(csv_to_document("").unwrap().is_none());
    assert!(tsv_to_document("").unwrap().is_none());
}
