// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use crate::seq::alphabet::normalize;
use crate::seq::record::{GenomeMetadata, ParsedSequence};

// Field labels are fixed-width in flat files, so the value starts right after the label (column
// 10 for DEFINITION, 8 for ORGANISM).
const DEFINITION: &str = "DEFINITION";
const ORGANISM: &str = "ORGANISM";
const ORIGIN: &str = "ORIGIN";
const END_OF_RECORD: &str = "//";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GenBankState {
    Header,
    Origin,
    Done,
}

// Only the first record of a multi-record file is read: everything after the first '//' is
// ignored.
pub fn parse_genbank(text: &str) -> ParsedSequence {
    let mut state = GenBankState::Header;
    let mut metadata = GenomeMetadata::default();
    let mut raw_seq = String::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(DEFINITION) {
            metadata.definition = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(ORGANISM) {
            metadata.organism = Some(rest.trim().to_string());
        } else if line.starts_with(ORIGIN) {
            state = GenBankState::Origin;
        } else if line.starts_with(END_OF_RECORD) {
            state = GenBankState::Done;
            break;
        } else if state == GenBankState::Origin {
            // Drops position numbers and the 10-base block spacing.
            raw_seq.extend(
                line.chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .map(|c| c.to_ascii_uppercase()),
            );
        }
    }
    debug!("GenBank: final state {:?}, {} sequence letters", state, raw_seq.len());

    ParsedSequence {
        sequence: normalize(&raw_seq),
        metadata,
    }
}
