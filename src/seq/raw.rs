// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::alphabet::normalize;
use crate::seq::record::{GenomeMetadata, ParsedSequence};

// Fallback for unrecognized extensions: the whole file is taken as sequence.
pub fn parse_raw(text: &str) -> ParsedSequence {
    ParsedSequence {
        sequence: normalize(text),
        metadata: GenomeMetadata::default(),
    }
}
