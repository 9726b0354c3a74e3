// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A genome record: one successfully parsed and validated sequence file. Meant to be
// format-agnostic - FastA, GenBank and raw text all end up here - with whatever metadata the
// dialect could provide.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::errors::GenoscanError;
use crate::ids::IdGenerator;

pub const MIN_SEQUENCE_LEN: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenomeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

// What a dialect parser hands over: a normalized sequence, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSequence {
    pub sequence: String,
    pub metadata: GenomeMetadata,
}

// Fields are private: a record never changes once assembled.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenomeRecord {
    id: String,
    name: String,
    sequence: String,
    size: usize,
    gc_content: f64,
    metadata: GenomeMetadata,
    uploaded_at: DateTime<Utc>,
}

impl GenomeRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn gc_content(&self) -> f64 {
        self.gc_content
    }

    pub fn metadata(&self) -> &GenomeMetadata {
        &self.metadata
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

/// Turns parser output into records, assigning ids from the injected generator.
pub struct RecordAssembler {
    ids: Box<dyn IdGenerator>,
}

impl RecordAssembler {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        RecordAssembler { ids }
    }

    /// Validates `parsed` and builds the record. Fails iff the sequence has fewer than
    /// `MIN_SEQUENCE_LEN` nucleotides.
    pub fn assemble(
        &mut self,
        parsed: ParsedSequence,
        filename: &str,
    ) -> Result<GenomeRecord, GenoscanError> {
        let ParsedSequence { sequence, metadata } = parsed;
        if sequence.len() < MIN_SEQUENCE_LEN {
            debug!("{}: only {} nucleotide(s)", filename, sequence.len());
            return Err(GenoscanError::too_short());
        }
        let record = GenomeRecord {
            id: self.ids.next_id(),
            name: record_name(filename),
            size: sequence.len(),
            gc_content: gc_content(&sequence),
            sequence,
            metadata,
            uploaded_at: Utc::now(),
        };
        debug!("assembled {} as {}", record.name, record.id);
        Ok(record)
    }
}

fn extension_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.[^.]+$").expect("valid regex"))
}

// Display name: the filename minus its last extension ("a.b.fasta" -> "a.b").
pub fn record_name(filename: &str) -> String {
    extension_re().replace(filename, "").into_owned()
}

/// Percentage of G and C, rounded half-up to 2 decimals. Returns 0 for an empty sequence.
pub fn gc_content(sequence: &str) -> f64 {
    let len = sequence.len() as u64;
    if len == 0 {
        return 0.0;
    }
    let gc = sequence.bytes().filter(|b| matches!(b, b'G' | b'C')).count() as u64;
    // Integer arithmetic in hundredths of a percent, so that x.xx5 always rounds up.
    let hundredths = (gc * 20_000 + len) / (2 * len);
    hundredths as f64 / 100.0
}
