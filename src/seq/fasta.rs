// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use crate::seq::alphabet::normalize;
use crate::seq::record::{GenomeMetadata, ParsedSequence};

// All sequence lines of the file are concatenated, whatever header they follow: a multi-record
// FastA file yields a single sequence. The organism is taken from the _last_ non-empty header.
pub fn parse_fasta(text: &str) -> ParsedSequence {
    let mut metadata = GenomeMetadata::default();
    let mut raw_seq = String::new();
    let mut nb_headers = 0;

    for line in text.lines() {
        if let Some(hdr) = line.strip_prefix('>') {
            nb_headers += 1;
            let hdr = hdr.trim();
            if !hdr.is_empty() {
                metadata.organism = Some(hdr.to_string());
            }
        } else {
            raw_seq.push_str(line.trim());
        }
    }
    debug!("FastA: {} header(s), {} raw sequence chars", nb_headers, raw_seq.len());

    ParsedSequence {
        sequence: normalize(&raw_seq),
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fasta_single() {
        let parsed = parse_fasta(">seq1 Homo sapiens\nACGTACGT\nacgtn\n");
        assert_eq!(parsed.sequence, "ACGTACGTACGTN");
        assert_eq!(parsed.metadata.organism.as_deref(), Some("seq1 Homo sapiens"));
        assert!(parsed.metadata.definition.is_none());
    }

    #[test]
    fn test_parse_fasta_last_header_wins() {
        let parsed = parse_fasta(">first\nAAAA\n>second\nCCCC\n>   \nGGGG\n");
        assert_eq!(parsed.sequence, "AAAACCCCGGGG");
        assert_eq!(parsed.metadata.organism.as_deref(), Some("second"));
    }

    #[test]
    fn test_parse_fasta_crlf_and_gaps() {
        let parsed = parse_fasta(">x\r\nTTGCCG-CGA\r\n  TTCC CGG  \r\n");
        assert_eq!(parsed.sequence, "TTGCCGCGATTCCCGG");
        assert_eq!(parsed.metadata.organism.as_deref(), Some("x"));
    }

    #[test]
    fn test_parse_fasta_no_header() {
        let parsed = parse_fasta("ACGT\nACGT\n");
        assert_eq!(parsed.sequence, "ACGTACGT");
        assert!(parsed.metadata.organism.is_none());
    }

    #[test]
    fn test_parse_fasta_empty() {
        let parsed = parse_fasta("");
        assert!(parsed.sequence.is_empty());
        assert!(parsed.metadata.organism.is_none());
    }

    #[test]
    fn test_parse_fasta_header_letters_excluded() {
        // Header text never leaks into the sequence, even if made of nucleotide letters.
        let parsed = parse_fasta(">ACGT\nTTTT\n");
        assert_eq!(parsed.sequence, "TTTT");
    }
}
