// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use crate::seq::fasta::parse_fasta;
use crate::seq::genbank::parse_genbank;
use crate::seq::raw::parse_raw;
use crate::seq::record::ParsedSequence;

// Extensions offered by the upload dialog. Anything else is still read, as raw text.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["txt", "fasta", "fa", "fas", "fna", "gb", "gbk"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeqFileFormat {
    Fasta,
    GenBank,
    Raw,
}

impl SeqFileFormat {
    /// Picks a dialect from the text after the last '.' of `filename` (case-insensitive). Never
    /// fails: unknown or missing extensions map to `Raw`.
    pub fn from_filename(filename: &str) -> Self {
        match extension(filename).as_deref() {
            Some("fasta") | Some("fa") | Some("fas") | Some("fna") => SeqFileFormat::Fasta,
            Some("gb") | Some("gbk") => SeqFileFormat::GenBank,
            _ => SeqFileFormat::Raw,
        }
    }

    pub fn parse(self, text: &str) -> ParsedSequence {
        match self {
            SeqFileFormat::Fasta => parse_fasta(text),
            SeqFileFormat::GenBank => parse_genbank(text),
            SeqFileFormat::Raw => parse_raw(text),
        }
    }
}

impl fmt::Display for SeqFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqFileFormat::Fasta => "fasta",
            SeqFileFormat::GenBank => "genbank",
            SeqFileFormat::Raw => "raw",
        };
        write!(f, "{}", s)
    }
}

// Lowercased text after the final '.', if any.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

pub fn is_accepted(filename: &str) -> bool {
    match extension(filename) {
        Some(ext) => ACCEPTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_extensions() {
        for name in ["a.fasta", "a.fa", "a.fas", "a.fna", "A.FASTA", "x.y.Fa"] {
            assert_eq!(SeqFileFormat::from_filename(name), SeqFileFormat::Fasta, "{}", name);
        }
    }

    #[test]
    fn test_genbank_extensions() {
        assert_eq!(SeqFileFormat::from_filename("ecoli.gb"), SeqFileFormat::GenBank);
        assert_eq!(SeqFileFormat::from_filename("ecoli.GBK"), SeqFileFormat::GenBank);
    }

    #[test]
    fn test_raw_fallback() {
        assert_eq!(SeqFileFormat::from_filename("reads.txt"), SeqFileFormat::Raw);
        assert_eq!(SeqFileFormat::from_filename("README"), SeqFileFormat::Raw);
        assert_eq!(SeqFileFormat::from_filename("seq.fastq"), SeqFileFormat::Raw);
        assert_eq!(SeqFileFormat::from_filename("fasta"), SeqFileFormat::Raw);
        assert_eq!(SeqFileFormat::from_filename(""), SeqFileFormat::Raw);
    }

    #[test]
    fn test_accepted() {
        assert!(is_accepted("x.txt"));
        assert!(is_accepted("x.GBK"));
        assert!(!is_accepted("x.fastq"));
        assert!(!is_accepted("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SeqFileFormat::GenBank.to_string(), "genbank");
    }
}
