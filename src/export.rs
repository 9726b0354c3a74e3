// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Everything that leaves the program: FastA download, JSON analysis report, and the one-line
// summary meant for sharing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bitflags::bitflags;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::analysis::{AnalysisResult, TraitScore};
use crate::errors::GenoscanError;
use crate::seq::record::GenomeRecord;

pub const FASTA_LINE_WIDTH: usize = 80;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ExportKinds: u8 {
        const FASTA  = 0b01;
        const REPORT = 0b10;
    }
}

impl Default for ExportKinds {
    fn default() -> Self {
        ExportKinds::empty()
    }
}

// A newline goes after every _complete_ line, so the output only ends with '\n' when the
// sequence length is a multiple of the line width.
pub fn fasta_export(record: &GenomeRecord) -> String {
    let seq = record.sequence();
    let mut out = String::with_capacity(seq.len() + seq.len() / FASTA_LINE_WIDTH + 64);
    out.push('>');
    out.push_str(record.name());
    out.push('\n');
    // Sequences are ASCII, so byte chunks are char chunks.
    for chunk in seq.as_bytes().chunks(FASTA_LINE_WIDTH) {
        out.push_str(&String::from_utf8_lossy(chunk));
        if chunk.len() == FASTA_LINE_WIDTH {
            out.push('\n');
        }
    }
    out
}

pub fn fasta_file_name(record: &GenomeRecord) -> String {
    format!("{}.fasta", record.name())
}

// Field order is part of the format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    pub genome: &'a str,
    pub size: usize,
    #[serde(serialize_with = "serialize_percent")]
    pub gc_content: f64,
    pub traits: &'a [TraitScore],
    pub recommendations: &'a [String],
    pub generated_at: String,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(
        record: &'a GenomeRecord,
        analysis: &'a AnalysisResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        AnalysisReport {
            genome: record.name(),
            size: record.size(),
            gc_content: record.gc_content(),
            traits: &analysis.traits,
            recommendations: &analysis.recommendations,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// Whole percentages are written without a fraction (50, not 50.0), as in the share line.
fn serialize_percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn report_json(
    record: &GenomeRecord,
    analysis: &AnalysisResult,
    generated_at: DateTime<Utc>,
) -> Result<String, GenoscanError> {
    let report = AnalysisReport::new(record, analysis, generated_at);
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn report_file_name(record: &GenomeRecord) -> String {
    format!("{}_analysis.json", record.name())
}

pub fn share_line(record: &GenomeRecord) -> String {
    format!(
        "{} | length {}bp | GC {}%",
        record.name(),
        record.size(),
        record.gc_content()
    )
}

/// Writes the requested exports for one genome into `dir` (created if needed). The report's
/// timestamp is the time of this call. Returns the paths written, FastA first.
pub fn write_exports(
    dir: &Path,
    record: &GenomeRecord,
    analysis: &AnalysisResult,
    kinds: ExportKinds,
) -> Result<Vec<PathBuf>, GenoscanError> {
    let mut written = Vec::new();
    if kinds.is_empty() {
        return Ok(written);
    }
    fs::create_dir_all(dir)?;
    if kinds.contains(ExportKinds::FASTA) {
        let path = dir.join(fasta_file_name(record));
        fs::write(&path, fasta_export(record))?;
        written.push(path);
    }
    if kinds.contains(ExportKinds::REPORT) {
        let path = dir.join(report_file_name(record));
        fs::write(&path, report_json(record, analysis, Utc::now())?)?;
        written.push(path);
    }
    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}

#[derive(Debug)]
pub struct ExportFailure {
    pub name: String,
    pub error: GenoscanError,
}

/// Runs `write_exports` for every (record, analysis) pair. A genome whose exports fail is logged
/// and recorded; the remaining genomes are still exported.
pub fn write_all_exports<'a, I>(
    dir: &Path,
    entries: I,
    kinds: ExportKinds,
) -> (Vec<PathBuf>, Vec<ExportFailure>)
where
    I: IntoIterator<Item = (&'a GenomeRecord, &'a AnalysisResult)>,
{
    let mut written = Vec::new();
    let mut failures = Vec::new();
    for (record, analysis) in entries {
        match write_exports(dir, record, analysis, kinds) {
            Ok(paths) => written.extend(paths),
            Err(error) => {
                warn!("Could not export {}: {}", record.name(), error);
                failures.push(ExportFailure {
                    name: record.name().to_string(),
                    error,
                });
            }
        }
    }
    (written, failures)
}
