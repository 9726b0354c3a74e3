// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{io, path::PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use serde::Serialize;

use crate::analysis::AnalysisResult;
use crate::batch::{BatchProcessor, FileSource, GenomeSource};
use crate::config::{find_config, GenoscanConfig};
use crate::errors::GenoscanError;
use crate::export::{share_line, write_all_exports};
use crate::ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
use crate::seq::record::GenomeRecord;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Genome files (.fasta, .fa, .fas, .fna, .gb, .gbk; anything else is read as raw sequence)
    files: Vec<String>,

    /// Directory for exported files (default: current directory)
    #[arg(short, long = "export-dir")]
    export_dir: Option<PathBuf>,

    /// Export each genome as FastA
    #[arg(short, long)]
    fasta: bool,

    /// Export each analysis as a JSON report
    #[arg(short, long)]
    report: bool,

    /// Print a one-line shareable summary per genome
    #[arg(short, long)]
    share: bool,

    /// Print genomes and analyses as JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Seed for the id generator (reproducible id suffixes)
    #[arg(long)]
    seed: Option<u64>,

    /// Use sequential ids (genome-1, genome-2, ...) instead of timestamped ones
    #[arg(long = "sequential-ids", conflicts_with = "seed")]
    sequential_ids: bool,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    genome: &'a GenomeRecord,
    analysis: &'a AnalysisResult,
}

fn id_generator(cli: &Cli) -> Box<dyn IdGenerator> {
    if cli.sequential_ids {
        Box::new(SequentialIdGenerator::new("genome"))
    } else if let Some(seed) = cli.seed {
        Box::new(TimestampIdGenerator::seeded(seed))
    } else {
        Box::new(TimestampIdGenerator::new())
    }
}

pub fn output_info(record: &GenomeRecord, analysis: &AnalysisResult) {
    println!("name: {}", record.name());
    println!("id: {}", record.id());
    println!("size: {} bp", record.size());
    println!("gc_content: {}%", record.gc_content());
    if let Some(organism) = &record.metadata().organism {
        println!("organism: {}", organism);
    }
    if let Some(definition) = &record.metadata().definition {
        println!("definition: {}", definition);
    }
    println!(
        "traits: {}",
        analysis
            .traits
            .iter()
            .map(|t| format!("{} {}%", t.name, t.score))
            .join(", ")
    );
    println!("recommendations:");
    for rec in &analysis.recommendations {
        println!("  - {}", rec);
    }
    println!();
}

pub fn run() -> Result<(), GenoscanError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    if cli.files.is_empty() {
        return Err(GenoscanError::Format(String::from(
            "Expected at least one genome file",
        )));
    }

    let config = GenoscanConfig::load(find_config().as_deref());
    let (export_dir, exports) = config.merged(cli.export_dir.clone(), cli.fasta, cli.report);

    let sources: Vec<FileSource> = cli.files.iter().map(FileSource::new).collect();
    let mut batch = BatchProcessor::new(id_generator(&cli));
    batch.process_all(sources.iter().map(|s| s as &dyn GenomeSource));

    if cli.json {
        let entries: Vec<JsonEntry> = batch
            .entries()
            .map(|(genome, analysis)| JsonEntry { genome, analysis })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (record, analysis) in batch.entries() {
            output_info(record, analysis);
        }
    }

    for failure in batch.failures() {
        eprintln!("ERROR: {}: {}", failure.name, failure.error);
    }
    if batch.is_empty() {
        warn!("No genome could be read");
    }

    if cli.share {
        for record in batch.records() {
            println!("{}", share_line(record));
        }
    }

    let (_, export_failures) = write_all_exports(&export_dir, batch.entries(), exports);
    for failure in &export_failures {
        eprintln!("ERROR: exporting {}: {}", failure.name, failure.error);
    }
    if !export_failures.is_empty() {
        return Err(GenoscanError::Io(io::Error::other(format!(
            "{} of {} genome(s) could not be exported",
            export_failures.len(),
            batch.len()
        ))));
    }

    Ok(())
}
