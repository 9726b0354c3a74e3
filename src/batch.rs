// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::analysis::{analyze, AnalysisResult};
use crate::errors::GenoscanError;
use crate::ids::IdGenerator;
use crate::seq::format::{is_accepted, SeqFileFormat};
use crate::seq::record::{GenomeRecord, RecordAssembler};

// Anything that looks like an uploaded file: a name (used to pick the dialect and to name the
// record) and some bytes.
pub trait GenomeSource {
    fn name(&self) -> &str;
    fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        FileSource { path, name }
    }
}

impl GenomeSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        MemorySource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl GenomeSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

#[derive(Debug)]
pub struct BatchFailure {
    pub name: String,
    pub error: GenoscanError,
}

/// Runs files through parsing, validation and scoring, one at a time, keeping the successes in
/// arrival order. A failing file is logged in `failures` and never stops the batch.
pub struct BatchProcessor {
    assembler: RecordAssembler,
    records: Vec<GenomeRecord>,
    analyses: HashMap<String, AnalysisResult>,
    failures: Vec<BatchFailure>,
}

impl BatchProcessor {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        BatchProcessor {
            assembler: RecordAssembler::new(ids),
            records: Vec::new(),
            analyses: HashMap::new(),
            failures: Vec::new(),
        }
    }

    fn load(&mut self, source: &dyn GenomeSource) -> Result<GenomeRecord, GenoscanError> {
        let bytes = source.read_bytes()?;
        let text = String::from_utf8(bytes)?;
        let format = SeqFileFormat::from_filename(source.name());
        if format == SeqFileFormat::Raw && !is_accepted(source.name()) {
            warn!("{}: unexpected extension, reading as raw sequence", source.name());
        }
        debug!("{}: {} bytes, format {}", source.name(), text.len(), format);
        self.assembler.assemble(format.parse(&text), source.name())
    }

    /// Processes one file. On success, the record and its analysis are added together.
    pub fn process_next(
        &mut self,
        source: &dyn GenomeSource,
    ) -> Result<&GenomeRecord, &BatchFailure> {
        match self.load(source) {
            Ok(record) => {
                let analysis = analyze(record.sequence());
                info!(
                    "{}: {} bp, GC {}% (id {})",
                    record.name(),
                    record.size(),
                    record.gc_content(),
                    record.id()
                );
                self.analyses.insert(record.id().to_string(), analysis);
                self.records.push(record);
                Ok(&self.records[self.records.len() - 1])
            }
            Err(error) => {
                warn!("Failed to process {}: {}", source.name(), error);
                self.failures.push(BatchFailure {
                    name: source.name().to_string(),
                    error,
                });
                Err(&self.failures[self.failures.len() - 1])
            }
        }
    }

    pub fn process_all<'a, I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = &'a dyn GenomeSource>,
    {
        for source in sources {
            let _ = self.process_next(source);
        }
        info!(
            "Batch done: {} genome(s), {} failure(s)",
            self.records.len(),
            self.failures.len()
        );
    }

    pub fn records(&self) -> &[GenomeRecord] {
        &self.records
    }

    pub fn analysis_for(&self, id: &str) -> Option<&AnalysisResult> {
        self.analyses.get(id)
    }

    // (record, analysis) pairs, in arrival order.
    pub fn entries(&self) -> impl Iterator<Item = (&GenomeRecord, &AnalysisResult)> {
        self.records
            .iter()
            .filter_map(move |r| self.analyses.get(r.id()).map(|a| (r, a)))
    }

    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
