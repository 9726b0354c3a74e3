// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use genoscan::batch::BatchProcessor;
use genoscan::ids::SequentialIdGenerator;

#[allow(dead_code)]
pub fn processor() -> BatchProcessor {
    BatchProcessor::new(Box::new(SequentialIdGenerator::new("genome")))
}

#[allow(dead_code)]
pub fn data_path(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}
