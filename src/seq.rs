// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod alphabet;
pub mod fasta;
pub mod format;
pub mod genbank;
pub mod raw;
pub mod record;
