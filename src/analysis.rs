// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Placeholder analysis. The scores have no biological meaning whatsoever: they are derived from a
// hash of the sequence so that the same sequence always gets the same scores.

use serde::Serialize;

// The scores use one byte of the 32-bit hash each, hence exactly four traits.
pub const TRAIT_NAMES: [&str; 4] = ["Height", "Disease Resistance", "Metabolism", "Longevity"];

pub const RECOMMENDATIONS: [&str; 2] = [
    "Consult a specialist for tailored interpretation",
    "Combine genomic insights with clinical data",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitScore {
    pub name: String,
    pub score: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub traits: Vec<TraitScore>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn scores(&self) -> Vec<u8> {
        self.traits.iter().map(|t| t.score).collect()
    }
}

/// h = h * 31 + c, modulo 2^32, over the code points of `sequence`.
pub fn sequence_hash(sequence: &str) -> u32 {
    sequence
        .chars()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}

pub fn trait_scores(hash: u32) -> [u8; 4] {
    let mut scores = [0u8; 4];
    for (i, score) in scores.iter_mut().enumerate() {
        // < 101, so the cast is lossless
        *score = ((hash >> (8 * i)) % 101) as u8;
    }
    scores
}

pub fn analyze(sequence: &str) -> AnalysisResult {
    let scores = trait_scores(sequence_hash(sequence));
    AnalysisResult {
        traits: TRAIT_NAMES
            .iter()
            .zip(scores)
            .map(|(name, score)| TraitScore {
                name: name.to_string(),
                score,
            })
            .collect(),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_empty() {
        assert_eq!(sequence_hash(""), 0);
    }

    #[test]
    fn test_hash_small() {
        // 'A' = 65; 65 * 31 + 67 ('C') = 2082
        assert_eq!(sequence_hash("A"), 65);
        assert_eq!(sequence_hash("AC"), 2082);
    }

    #[test]
    fn test_hash_wraps() {
        assert_eq!(sequence_hash("ACGTACGTAC"), 1_917_475_392);
        assert_eq!(sequence_hash("AAAAAAAAAA"), 3_980_712_096);
    }

    #[test]
    fn test_regression_vector() {
        assert_eq!(analyze("ACGTACGTAC").scores(), vec![88, 79, 69, 13]);
        assert_eq!(analyze("GCGCGCGCGC").scores(), vec![0, 36, 60, 77]);
        assert_eq!(analyze("AAAAAAAAAA").scores(), vec![5, 100, 39, 35]);
    }

    #[test]
    fn test_deterministic() {
        let seq = "ATGCGTACGTTAGCNNNNACGT".repeat(50);
        assert_eq!(analyze(&seq), analyze(&seq));
    }

    #[test]
    fn test_scores_in_range() {
        for h in [0u32, 1, 100, 101, u32::MAX, 0xdead_beef, 0x6565_6565] {
            assert!(trait_scores(h).iter().all(|s| *s <= 100));
        }
    }

    #[test]
    fn test_shape() {
        let res = analyze("ACGTACGTAC");
        let names: Vec<&str> = res.traits.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, TRAIT_NAMES);
        assert_eq!(res.recommendations, RECOMMENDATIONS);
    }
}
