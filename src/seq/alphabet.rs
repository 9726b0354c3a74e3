// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// The canonical nucleotide alphabet. Anything else found in an input file (gaps, digits,
// whitespace, IUPAC ambiguity codes other than N, punctuation) is silently dropped.

pub const NUCLEOTIDES: [char; 5] = ['A', 'C', 'G', 'T', 'N'];

pub fn is_nucleotide(c: char) -> bool {
    NUCLEOTIDES.contains(&c.to_ascii_uppercase())
}

/// Restricts `text` to the canonical alphabet, uppercased, preserving order. This is a lossy
/// filter, not a validator: it never fails.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| is_nucleotide(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_alphabet() {
        assert_eq!(normalize("ACGTN"), "ACGTN");
    }

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("acgtn"), "ACGTN");
    }

    #[test]
    fn test_normalize_drops_everything_else() {
        assert_eq!(normalize("a-c 1g\tT\nRYn*."), "ACGTN");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("1234 --- xyz"), "");
    }

    #[test]
    fn test_normalize_non_ascii() {
        // Non-ASCII letters must not sneak in via case folding.
        assert_eq!(normalize("ÅçGT"), "GT");
    }
}
