// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Record identifiers. Ids only need to be unique within a session; neither generator below is
// suitable where ids must be unguessable.

use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// `<epoch millis>_<5 random base-36 chars>`. Two ids made in the same millisecond collide with
/// probability 36^-5; callers that need strict uniqueness should use `SequentialIdGenerator` or
/// their own scheme.
pub struct TimestampIdGenerator<R: Rng> {
    rng: R,
}

impl TimestampIdGenerator<StdRng> {
    pub fn new() -> Self {
        TimestampIdGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        TimestampIdGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TimestampIdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TimestampIdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        TimestampIdGenerator { rng }
    }

    fn suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}

impl<R: Rng> IdGenerator for TimestampIdGenerator<R> {
    fn next_id(&mut self) -> String {
        let millis = Utc::now().timestamp_millis();
        format!("{}_{}", millis, self.suffix())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic and collision-free within one generator.
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdGenerator {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
