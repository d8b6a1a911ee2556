use std::time::Duration;

use criterion::{BenchmarkGroup, SamplingMode};
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const PATTERN_SEED: u64 = 0x9D05_2026;
const ALL_EQUAL_VALUE: u64 = 66;
const FEW_DISTINCT_VALUES: u64 = 16;
const SHORT_INPUT_MAX: usize = 1024;
const MEDIUM_INPUT_MAX: usize = 65536;

/// How long criterion spends on one input size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Short,
    Medium,
    Long,
}

impl RuntimeProfile {
    pub fn for_size(size: usize) -> Self {
        if size <= SHORT_INPUT_MAX {
            Self::Short
        } else if size <= MEDIUM_INPUT_MAX {
            Self::Medium
        } else {
            Self::Long
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Short | Self::Medium => 15,
            Self::Long => 10,
        }
    }

    fn warm_up(self) -> Duration {
        Duration::from_millis(match self {
            Self::Short => 100,
            Self::Medium => 400,
            Self::Long => 800,
        })
    }

    fn measurement(self) -> Duration {
        Duration::from_millis(match self {
            Self::Short => 200,
            Self::Medium => 800,
            Self::Long => 2000,
        })
    }

    // One million element sorts are too slow for linear sampling.
    fn sampling_mode(self) -> SamplingMode {
        match self {
            Self::Long => SamplingMode::Flat,
            Self::Short | Self::Medium => SamplingMode::Auto,
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    let profile = RuntimeProfile::for_size(size);
    group.sample_size(profile.sample_size());
    group.warm_up_time(profile.warm_up());
    group.measurement_time(profile.measurement());
    group.sampling_mode(profile.sampling_mode());
}

/// Seeded per pattern so different shapes never share a random stream.
fn pattern_rng(pattern: Pattern) -> StdRng {
    StdRng::seed_from_u64(PATTERN_SEED ^ ((pattern as u64) << 32))
}

/// Input shapes for sorting benchmarks and tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Shuffled,
    Shuffled16Values,
    AllEqual,
    Ascending,
    Descending,
    PipeOrgan,
    PushFront,
    PushMiddle,
}

pub const ALL_PATTERNS: [Pattern; 9] = [
    Pattern::Random,
    Pattern::Shuffled,
    Pattern::Shuffled16Values,
    Pattern::AllEqual,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::PipeOrgan,
    Pattern::PushFront,
    Pattern::PushMiddle,
];

pub fn pattern_name(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Random => "random",
        Pattern::Shuffled => "shuffled",
        Pattern::Shuffled16Values => "shuffled_16_values",
        Pattern::AllEqual => "all_equal",
        Pattern::Ascending => "ascending",
        Pattern::Descending => "descending",
        Pattern::PipeOrgan => "pipe_organ",
        Pattern::PushFront => "push_front",
        Pattern::PushMiddle => "push_middle",
    }
}

pub fn generate(pattern: Pattern, size: usize) -> Vec<u64> {
    match pattern {
        Pattern::Random => random(size),
        Pattern::Shuffled => shuffled(size),
        Pattern::Shuffled16Values => shuffled_16_values(size),
        Pattern::AllEqual => all_equal(size),
        Pattern::Ascending => ascending(size),
        Pattern::Descending => descending(size),
        Pattern::PipeOrgan => pipe_organ(size),
        Pattern::PushFront => push_front(size),
        Pattern::PushMiddle => push_middle(size),
    }
}

pub fn random(size: usize) -> Vec<u64> {
    let mut rng = pattern_rng(Pattern::Random);
    (0..size).map(|_| rng.random::<u64>()).collect()
}

/// A permutation of `0..size`.
pub fn shuffled(size: usize) -> Vec<u64> {
    let mut data = ascending(size);
    data.shuffle(&mut pattern_rng(Pattern::Shuffled));
    data
}

pub fn shuffled_16_values(size: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..size as u64).map(|i| i % FEW_DISTINCT_VALUES).collect();
    data.shuffle(&mut pattern_rng(Pattern::Shuffled16Values));
    data
}

pub fn all_equal(size: usize) -> Vec<u64> {
    vec![ALL_EQUAL_VALUE; size]
}

pub fn ascending(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

pub fn descending(size: usize) -> Vec<u64> {
    (0..size as u64).rev().collect()
}

/// Ascending up to the middle, then descending.
pub fn pipe_organ(size: usize) -> Vec<u64> {
    let half = (size / 2) as u64;
    (0..half).chain((0..size as u64 - half).rev()).collect()
}

/// Ascending, except the maximum sits at the front.
pub fn push_front(size: usize) -> Vec<u64> {
    let mut data = ascending(size);
    data.rotate_right(size.min(1));
    data
}

/// Ascending, except the maximum sits in the middle.
pub fn push_middle(size: usize) -> Vec<u64> {
    let mut data = ascending(size);
    if size > 0 {
        data[size / 2..].rotate_right(1);
    }
    data
}
