//! Shared fixtures for the Sluice benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sluice_core::Word;

/// Generate `count` seeded pseudo-random transcript words.
///
/// Benchmarks use a fixed seed so successive runs drain identical data.
pub fn transcript_words(seed: u64, count: usize) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Word::from_u64(rng.next_u64())).collect()
}
