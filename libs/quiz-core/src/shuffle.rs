//! Uniform shuffling over an injected random source.
//!
//! Callers pass the RNG so tests can use a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle a slice in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Shuffled copy of a slice; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
