//! Shuffler: in-place uniform permutation.

use rand::Rng;

/// Entropy source used by the binary: every draw reads fresh bytes from the
/// operating system's CSPRNG, so there is no generator state to seed.
pub type Entropy = rand::rngs::OsRng;

/// Permute `items` in place (Fisher–Yates).
///
/// Walks from the last index down, swapping each element with a uniformly
/// chosen element at or before it. Slices of length 0 or 1 are untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
