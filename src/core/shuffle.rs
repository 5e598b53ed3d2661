//! Fisher–Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place and hand the same slice back for chaining.
///
/// Walks from the last position down, swapping each element with a
/// uniformly chosen element at or before it. Every permutation is equally
/// likely given an unbiased `rng`; runs in linear time.
pub fn shuffle<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a mut [T]) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}
