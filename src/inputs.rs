//! Input list generators and the scratch-buffer copier.
//!
//! Generators return the sequence instead of printing it; the driver decides
//! what to show. The random generator takes the rng as a parameter so tests
//! can supply their own.

use rand::Rng;

/// `[1, 2, ..., n]` — the best case for bubble and insertion sort.
pub fn ascending(n: usize) -> Vec<i32> {
    (0..n).map(|i| i as i32 + 1).collect()
}

/// `[n, n-1, ..., 1]` — the worst case.
pub fn descending(n: usize) -> Vec<i32> {
    (0..n).map(|i| (n - i) as i32).collect()
}

/// `n` uniform draws from 1..=100 inclusive. Output varies between runs;
/// callers check structure (length, value range), not literal values.
pub fn random<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(1..=100)).collect()
}

/// Copies `src` into the front of `dst` so a sort can run on an independent
/// snapshot. Panics if `dst` is too small; a silent partial copy would hand
/// the sort a corrupted input.
pub fn copy_into(dst: &mut [i32], src: &[i32]) {
    assert!(
        src.len() <= dst.len(),
        "copy_into: destination holds {} elements, source has {}",
        dst.len(),
        src.len()
    );
    dst[..src.len()].copy_from_slice(src);
}
