//! Classic Sort Showcase
//!
//! Demonstrates bubble, insertion and selection sort against the three
//! textbook input patterns: already sorted (best case), reverse sorted
//! (worst case) and random (average case).

pub mod algorithms;
pub mod inputs;
pub mod report;

/// Trait for sorting implementations
pub trait Sorter {
    fn sort(&self, data: &mut [i32]);
}
