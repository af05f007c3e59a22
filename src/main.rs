//! Demo driver: generates the three input patterns, then shows each
//! demonstrated algorithm sorting a fresh copy of its designated input.
//!
//! Insertion sort is implemented and tested in the library but the demo
//! deliberately runs only the bubble and selection cases, mirroring the
//! program this one reproduces.

use sort_cases::algorithms::{BubbleSorter, SelectionSorter};
use sort_cases::{inputs, report, Sorter};

const LEN: usize = 10;

fn main() {
    // One generator for the whole run; the random list differs every run.
    let mut rng = rand::thread_rng();

    println!("--- generating input lists ---");
    let ascending = inputs::ascending(LEN);
    report::print_list("original | ascending", &ascending);
    let descending = inputs::descending(LEN);
    report::print_list("original | descending", &descending);
    let random = inputs::random(&mut rng, LEN);
    report::print_list("original | random", &random);
    println!("------------------------------");
    println!();

    // Each case sorts its own snapshot so the originals stay untouched.
    let mut scratch = vec![0; LEN];

    inputs::copy_into(&mut scratch, &ascending);
    BubbleSorter.sort(&mut scratch);
    report::print_list("bubble sort | best case (already sorted)", &scratch);

    inputs::copy_into(&mut scratch, &descending);
    BubbleSorter.sort(&mut scratch);
    report::print_list("bubble sort | worst case (reverse order)", &scratch);

    inputs::copy_into(&mut scratch, &random);
    SelectionSorter.sort(&mut scratch);
    report::print_list("selection sort | average case (random)", &scratch);
}
