use crate::Sorter;

/// Work counters reported by each sort, used to show the best/worst-case
/// asymmetry between input patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element-to-element comparisons performed.
    pub comparisons: usize,
    /// Swaps (bubble, selection) or right-shifts (insertion).
    pub swaps: usize,
    /// Passes over the data (bubble only; zero for the others).
    pub passes: usize,
}

/// Bubble sort: repeated adjacent-pair passes with the early-exit
/// optimization. Stable. One pass and zero swaps on sorted input; n-1 full
/// passes on reverse input.
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n - 1 {
        stats.passes += 1;
        let mut swapped = false;

        // Everything past n-1-i already bubbled into place.
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
    stats
}

/// Insertion sort: grows a sorted prefix, walking each new element left past
/// every greater neighbor until its slot opens up. Stable.
pub fn insertion_sort<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();

    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if data[j - 1] <= data[j] {
                break;
            }
            data.swap(j - 1, j);
            stats.swaps += 1;
            j -= 1;
        }
    }
    stats
}

/// Selection sort: swaps the minimum of the unsorted suffix into place.
/// Always performs n(n-1)/2 comparisons; not stable.
pub fn selection_sort<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            stats.comparisons += 1;
            if data[j] < data[min] {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
            stats.swaps += 1;
        }
    }
    stats
}

pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn sort(&self, data: &mut [i32]) {
        bubble_sort(data);
    }
}

pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn sort(&self, data: &mut [i32]) {
        insertion_sort(data);
    }
}

pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn sort(&self, data: &mut [i32]) {
        selection_sort(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orders by key only, so equal-key items are observable for stability.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(keys: &[i32]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect()
    }

    fn tags_in_key_order(data: &[Tagged], key: i32) -> Vec<usize> {
        data.iter().filter(|t| t.key == key).map(|t| t.tag).collect()
    }

    #[test]
    fn bubble_best_case_is_one_pass_no_swaps() {
        let mut data: Vec<i32> = (1..=10).collect();
        let stats = bubble_sort(&mut data);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
        // One pass over sorted data is n-1 comparisons
        assert_eq!(stats.comparisons, 9);
    }

    #[test]
    fn bubble_worst_case_needs_all_passes() {
        let mut data = vec![5, 4, 3, 2, 1];
        let stats = bubble_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert_eq!(stats.passes, 4);
        assert_eq!(stats.swaps, 10);
    }

    #[test]
    fn bubble_trivial_lengths() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(bubble_sort(&mut empty), SortStats::default());

        let mut one = vec![7];
        assert_eq!(bubble_sort(&mut one), SortStats::default());
    }

    #[test]
    fn insertion_best_case_does_no_shifts() {
        let mut data: Vec<i32> = (1..=10).collect();
        let stats = insertion_sort(&mut data);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 9);
    }

    #[test]
    fn insertion_worst_case_shifts_everything() {
        let mut data = vec![5, 4, 3, 2, 1];
        let stats = insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        // Reverse input: every prefix element shifts, 5*4/2 total
        assert_eq!(stats.swaps, 10);
    }

    #[test]
    fn selection_comparison_count_is_input_independent() {
        for keys in [vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1], vec![2, 5, 1, 4, 3]] {
            let mut data = keys;
            let stats = selection_sort(&mut data);
            assert_eq!(stats.comparisons, 5 * 4 / 2);
        }
    }

    #[test]
    fn selection_example_uses_two_swaps() {
        let mut data = vec![3, 1, 2];
        let stats = selection_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn selection_skips_swap_when_minimum_is_in_place() {
        let mut data = vec![1, 2, 3, 4];
        let stats = selection_sort(&mut data);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn bubble_is_stable() {
        let mut data = tagged(&[3, 1, 3, 2, 1, 3]);
        bubble_sort(&mut data);
        assert_eq!(tags_in_key_order(&data, 1), vec![1, 4]);
        assert_eq!(tags_in_key_order(&data, 3), vec![0, 2, 5]);
    }

    #[test]
    fn insertion_is_stable() {
        let mut data = tagged(&[2, 1, 2, 1, 2]);
        insertion_sort(&mut data);
        assert_eq!(tags_in_key_order(&data, 1), vec![1, 3]);
        assert_eq!(tags_in_key_order(&data, 2), vec![0, 2, 4]);
    }
}
