//! Shell sort with Knuth's increments.
//!
//! The sort runs a gapped insertion pass for every gap yielded by
//! [`KnuthGaps`], largest first. Each pass leaves the slice `h`-sorted (every
//! run of elements `h` apart is ordered), and the final pass at `h = 1` is a
//! plain insertion sort over an almost-ordered slice.
//!
//! The main entry points are [`shell_sort`] and [`sort`].

use crate::core::{KnuthGaps, Sequence};
use tracing::trace;

/// Sorts a byte slice in place and returns it.
///
/// Comparison is strict less-than on the byte value. Slices of length zero or
/// one are returned untouched.
///
/// # Examples
///
/// ```
/// use knuthsort::shell_sort;
///
/// let mut data = *b"51324";
/// assert_eq!(shell_sort(&mut data), b"12345");
/// ```
pub fn shell_sort(data: &mut [u8]) -> &mut [u8] {
    let len = data.len();
    if len <= 1 {
        return data;
    }

    for gap in KnuthGaps::new(len) {
        let swaps = gapped_insertion_pass(data, gap);
        trace!(gap, swaps, len, "shell sort pass");
    }

    data
}

/// Sorts an owned [`Sequence`] and hands it back.
///
/// # Examples
///
/// ```
/// use knuthsort::{Sequence, sort};
///
/// let sorted = sort(Sequence::from(b"zza".to_vec()));
/// assert_eq!(sorted.as_bytes(), b"azz");
/// ```
pub fn sort(mut sequence: Sequence) -> Sequence {
    shell_sort(&mut sequence);
    sequence
}

/// Returns the first gap [`shell_sort`] uses for a slice of length `len`.
pub fn initial_gap(len: usize) -> usize {
    KnuthGaps::new(len).next().unwrap_or(1)
}

/// Returns `true` if `data` is in non-decreasing byte order.
pub fn is_sorted(data: &[u8]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// One insertion sort over every chain of elements `gap` apart.
///
/// Each element sinks towards the front of its chain by swapping with the
/// element `gap` positions before it while it is strictly smaller. Returns the
/// number of swaps performed.
fn gapped_insertion_pass(data: &mut [u8], gap: usize) -> usize {
    let mut swaps = 0;
    for i in gap..data.len() {
        let mut j = i;
        while j >= gap && data[j] < data[j - gap] {
            data.swap(j, j - gap);
            j -= gap;
            swaps += 1;
        }
    }
    swaps
}
