//! # Knuthsort
//!
//! `knuthsort` sorts a sequence of bytes in place with **Shell sort**, driven by
//! Knuth's increment sequence `h = 3h + 1` (1, 4, 13, 40, 121, ...).
//!
//! The crate backs the `knuthsort` binary, which takes one character per
//! command-line argument (the first byte of each argument), sorts them, and
//! prints them space-separated.
//!
//! ## Components
//!
//! - **Input**: [`input::collect`] turns an argument list into a [`Sequence`],
//!   one byte per argument. Empty arguments are handled per [`EmptyArgPolicy`].
//! - **Sort**: [`shell_sort`] performs gapped insertion passes over a `&mut [u8]`,
//!   largest gap first, finishing with an ordinary insertion sort at `h = 1`.
//! - **Output**: [`output::write_sequence`] writes each byte followed by a single
//!   space, with no trailing newline.
//!
//! ## Usage
//!
//! ```rust
//! use knuthsort::shell_sort;
//!
//! let mut data = *b"dbac";
//! shell_sort(&mut data);
//!
//! assert_eq!(&data, b"abcd");
//! ```
//!
//! Building a sequence from arguments:
//!
//! ```rust
//! use knuthsort::prelude::*;
//!
//! let mut seq = collect(["z", "z", "a"], EmptyArgPolicy::Reject).unwrap();
//! seq.sort();
//!
//! assert_eq!(seq.to_string(), "a z z ");
//! ```
//!
//! ## Ordering
//!
//! Comparison is on raw byte value only. There is no locale awareness and no
//! stability guarantee: equal bytes are indistinguishable anyway.

pub mod algo;
pub mod core;
pub mod error;
pub mod input;
pub mod output;

pub use crate::algo::{initial_gap, is_sorted, shell_sort, sort};
pub use crate::core::{KnuthGaps, Sequence};
pub use crate::error::{Error, Result};
pub use crate::input::EmptyArgPolicy;

/// Collects `args`, sorts them, and writes the result to `writer`.
///
/// This is the whole CLI pipeline; the sorted sequence is returned so callers
/// can inspect what was printed.
///
/// # Examples
///
/// ```
/// use knuthsort::{EmptyArgPolicy, run};
///
/// let mut out = Vec::new();
/// run(["d", "b", "a", "c"], EmptyArgPolicy::Reject, &mut out).unwrap();
/// assert_eq!(out, b"a b c d ");
/// ```
pub fn run<I, S, W>(args: I, policy: EmptyArgPolicy, writer: &mut W) -> Result<Sequence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
    W: std::io::Write,
{
    let mut sequence = input::collect(args, policy)?;
    sequence.sort();
    output::write_sequence(writer, &sequence)?;
    Ok(sequence)
}

pub mod prelude {
    pub use crate::algo::{shell_sort, sort};
    pub use crate::core::Sequence;
    pub use crate::error::{Error, Result};
    pub use crate::input::{EmptyArgPolicy, collect};
    pub use crate::output::write_sequence;
    pub use crate::run;
}
