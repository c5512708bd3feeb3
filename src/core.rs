//! Core types for Knuthsort.
//!
//! This module defines:
//! - [`Sequence`]: the owned, growable byte buffer that gets sorted and printed.
//! - [`KnuthGaps`]: the descending `3h + 1` gap sequence a sort pass walks.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Growth factor of the increment sequence (`h = GAP_FACTOR * h + 1`).
pub const GAP_FACTOR: usize = 3;

/// An ordered, mutable sequence of bytes.
///
/// Each byte stands for one character taken from the command line. The
/// sequence dereferences to `[u8]`, so any slice operation (indexing,
/// iteration, `len`) is available directly.
///
/// # Examples
///
/// ```
/// use knuthsort::Sequence;
///
/// let mut seq = Sequence::from(b"dbac".to_vec());
/// seq.sort();
///
/// assert_eq!(seq.as_bytes(), b"abcd");
/// assert_eq!(seq.to_string(), "a b c d ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    bytes: Vec<u8>,
}

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a byte at the end.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Borrows the bytes in their current order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the sequence, returning the underlying buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Sorts the sequence in place and returns it for chaining.
    pub fn sort(&mut self) -> &mut Self {
        crate::algo::shell_sort(&mut self.bytes);
        self
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl FromIterator<u8> for Sequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl Deref for Sequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Sequence {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

// Renders the same layout the CLI prints. Bytes map to chars one-to-one
// (Latin-1), so non-ASCII input shows up as its code point rather than UTF-8.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.bytes {
            write!(f, "{} ", char::from(byte))?;
        }
        Ok(())
    }
}

/// Iterator over the Shell sort gaps used for a sequence of a given length.
///
/// Starts at the first member of `1, 4, 13, 40, ...` that is `>= len / 3`,
/// then divides by three until it hits zero. The last gap yielded is always
/// `1`.
///
/// # Examples
///
/// ```
/// use knuthsort::KnuthGaps;
///
/// let gaps: Vec<usize> = KnuthGaps::new(100).collect();
/// assert_eq!(gaps, vec![40, 13, 4, 1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnuthGaps {
    next: usize,
}

impl KnuthGaps {
    pub fn new(len: usize) -> Self {
        let third = len / GAP_FACTOR;
        let mut h = 1;
        while h < third {
            h = GAP_FACTOR * h + 1;
        }
        Self { next: h }
    }
}

impl Iterator for KnuthGaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == 0 {
            return None;
        }
        let gap = self.next;
        self.next /= GAP_FACTOR;
        Some(gap)
    }
}
