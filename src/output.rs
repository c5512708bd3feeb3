//! Writes a sorted sequence the way the CLI prints it.

use std::io::{self, Write};

/// Writes every byte followed by a single space, then flushes.
///
/// Bytes go out raw, so the output reproduces the input characters exactly.
/// No trailing newline is written.
///
/// # Examples
///
/// ```
/// use knuthsort::output::write_sequence;
///
/// let mut out = Vec::new();
/// write_sequence(&mut out, b"abcd").unwrap();
/// assert_eq!(out, b"a b c d ");
/// ```
pub fn write_sequence<W: Write>(writer: &mut W, sequence: &[u8]) -> io::Result<()> {
    for &byte in sequence {
        writer.write_all(&[byte, b' '])?;
    }
    writer.flush()
}
