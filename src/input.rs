//! Turns an argument list into a [`Sequence`].
//!
//! Every argument contributes the first byte of its platform encoding. On Unix
//! that is exactly the first byte of the raw `argv` entry, so non-UTF-8
//! arguments are accepted as-is.

use crate::core::Sequence;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use tracing::debug;

/// What to do with an argument that has no first byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyArgPolicy {
    /// Fail with [`Error::InvalidArgument`] on the first empty argument.
    #[default]
    Reject,
    /// Leave empty arguments out of the sequence.
    Skip,
}

/// Collects the first byte of each argument, in order.
///
/// `args` must not include the program name.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty argument when `policy` is
/// [`EmptyArgPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use knuthsort::input::{EmptyArgPolicy, collect};
///
/// let seq = collect(["dog", "b", "a", "cat"], EmptyArgPolicy::Reject).unwrap();
/// assert_eq!(seq.as_bytes(), b"dbac");
///
/// let seq = collect(["x", "", "y"], EmptyArgPolicy::Skip).unwrap();
/// assert_eq!(seq.as_bytes(), b"xy");
/// ```
pub fn collect<I, S>(args: I, policy: EmptyArgPolicy) -> Result<Sequence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args = args.into_iter();
    let mut sequence = Sequence::with_capacity(args.size_hint().0);
    let mut skipped = 0usize;

    for (index, arg) in args.enumerate() {
        let position = index + 1;
        match arg.as_ref().as_encoded_bytes().first() {
            Some(&byte) => sequence.push(byte),
            None => match policy {
                EmptyArgPolicy::Reject => return Err(Error::InvalidArgument { position }),
                EmptyArgPolicy::Skip => {
                    debug!(position, "skipping empty argument");
                    skipped += 1;
                }
            },
        }
    }

    debug!(len = sequence.len(), skipped, "collected input sequence");
    Ok(sequence)
}
