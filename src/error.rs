//! Error type shared by the input and output stages.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument with no first byte. `position` is 1-based, as on the command line.
    #[error("argument {position} is empty; every argument must supply one character")]
    InvalidArgument { position: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
