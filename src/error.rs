use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("checkpoint is not valid base64")]
    InvalidEncoding(#[source] data_encoding::DecodeError),
    #[error("invalid {algorithm} hash state identifier")]
    InvalidStateIdentifier { algorithm: &'static str },
    #[error("invalid {algorithm} hash state size: expected {expected} bytes, got {actual}")]
    InvalidStateSize {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{algorithm} hash state has data past the buffered input")]
    NonZeroPadding { algorithm: &'static str },
    #[error("invalid state: reset this digest before adding new data")]
    Finalized,
    #[error("invalid state: this digest is already finalized")]
    AlreadyFinalized,
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

impl Error {
    /// True if this error came from rejecting a checkpoint string.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidEncoding(_)
                | Error::InvalidStateIdentifier { .. }
                | Error::InvalidStateSize { .. }
                | Error::NonZeroPadding { .. }
        )
    }
}
