//! Object wrapper around the checkpoint entry points.
//!
//! A [`Resumable`] holds the current checkpoint string and a finalized flag.
//! It can be stored and restored at any point, either through
//! [`Resumable::from_state`] or with serde as a `(state, finalized)` pair.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::path::Path;

use crate::digest::sha1::SHA1;
use crate::digest::sha2::SHA256;
use crate::digest::{Digest, DigestAlgorithm};
use crate::error::{Error, Result};
use crate::native;
use crate::state::{self, Marshal};

/// Read size used by [`Resumable::from_reader`] and [`Resumable::from_file`].
pub const CHUNK_SIZE: usize = 5 * 1024 * 1024;

pub struct Resumable<A> {
    state: String,
    finalized: bool,
    _algorithm: PhantomData<fn() -> A>,
}

pub type ResumableSha1 = Resumable<SHA1>;
pub type ResumableSha256 = Resumable<SHA256>;

impl<A: DigestAlgorithm + Marshal> Resumable<A> {
    pub fn new() -> Self {
        Resumable {
            state: native::init::<A>(),
            finalized: false,
            _algorithm: PhantomData,
        }
    }

    /// Restores a wrapper from a stored checkpoint, rejecting checkpoints
    /// that do not decode for this algorithm.
    pub fn from_state<S: Into<String>>(state: S, finalized: bool) -> Result<Self> {
        let state = state.into();
        state::decode::<A>(&state)?;
        Ok(Resumable {
            state,
            finalized,
            _algorithm: PhantomData,
        })
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn reset(&mut self) -> &mut Self {
        self.state = native::init::<A>();
        self.finalized = false;
        self
    }

    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        self.state = native::update::<A>(&self.state, data)?;
        Ok(self)
    }

    /// Returns the hex digest and marks the wrapper finalized. Call
    /// [`reset`](Self::reset) to hash something else.
    pub fn hexdigest(&mut self) -> Result<String> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        let digest = native::finalize::<A>(&self.state)?;
        self.finalized = true;
        Ok(digest)
    }

    /// One-shot hex digest of `data`.
    pub fn digest_bytes(data: &[u8]) -> String {
        A::compute(data).to_hex()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_chunk_size(reader, CHUNK_SIZE)
    }

    pub fn from_reader_with_chunk_size<R: Read>(mut reader: R, chunk_size: usize) -> Result<Self> {
        let mut hasher = Self::new();
        let mut chunk = vec![0; chunk_size.max(1)];
        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            debug!("{} absorbing {} byte chunk", A::algorithm(), read);
            hasher.update(&chunk[..read])?;
        }
        Ok(hasher)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("{} hashing {}", A::algorithm(), path.display());
        Self::from_reader(File::open(path)?)
    }
}

impl<A: DigestAlgorithm + Marshal> Default for Resumable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Resumable<A> {
    fn clone(&self) -> Self {
        Resumable {
            state: self.state.clone(),
            finalized: self.finalized,
            _algorithm: PhantomData,
        }
    }
}

impl<A> PartialEq for Resumable<A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.finalized == other.finalized
    }
}

impl<A> Eq for Resumable<A> {}

impl<A: Marshal> fmt::Debug for Resumable<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Resumable")
            .field("algorithm", &A::algorithm())
            .field("state", &self.state)
            .field("finalized", &self.finalized)
            .finish()
    }
}

impl<A: DigestAlgorithm + Marshal> Write for Resumable<A> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<A> serde::Serialize for Resumable<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(&self.state, self.finalized), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: DigestAlgorithm + Marshal> serde::Deserialize<'de> for Resumable<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let (state, finalized) = <(String, bool) as serde::Deserialize>::deserialize(deserializer)?;
        Resumable::from_state(state, finalized).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn update_chains() {
        let mut hasher = ResumableSha1::new();
        hasher.update(b"The quick brown fox ").unwrap().update(b"jumps over the lazy dog").unwrap();
        assert_eq!(hasher.hexdigest().unwrap(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
        assert!(hasher.is_finalized());
    }

    #[test]
    fn update_after_finalize_fails() {
        let mut hasher = ResumableSha256::new();
        hasher.update(b"data").unwrap();
        hasher.hexdigest().unwrap();
        assert!(matches!(hasher.update(b"more data"), Err(Error::Finalized)));
        assert!(matches!(hasher.hexdigest(), Err(Error::AlreadyFinalized)));
    }

    #[test]
    fn reset_allows_reuse() {
        let mut hasher = ResumableSha256::new();
        hasher.update(b"first").unwrap();
        hasher.hexdigest().unwrap();

        hasher.reset().update(FOX).unwrap();
        assert_eq!(hasher.hexdigest().unwrap(), ResumableSha256::digest_bytes(FOX));
    }

    #[test]
    fn equality_follows_state() {
        let mut a = ResumableSha1::new();
        a.update(b"hello").unwrap();
        let mut b = ResumableSha1::new();
        b.update(b"world").unwrap();
        assert_ne!(a, b);

        let restored = ResumableSha1::from_state(a.state(), a.is_finalized()).unwrap();
        assert_eq!(a, restored);
    }

    #[test]
    fn from_state_rejects_other_algorithm() {
        let sha1 = ResumableSha1::new();
        let err = ResumableSha256::from_state(sha1.state(), false).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn write_reports_length() {
        let mut hasher = ResumableSha1::new();
        for line in &["The quick brown fox", " jumps over the lazy dog"] {
            assert_eq!(hasher.write(line.as_bytes()).unwrap(), line.len());
        }
        assert_eq!(hasher.hexdigest().unwrap(), ResumableSha1::digest_bytes(FOX));
    }

    #[test]
    fn write_after_finalize_is_an_io_error() {
        let mut hasher = ResumableSha1::new();
        hasher.hexdigest().unwrap();
        let err = hasher.write_all(b"late").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn reader_in_small_chunks() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
        let mut hasher = ResumableSha256::from_reader_with_chunk_size(&data[..], 13).unwrap();
        assert!(!hasher.is_finalized());
        assert_eq!(hasher.hexdigest().unwrap(), ResumableSha256::digest_bytes(&data));
    }

    #[test]
    fn debug_names_algorithm() {
        let hasher = ResumableSha256::new();
        assert!(format!("{:?}", hasher).contains("SHA-256"));
    }
}
