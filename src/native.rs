//! Flat entry points over caller-held checkpoint strings.
//!
//! Nothing persists between calls: every call decodes the checkpoint into a
//! local engine, works on it, and either re-encodes it or reads out the
//! digest. Calls on the same or different checkpoints may run concurrently.

use crate::digest::sha1::SHA1;
use crate::digest::sha2::SHA256;
use crate::digest::{Digest, DigestAlgorithm};
use crate::error::Result;
use crate::state::{self, Marshal};

/// Checkpoint of a fresh engine with nothing absorbed.
pub fn init<A: DigestAlgorithm + Marshal>() -> String {
    trace!("{} init", A::algorithm());
    state::encode(&A::new())
}

/// Absorbs `data` into the engine held by `checkpoint` and returns the new
/// checkpoint. The input checkpoint stays valid.
pub fn update<A: DigestAlgorithm + Marshal>(checkpoint: &str, data: &[u8]) -> Result<String> {
    trace!("{} update with {} bytes", A::algorithm(), data.len());
    let mut engine: A = state::decode(checkpoint)?;
    engine.update(data);
    Ok(state::encode(&engine))
}

/// Lowercase hex digest of everything absorbed into `checkpoint`.
pub fn finalize<A: DigestAlgorithm + Marshal>(checkpoint: &str) -> Result<String> {
    trace!("{} finalize", A::algorithm());
    let engine: A = state::decode(checkpoint)?;
    Ok(engine.digest().to_hex())
}

pub fn sha256_init() -> String {
    init::<SHA256>()
}

pub fn sha256_update(checkpoint: &str, data: &[u8]) -> Result<String> {
    update::<SHA256>(checkpoint, data)
}

pub fn sha256_finalize(checkpoint: &str) -> Result<String> {
    finalize::<SHA256>(checkpoint)
}

pub fn sha1_init() -> String {
    init::<SHA1>()
}

pub fn sha1_update(checkpoint: &str, data: &[u8]) -> Result<String> {
    update::<SHA1>(checkpoint, data)
}

pub fn sha1_finalize(checkpoint: &str) -> Result<String> {
    finalize::<SHA1>(checkpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SHA256_EMPTY_STATE: &str = "c2hhA2oJ5me7Z66FPG7zcqVP9TpRDlJ/mwVojB+D2atb4M0ZAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    const SHA256_ABC_STATE: &str = "c2hhA2oJ5me7Z66FPG7zcqVP9TpRDlJ/mwVojB+D2atb4M0ZYWJjAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAD";
    const SHA1_EMPTY_STATE: &str = "c2hhAWdFIwHvzauJmLrc/hAyVHbD0uHwAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    #[test]
    fn init_matches_reference_layout() {
        assert_eq!(sha256_init(), SHA256_EMPTY_STATE);
        assert_eq!(sha1_init(), SHA1_EMPTY_STATE);
        assert_eq!(sha256_init().len(), 144);
        assert_eq!(sha1_init().len(), 128);
    }

    #[test]
    fn update_matches_reference_layout() {
        assert_eq!(sha256_update(&sha256_init(), b"abc").unwrap(), SHA256_ABC_STATE);
    }

    #[test]
    fn finalize_empty() {
        assert_eq!(
            sha256_finalize(&sha256_init()).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sha1_finalize(&sha1_init()).unwrap(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn abc_then_def() {
        let state = sha256_update(&sha256_init(), b"abc").unwrap();
        let state = sha256_update(&state, b"def").unwrap();
        assert_eq!(
            sha256_finalize(&state).unwrap(),
            "bef57ec7f53a6d40beb640a780a639c83bc29ac8a9816f1fc6c5c6dcd93c4721"
        );
    }

    #[test]
    fn empty_update_is_identity() {
        assert_eq!(sha256_update(SHA256_ABC_STATE, b"").unwrap(), SHA256_ABC_STATE);
        assert_eq!(sha1_update(SHA1_EMPTY_STATE, b"").unwrap(), SHA1_EMPTY_STATE);
    }

    #[test]
    fn cross_algorithm_checkpoints_are_rejected() {
        assert!(matches!(
            sha1_finalize(SHA256_EMPTY_STATE),
            Err(Error::InvalidStateIdentifier { algorithm: "SHA-1" })
        ));
        assert!(matches!(
            sha256_update(SHA1_EMPTY_STATE, b"x"),
            Err(Error::InvalidStateIdentifier { algorithm: "SHA-256" })
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(sha256_finalize("not base64!"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(sha256_finalize(""), Err(Error::InvalidStateIdentifier { .. })));
        assert!(matches!(sha1_finalize(&SHA1_EMPTY_STATE[..127]), Err(Error::InvalidEncoding(_))));
    }
}
