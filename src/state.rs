//! Checkpoint codec.
//!
//! A checkpoint is the binary layout produced by [`Marshal::marshal_binary`]
//! wrapped in padded, standard-alphabet base64 so it can cross text-only
//! boundaries. Decoding is strict: anything that is not exactly what the
//! encoder would have produced is rejected.

use data_encoding::BASE64;

use crate::error::{Error, Result};

/// Binary (de)serialization of a live hash engine.
pub trait Marshal: Sized {
    /// Human-readable algorithm name used in errors and logs.
    fn algorithm() -> &'static str;

    /// Exact length of the binary layout.
    fn marshaled_size() -> usize;

    fn marshal_binary(&self) -> Vec<u8>;

    fn unmarshal_binary(data: &[u8]) -> Result<Self>;
}

pub fn encode<M: Marshal>(engine: &M) -> String {
    BASE64.encode(&engine.marshal_binary())
}

pub fn decode<M: Marshal>(checkpoint: &str) -> Result<M> {
    let data = BASE64.decode(checkpoint.as_bytes()).map_err(|err| {
        debug!("rejected {} checkpoint: {}", M::algorithm(), err);
        Error::InvalidEncoding(err)
    })?;
    M::unmarshal_binary(&data).map_err(|err| {
        debug!("rejected {} checkpoint: {}", M::algorithm(), err);
        err
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::digest::sha1::SHA1;
    use crate::digest::sha2::SHA256;
    use crate::digest::{Digest, DigestAlgorithm};

    #[test]
    fn round_trip_behaves_like_original() {
        let mut original = SHA256::new();
        original.update(b"The quick brown ");
        let mut restored: SHA256 = decode(&encode(&original)).unwrap();
        assert_eq!(restored.len(), 16);

        original.update(b"fox jumps over the lazy dog");
        restored.update(b"fox jumps over the lazy dog");
        assert_eq!(original.digest(), restored.digest());
    }

    #[test]
    fn uses_standard_alphabet() {
        let checkpoint = encode(&SHA256::new());
        assert!(checkpoint.contains('/') && checkpoint.contains('+'));

        let url_safe = checkpoint.replace('/', "_").replace('+', "-");
        assert!(matches!(decode::<SHA256>(&url_safe), Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn decode_fresh_state() {
        let engine: SHA1 = decode(&encode(&SHA1::new())).unwrap();
        assert!(engine.is_empty());
        assert_eq!(engine.digest().to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }
}
