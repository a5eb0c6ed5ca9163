use byteorder::{BigEndian, ByteOrder};

use super::chunked::{ChunkedDigestAlgorithm, ChunkedDigestWrapper};

define_digest!(SHA1Digest, 20);
define_chunk!(SHA1Chunk, 64);

#[derive(Debug, Clone)]
pub struct SHA1Chunked {
    h: [u32; 5],
}

impl ChunkedDigestAlgorithm for SHA1Chunked {
    type Digest = SHA1Digest;
    type Chunk = SHA1Chunk;

    const NAME: &'static str = "SHA-1";
    const MAGIC: &'static [u8; 4] = b"sha\x01";
    const WORDS: usize = 5;

    fn new() -> Self {
        SHA1Chunked {
            h: [
                0x67452301,
                0xEFCDAB89,
                0x98BADCFE,
                0x10325476,
                0xC3D2E1F0
            ]
        }
    }

    fn update_chunk(&mut self, chunk: &[u8]) {
        // Compute 80 words
        let mut w = [0; 80];
        BigEndian::read_u32_into(chunk, &mut w[..16]);
        for i in 16..80 {
            w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
        }

        // Copy hash state
        let mut h = self.h;

        // Bitwise functions
        let choose   = |x: u32, y: u32, z: u32| (x & y) | (!x & z);
        let parity   = |x: u32, y: u32, z: u32| x ^ y ^ z;
        let majority = |x: u32, y: u32, z: u32| (x & y) | (y & z) | (x & z);

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                 0..=19 => (  choose(h[1], h[2], h[3]), 0x5A827999),
                20..=39 => (  parity(h[1], h[2], h[3]), 0x6ED9EBA1),
                40..=59 => (majority(h[1], h[2], h[3]), 0x8F1BBCDC),
                      _ => (  parity(h[1], h[2], h[3]), 0xCA62C1D6),
            };
            let temp = h[0].rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(h[4])
                .wrapping_add(k)
                .wrapping_add(word);

            h.copy_within(0..4, 1);
            h[2] = h[2].rotate_left(30);
            h[0] = temp;
        }

        // Update hash state
        for (state, word) in self.h.iter_mut().zip(&h) {
            *state = state.wrapping_add(*word);
        }
    }

    fn digest(self) -> Self::Digest {
        let mut result = [0; 20];
        BigEndian::write_u32_into(&self.h, &mut result);
        SHA1Digest(result)
    }

    fn words(&self) -> &[u32] {
        &self.h
    }

    fn from_words(words: &[u32]) -> Self {
        let mut h = [0; 5];
        h.copy_from_slice(words);
        SHA1Chunked { h }
    }
}

pub type SHA1 = ChunkedDigestWrapper<SHA1Chunked>;
