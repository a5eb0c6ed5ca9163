use std::fmt::Debug;

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::state::Marshal;
use super::{Digest, DigestAlgorithm};


pub trait Chunk: AsRef<[u8]> + AsMut<[u8]> + Debug + Clone {
    fn new() -> Self;
    fn len() -> usize;
}

pub trait ChunkedDigestAlgorithm {
    type Chunk: Chunk;
    type Digest: Digest;

    /// Algorithm name, e.g. "SHA-256".
    const NAME: &'static str;
    /// Tag that opens every marshaled state of this algorithm.
    const MAGIC: &'static [u8; 4];
    /// Number of 32-bit words in the chaining value.
    const WORDS: usize;

    fn new() -> Self;
    fn update_chunk(&mut self, chunk: &[u8]);
    fn digest(self) -> Self::Digest;

    fn words(&self) -> &[u32];
    /// Rebuilds the chaining value; `words` always holds exactly `WORDS` items.
    fn from_words(words: &[u32]) -> Self;
}

#[derive(Debug, Clone)]
pub struct ChunkedDigestWrapper<Inner: ChunkedDigestAlgorithm> {
    // Hash state
    inner: Inner,
    // Message length in bytes
    len: u64,
    // In-progress chunk
    buffer_len: usize,
    buffer: Inner::Chunk
}

impl<Inner: ChunkedDigestAlgorithm> ChunkedDigestWrapper<Inner> {
    /// Total number of bytes absorbed so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<Inner: ChunkedDigestAlgorithm> DigestAlgorithm for ChunkedDigestWrapper<Inner> {
    type Digest = Inner::Digest;

    fn new() -> Self {
        ChunkedDigestWrapper {
            inner: Inner::new(),
            len: 0,
            buffer_len: 0,
            buffer: Inner::Chunk::new()
        }
    }

    fn update(&mut self, mut input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);

        let buffer_len = self.buffer_len;
        let chunk_len = Inner::Chunk::len();
        let buffer = self.buffer.as_mut();

        // If buffer is already partially filled
        if buffer_len > 0 {
            let remaining = chunk_len - buffer_len;
            // If input is not long enough to fill remaining space in buffer
            if input.len() < remaining {
                // Copy the whole input into the buffer and return
                buffer[buffer_len..buffer_len + input.len()].copy_from_slice(input);
                self.buffer_len += input.len();
                return;
            } else {
                // Fill the remaining space with input data and process the chunk
                buffer[buffer_len..].copy_from_slice(&input[0..remaining]);
                input = &input[remaining..];
                self.inner.update_chunk(buffer);
            }
        }

        // Buffer is empty at this point, so can directly read chunks from input
        while input.len() >= chunk_len {
            self.inner.update_chunk(&input[0..chunk_len]);
            input = &input[chunk_len..];
        }

        // Partially fill the buffer with any left-over input
        buffer[0..input.len()].copy_from_slice(input);
        self.buffer_len = input.len();
    }

    fn digest(mut self) -> Self::Digest {
        let chunk_len = Inner::Chunk::len();
        let buffer = self.buffer.as_mut();

        // Append 1 bit
        buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Ensure there's room to write the message length
        if self.buffer_len + 8 > chunk_len {
            buffer[self.buffer_len..].fill(0);
            self.buffer_len = 0;
            self.inner.update_chunk(buffer);
        }

        // Fill remaining space with zeros followed by the message length in bits
        buffer[self.buffer_len..chunk_len-8].fill(0);
        BigEndian::write_u64(&mut buffer[chunk_len-8..], self.len << 3);
        // Final chunk computation
        self.inner.update_chunk(buffer);
        self.inner.digest()
    }
}

// Layout: magic | chaining value (u32 BE words) | chunk (zero-filled past the
// buffered bytes) | message length in bytes (u64 BE).
impl<Inner: ChunkedDigestAlgorithm> Marshal for ChunkedDigestWrapper<Inner> {
    fn algorithm() -> &'static str {
        Inner::NAME
    }

    fn marshaled_size() -> usize {
        Inner::MAGIC.len() + Inner::WORDS * 4 + Inner::Chunk::len() + 8
    }

    fn marshal_binary(&self) -> Vec<u8> {
        let mut out = vec![0; Self::marshaled_size()];

        let (magic, rest) = out.split_at_mut(Inner::MAGIC.len());
        magic.copy_from_slice(Inner::MAGIC);
        let (words, rest) = rest.split_at_mut(Inner::WORDS * 4);
        BigEndian::write_u32_into(self.inner.words(), words);
        let (chunk, len) = rest.split_at_mut(Inner::Chunk::len());
        chunk[..self.buffer_len].copy_from_slice(&self.buffer.as_ref()[..self.buffer_len]);
        BigEndian::write_u64(len, self.len);

        out
    }

    fn unmarshal_binary(data: &[u8]) -> Result<Self> {
        let algorithm = Inner::NAME;
        if !data.starts_with(Inner::MAGIC) {
            return Err(Error::InvalidStateIdentifier { algorithm });
        }
        let expected = Self::marshaled_size();
        if data.len() != expected {
            return Err(Error::InvalidStateSize { algorithm, expected, actual: data.len() });
        }

        let rest = &data[Inner::MAGIC.len()..];
        let (word_bytes, rest) = rest.split_at(Inner::WORDS * 4);
        let mut words = vec![0; Inner::WORDS];
        BigEndian::read_u32_into(word_bytes, &mut words);
        let (chunk, len) = rest.split_at(Inner::Chunk::len());
        let len = BigEndian::read_u64(len);

        let buffer_len = (len % Inner::Chunk::len() as u64) as usize;
        if chunk[buffer_len..].iter().any(|&b| b != 0) {
            return Err(Error::NonZeroPadding { algorithm });
        }
        let mut buffer = Inner::Chunk::new();
        buffer.as_mut()[..buffer_len].copy_from_slice(&chunk[..buffer_len]);

        Ok(ChunkedDigestWrapper {
            inner: Inner::from_words(&words),
            len,
            buffer_len,
            buffer
        })
    }
}
