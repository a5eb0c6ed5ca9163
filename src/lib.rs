//! Resumable SHA-1 and SHA-256.
//!
//! The in-progress state of a hash can be encoded into a printable
//! checkpoint, carried around by the caller, and decoded later to absorb
//! more data or produce the digest. No bytes are ever replayed.
//!
//! ```
//! use resumable_digest::{sha256_finalize, sha256_init, sha256_update};
//!
//! let state = sha256_update(&sha256_init(), b"abc").unwrap();
//! let state = sha256_update(&state, b"def").unwrap();
//! assert_eq!(
//!     sha256_finalize(&state).unwrap(),
//!     "bef57ec7f53a6d40beb640a780a639c83bc29ac8a9816f1fc6c5c6dcd93c4721"
//! );
//! ```

#[macro_use]
extern crate log;

pub mod digest;
pub mod error;
pub mod native;
pub mod resumable;
pub mod state;

pub use error::{Error, Result};
pub use native::{sha1_finalize, sha1_init, sha1_update, sha256_finalize, sha256_init, sha256_update};
pub use resumable::{Resumable, ResumableSha1, ResumableSha256, CHUNK_SIZE};
