//! desalt - decrypt OpenSSL salted AES-256-CBC files.
//!
//! Reverses the container written by `openssl enc -aes-256-cbc -salt -pbkdf2`:
//! - `Salted__` header parsing (8-byte magic + 8-byte salt + ciphertext)
//! - PBKDF2-HMAC-SHA256 key derivation (100,000 iterations, 48 bytes
//!   split into a 32-byte key and a 16-byte IV)
//! - chunked AES-256-CBC decryption with PKCS#7 padding validation
//! - progress reporting through a pluggable sink
//!
//! The format is unauthenticated; see [`cipher::CbcEngine`] for what that
//! means for corruption detection.

pub mod cipher;
pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod file;
pub mod kdf;
pub mod pipeline;
pub mod progress;
pub mod ui;

pub use error::DecryptError;
pub use file::output_name;
pub use pipeline::{Decrypted, decrypt, decrypt_with_progress};
pub use progress::{NullSink, ProgressEvent, ProgressSink, Stage};
