//! Format and cipher constants for the OpenSSL salted container.
//!
//! Everything here is fixed by the wire format produced by
//! `openssl enc -aes-256-cbc -salt -pbkdf2`; none of it is negotiable at
//! runtime.

/// Application name used in user-facing output.
pub const APP_NAME: &str = "desalt";

/// Magic tag opening every OpenSSL salted container.
pub const MAGIC: &[u8; 8] = b"Salted__";

/// Salt length fixed by the container format.
pub const SALT_LEN: usize = 8;

/// Total header length: magic tag followed by the salt.
pub const HEADER_LEN: usize = MAGIC.len() + SALT_LEN;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length, one cipher block.
pub const IV_LEN: usize = 16;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Derived key material length: cipher key followed by IV.
pub const DERIVED_LEN: usize = KEY_LEN + IV_LEN;

/// PBKDF2 iteration count matching `openssl enc -pbkdf2 -iter 100000`.
///
/// The work factor is deliberate; key derivation is the slow step of the
/// pipeline. This value must stay in lockstep with the encrypting side:
/// a mismatch produces wrong plaintext, not an error.
pub const KDF_ITERATIONS: u32 = 100_000;

/// Ciphertext is decrypted in chunks of this many bytes.
///
/// Must be a multiple of [`BLOCK_LEN`]. Chunking only bounds memory
/// pressure and sets the progress granularity; CBC chaining crosses chunk
/// boundaries, so the size never affects the result.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Extension recognized (and stripped) on encrypted input names.
pub const ENCRYPTED_EXTENSION: &str = ".enc";

/// Suffix appended when the input name carries no recognized extension.
pub const DECRYPTED_SUFFIX: &str = ".decrypted";
