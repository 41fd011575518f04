use thiserror::Error;

/// Failures surfaced by the decryption pipeline.
///
/// Every variant is terminal: the pipeline stops at the first failure and
/// never retries, falls back, or returns partial plaintext.
#[derive(Debug, Error)]
pub enum DecryptError {
    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("input is {len} bytes, shorter than the {header}-byte header", header = crate::config::HEADER_LEN)]
    InputTooShort { len: usize },

    #[error("missing Salted__ tag; not an OpenSSL salted container")]
    BadMagicTag,

    #[error("container holds no ciphertext after the header")]
    EmptyPayload,

    /// Finalization failure. CBC with padding gives no signal to tell a
    /// wrong password from corrupted ciphertext, so the message names both.
    #[error("{detail}; the password may be wrong or the data corrupted")]
    DecryptionFailed { detail: String },
}
