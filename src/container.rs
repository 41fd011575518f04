//! Parsing of the OpenSSL salted container header.
//!
//! Byte-exact layout:
//!
//! | offset | length    | field              |
//! |--------|-----------|--------------------|
//! | 0      | 8         | ASCII `"Salted__"` |
//! | 8      | 8         | salt               |
//! | 16     | remainder | ciphertext         |

use crate::config::{HEADER_LEN, MAGIC, SALT_LEN};
use crate::error::DecryptError;

/// Borrowed view over a validated encrypted buffer.
#[derive(Debug, Clone, Copy)]
pub struct EncryptedContainer<'a> {
    salt: &'a [u8; SALT_LEN],
    ciphertext: &'a [u8],
}

impl<'a> EncryptedContainer<'a> {
    /// Validates the header and slices the buffer.
    ///
    /// Fails before any cryptographic work happens. A short input, a wrong
    /// magic tag, and an empty payload each get their own error so callers
    /// can report which check failed.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DecryptError> {
        if bytes.len() < HEADER_LEN {
            return Err(DecryptError::InputTooShort { len: bytes.len() });
        }

        if &bytes[..MAGIC.len()] != MAGIC {
            return Err(DecryptError::BadMagicTag);
        }

        let salt: &[u8; SALT_LEN] = bytes[MAGIC.len()..HEADER_LEN].try_into().expect("salt slice is SALT_LEN bytes");
        let ciphertext = &bytes[HEADER_LEN..];

        if ciphertext.is_empty() {
            return Err(DecryptError::EmptyPayload);
        }

        Ok(Self { salt, ciphertext })
    }

    #[inline]
    #[must_use]
    pub const fn salt(&self) -> &'a [u8; SALT_LEN] {
        self.salt
    }

    #[inline]
    #[must_use]
    pub const fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}
