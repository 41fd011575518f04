//! PBKDF2-HMAC-SHA256 key derivation.
//!
//! Derives the 48 bytes OpenSSL expects for AES-256-CBC: a 32-byte cipher
//! key followed by a 16-byte IV. Output must be byte-identical to
//! `openssl enc -pbkdf2 -md sha256` for the same password, salt, and
//! iteration count; any deviation decrypts to garbage instead of failing.

use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

use crate::config::{DERIVED_LEN, IV_LEN, KEY_LEN};
use crate::error::DecryptError;

/// The derived key material: AES-256 key followed by the CBC IV.
///
/// Held behind [`SecretBox`] so the buffer is zeroized when dropped.
pub struct DerivedKeyMaterial {
    inner: SecretBox<Vec<u8>>,
}

impl DerivedKeyMaterial {
    /// First 32 bytes: the cipher key.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.inner.expose_secret()[..KEY_LEN]
    }

    /// Last 16 bytes: the initialization vector.
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        &self.inner.expose_secret()[KEY_LEN..KEY_LEN + IV_LEN]
    }
}

impl std::fmt::Debug for DerivedKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKeyMaterial([... {DERIVED_LEN} bytes ...])")
    }
}

/// Derives the key/IV pair from a password and the container salt.
///
/// Deterministic: the same (password, salt, iterations) triple always
/// yields the same material. Deliberately slow; the iteration count is the
/// work factor and the call is atomic, so callers report progress around
/// it, not during it.
///
/// # Errors
/// [`DecryptError::EmptyPassword`] when the password is empty; the KDF is
/// never invoked in that case.
pub fn derive_key_material(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKeyMaterial, DecryptError> {
    if password.is_empty() {
        return Err(DecryptError::EmptyPassword);
    }

    let mut material = vec![0u8; DERIVED_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut material);

    Ok(DerivedKeyMaterial { inner: SecretBox::new(Box::new(material)) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SALT_LEN;

    #[test]
    fn test_derive_split_lengths() {
        let material = derive_key_material("password", &[0u8; SALT_LEN], 10).unwrap();
        assert_eq!(material.key().len(), KEY_LEN);
        assert_eq!(material.iv().len(), IV_LEN);
    }

    #[test]
    fn test_derive_deterministic() {
        let salt = [0x5Au8; SALT_LEN];
        let first = derive_key_material("correct horse", &salt, 1_000).unwrap();
        let second = derive_key_material("correct horse", &salt, 1_000).unwrap();

        assert_eq!(first.key(), second.key());
        assert_eq!(first.iv(), second.iv());
    }

    #[test]
    fn test_derive_empty_password() {
        let result = derive_key_material("", &[0u8; SALT_LEN], 1);
        assert!(matches!(result, Err(DecryptError::EmptyPassword)));
    }

    // Published PBKDF2-HMAC-SHA256 vectors (password "password", salt
    // "salt", dkLen 32). PBKDF2 output blocks are independent, so the
    // first 32 bytes of our 48-byte output equal the 32-byte vectors.
    #[test]
    fn test_derive_known_vector_one_iteration() {
        let material = derive_key_material("password", b"salt", 1).unwrap();
        let expected = hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b").unwrap();
        assert_eq!(material.key(), expected.as_slice());
    }

    #[test]
    fn test_derive_known_vector_4096_iterations() {
        let material = derive_key_material("password", b"salt", 4_096).unwrap();
        let expected = hex::decode("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a").unwrap();
        assert_eq!(material.key(), expected.as_slice());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let material = derive_key_material("password", &[0u8; SALT_LEN], 1).unwrap();
        assert_eq!(format!("{material:?}"), "DerivedKeyMaterial([... 48 bytes ...])");
    }
}
