//! Chunked AES-256-CBC decryption.

use cbc::cipher::block_padding::{Pkcs7, RawPadding};
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::config::{BLOCK_LEN, CHUNK_SIZE, IV_LEN, KEY_LEN};
use crate::error::DecryptError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Stateful CBC decryption engine.
///
/// Ciphertext is processed in [`CHUNK_SIZE`] chunks so long inputs report
/// progress at a useful granularity. The decryptor carries the chaining
/// block across chunk boundaries, so chunking never changes the result.
///
/// The format carries no authentication tag: a bit-flip that happens to
/// leave the final padding well-formed decrypts to garbage without an
/// error. That is a property of the legacy format, not of this engine.
pub struct CbcEngine {
    decryptor: Aes256CbcDec,
}

impl CbcEngine {
    #[must_use]
    pub fn new(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Self {
        Self { decryptor: Aes256CbcDec::new(key.into(), iv.into()) }
    }

    /// Decrypts `ciphertext`, calling `on_chunk(processed, total)` after
    /// each chunk, then strips the PKCS#7 padding from the final block.
    ///
    /// # Errors
    /// [`DecryptError::DecryptionFailed`] when the ciphertext is not a
    /// whole number of blocks or the padding does not verify. A wrong
    /// password and corrupted data produce the same failure; CBC with
    /// padding gives no signal to tell them apart.
    pub fn decrypt<F>(mut self, ciphertext: &[u8], mut on_chunk: F) -> Result<Vec<u8>, DecryptError>
    where
        F: FnMut(usize, usize),
    {
        if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_LEN) {
            return Err(DecryptError::DecryptionFailed {
                detail: format!("ciphertext length {} is not a whole number of {BLOCK_LEN}-byte blocks", ciphertext.len()),
            });
        }

        let total = ciphertext.len();
        let mut plaintext = ciphertext.to_vec();
        let mut processed = 0usize;

        for chunk in plaintext.chunks_mut(CHUNK_SIZE) {
            for block in chunk.chunks_exact_mut(BLOCK_LEN) {
                self.decryptor.decrypt_block_mut(GenericArray::from_mut_slice(block));
            }

            processed += chunk.len();
            on_chunk(processed, total);
        }

        let tail = Pkcs7::raw_unpad(&plaintext[total - BLOCK_LEN..]).map_err(|_| DecryptError::DecryptionFailed {
            detail: "padding check failed on the final block".to_owned(),
        })?;

        let unpadded_len = total - BLOCK_LEN + tail.len();
        plaintext.truncate(unpadded_len);

        Ok(plaintext)
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::encrypt_cbc;
    use super::*;

    const KEY: [u8; KEY_LEN] = [0x42; KEY_LEN];
    const IV: [u8; IV_LEN] = [0x24; IV_LEN];

    #[test]
    fn test_roundtrip_small() {
        let ciphertext = encrypt_cbc(&KEY, &IV, b"hello world");

        let plaintext = CbcEngine::new(&KEY, &IV).decrypt(&ciphertext, |_, _| {}).unwrap();
        assert_eq!(plaintext, b"hello world");
    }

    #[test]
    fn test_roundtrip_exact_block_multiple() {
        let input = vec![0x11u8; BLOCK_LEN * 4];
        let ciphertext = encrypt_cbc(&KEY, &IV, &input);
        // PKCS#7 appends a full padding block when the input already ends
        // on a block boundary.
        assert_eq!(ciphertext.len(), input.len() + BLOCK_LEN);

        let plaintext = CbcEngine::new(&KEY, &IV).decrypt(&ciphertext, |_, _| {}).unwrap();
        assert_eq!(plaintext, input);
    }

    #[test]
    fn test_roundtrip_spans_chunks() {
        let input: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        let ciphertext = encrypt_cbc(&KEY, &IV, &input);
        assert!(ciphertext.len() > CHUNK_SIZE);

        let mut checkpoints = Vec::new();
        let plaintext = CbcEngine::new(&KEY, &IV)
            .decrypt(&ciphertext, |processed, total| checkpoints.push((processed, total)))
            .unwrap();

        assert_eq!(plaintext, input);
        assert_eq!(checkpoints.len(), ciphertext.len().div_ceil(CHUNK_SIZE));
        assert!(checkpoints.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(checkpoints.last().unwrap().0, ciphertext.len());
    }

    #[test]
    fn test_wrong_key_fails() {
        let ciphertext = encrypt_cbc(&KEY, &IV, b"hello world");
        let wrong_key = [0x43u8; KEY_LEN];

        let result = CbcEngine::new(&wrong_key, &IV).decrypt(&ciphertext, |_, _| {});
        assert!(matches!(result, Err(DecryptError::DecryptionFailed { .. })));
    }

    #[test]
    fn test_tampered_final_block_fails() {
        let mut ciphertext = encrypt_cbc(&KEY, &IV, b"hello world");
        if let Some(last) = ciphertext.last_mut() {
            *last ^= 0xFF;
        }

        let result = CbcEngine::new(&KEY, &IV).decrypt(&ciphertext, |_, _| {});
        assert!(matches!(result, Err(DecryptError::DecryptionFailed { .. })));
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let ciphertext = encrypt_cbc(&KEY, &IV, b"hello world");

        let result = CbcEngine::new(&KEY, &IV).decrypt(&ciphertext[..ciphertext.len() - 1], |_, _| {});
        assert!(matches!(result, Err(DecryptError::DecryptionFailed { .. })));
    }

    #[test]
    fn test_empty_ciphertext_fails() {
        let result = CbcEngine::new(&KEY, &IV).decrypt(&[], |_, _| {});
        assert!(matches!(result, Err(DecryptError::DecryptionFailed { .. })));
    }
}
