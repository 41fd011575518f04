//! The decryption pipeline: parse, derive, decrypt, name.
//!
//! Pure sequencing and error translation; every cryptographic step lives
//! in its own module. One call owns all of its state, so concurrent calls
//! against different inputs need no locking.

use crate::cipher::CbcEngine;
use crate::config::{IV_LEN, KDF_ITERATIONS, KEY_LEN};
use crate::container::EncryptedContainer;
use crate::error::DecryptError;
use crate::file::output_name;
use crate::kdf::derive_key_material;
use crate::progress::{NullSink, ProgressEvent, ProgressSink, Stage};

/// A successful decryption: the plaintext and the suggested output name.
pub struct Decrypted {
    pub plaintext: Vec<u8>,
    pub output_name: String,
}

/// Decrypts an OpenSSL salted container without progress reporting.
///
/// # Errors
/// See [`DecryptError`]; the first failing stage stops the pipeline.
pub fn decrypt(bytes: &[u8], password: &str, original_name: &str) -> Result<Decrypted, DecryptError> {
    decrypt_with_progress(bytes, password, original_name, &mut NullSink)
}

/// Decrypts an OpenSSL salted container, emitting progress events.
///
/// Stage order is fixed: password check, container parsing, key
/// derivation, chunked decryption, filename derivation. Failures are
/// terminal; the failing error is emitted as a final [`Stage::Error`]
/// event and returned, and no partial plaintext ever escapes.
///
/// # Errors
/// See [`DecryptError`].
pub fn decrypt_with_progress(
    bytes: &[u8],
    password: &str,
    original_name: &str,
    sink: &mut dyn ProgressSink,
) -> Result<Decrypted, DecryptError> {
    match run(bytes, password, original_name, sink) {
        Ok(decrypted) => {
            sink.emit(ProgressEvent::new(Stage::Complete, 100, "decryption complete"));
            Ok(decrypted)
        }
        Err(e) => {
            sink.emit(ProgressEvent::new(Stage::Error, 0, format!("decryption failed: {e}")));
            Err(e)
        }
    }
}

fn run(bytes: &[u8], password: &str, original_name: &str, sink: &mut dyn ProgressSink) -> Result<Decrypted, DecryptError> {
    if password.is_empty() {
        return Err(DecryptError::EmptyPassword);
    }

    sink.emit(ProgressEvent::new(Stage::Reading, 0, "reading input"));
    let container = EncryptedContainer::parse(bytes)?;
    sink.emit(ProgressEvent::new(Stage::Reading, 100, "input read"));

    sink.emit(ProgressEvent::new(Stage::Deriving, 0, "deriving key material"));
    let material = derive_key_material(password, container.salt(), KDF_ITERATIONS)?;
    sink.emit(ProgressEvent::new(Stage::Deriving, 100, "key material derived"));

    let key: &[u8; KEY_LEN] = material.key().try_into().expect("key is KEY_LEN bytes");
    let iv: &[u8; IV_LEN] = material.iv().try_into().expect("iv is IV_LEN bytes");

    sink.emit(ProgressEvent::new(Stage::Decrypting, 0, "decrypting"));
    let plaintext = CbcEngine::new(key, iv).decrypt(container.ciphertext(), |processed, total| {
        let percent = ((processed as u64 * 100) / total as u64).min(100) as u8;
        sink.emit(ProgressEvent::new(Stage::Decrypting, percent, "decrypting"));
    })?;

    Ok(Decrypted { plaintext, output_name: output_name(original_name) })
}
