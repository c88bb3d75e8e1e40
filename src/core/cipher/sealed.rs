//! Sealed box backend.
//!
//! Anonymous public-key encryption: an ephemeral key pair is generated per
//! message, so the sender keeps nothing that could decrypt it later.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crypto_box::aead::OsRng;
use crypto_box::{PublicKey, SecretKey};
use tracing::trace;

use super::Cipher;
use crate::error::{Error, Result};

/// Raw X25519 public key length.
const KEY_SIZE: usize = 32;

/// libsodium-compatible sealed box.
pub struct SealedBox;

impl Cipher for SealedBox {
    type Recipient = PublicKey;
    type Identity = SecretKey;

    fn encrypt(&self, plaintext: &[u8], recipient: &PublicKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext)
            .map_err(|e| Error::Encryption(format!("seal failed: {}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(STANDARD.encode(sealed))
    }

    fn decrypt(&self, encrypted: &str, identity: &SecretKey) -> Result<Vec<u8>> {
        trace!(ciphertext_len = encrypted.len(), "unsealing");

        let sealed = STANDARD
            .decode(encrypted)
            .map_err(|e| Error::Encryption(format!("ciphertext is not base64: {}", e)))?;

        identity
            .unseal(&sealed)
            .map_err(|e| Error::Encryption(format!("unseal failed: {}", e)))
    }
}

/// Parse a base64 public key into a sealed box recipient.
///
/// # Errors
///
/// Returns `Error::Encryption` if the key is not base64 or not 32 bytes.
pub fn parse_recipient(key: &str) -> Result<PublicKey> {
    let bytes = STANDARD
        .decode(key.trim())
        .map_err(|e| Error::Encryption(format!("public key is not base64: {}", e)))?;

    let bytes: [u8; KEY_SIZE] = bytes.as_slice().try_into().map_err(|_| {
        Error::Encryption(format!(
            "public key must be {} bytes, got {}",
            KEY_SIZE,
            bytes.len()
        ))
    })?;

    Ok(PublicKey::from(bytes))
}
