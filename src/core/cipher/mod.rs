//! Cryptographic operations.
//!
//! GitHub only accepts secret values sealed with the scope's public key.
//! This module turns a plaintext value into the `{encrypted_value, key_id}`
//! pair the create/update endpoints expect.
//!
//! ## Backends
//!
//! - **sealed box**: anonymous X25519 + XSalsa20-Poly1305, compatible with
//!   libsodium's `crypto_box_seal`. The only scheme GitHub accepts.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

mod sealed;

pub use sealed::{parse_recipient, SealedBox};

/// Cryptographic backend trait.
///
/// `encrypt` is what the reconciler needs. `decrypt` mirrors what GitHub does
/// on its side and is used to verify sealing end to end.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for a recipient.
    ///
    /// # Returns
    ///
    /// Base64-encoded ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encryption` if sealing fails.
    fn encrypt(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<String>;

    /// Decrypt base64 ciphertext with the recipient's private key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encryption` if the ciphertext is malformed or the key
    /// doesn't match.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<Vec<u8>>;
}

/// Public key material of a scope, as returned by `GET .../public-key`.
///
/// Short-lived: fetched per invocation and dropped after sealing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKey {
    /// Identifier GitHub uses to pick the matching private key.
    pub key_id: String,
    /// Base64 of the 32 raw X25519 key bytes.
    pub key: String,
}

/// A sealed value ready to embed in a create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealedSecret {
    pub encrypted_value: String,
    pub key_id: String,
}

/// Apply the optional application-level base64 layer.
///
/// This is independent of the transport encoding of the ciphertext.
pub fn encode_value(value: &str, is_base64_encoded: bool) -> Zeroizing<String> {
    if is_base64_encoded {
        Zeroizing::new(STANDARD.encode(value.as_bytes()))
    } else {
        Zeroizing::new(value.to_string())
    }
}

/// Seal a plaintext value for the given scope key.
///
/// # Arguments
///
/// * `value` - Plaintext secret value
/// * `is_base64_encoded` - Base64-encode the value before sealing
/// * `key` - The scope's public key
///
/// # Errors
///
/// Returns `Error::Encryption` if the key material is invalid or sealing
/// fails.
pub fn seal_secret(value: &str, is_base64_encoded: bool, key: &PublicKey) -> Result<SealedSecret> {
    debug!(
        key_id = %key.key_id,
        base64 = is_base64_encoded,
        "sealing secret"
    );

    let recipient = parse_recipient(&key.key)?;
    let plaintext = encode_value(value, is_base64_encoded);
    let encrypted_value = SealedBox.encrypt(plaintext.as_bytes(), &recipient)?;

    Ok(SealedSecret {
        encrypted_value,
        key_id: key.key_id.clone(),
    })
}
