//! Secret key type with secure memory handling.
//!
//! [`SecretKey`] holds the raw 32-byte secp256k1 scalar for the duration of a
//! single signing operation:
//! - Zeroized on drop
//! - Redacted in debug output
//! - Compared in constant time
//! - Not `Clone`

use rawtx_core::error::{FormatError, RawTxError, SignError};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of a secp256k1 secret key in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// A 32-byte secret key that is wiped from memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_LEN],
}

impl SecretKey {
    /// Wrap raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Copy key bytes from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::InvalidKey`] unless the slice is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignError> {
        let bytes: [u8; SECRET_KEY_LEN] = bytes.try_into().map_err(|_| {
            SignError::invalid_key(format!(
                "expected {SECRET_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// Decode a hex private key, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidPrivateKey`] if the text is not valid hex
    /// - [`SignError::InvalidKey`] if the decoded key is not 32 bytes
    pub fn from_hex(text: &str) -> Result<Self, RawTxError> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let decoded =
            Zeroizing::new(hex::decode(digits).map_err(|_| FormatError::InvalidPrivateKey)?);
        Ok(Self::from_slice(&decoded)?)
    }

    /// Borrow the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SecretKey {}

impl From<[u8; SECRET_KEY_LEN]> for SecretKey {
    fn from(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self::new(bytes)
    }
}
