//! secp256k1 key pairs, recoverable signatures and Ethereum addresses.
//!
//! # Example
//!
//! ```rust
//! use rawtx_crypto::keypair::{recover_address, Secp256k1KeyPair};
//!
//! let keypair = Secp256k1KeyPair::from_bytes(&[0x46; 32]).expect("valid key");
//! let hash = [0x11u8; 32];
//!
//! let signature = keypair.sign(&hash).expect("signing failed");
//! assert!(signature.recovery_id() <= 1);
//! assert_eq!(recover_address(&hash, &signature).unwrap(), keypair.address());
//! ```

use alloy_primitives::Address;
use k256::ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey};
use rawtx_core::error::SignError;
use sha3::{Digest, Keccak256};

use crate::keys::SecretKey;

// ============================================================================
// Secp256k1 Public Key
// ============================================================================

/// A secp256k1 public key, kept in uncompressed SEC1 form.
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PublicKey {
    uncompressed: [u8; 65],
}

impl Secp256k1PublicKey {
    fn from_verifying_key(verifying: &VerifyingKey) -> Self {
        let mut uncompressed = [0u8; 65];
        uncompressed.copy_from_slice(verifying.to_encoded_point(false).as_bytes());
        Self { uncompressed }
    }

    /// The 65-byte uncompressed encoding (`0x04 || x || y`).
    #[must_use]
    pub const fn uncompressed(&self) -> &[u8; 65] {
        &self.uncompressed
    }

    /// The Ethereum address: the last 20 bytes of `keccak256(x || y)`.
    #[must_use]
    pub fn ethereum_address(&self) -> Address {
        let hash = Keccak256::digest(&self.uncompressed[1..]);
        Address::from_slice(&hash[12..])
    }
}

impl std::fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secp256k1PublicKey({})", self.ethereum_address())
    }
}

// ============================================================================
// Secp256k1 Signature
// ============================================================================

/// A low-S ECDSA signature with its recovery id.
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1Signature {
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: u8,
}

impl Secp256k1Signature {
    /// Assemble a signature from its big-endian scalars and recovery id.
    #[must_use]
    pub const fn from_parts(r: [u8; 32], s: [u8; 32], recovery_id: u8) -> Self {
        Self { r, s, recovery_id }
    }

    /// The `r` scalar, big-endian.
    #[must_use]
    pub const fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The `s` scalar, big-endian.
    #[must_use]
    pub const fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The recovery id (0 or 1).
    #[must_use]
    pub const fn recovery_id(&self) -> u8 {
        self.recovery_id
    }
}

impl std::fmt::Debug for Secp256k1Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Secp256k1Signature(r={}, s={}, v={})",
            hex::encode(self.r),
            hex::encode(self.s),
            self.recovery_id
        )
    }
}

// ============================================================================
// Secp256k1 Key Pair
// ============================================================================

/// A secp256k1 signing key with its derived public key.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
    public_key: Secp256k1PublicKey,
}

impl Secp256k1KeyPair {
    /// Build a key pair from raw scalar bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::InvalidKey`] if the bytes are zero or not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignError> {
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|_| SignError::invalid_key("not a valid secp256k1 scalar"))?;
        let public_key = Secp256k1PublicKey::from_verifying_key(signing_key.verifying_key());

        Ok(Self {
            signing_key,
            public_key,
        })
    }

    /// Build a key pair from a [`SecretKey`].
    ///
    /// # Errors
    ///
    /// See [`from_bytes`](Self::from_bytes).
    pub fn from_secret_key(secret: &SecretKey) -> Result<Self, SignError> {
        Self::from_bytes(secret.as_bytes())
    }

    /// The public key.
    #[must_use]
    pub const fn public_key(&self) -> &Secp256k1PublicKey {
        &self.public_key
    }

    /// The Ethereum address of this key.
    #[must_use]
    pub fn address(&self) -> Address {
        self.public_key.ethereum_address()
    }

    /// Sign a 32-byte prehash deterministically (RFC 6979).
    ///
    /// The result is normalized to low-S, with the recovery id flipped to match.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::SignatureFailed`] if the curve operation fails.
    pub fn sign(&self, hash: &[u8; 32]) -> Result<Secp256k1Signature, SignError> {
        let (signature, recovery_id): (K256Signature, RecoveryId) = self
            .signing_key
            .sign_prehash_recoverable(hash)
            .map_err(|e| SignError::signature_failed(format!("secp256k1 signing failed: {e}")))?;

        let normalized = signature.normalize_s();
        let final_recovery_id = if normalized.is_some() {
            recovery_id.to_byte() ^ 1
        } else {
            recovery_id.to_byte()
        };

        let (r_bytes, s_bytes) = normalized.unwrap_or(signature).split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        Ok(Secp256k1Signature::from_parts(r, s, final_recovery_id))
    }
}

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Recovery
// ============================================================================

/// Recover the public key that produced `signature` over `hash`.
///
/// # Errors
///
/// Returns [`SignError::InvalidSignature`] if the scalars are out of range,
/// the recovery id is not 0 or 1, or no key verifies.
pub fn recover_public_key(
    hash: &[u8; 32],
    signature: &Secp256k1Signature,
) -> Result<Secp256k1PublicKey, SignError> {
    let k256_sig = K256Signature::from_scalars(*signature.r(), *signature.s())
        .map_err(|_| SignError::invalid_signature("r or s out of range"))?;
    let recovery_id = RecoveryId::from_byte(signature.recovery_id())
        .ok_or_else(|| SignError::invalid_signature("invalid recovery id"))?;

    let verifying = VerifyingKey::recover_from_prehash(hash, &k256_sig, recovery_id)
        .map_err(|_| SignError::invalid_signature("public key recovery failed"))?;

    Ok(Secp256k1PublicKey::from_verifying_key(&verifying))
}

/// Recover the Ethereum address that produced `signature` over `hash`.
///
/// # Errors
///
/// See [`recover_public_key`].
pub fn recover_address(
    hash: &[u8; 32],
    signature: &Secp256k1Signature,
) -> Result<Address, SignError> {
    recover_public_key(hash, signature).map(|key| key.ethereum_address())
}
