//! EIP-155 transaction signing and sender recovery.
//!
//! The signer binds a chain id into every signature so a transaction signed
//! for one network cannot be replayed on another:
//!
//! - hash: `keccak256(rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]))`
//! - `v = recovery_id + 35 + 2 * chainId`
//!
//! # Example
//!
//! ```rust
//! use rawtx_chain::UnsignedTransaction;
//! use rawtx_crypto::{keys::SecretKey, signer::{recover_sender, Eip155Signer}};
//! use alloy_primitives::{Address, Bytes, U256};
//!
//! let key = SecretKey::new([0x46; 32]);
//! let tx = UnsignedTransaction::call(
//!     0,
//!     Address::repeat_byte(0x35),
//!     U256::from(1u64),
//!     U256::from(21_000u64),
//!     U256::from(4_000_000_000u64),
//!     Bytes::new(),
//! );
//!
//! let signed = Eip155Signer::mainnet().sign_transaction(tx, &key).unwrap();
//! assert_eq!(signed.chain_id(), Some(1));
//! assert!(recover_sender(&signed).is_ok());
//! ```

use alloy_primitives::{Address, U256};
use rawtx_chain::transaction::EIP155_V_OFFSET;
use rawtx_chain::{SignedTransaction, TxSignature, UnsignedTransaction};
use rawtx_core::config::DEFAULT_CHAIN_ID;
use rawtx_core::error::SignError;
use tracing::debug;

use crate::keypair::{recover_address, Secp256k1KeyPair, Secp256k1Signature};
use crate::keys::SecretKey;

/// Signs legacy transactions with EIP-155 replay protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eip155Signer {
    chain_id: u64,
}

impl Eip155Signer {
    /// Create a signer for `chain_id`.
    #[must_use]
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Create a signer for Ethereum mainnet (chain id 1).
    #[must_use]
    pub const fn mainnet() -> Self {
        Self::new(DEFAULT_CHAIN_ID)
    }

    /// The chain id bound into signatures.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign `tx` with `key`.
    ///
    /// Signing is deterministic: identical inputs produce identical `(v, r, s)`.
    ///
    /// # Errors
    ///
    /// - [`SignError::InvalidKey`] if `key` is not a valid secp256k1 scalar
    /// - [`SignError::SignatureFailed`] if signing fails or `v` would overflow
    pub fn sign_transaction(
        &self,
        tx: UnsignedTransaction,
        key: &SecretKey,
    ) -> Result<SignedTransaction, SignError> {
        let keypair = Secp256k1KeyPair::from_secret_key(key)?;
        let hash = tx.signing_hash(Some(self.chain_id));
        let signature = keypair.sign(&hash.0)?;

        let v = self
            .chain_id
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(EIP155_V_OFFSET))
            .and_then(|base| base.checked_add(u64::from(signature.recovery_id())))
            .ok_or_else(|| {
                SignError::signature_failed(format!("chain id {} too large", self.chain_id))
            })?;

        debug!(
            chain_id = self.chain_id,
            from = %keypair.address(),
            signing_hash = %hash,
            "signed transaction"
        );

        Ok(SignedTransaction::new(
            tx,
            TxSignature::new(
                v,
                U256::from_be_bytes(*signature.r()),
                U256::from_be_bytes(*signature.s()),
            ),
        ))
    }

    /// Recover the sender of `tx`.
    ///
    /// The transaction's own `v` selects the signing hash, so this works for
    /// transactions signed for any chain as well as unprotected ones.
    ///
    /// # Errors
    ///
    /// See [`recover_sender`].
    pub fn sender(&self, tx: &SignedTransaction) -> Result<Address, SignError> {
        recover_sender(tx)
    }
}

impl Default for Eip155Signer {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Recover the sender of a signed transaction.
///
/// The signing hash is chosen from the transaction's own `v`: EIP-155 values
/// bind the chain id they encode, while 27 and 28 use the pre-EIP-155 hash.
///
/// # Errors
///
/// Returns [`SignError::InvalidSignature`] if `v` fits neither scheme or the
/// signature does not recover to a public key.
pub fn recover_sender(tx: &SignedTransaction) -> Result<Address, SignError> {
    let sig = tx.signature();
    let recovery_id = sig
        .recovery_id()
        .ok_or_else(|| SignError::invalid_signature(format!("invalid v value {}", sig.v)))?;

    // recovery_id() is only Some for 27, 28 or EIP-155 values, so chain_id()
    // selects the matching hash.
    debug!(v = sig.v, eip155 = sig.is_eip155(), "recovering sender");
    let hash = tx.signing_hash();
    let signature = Secp256k1Signature::from_parts(
        sig.r.to_be_bytes::<32>(),
        sig.s.to_be_bytes::<32>(),
        recovery_id,
    );

    recover_address(&hash.0, &signature)
}
