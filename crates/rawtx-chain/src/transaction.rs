//! Legacy Ethereum transaction types.
//!
//! An [`UnsignedTransaction`] is assembled once from validated inputs and
//! never mutated. Signing produces a separate [`SignedTransaction`] that
//! carries the `(v, r, s)` triple.
//!
//! # Signing hash
//!
//! The hash that is signed depends on whether a chain id is bound in:
//!
//! - EIP-155: `keccak256(rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]))`
//! - Pre-EIP-155: `keccak256(rlp([nonce, gasPrice, gasLimit, to, value, data]))`
//!
//! # Example
//!
//! ```
//! use rawtx_chain::transaction::UnsignedTransaction;
//! use alloy_primitives::{Address, Bytes, U256};
//!
//! let tx = UnsignedTransaction::call(
//!     0,
//!     Address::repeat_byte(0x35),
//!     U256::from(1u64),
//!     U256::from(21_000u64),
//!     U256::from(4_000_000_000u64),
//!     Bytes::new(),
//! );
//! assert!(!tx.is_contract_creation());
//! ```

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_rlp::Encodable;

use crate::rlp::{encode_list, OptionalAddress};

/// `v` offset for pre-EIP-155 signatures.
pub const LEGACY_V_OFFSET: u64 = 27;

/// `v` offset for EIP-155 signatures, added to `2 * chain_id`.
pub const EIP155_V_OFFSET: u64 = 35;

/// A transaction before signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    nonce: u64,
    gas_price: U256,
    gas_limit: U256,
    to: Option<Address>,
    value: U256,
    input: Bytes,
}

impl UnsignedTransaction {
    /// Assemble a transaction. `to == None` means contract creation.
    #[must_use]
    pub fn build(
        nonce: u64,
        to: Option<Address>,
        value: U256,
        gas_limit: U256,
        gas_price: U256,
        input: Bytes,
    ) -> Self {
        Self {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            input,
        }
    }

    /// Assemble a call or transfer to `to`.
    #[must_use]
    pub fn call(
        nonce: u64,
        to: Address,
        value: U256,
        gas_limit: U256,
        gas_price: U256,
        input: Bytes,
    ) -> Self {
        Self::build(nonce, Some(to), value, gas_limit, gas_price, input)
    }

    /// Assemble a contract deployment; `init_code` becomes the payload.
    #[must_use]
    pub fn contract_creation(
        nonce: u64,
        value: U256,
        gas_limit: U256,
        gas_price: U256,
        init_code: Bytes,
    ) -> Self {
        Self::build(nonce, None, value, gas_limit, gas_price, init_code)
    }

    /// The sender's nonce.
    #[must_use]
    pub const fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Gas price in wei.
    #[must_use]
    pub const fn gas_price(&self) -> U256 {
        self.gas_price
    }

    /// Gas limit.
    #[must_use]
    pub const fn gas_limit(&self) -> U256 {
        self.gas_limit
    }

    /// The recipient, or `None` for contract creation.
    #[must_use]
    pub const fn to(&self) -> Option<Address> {
        self.to
    }

    /// Value in wei.
    #[must_use]
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Call data or init code.
    #[must_use]
    pub const fn input(&self) -> &Bytes {
        &self.input
    }

    /// Returns `true` if this transaction deploys a contract.
    #[must_use]
    pub const fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Compute the hash to sign, binding `chain_id` when given (EIP-155).
    #[must_use]
    pub fn signing_hash(&self, chain_id: Option<u64>) -> B256 {
        keccak256(self.signing_payload(chain_id))
    }

    /// The RLP payload whose hash is signed.
    #[must_use]
    pub fn signing_payload(&self, chain_id: Option<u64>) -> Vec<u8> {
        let to = OptionalAddress(self.to);
        let mut fields = vec![
            &self.nonce as &dyn Encodable,
            &self.gas_price,
            &self.gas_limit,
            &to,
            &self.value,
            &self.input,
        ];

        if let Some(chain_id) = chain_id.as_ref() {
            fields.extend([chain_id as &dyn Encodable, &0u8, &0u8]);
        }

        encode_list(&fields)
    }
}

/// The `(v, r, s)` signature triple of a legacy transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSignature {
    /// Recovery value, including the chain id for EIP-155 signatures.
    pub v: u64,
    /// Signature `r` scalar.
    pub r: U256,
    /// Signature `s` scalar.
    pub s: U256,
}

impl TxSignature {
    /// Create a signature triple.
    #[must_use]
    pub const fn new(v: u64, r: U256, s: U256) -> Self {
        Self { v, r, s }
    }

    /// The chain id bound into `v`.
    ///
    /// Returns `None` for pre-EIP-155 values (27, 28) and for values that fit
    /// neither scheme.
    #[must_use]
    pub const fn chain_id(&self) -> Option<u64> {
        if self.v >= EIP155_V_OFFSET {
            Some((self.v - EIP155_V_OFFSET) / 2)
        } else {
            None
        }
    }

    /// Returns `true` if `v` carries a chain id.
    #[must_use]
    pub const fn is_eip155(&self) -> bool {
        self.v >= EIP155_V_OFFSET
    }

    /// The secp256k1 recovery id (0 or 1) encoded in `v`.
    ///
    /// Returns `None` if `v` matches neither the legacy nor the EIP-155 scheme.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn recovery_id(&self) -> Option<u8> {
        match self.v {
            27 | 28 => Some((self.v - LEGACY_V_OFFSET) as u8),
            v if v >= EIP155_V_OFFSET => Some(((v - EIP155_V_OFFSET) % 2) as u8),
            _ => None,
        }
    }
}

/// A transaction together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    tx: UnsignedTransaction,
    signature: TxSignature,
}

impl SignedTransaction {
    /// Attach a signature to a transaction.
    #[must_use]
    pub fn new(tx: UnsignedTransaction, signature: TxSignature) -> Self {
        Self { tx, signature }
    }

    /// The unsigned fields.
    #[must_use]
    pub const fn tx(&self) -> &UnsignedTransaction {
        &self.tx
    }

    /// The signature triple.
    #[must_use]
    pub const fn signature(&self) -> &TxSignature {
        &self.signature
    }

    /// The chain id bound into the signature, if any.
    #[must_use]
    pub const fn chain_id(&self) -> Option<u64> {
        self.signature.chain_id()
    }

    /// The recovery id carried in `v`, or `None` for an invalid `v`.
    #[must_use]
    pub const fn recovery_id(&self) -> Option<u8> {
        self.signature.recovery_id()
    }

    /// The hash this transaction's signature was made over.
    #[must_use]
    pub fn signing_hash(&self) -> B256 {
        self.tx.signing_hash(self.chain_id())
    }

    /// The canonical RLP encoding.
    #[must_use]
    pub fn encoded(&self) -> Vec<u8> {
        let tx = &self.tx;
        let to = OptionalAddress(tx.to);
        encode_list(&[
            &tx.nonce as &dyn Encodable,
            &tx.gas_price,
            &tx.gas_limit,
            &to,
            &tx.value,
            &tx.input,
            &self.signature.v,
            &self.signature.r,
            &self.signature.s,
        ])
    }

    /// The transaction hash, `keccak256` of the canonical encoding.
    #[must_use]
    pub fn hash(&self) -> B256 {
        keccak256(self.encoded())
    }

    /// Split into the unsigned fields and the signature.
    #[must_use]
    pub fn into_parts(self) -> (UnsignedTransaction, TxSignature) {
        (self.tx, self.signature)
    }
}
