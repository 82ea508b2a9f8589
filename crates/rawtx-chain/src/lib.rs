//! # rawtx-chain
//!
//! Legacy Ethereum transaction model and canonical RLP codec.
//!
//! ## Modules
//!
//! - [`transaction`] - [`UnsignedTransaction`], [`SignedTransaction`] and [`TxSignature`]
//! - [`codec`] - Strict encode/decode between transactions, bytes and hex
//! - [`rlp`] - Field-aware helpers over `alloy-rlp`
//!
//! ## Example
//!
//! ```
//! use rawtx_chain::{codec, SignedTransaction, TxSignature, UnsignedTransaction};
//! use alloy_primitives::{Bytes, U256};
//!
//! let tx = UnsignedTransaction::contract_creation(
//!     0,
//!     U256::ZERO,
//!     U256::from(100_000u64),
//!     U256::from(4_000_000_000u64),
//!     Bytes::from_static(&[0x60, 0x80]),
//! );
//! let signed = SignedTransaction::new(tx, TxSignature::new(37, U256::from(1u64), U256::from(1u64)));
//!
//! let decoded = codec::decode(&codec::encode(&signed)).unwrap();
//! assert!(decoded.tx().is_contract_creation());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod rlp;
pub mod transaction;

pub use codec::{decode, decode_hex, encode, encode_hex};
pub use transaction::{SignedTransaction, TxSignature, UnsignedTransaction};
