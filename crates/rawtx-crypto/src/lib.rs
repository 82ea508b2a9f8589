//! # rawtx-crypto
//!
//! secp256k1 key handling and EIP-155 signing for `rawtx`.
//!
//! ## Modules
//!
//! - [`keys`] - [`SecretKey`], zeroized on drop and never printed
//! - [`keypair`] - Key pairs, recoverable signatures and address derivation
//! - [`signer`] - [`Eip155Signer`] and sender recovery
//!
//! ## Security
//!
//! Private key bytes live only inside [`SecretKey`] and the `k256` signing key
//! built from it for one signing call. Neither type exposes the key through
//! `Debug`, and nothing in this crate logs key material.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod keypair;
pub mod keys;
pub mod signer;

pub use keypair::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use keys::{SecretKey, SECRET_KEY_LEN};
pub use signer::{recover_sender, Eip155Signer};
