//! Canonical encoding of signed legacy transactions.
//!
//! A signed legacy transaction is the RLP list
//! `[nonce, gasPrice, gasLimit, to, value, data, v, r, s]`, where `to` is the
//! empty string for contract creation. At the command-line boundary the bytes
//! are carried as hex text with an optional `0x` prefix.
//!
//! Decoding is strict: one list spanning the whole input, exactly nine
//! string items, canonical integers, and a recipient that is either empty or
//! exactly 20 bytes. Any violation is a [`DecodeError`].
//!
//! # Example
//!
//! ```
//! use rawtx_chain::codec::{decode_hex, encode_hex};
//!
//! let hex = "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83";
//! let tx = decode_hex(hex).unwrap();
//! assert_eq!(tx.tx().nonce(), 9);
//! assert_eq!(tx.chain_id(), Some(1));
//! assert_eq!(encode_hex(&tx), hex);
//! ```

use rawtx_core::error::{DecodeError, DecodeResult};

use crate::rlp::{
    decode_bytes, decode_list, decode_optional_address, decode_u256, decode_u64, is_list,
};
use crate::transaction::{SignedTransaction, TxSignature, UnsignedTransaction};

/// Number of RLP items in a signed legacy transaction.
pub const SIGNED_TX_FIELDS: usize = 9;

/// Serialize a signed transaction to its canonical bytes.
#[must_use]
pub fn encode(tx: &SignedTransaction) -> Vec<u8> {
    tx.encoded()
}

/// Serialize a signed transaction to `0x`-prefixed hex.
#[must_use]
pub fn encode_hex(tx: &SignedTransaction) -> String {
    format!("0x{}", hex::encode(encode(tx)))
}

/// Strip a single leading `0x` from transaction hex.
#[must_use]
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x").unwrap_or(text)
}

/// Decode transaction hex (optionally `0x`-prefixed) into bytes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidHex`] if the text is not valid hex.
pub fn hex_to_bytes(text: &str) -> DecodeResult<Vec<u8>> {
    hex::decode(strip_hex_prefix(text)).map_err(|e| DecodeError::invalid_hex(e.to_string()))
}

/// Decode hex text into a signed transaction.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the text is not hex or the bytes are not a
/// valid signed legacy transaction.
pub fn decode_hex(text: &str) -> DecodeResult<SignedTransaction> {
    decode(&hex_to_bytes(text)?)
}

/// Deserialize a signed transaction from its canonical bytes.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for empty input
/// - [`DecodeError::InvalidRlp`] for a malformed or non-list outer structure,
///   including typed (EIP-2718) envelopes
/// - [`DecodeError::TrailingBytes`] if input remains after the list
/// - [`DecodeError::FieldCount`] unless there are exactly nine items
/// - [`DecodeError::InvalidField`] if any item is malformed
pub fn decode(data: &[u8]) -> DecodeResult<SignedTransaction> {
    if !data.is_empty() && !is_list(data) {
        return Err(DecodeError::invalid_rlp(
            "not a legacy transaction (expected RLP list)",
        ));
    }

    let items = decode_list(data)?;
    let [nonce, gas_price, gas_limit, to, value, input, v, r, s] = items.as_slice() else {
        return Err(DecodeError::FieldCount {
            expected: SIGNED_TX_FIELDS,
            actual: items.len(),
        });
    };

    let tx = UnsignedTransaction::build(
        decode_u64(nonce, "nonce")?,
        decode_optional_address(to, "to")?,
        decode_u256(value, "value")?,
        decode_u256(gas_limit, "gasLimit")?,
        decode_u256(gas_price, "gasPrice")?,
        decode_bytes(input, "data")?,
    );

    let signature = TxSignature::new(
        decode_u64(v, "v")?,
        decode_u256(r, "r")?,
        decode_u256(s, "s")?,
    );

    Ok(SignedTransaction::new(tx, signature))
}
