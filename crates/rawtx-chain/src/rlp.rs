//! RLP helpers for legacy transaction encoding and decoding.
//!
//! Thin wrappers over `alloy-rlp` that attach the name of the field being
//! processed to every failure, so decode errors read as
//! `invalid gasPrice: ...` rather than a bare RLP message.
//!
//! # Example
//!
//! ```
//! use rawtx_chain::rlp::{decode_list, is_list};
//!
//! let empty_list = [0xc0];
//! assert!(is_list(&empty_list));
//! assert!(decode_list(&empty_list).unwrap().is_empty());
//! ```

use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{Decodable, Encodable, Header, PayloadView, EMPTY_STRING_CODE};
use rawtx_core::error::DecodeError;

/// Result type for RLP operations.
pub type RlpResult<T> = Result<T, DecodeError>;

/// Returns `true` if the data starts with an RLP list prefix (0xc0-0xff).
#[must_use]
pub fn is_list(data: &[u8]) -> bool {
    data.first().is_some_and(|&b| b >= 0xc0)
}

// ============================================================================
// Decoding Helpers
// ============================================================================

/// Decode a top-level RLP list into the raw encodings of its items.
///
/// The list must span the whole input.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for empty input
/// - [`DecodeError::InvalidRlp`] if the header is malformed or not a list
/// - [`DecodeError::TrailingBytes`] if bytes remain after the list
pub fn decode_list(data: &[u8]) -> RlpResult<Vec<&[u8]>> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut buf = data;
    let payload = Header::decode_raw(&mut buf)
        .map_err(|e| DecodeError::invalid_rlp(format!("failed to decode list: {e}")))?;

    if !buf.is_empty() {
        return Err(DecodeError::TrailingBytes { count: buf.len() });
    }

    match payload {
        PayloadView::List(items) => Ok(items),
        PayloadView::String(_) => Err(DecodeError::invalid_rlp("expected list, found string")),
    }
}

/// Decode an RLP string item into bytes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidField`] if the item is a list or malformed.
pub fn decode_bytes(data: &[u8], field: &'static str) -> RlpResult<Bytes> {
    let mut buf = data;
    Bytes::decode(&mut buf).map_err(|e| DecodeError::invalid_field(field, e.to_string()))
}

/// Decode a canonical 256-bit unsigned integer.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidField`] on leading zeros, overflow or a list item.
pub fn decode_u256(data: &[u8], field: &'static str) -> RlpResult<U256> {
    let mut buf = data;
    U256::decode(&mut buf).map_err(|e| DecodeError::invalid_field(field, e.to_string()))
}

/// Decode a canonical 64-bit unsigned integer.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidField`] on leading zeros, overflow or a list item.
pub fn decode_u64(data: &[u8], field: &'static str) -> RlpResult<u64> {
    let mut buf = data;
    u64::decode(&mut buf).map_err(|e| DecodeError::invalid_field(field, e.to_string()))
}

/// Decode a 20-byte address.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidField`] if the item is not exactly 20 bytes.
pub fn decode_address(data: &[u8], field: &'static str) -> RlpResult<Address> {
    let mut buf = data;
    Address::decode(&mut buf).map_err(|e| DecodeError::invalid_field(field, e.to_string()))
}

/// Decode a recipient that may be empty (contract creation).
///
/// # Errors
///
/// Returns [`DecodeError::InvalidField`] if the item is neither empty nor 20 bytes.
pub fn decode_optional_address(data: &[u8], field: &'static str) -> RlpResult<Option<Address>> {
    if data == [EMPTY_STRING_CODE] {
        return Ok(None);
    }

    decode_address(data, field).map(Some)
}

// ============================================================================
// Encoding Helpers
// ============================================================================

/// An optional recipient, encoded as the empty string when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalAddress(pub Option<Address>);

impl Encodable for OptionalAddress {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        match &self.0 {
            Some(address) => address.encode(out),
            None => <[u8] as Encodable>::encode(&[], out),
        }
    }

    fn length(&self) -> usize {
        self.0.as_ref().map_or(1, |address| address.length())
    }
}

/// Encode heterogeneous fields as a single RLP list.
#[must_use]
pub fn encode_list(fields: &[&dyn Encodable]) -> Vec<u8> {
    let payload_length: usize = fields.iter().map(|field| field.length()).sum();
    let header = Header {
        list: true,
        payload_length,
    };

    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    for field in fields {
        field.encode(&mut out);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
