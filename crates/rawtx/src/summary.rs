//! Human-readable and JSON views of a signed transaction.
//!
//! The text layout is one `Label: value` per line, opened by the transaction
//! hash and closed by the raw hex so the output of `new` can be fed straight
//! to `show` or `push`.

use std::fmt;

use alloy_primitives::{Address, Bytes, B256, U256};
use rawtx_chain::{codec, SignedTransaction};
use rawtx_core::amount::{format_amount, ETHER_DECIMALS};
use rawtx_crypto::recover_sender;
use serde::Serialize;

/// Everything `show` prints about a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    /// Keccak-256 of the canonical encoding.
    pub hash: B256,
    /// True when the transaction deploys a contract.
    pub contract_creation: bool,
    /// Recovered sender, if the signature is valid.
    pub from: Option<Address>,
    /// Why the sender could not be recovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_sender: Option<String>,
    /// Recipient; absent for contract creation.
    pub to: Option<Address>,
    /// Sender's transaction counter.
    pub nonce: u64,
    /// Gas price in wei.
    pub gas_price: U256,
    /// Maximum gas the transaction may consume.
    pub gas_limit: U256,
    /// Value in wei.
    pub value: U256,
    /// Value in ether, trailing zeros trimmed.
    pub value_ether: String,
    /// Call data or contract init code.
    pub data: Bytes,
    /// Signature `v`, carrying the recovery id and chain id.
    pub v: u64,
    /// Signature `r`.
    pub r: U256,
    /// Signature `s`.
    pub s: U256,
    /// Chain id bound by EIP-155, absent for unprotected transactions.
    pub chain_id: Option<u64>,
    /// `0x`-prefixed canonical encoding.
    pub raw: String,
}

impl TransactionSummary {
    /// Summarize `signed`, recovering its sender.
    ///
    /// A signature that does not recover is reported in
    /// [`invalid_sender`](Self::invalid_sender) rather than as an error, so
    /// malformed but decodable transactions can still be inspected.
    #[must_use]
    pub fn from_signed(signed: &SignedTransaction) -> Self {
        let (from, invalid_sender) = match recover_sender(signed) {
            Ok(address) => (Some(address), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let tx = signed.tx();
        let signature = signed.signature();

        Self {
            hash: signed.hash(),
            contract_creation: tx.is_contract_creation(),
            from,
            invalid_sender,
            to: tx.to(),
            nonce: tx.nonce(),
            gas_price: tx.gas_price(),
            gas_limit: tx.gas_limit(),
            value: tx.value(),
            value_ether: format_amount(tx.value(), ETHER_DECIMALS),
            data: tx.input().clone(),
            v: signature.v,
            r: signature.r,
            s: signature.s,
            chain_id: signed.chain_id(),
            raw: codec::encode_hex(signed),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TransactionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TX({})", self.hash)?;
        writeln!(f, "Contract: {}", self.contract_creation)?;

        match (&self.from, &self.invalid_sender) {
            (Some(from), _) => writeln!(f, "From:     {from}")?,
            (None, reason) => writeln!(
                f,
                "From:     [invalid sender: {}]",
                reason.as_deref().unwrap_or("unknown")
            )?,
        }

        match &self.to {
            Some(to) => writeln!(f, "To:       {to}")?,
            None => writeln!(f, "To:       [contract creation]")?,
        }

        writeln!(f, "Nonce:    {}", self.nonce)?;
        writeln!(f, "GasPrice: {:#x}", self.gas_price)?;
        writeln!(f, "GasLimit: {}", self.gas_limit)?;
        writeln!(f, "Value:    {:#x} ({} ether)", self.value, self.value_ether)?;
        writeln!(f, "Data:     0x{}", hex::encode(&self.data))?;
        writeln!(f, "V:        {:#x}", self.v)?;
        writeln!(f, "R:        {:#x}", self.r)?;
        writeln!(f, "S:        {:#x}", self.s)?;
        match self.chain_id {
            Some(id) => writeln!(f, "ChainId:  {id}")?,
            None => writeln!(f, "ChainId:  [unprotected]")?,
        }
        write!(f, "Hex:      {}", self.raw)
    }
}
