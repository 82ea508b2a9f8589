//! Error types for rawtx.
//!
//! Errors are organized by the stage of the pipeline that produced them:
//!
//! - [`FormatError`] - Malformed user input (amounts, integers, hex, addresses, keys)
//! - [`SignError`] - Key material or signing failures
//! - [`DecodeError`] - Malformed transaction bytes
//! - [`NetworkError`] - Broadcast failures
//! - [`ConfigError`] - Configuration failures
//! - [`RawTxError`] - Top-level error that wraps all of the above
//!
//! # Example
//!
//! ```rust
//! use rawtx_core::error::{FormatError, RawTxError};
//!
//! fn check_gas_price(text: &str) -> Result<(), RawTxError> {
//!     if text.is_empty() {
//!         return Err(FormatError::InvalidGasPrice.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_gas_price("").is_err());
//! ```

/// Top-level error type for rawtx.
///
/// Wraps every domain error and converts from each via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum RawTxError {
    /// User input was malformed.
    #[error("{0}")]
    Format(#[from] FormatError),

    /// Signing failed.
    #[error("signing error: {0}")]
    Sign(#[from] SignError),

    /// Transaction bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Broadcasting failed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// The taxonomy class of a [`RawTxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed numeric, decimal or hex input.
    InvalidFormat,
    /// Key or cryptographic failure.
    SigningError,
    /// Malformed transaction bytes.
    DecodeError,
    /// Broadcast failure.
    NetworkError,
    /// Configuration failure.
    ConfigError,
}

impl RawTxError {
    /// Get the taxonomy class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::InvalidFormat,
            Self::Sign(_) => ErrorKind::SigningError,
            Self::Decode(_) => ErrorKind::DecodeError,
            Self::Network(_) => ErrorKind::NetworkError,
            Self::Config(_) => ErrorKind::ConfigError,
        }
    }
}

// ============================================================================
// FormatError
// ============================================================================

/// Errors for malformed input detected at the command-line boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A decimal amount contained more than one `.`.
    #[error("expected at most one decimal point")]
    MultipleDecimalPoints,

    /// A decimal amount was not made of digits.
    #[error("invalid amount: {input:?}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
    },

    /// A decimal amount does not fit in 256 bits once scaled.
    #[error("amount out of range: {input:?}")]
    AmountOverflow {
        /// The rejected input.
        input: String,
    },

    /// The gas price was not a base-10 integer.
    #[error("invalid gas price")]
    InvalidGasPrice,

    /// The gas limit was not a base-10 integer.
    #[error("invalid gas limit")]
    InvalidGasLimit,

    /// The transaction payload was not valid hex.
    #[error("bad hex data: {input:?}")]
    BadHexData {
        /// The rejected input.
        input: String,
    },

    /// The recipient was not a 20-byte hex address.
    #[error("invalid recipient address: {input:?}")]
    InvalidRecipient {
        /// The rejected input.
        input: String,
    },

    /// The private key was not valid hex.
    #[error("error decoding private key")]
    InvalidPrivateKey,
}

impl FormatError {
    /// Create an `InvalidAmount` error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    /// Create an `AmountOverflow` error.
    #[must_use]
    pub fn amount_overflow(input: impl Into<String>) -> Self {
        Self::AmountOverflow {
            input: input.into(),
        }
    }

    /// Create a `BadHexData` error.
    #[must_use]
    pub fn bad_hex_data(input: impl Into<String>) -> Self {
        Self::BadHexData {
            input: input.into(),
        }
    }

    /// Create an `InvalidRecipient` error.
    #[must_use]
    pub fn invalid_recipient(input: impl Into<String>) -> Self {
        Self::InvalidRecipient {
            input: input.into(),
        }
    }
}

// ============================================================================
// SignError
// ============================================================================

/// Errors that can occur while deriving keys or signing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    /// The key material is not a valid secp256k1 secret scalar.
    #[error("invalid key material: {context}")]
    InvalidKey {
        /// Context about why the key was rejected.
        context: String,
    },

    /// The signing operation failed.
    #[error("signature failed: {context}")]
    SignatureFailed {
        /// Context about why signing failed.
        context: String,
    },

    /// A signature could not be verified or its signer recovered.
    #[error("invalid signature: {context}")]
    InvalidSignature {
        /// Context about what was wrong with the signature.
        context: String,
    },
}

impl SignError {
    /// Create an `InvalidKey` error with context.
    #[must_use]
    pub fn invalid_key(context: impl Into<String>) -> Self {
        Self::InvalidKey {
            context: context.into(),
        }
    }

    /// Create a `SignatureFailed` error with context.
    #[must_use]
    pub fn signature_failed(context: impl Into<String>) -> Self {
        Self::SignatureFailed {
            context: context.into(),
        }
    }

    /// Create an `InvalidSignature` error with context.
    #[must_use]
    pub fn invalid_signature(context: impl Into<String>) -> Self {
        Self::InvalidSignature {
            context: context.into(),
        }
    }
}

// ============================================================================
// DecodeError
// ============================================================================

/// Errors that can occur while decoding transaction bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// There were no bytes to decode.
    #[error("empty transaction data")]
    Empty,

    /// The transaction text was not valid hex.
    #[error("invalid hex: {context}")]
    InvalidHex {
        /// Context about the hex failure.
        context: String,
    },

    /// The RLP structure was invalid.
    #[error("RLP decoding failed: {context}")]
    InvalidRlp {
        /// Context about what was being decoded.
        context: String,
    },

    /// The transaction list had the wrong number of items.
    #[error("expected {expected} transaction fields, got {actual}")]
    FieldCount {
        /// The number of items required.
        expected: usize,
        /// The number of items present.
        actual: usize,
    },

    /// A single field could not be decoded.
    #[error("invalid {field}: {context}")]
    InvalidField {
        /// The field name.
        field: &'static str,
        /// Context about the failure.
        context: String,
    },

    /// Bytes remained after the transaction list.
    #[error("{count} trailing bytes after transaction")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },
}

impl DecodeError {
    /// Create an `InvalidHex` error with context.
    #[must_use]
    pub fn invalid_hex(context: impl Into<String>) -> Self {
        Self::InvalidHex {
            context: context.into(),
        }
    }

    /// Create an `InvalidRlp` error with context.
    #[must_use]
    pub fn invalid_rlp(context: impl Into<String>) -> Self {
        Self::InvalidRlp {
            context: context.into(),
        }
    }

    /// Create an `InvalidField` error.
    #[must_use]
    pub fn invalid_field(field: &'static str, context: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            context: context.into(),
        }
    }
}

// ============================================================================
// NetworkError
// ============================================================================

/// Errors that can occur while broadcasting a transaction.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The broadcast endpoint URL could not be parsed.
    #[error("invalid endpoint {url:?}: {context}")]
    InvalidEndpoint {
        /// The configured URL.
        url: String,
        /// Context about the parse failure.
        context: String,
    },

    /// The request could not be sent or no response arrived.
    #[error("request failed: {context}")]
    Request {
        /// Context about the transport failure.
        context: String,
    },

    /// The endpoint answered with a non-200 status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, possibly empty.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read response: {context}")]
    ReadBody {
        /// Context about the read failure.
        context: String,
    },
}

impl NetworkError {
    /// Create an `InvalidEndpoint` error.
    #[must_use]
    pub fn invalid_endpoint(url: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            context: context.into(),
        }
    }

    /// Create a `Request` error with context.
    #[must_use]
    pub fn request(context: impl Into<String>) -> Self {
        Self::Request {
            context: context.into(),
        }
    }

    /// Create a `Status` error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a `ReadBody` error with context.
    #[must_use]
    pub fn read_body(context: impl Into<String>) -> Self {
        Self::ReadBody {
            context: context.into(),
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {context}")]
    ParseFailed {
        /// Context about the parsing failure.
        context: String,
    },

    /// A configuration value is invalid.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The field name with the invalid value.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Create a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a `ParseFailed` error.
    #[must_use]
    pub fn parse_failed(context: impl Into<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
        }
    }

    /// Create an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an `Io` error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Result type aliases
// ============================================================================

/// A `Result` type alias using [`RawTxError`] as the error type.
pub type Result<T> = std::result::Result<T, RawTxError>;

/// A `Result` type alias for input parsing.
pub type FormatResult<T> = std::result::Result<T, FormatError>;

/// A `Result` type alias for signing operations.
pub type SignResult<T> = std::result::Result<T, SignError>;

/// A `Result` type alias for decoding operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// A `Result` type alias for broadcast operations.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;

/// A `Result` type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ============================================================================
// Unit Tests
// ============================================================================
