//! Error types for OverlapSampler
//!
//! Defines all error types used throughout the library. Sampling itself
//! never fails; errors come from configuration, edit script decoding and
//! input parsing.

use thiserror::Error;

/// Main error type for OverlapSampler operations
#[derive(Debug, Error)]
pub enum OverlapSamplerError {
    /// Invalid sampling configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Edit script decoding errors
    #[error("Edit script error: {0}")]
    EditScript(#[from] EditScriptError),

    /// PAF parsing errors
    #[error("PAF parse error: {0}")]
    Paf(#[from] PafParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when building a [`SamplingConfig`](crate::core::SamplingConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The sampling interval must be positive
    #[error("Sample step must be greater than zero")]
    ZeroSampleStep,

    /// Extension blocks of neighbouring boundaries would interleave
    #[error("Extension {extension} is too large for sample step {sample_step}: 2 * extension + 1 must be < sample step")]
    ExtensionTooLarge { sample_step: u64, extension: u64 },
}

/// Errors that can occur while decoding an edit script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditScriptError {
    /// Byte is not one of the four edlib operation codes
    #[error("Invalid edlib operation code {code} at column {column}")]
    InvalidEdlibCode { code: u8, column: usize },

    /// CIGAR operation outside of `M=XID`
    #[error("Unsupported CIGAR operation '{op}' at offset {offset}")]
    InvalidCigarOp { op: char, offset: usize },

    /// CIGAR operation without a preceding run length
    #[error("CIGAR operation '{op}' at offset {offset} has no length")]
    MissingCigarLength { op: char, offset: usize },

    /// CIGAR run length does not fit in a `usize`
    #[error("CIGAR run length at offset {offset} is too large")]
    CigarLengthOverflow { offset: usize },

    /// CIGAR string ends with digits that are not followed by an operation
    #[error("CIGAR string ends with a dangling length")]
    TrailingCigarLength,
}

/// Errors that can occur while parsing a PAF line
#[derive(Debug, Error)]
pub enum PafParseError {
    /// Empty line
    #[error("Empty line")]
    EmptyLine,

    /// Fewer than the 12 mandatory PAF columns
    #[error("Too few fields: expected at least {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// Field is not valid UTF-8
    #[error("Invalid UTF-8 in field: {0}")]
    InvalidUtf8(&'static str),

    /// Field is not a non-negative integer
    #[error("Invalid number in field {0}: {1}")]
    InvalidNumber(&'static str, String),

    /// Strand column is neither '+' nor '-'
    #[error("Invalid strand: {0}")]
    InvalidStrand(String),

    /// Record carries no `cg:Z:` alignment tag
    #[error("Missing cg:Z: CIGAR tag for query {0}")]
    MissingCigar(String),

    /// The `cg:Z:` tag could not be decoded
    #[error("Invalid CIGAR: {0}")]
    EditScript(#[from] EditScriptError),

    /// CIGAR covers a different number of bases than the record's coordinates
    #[error("CIGAR spans {cigar} {side} bases but the record spans {record}")]
    SpanMismatch { side: &'static str, cigar: u64, record: u64 },
}

/// Result type alias for OverlapSampler operations
pub type Result<T> = std::result::Result<T, OverlapSamplerError>;

/// Result type alias for configuration
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for edit script decoding
pub type EditScriptResult<T> = std::result::Result<T, EditScriptError>;

/// Result type alias for PAF parsing
pub type PafResult<T> = std::result::Result<T, PafParseError>;
