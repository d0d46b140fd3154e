//! Overlap records
//!
//! An overlap states that a query sequence (A) and a target sequence (B)
//! share a region. The sampler only reads coordinates from it, so any
//! external overlap type can take part by implementing [`OverlapRecord`].
//!
//! All coordinates are 0-based and half-open.

/// Relative orientation of the query against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Strand {
    #[default]
    Plus,
    /// Query was reverse-complemented to align to the target
    Minus,
}

impl Strand {
    /// Parse strand from byte
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'+' => Some(Strand::Plus),
            b'-' => Some(Strand::Minus),
            _ => None,
        }
    }

    /// Convert to char
    pub fn to_char(&self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }

    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Minus)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Read-only view of an overlap, as needed by the sampler
///
/// `query_*` describe sequence A, `target_*` sequence B. The sampler assumes
/// `start <= end <= len` on both sequences but does not enforce it.
pub trait OverlapRecord {
    /// Query name, used for diagnostics only
    fn query_name(&self) -> &str;
    /// Total length of the query sequence
    fn query_len(&self) -> u64;
    fn query_start(&self) -> u64;
    fn query_end(&self) -> u64;
    fn target_start(&self) -> u64;
    fn target_end(&self) -> u64;
    /// Orientation of the query relative to the target
    fn strand(&self) -> Strand;
}

/// Concrete overlap record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overlap {
    pub query_name: String,
    pub query_len: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub strand: Strand,
    pub target_name: String,
    pub target_len: u64,
    pub target_start: u64,
    pub target_end: u64,
}

impl Overlap {
    /// Length of the overlapping region on the query
    pub fn query_span(&self) -> u64 {
        self.query_end.saturating_sub(self.query_start)
    }

    /// Length of the overlapping region on the target
    pub fn target_span(&self) -> u64 {
        self.target_end.saturating_sub(self.target_start)
    }

    /// One-line summary used in logs and dumps
    pub fn summary(&self) -> String {
        format!(
            "{} {} {}-{} {} {} {} {}-{}",
            self.query_name,
            self.query_len,
            self.query_start,
            self.query_end,
            self.strand,
            self.target_name,
            self.target_len,
            self.target_start,
            self.target_end,
        )
    }
}

impl OverlapRecord for Overlap {
    fn query_name(&self) -> &str {
        &self.query_name
    }

    fn query_len(&self) -> u64 {
        self.query_len
    }

    fn query_start(&self) -> u64 {
        self.query_start
    }

    fn query_end(&self) -> u64 {
        self.query_end
    }

    fn target_start(&self) -> u64 {
        self.target_start
    }

    fn target_end(&self) -> u64 {
        self.target_end
    }

    fn strand(&self) -> Strand {
        self.strand
    }
}
