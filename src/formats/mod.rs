//! File format adapters
//!
//! Adapters that feed overlaps from files into the sampler (PAF), and the
//! parallel batch driver built on top of them.

pub mod batch;
pub mod paf;

pub use batch::{convert_paf, read_paf_alignments, sample_overlaps, ConversionStats, OverlapAlignment};
pub use paf::{parse_paf_line, PafRecordView, PAF_MANDATORY_FIELDS};
