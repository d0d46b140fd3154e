//! OverlapSampler - sampled coordinate maps for windowed consensus
//!
//! For one overlap between a query and a target sequence, walks the pairwise
//! alignment once and records the query coordinate of every target window
//! boundary. A consensus stage uses these maps to cut all reads covering a
//! target into consistent windows.
//!
//! # Features
//!
//! - Single linear pass over the edit script per overlap
//! - Gap columns anchored to the last aligned base
//! - Strand-aware starting coordinates
//! - Parallel batch sampling of PAF files with rayon
//!
//! # Example
//!
//! ```
//! use overlap_sampler::{EditScript, Overlap, SampledOverlap, SamplingConfig, Strand};
//!
//! let overlap = Overlap {
//!     query_name: "read1".to_string(),
//!     query_len: 1200,
//!     query_start: 0,
//!     query_end: 1002,
//!     strand: Strand::Plus,
//!     target_name: "read2".to_string(),
//!     target_len: 5000,
//!     target_start: 400,
//!     target_end: 1400,
//! };
//! let script = EditScript::from_cigar("600=2I400=").unwrap();
//! let config = SamplingConfig::new(500, 0).unwrap();
//!
//! let sampled = SampledOverlap::from_alignment(&overlap, 0, &script, &config);
//! assert_eq!(sampled.find(500), Some(100));
//! // target 1000 is first reached on an insertion column
//! assert_eq!(sampled.find(1000), Some(599));
//! assert_eq!(sampled.find(1001), Some(603));
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use self::core::{
    boundary_positions, walk_alignment, ConfigError, EditOp, EditScript, EditScriptError,
    Overlap, OverlapRecord, OverlapSamplerError, PafParseError, SampledOverlap, SamplingConfig,
    Strand, WalkStart,
};
pub use formats::{batch, paf};
