//! Core coordinate sampling functionality
//!
//! This module contains the overlap and edit script models, the window
//! boundary generator, the alignment walker and the sampled coordinate map.

mod boundary;
mod config;
mod edit_script;
mod error;
pub mod io;
mod overlap;
mod sampled;
mod walker;

pub use boundary::boundary_positions;
pub use config::{SamplingConfig, DEFAULT_SAMPLE_STEP};
pub use edit_script::{parse_cigar_runs, EditOp, EditScript};
pub use error::{
    ConfigError, ConfigResult, EditScriptError, EditScriptResult, OverlapSamplerError,
    PafParseError, PafResult, Result,
};
pub use io::{detect_compression, open_input, ByteLineIterator, CompressionFormat, DEFAULT_BUFFER_SIZE};
pub use overlap::{Overlap, OverlapRecord, Strand};
pub use sampled::SampledOverlap;
pub use walker::{walk_alignment, WalkStart};
