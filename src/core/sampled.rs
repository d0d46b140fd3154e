//! Sampled overlap coordinate map
//!
//! A [`SampledOverlap`] holds, for one overlap, the query coordinate of every
//! window boundary (and extension coordinate) on the target. The consensus
//! stage uses it to cut each read at the same target positions.

use crate::core::boundary::boundary_positions;
use crate::core::config::SamplingConfig;
use crate::core::edit_script::EditOp;
use crate::core::overlap::OverlapRecord;
use crate::core::walker::{walk_alignment, WalkStart};
use std::collections::BTreeMap;
use std::fmt;

/// Sparse target -> query coordinate map for one overlap
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampledOverlap {
    overlap_id: Option<u64>,
    positions: BTreeMap<u64, u64>,
}

impl SampledOverlap {
    /// Empty map with no overlap id
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the coordinate map for `overlap` from its alignment
    ///
    /// # Examples
    /// ```
    /// use overlap_sampler::core::{EditOp, Overlap, SampledOverlap, SamplingConfig, Strand};
    ///
    /// let overlap = Overlap {
    ///     query_name: "read1".to_string(),
    ///     query_len: 50,
    ///     query_start: 0,
    ///     query_end: 30,
    ///     strand: Strand::Plus,
    ///     target_start: 0,
    ///     target_end: 30,
    ///     ..Default::default()
    /// };
    /// let ops = vec![EditOp::Match; 30];
    /// let config = SamplingConfig::new(10, 0).unwrap();
    ///
    /// let sampled = SampledOverlap::from_alignment(&overlap, 7, &ops, &config);
    /// assert_eq!(sampled.overlap_id(), Some(7));
    /// assert_eq!(sampled.find(20), Some(20));
    /// assert_eq!(sampled.find(15), None);
    /// ```
    pub fn from_alignment<O, S>(overlap: &O, overlap_id: u64, ops: S, config: &SamplingConfig) -> Self
    where
        O: OverlapRecord + ?Sized,
        S: AsRef<[EditOp]>,
    {
        let mut sampled = Self::new();
        sampled.set(overlap, overlap_id, ops, config);
        sampled
    }

    /// Rebuild the map from scratch for a new overlap/alignment
    ///
    /// Any previously stored coordinates are discarded.
    pub fn set<O, S>(&mut self, overlap: &O, overlap_id: u64, ops: S, config: &SamplingConfig)
    where
        O: OverlapRecord + ?Sized,
        S: AsRef<[EditOp]>,
    {
        let ops = ops.as_ref();
        let start = WalkStart::from_overlap(overlap);
        let requests = boundary_positions(
            overlap.target_start(),
            overlap.target_end(),
            config.sample_step(),
            config.extension(),
        );

        log::debug!(
            target: "overlap_sampler",
            "sampling overlap {} ({}): target {}-{}, start q={} r={}, {} requests over {} columns",
            overlap_id,
            overlap.query_name(),
            overlap.target_start(),
            overlap.target_end(),
            start.query_pos,
            start.target_pos,
            requests.len(),
            ops.len()
        );

        self.overlap_id = Some(overlap_id);
        self.positions = walk_alignment(ops, start, &requests);

        if self.positions.len() < requests.len() {
            log::trace!(
                target: "overlap_sampler",
                "overlap {}: {} of {} requested coordinates resolved",
                overlap_id,
                self.positions.len(),
                requests.len()
            );
        }
    }

    /// Query coordinate sampled at `target_pos`, if it was resolved
    #[inline]
    pub fn find(&self, target_pos: u64) -> Option<u64> {
        self.positions.get(&target_pos).copied()
    }

    pub fn overlap_id(&self) -> Option<u64> {
        self.overlap_id
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sampled `(target, query)` pairs in ascending target order
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.positions.iter().map(|(&t, &q)| (t, q))
    }

    /// Human-readable dump of every sampled point
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SampledOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "This overlap has {} sampled points:", self.positions.len())?;
        for (i, (target, query)) in self.positions.iter().enumerate() {
            writeln!(f, "[{}] {} -> {}", i, target, query)?;
        }
        Ok(())
    }
}
