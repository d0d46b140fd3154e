//! Alignment walker
//!
//! Resolves requested target coordinates to query coordinates with a single
//! pass over an edit script. The walk is a merge of two ascending streams:
//! the request list and the target coordinate reached by the alignment.

use crate::core::edit_script::EditOp;
use crate::core::overlap::OverlapRecord;
use std::collections::BTreeMap;

/// Coordinates of the first alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkStart {
    pub query_pos: u64,
    pub target_pos: u64,
}

impl WalkStart {
    pub fn new(query_pos: u64, target_pos: u64) -> Self {
        Self { query_pos, target_pos }
    }

    /// Derive the starting column from an overlap
    ///
    /// On the reverse strand the alignment runs over the reverse complement
    /// of the query, so the query coordinate starts at `query_len - query_end`.
    pub fn from_overlap<O: OverlapRecord + ?Sized>(overlap: &O) -> Self {
        let query_pos = if overlap.strand().is_reverse() {
            overlap.query_len().saturating_sub(overlap.query_end())
        } else {
            overlap.query_start()
        };
        Self {
            query_pos,
            target_pos: overlap.target_start(),
        }
    }
}

/// Walk `ops` from `start` and resolve every coordinate in `requests`
///
/// `requests` is expected in ascending order. Requests below the current
/// target coordinate are skipped, duplicates are resolved once, and requests
/// past the end of the script are left out of the result.
///
/// Columns that fall on an insertion or deletion resolve to the query
/// coordinate of the last match/mismatch column, so that window cuts land on
/// aligned bases.
///
/// # Examples
/// ```
/// use overlap_sampler::core::{walk_alignment, EditOp, WalkStart};
/// use EditOp::*;
///
/// let ops = [Match, Match, Delete, Delete, Match];
/// let map = walk_alignment(&ops, WalkStart::new(0, 0), &[1, 2, 3, 4]);
/// assert_eq!(map.get(&2), Some(&1));
/// assert_eq!(map.get(&3), Some(&1));
/// assert_eq!(map.get(&4), Some(&2));
/// ```
pub fn walk_alignment(ops: &[EditOp], start: WalkStart, requests: &[u64]) -> BTreeMap<u64, u64> {
    let mut positions = BTreeMap::new();

    let mut next = 0usize;
    let mut qpos = start.query_pos;
    let mut rpos = start.target_pos;
    // seeded with the start, not 0, so a leading gap never maps before the overlap
    let mut last_match_qpos = start.query_pos;

    for &op in ops {
        while next < requests.len() && requests[next] < rpos {
            next += 1;
        }
        if next == requests.len() {
            break;
        }

        if requests[next] == rpos {
            let resolved = if op.is_aligned() { qpos } else { last_match_qpos };
            log::trace!(
                target: "overlap_sampler",
                "resolved target {} -> query {} on {:?}",
                rpos,
                resolved,
                op
            );
            positions.entry(rpos).or_insert(resolved);
            while next < requests.len() && requests[next] <= rpos {
                next += 1;
            }
        }

        match op {
            EditOp::Match | EditOp::Mismatch => {
                last_match_qpos = qpos;
                qpos += 1;
                rpos += 1;
            }
            EditOp::Insert => qpos += 1,
            EditOp::Delete => rpos += 1,
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlap::{Overlap, Strand};
    use EditOp::*;

    #[test]
    fn test_all_match_is_identity_offset() {
        let ops = vec![Match; 10];
        let map = walk_alignment(&ops, WalkStart::new(100, 20), &[20, 25, 29]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(20, 100), (25, 105), (29, 109)]);
    }

    #[test]
    fn test_delete_anchors_to_previous_match() {
        let ops = [Match, Match, Delete, Delete, Match];
        let map = walk_alignment(&ops, WalkStart::new(0, 0), &[0, 1, 2, 3, 4]);
        assert_eq!(
            map.into_iter().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_insert_resolves_at_first_column() {
        // target 2 is first seen on an insertion column
        let ops = [Match, Match, Insert, Insert, Match, Match];
        let map = walk_alignment(&ops, WalkStart::new(0, 0), &[2, 3]);
        assert_eq!(map.get(&2), Some(&1));
        assert_eq!(map.get(&3), Some(&5));
    }

    #[test]
    fn test_mismatch_counts_as_aligned() {
        let ops = [Match, Mismatch, Delete, Match];
        let map = walk_alignment(&ops, WalkStart::new(10, 0), &[1, 2]);
        assert_eq!(map.get(&1), Some(&11));
        assert_eq!(map.get(&2), Some(&11));
    }

    #[test]
    fn test_leading_gap_anchors_to_start() {
        let ops = [Delete, Match];
        let map = walk_alignment(&ops, WalkStart::new(7, 0), &[0, 1]);
        assert_eq!(map.get(&0), Some(&7));
        assert_eq!(map.get(&1), Some(&7));
    }

    #[test]
    fn test_requests_past_script_end_are_absent() {
        let ops = vec![Match; 5];
        let map = walk_alignment(&ops, WalkStart::new(0, 0), &[4, 5, 6]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&4), Some(&4));
        assert!(map.get(&5).is_none());
    }

    #[test]
    fn test_requests_before_start_do_not_block() {
        let ops = vec![Match; 10];
        let map = walk_alignment(&ops, WalkStart::new(0, 100), &[99, 100, 101]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(100, 0), (101, 1)]);
    }

    #[test]
    fn test_out_of_order_and_duplicate_requests() {
        let ops = vec![Match; 10];
        let map = walk_alignment(&ops, WalkStart::new(0, 0), &[2, 3, 4, 3, 4, 5, 5, 9]);
        assert_eq!(
            map.into_iter().collect::<Vec<_>>(),
            vec![(2, 2), (3, 3), (4, 4), (5, 5), (9, 9)]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(walk_alignment(&[], WalkStart::default(), &[0, 1]).is_empty());
        assert!(walk_alignment(&[Match, Match], WalkStart::default(), &[]).is_empty());
    }

    #[test]
    fn test_walk_start_strands() {
        let mut overlap = Overlap {
            query_name: "q".to_string(),
            query_len: 1000,
            query_start: 100,
            query_end: 800,
            strand: Strand::Plus,
            target_start: 40,
            target_end: 700,
            ..Default::default()
        };
        assert_eq!(WalkStart::from_overlap(&overlap), WalkStart::new(100, 40));

        overlap.strand = Strand::Minus;
        assert_eq!(WalkStart::from_overlap(&overlap), WalkStart::new(200, 40));

        // malformed record saturates instead of underflowing
        overlap.query_end = 2000;
        assert_eq!(WalkStart::from_overlap(&overlap), WalkStart::new(0, 40));
    }
}
