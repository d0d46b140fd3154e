//! Window boundary generation
//!
//! Produces the target coordinates that must be resolved to query
//! coordinates for one overlap: every multiple of the sample step inside
//! the target range, its two neighbours, and optionally the extension
//! neighbourhood on each side of it.

/// Generate the request list for the target range `[rpos, rpos_end)`
///
/// For every boundary `i` (a multiple of `sample_step`, `rpos <= i < rpos_end`)
/// the following coordinates are appended in this fixed order:
///
/// 1. `i-e-1`, `i-e` (when non-negative), `i-e+1` (when `< rpos_end`)
/// 2. `i-1` (when non-negative), `i`, `i+1` (when `< rpos_end`)
/// 3. `i+e-1`, `i+e`, `i+e+1` (each when `< rpos_end`)
///
/// Blocks 1 and 3 are only emitted for `extension > 0`. A coordinate that
/// would be negative is dropped. The list is ascending per boundary as long
/// as `2 * extension + 1 < sample_step`.
///
/// # Examples
/// ```
/// use overlap_sampler::core::boundary_positions;
/// assert_eq!(boundary_positions(0, 25, 10, 0), vec![0, 1, 9, 10, 11, 19, 20, 21]);
/// assert_eq!(boundary_positions(3, 9, 10, 0), Vec::<u64>::new());
/// ```
pub fn boundary_positions(rpos: u64, rpos_end: u64, sample_step: u64, extension: u64) -> Vec<u64> {
    if sample_step == 0 || rpos >= rpos_end {
        return Vec::new();
    }

    // First window boundary at or after rpos
    let window_pos = match rpos.div_ceil(sample_step).checked_mul(sample_step) {
        Some(pos) => pos,
        None => return Vec::new(),
    };

    let per_boundary = if extension > 0 { 9 } else { 3 };
    let boundaries = (rpos_end.saturating_sub(window_pos)).div_ceil(sample_step);
    let mut positions = Vec::with_capacity(boundaries as usize * per_boundary);

    let below_end = |pos: Option<u64>| pos.filter(|&p| p < rpos_end);

    let mut i = window_pos;
    while i < rpos_end {
        if extension > 0 {
            positions.extend(extension.checked_add(1).and_then(|e| i.checked_sub(e)));
            positions.extend(i.checked_sub(extension));
            positions.extend(below_end((i + 1).checked_sub(extension)));
        }

        positions.extend(i.checked_sub(1));
        positions.push(i);
        positions.extend(below_end(i.checked_add(1)));

        if extension > 0 {
            positions.extend(below_end(i.checked_add(extension).and_then(|p| p.checked_sub(1))));
            positions.extend(below_end(i.checked_add(extension)));
            positions.extend(below_end(i.checked_add(extension).and_then(|p| p.checked_add(1))));
        }

        i = match i.checked_add(sample_step) {
            Some(next) => next,
            None => break,
        };
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_boundary_at_zero() {
        // i = 0: i-1 is negative and dropped
        assert_eq!(boundary_positions(0, 5, 100, 0), vec![0, 1]);
    }

    #[test]
    fn test_no_boundary_in_range() {
        assert!(boundary_positions(1, 100, 100, 0).is_empty());
        assert!(boundary_positions(150, 199, 100, 0).is_empty());
    }

    #[test]
    fn test_degenerate_ranges() {
        assert!(boundary_positions(10, 10, 5, 0).is_empty());
        assert!(boundary_positions(20, 10, 5, 0).is_empty());
        assert!(boundary_positions(0, 10, 0, 0).is_empty());
    }

    #[test]
    fn test_window_pos_rounds_up() {
        assert_eq!(boundary_positions(101, 350, 100, 0), vec![199, 200, 201, 299, 300, 301]);
    }

    #[test]
    fn test_boundary_at_start_keeps_previous_neighbour() {
        // i - 1 is below rpos but still generated; the walker skips it
        assert_eq!(boundary_positions(100, 150, 100, 0), vec![99, 100, 101]);
    }

    #[test]
    fn test_end_clipping() {
        // i + 1 == rpos_end is excluded
        assert_eq!(boundary_positions(0, 101, 100, 0), vec![0, 1, 99, 100]);
    }

    #[test]
    fn test_extension_order() {
        assert_eq!(
            boundary_positions(0, 200, 100, 5),
            vec![
                // i = 0, left extension entirely negative
                0, 1, 4, 5, 6,
                // i = 100
                94, 95, 96, 99, 100, 101, 104, 105, 106,
            ]
        );
    }

    #[test]
    fn test_extension_clipped_at_end() {
        assert_eq!(boundary_positions(50, 103, 100, 3), vec![96, 97, 98, 99, 100, 101, 102]);
    }
}
