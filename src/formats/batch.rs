//! Batch sampling
//!
//! Samples every overlap of a PAF file. Overlaps are independent, so each
//! one is populated on its own rayon task and the results are written back
//! in input order.

use crate::core::{
    open_input, ByteLineIterator, EditScript, Overlap, OverlapSamplerError, SampledOverlap,
    SamplingConfig,
};
use crate::formats::paf::{is_skippable, PafRecordView};
use rayon::prelude::*;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// An overlap paired with its alignment and a stable id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapAlignment {
    pub overlap_id: u64,
    pub overlap: Overlap,
    pub script: EditScript,
}

/// Statistics for a sampling run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records read (excluding comments and blank lines)
    pub total: usize,
    /// Records sampled
    pub success: usize,
    /// Records that could not be parsed
    pub failed: usize,
    /// Sampled records whose map came out empty
    pub empty: usize,
    /// Sampled points over all records
    pub points: usize,
}

/// Read all PAF records with an alignment from `reader`
///
/// Overlap ids are assigned in input order starting from 0, counting only
/// records that parsed. Returns the alignments and the number of rejected
/// lines.
pub fn read_paf_alignments<R: BufRead>(
    reader: R,
) -> Result<(Vec<OverlapAlignment>, usize), OverlapSamplerError> {
    let mut lines = ByteLineIterator::new(reader);
    let mut alignments = Vec::new();
    let mut failed = 0;
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line() {
        let line = line?;
        line_number += 1;
        if is_skippable(line) {
            continue;
        }

        match PafRecordView::parse(line).and_then(|view| view.to_alignment()) {
            Ok((overlap, script)) => {
                alignments.push(OverlapAlignment {
                    overlap_id: alignments.len() as u64,
                    overlap,
                    script,
                });
            }
            Err(e) => {
                log::warn!("skipping PAF line {}: {}", line_number, e);
                failed += 1;
            }
        }
    }

    Ok((alignments, failed))
}

/// Sample every alignment on a pool of `threads` workers
///
/// The output is in the same order as `alignments`.
pub fn sample_overlaps(
    alignments: &[OverlapAlignment],
    config: &SamplingConfig,
    threads: usize,
) -> Result<Vec<SampledOverlap>, OverlapSamplerError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| {
            OverlapSamplerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to create thread pool: {}", e),
            ))
        })?;

    Ok(pool.install(|| {
        alignments
            .par_iter()
            .map(|a| SampledOverlap::from_alignment(&a.overlap, a.overlap_id, &a.script, config))
            .collect()
    }))
}

/// Sample a PAF file and write one coordinate-map dump per overlap
///
/// Writes to `output` when given, to stdout otherwise. Each dump is preceded
/// by a `# <overlap_id> <query_name>` line.
pub fn convert_paf<P: AsRef<Path>>(
    input: P,
    output: Option<P>,
    config: &SamplingConfig,
    threads: usize,
) -> Result<ConversionStats, OverlapSamplerError> {
    let reader = open_input(input.as_ref())?;
    let (alignments, failed) = read_paf_alignments(reader)?;

    log::info!(
        "sampling {} overlaps (step {}, extension {}) on {} threads",
        alignments.len(),
        config.sample_step(),
        config.extension(),
        threads
    );
    let sampled = sample_overlaps(&alignments, config, threads)?;

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path.as_ref())?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::with_capacity(128 * 1024, sink);

    let mut stats = ConversionStats {
        total: alignments.len() + failed,
        success: alignments.len(),
        failed,
        ..Default::default()
    };

    for (alignment, map) in alignments.iter().zip(&sampled) {
        if map.is_empty() {
            stats.empty += 1;
        }
        stats.points += map.len();
        writeln!(writer, "# {} {}", alignment.overlap_id, alignment.overlap.query_name)?;
        write!(writer, "{}", map)?;
    }
    writer.flush()?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAF: &str = "\
# overlaps
q1\t100\t0\t30\t+\tt1\t100\t0\t30\t30\t30\t60\tcg:Z:30=
q2\t100\t10\t40\t-\tt1\t100\t5\t35\t30\t30\t60\tcg:Z:30=
broken\t100
q3\t100\t0\t30\t+\tt1\t100\t0\t30\t30\t30\t60
";

    #[test]
    fn test_read_paf_alignments() {
        let (alignments, failed) = read_paf_alignments(PAF.as_bytes()).unwrap();
        assert_eq!(alignments.len(), 2);
        assert_eq!(failed, 2);
        assert_eq!(alignments[0].overlap_id, 0);
        assert_eq!(alignments[1].overlap_id, 1);
        assert_eq!(alignments[1].overlap.query_name, "q2");
    }

    #[test]
    fn test_bad_cigar_does_not_abort_batch() {
        let paf = "\
q1\t100\t0\t10\t+\tt1\t100\t0\t10\t10\t10\t60\tcg:Z:99999999999999999999=
q2\t100\t0\t10\t+\tt1\t100\t0\t10\t10\t10\t60\tcg:Z:10=
q3\t100\t0\t10\t+\tt1\t100\t0\t10\t10\t10\t60\tcg:Z:11=
";
        let (alignments, failed) = read_paf_alignments(paf.as_bytes()).unwrap();
        assert_eq!(failed, 2);
        assert_eq!(alignments.len(), 1);
        assert_eq!(alignments[0].overlap_id, 0);
        assert_eq!(alignments[0].overlap.query_name, "q2");
        assert_eq!(alignments[0].script.len(), 10);
    }

    #[test]
    fn test_sample_overlaps_in_order() {
        let (alignments, _) = read_paf_alignments(PAF.as_bytes()).unwrap();
        let config = SamplingConfig::new(10, 0).unwrap();
        let sampled = sample_overlaps(&alignments, &config, 2).unwrap();

        assert_eq!(sampled.len(), 2);
        assert_eq!(sampled[0].overlap_id(), Some(0));
        assert_eq!(sampled[0].find(20), Some(20));
        // reverse strand: query starts at 100 - 40 = 60, target at 5
        assert_eq!(sampled[1].overlap_id(), Some(1));
        assert_eq!(sampled[1].find(10), Some(65));
    }

    #[test]
    fn test_convert_paf() -> Result<(), OverlapSamplerError> {
        let mut input = NamedTempFile::new()?;
        input.write_all(PAF.as_bytes())?;
        input.flush()?;
        let output = NamedTempFile::new()?;

        let config = SamplingConfig::new(10, 0)?;
        let stats = convert_paf(input.path(), Some(output.path()), &config, 1)?;

        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 2);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.empty, 0);
        // q1: 0 1 9 10 11 19 20 21; q2 (target 5-35): 9 10 11 19 20 21 29 30 31
        assert_eq!(stats.points, 17);

        let text = std::fs::read_to_string(output.path())?;
        assert!(text.starts_with("# 0 q1\nThis overlap has 8 sampled points:\n[0] 0 -> 0\n"));
        assert!(text.contains("# 1 q2\nThis overlap has 9 sampled points:\n"));
        Ok(())
    }
}
