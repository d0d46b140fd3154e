//! PAF format adapter
//!
//! Reads overlaps from PAF (Pairwise mApping Format) lines. The alignment of
//! each record is taken from its `cg:Z:` extended-CIGAR tag.
//!
//! ```text
//! qname qlen qstart qend strand tname tlen tstart tend matches block_len mapq [tags...]
//! ```

use crate::core::{parse_cigar_runs, EditScript, Overlap, PafParseError, PafResult, Strand};
use memchr::memchr;

/// Number of mandatory PAF columns
pub const PAF_MANDATORY_FIELDS: usize = 12;

/// Zero-copy PAF record view
///
/// Coordinates are parsed eagerly, optional tags are kept as byte slices
/// and only decoded on request.
pub struct PafRecordView<'a> {
    line: &'a [u8],
    pub query_name: &'a str,
    pub query_len: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub strand: Strand,
    pub target_name: &'a str,
    pub target_len: u64,
    pub target_start: u64,
    pub target_end: u64,
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> PafRecordView<'a> {
    /// Parse a PAF line with minimal allocation
    pub fn parse(line: &'a [u8]) -> PafResult<Self> {
        if line.is_empty() {
            return Err(PafParseError::EmptyLine);
        }

        let mut field_bounds = Vec::with_capacity(16);
        let mut start_pos = 0;
        while let Some(tab_pos) = memchr(b'\t', &line[start_pos..]) {
            field_bounds.push((start_pos, start_pos + tab_pos));
            start_pos += tab_pos + 1;
        }
        field_bounds.push((start_pos, line.len()));

        if field_bounds.len() < PAF_MANDATORY_FIELDS {
            return Err(PafParseError::TooFewFields {
                expected: PAF_MANDATORY_FIELDS,
                found: field_bounds.len(),
            });
        }

        let text = |index: usize, name: &'static str| -> PafResult<&'a str> {
            let (s, e) = field_bounds[index];
            std::str::from_utf8(&line[s..e]).map_err(|_| PafParseError::InvalidUtf8(name))
        };
        let number = |index: usize, name: &'static str| -> PafResult<u64> {
            let value = text(index, name)?;
            value
                .parse()
                .map_err(|_| PafParseError::InvalidNumber(name, value.to_string()))
        };

        let strand_str = text(4, "strand")?;
        let strand = match strand_str.as_bytes() {
            [b] => Strand::from_byte(*b),
            _ => None,
        }
        .ok_or_else(|| PafParseError::InvalidStrand(strand_str.to_string()))?;

        let query_name = text(0, "query_name")?;
        let query_len = number(1, "query_len")?;
        let query_start = number(2, "query_start")?;
        let query_end = number(3, "query_end")?;
        let target_name = text(5, "target_name")?;
        let target_len = number(6, "target_len")?;
        let target_start = number(7, "target_start")?;
        let target_end = number(8, "target_end")?;

        Ok(Self {
            line,
            query_name,
            query_len,
            query_start,
            query_end,
            strand,
            target_name,
            target_len,
            target_start,
            target_end,
            field_bounds,
        })
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get field as string slice (lazy access)
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .and_then(|(start, end)| std::str::from_utf8(&self.line[*start..*end]).ok())
    }

    /// Value of a SAM-style optional tag such as `cg:Z:`
    pub fn tag(&self, key: &str) -> Option<&'a str> {
        (PAF_MANDATORY_FIELDS..self.field_count())
            .filter_map(|index| self.field(index))
            .find_map(|field| {
                let rest = field.strip_prefix(key)?;
                let rest = rest.strip_prefix(':')?;
                // skip the type character
                rest.get(2..).filter(|_| rest.as_bytes().get(1) == Some(&b':'))
            })
    }

    /// Extended CIGAR of the alignment, if present
    pub fn cigar(&self) -> Option<&'a str> {
        self.tag("cg")
    }

    /// Owned overlap record
    pub fn to_overlap(&self) -> Overlap {
        Overlap {
            query_name: self.query_name.to_string(),
            query_len: self.query_len,
            query_start: self.query_start,
            query_end: self.query_end,
            strand: self.strand,
            target_name: self.target_name.to_string(),
            target_len: self.target_len,
            target_start: self.target_start,
            target_end: self.target_end,
        }
    }

    /// Owned overlap and its decoded alignment
    ///
    /// The CIGAR must cover exactly the query and target intervals of the
    /// record. This is checked on the run lengths, before expansion.
    pub fn to_alignment(&self) -> PafResult<(Overlap, EditScript)> {
        let cigar = self
            .cigar()
            .ok_or_else(|| PafParseError::MissingCigar(self.query_name.to_string()))?;
        let runs = parse_cigar_runs(cigar)?;

        let (mut query_span, mut target_span) = (0u64, 0u64);
        for &(len, op) in &runs {
            let len = len as u64;
            if op.consumes_query() {
                query_span = query_span.saturating_add(len);
            }
            if op.consumes_target() {
                target_span = target_span.saturating_add(len);
            }
        }
        check_span("query", query_span, self.query_start, self.query_end)?;
        check_span("target", target_span, self.target_start, self.target_end)?;

        Ok((self.to_overlap(), EditScript::from_runs(&runs)))
    }
}

fn check_span(side: &'static str, cigar: u64, start: u64, end: u64) -> PafResult<()> {
    let record = end.saturating_sub(start);
    if cigar != record {
        return Err(PafParseError::SpanMismatch { side, cigar, record });
    }
    Ok(())
}

/// Parse one PAF line into an overlap and its edit script
pub fn parse_paf_line(line: &str) -> PafResult<(Overlap, EditScript)> {
    PafRecordView::parse(line.as_bytes())?.to_alignment()
}

/// Lines that carry no record
#[inline]
pub fn is_skippable(line: &[u8]) -> bool {
    line.is_empty() || line[0] == b'#'
}
