//! Pairwise edit scripts
//!
//! An edit script is the column-by-column description of an alignment
//! between a query and a target. It carries no positions; coordinates are
//! derived by walking it.
//!
//! Two encodings are supported:
//! - edlib byte codes: `0 = match, 1 = insert, 2 = delete, 3 = mismatch`
//! - extended CIGAR strings: `=`, `X`, `I`, `D` and `M` (taken as match)

use crate::core::error::{EditScriptError, EditScriptResult};

/// Single alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Match,
    Mismatch,
    /// Query has an extra base
    Insert,
    /// Target has an extra base
    Delete,
}

impl EditOp {
    /// Decode an edlib operation code
    ///
    /// # Examples
    /// ```
    /// use overlap_sampler::core::EditOp;
    /// assert_eq!(EditOp::from_edlib(0), Some(EditOp::Match));
    /// assert_eq!(EditOp::from_edlib(1), Some(EditOp::Insert));
    /// assert_eq!(EditOp::from_edlib(2), Some(EditOp::Delete));
    /// assert_eq!(EditOp::from_edlib(3), Some(EditOp::Mismatch));
    /// assert_eq!(EditOp::from_edlib(4), None);
    /// ```
    pub fn from_edlib(code: u8) -> Option<Self> {
        match code {
            0 => Some(EditOp::Match),
            1 => Some(EditOp::Insert),
            2 => Some(EditOp::Delete),
            3 => Some(EditOp::Mismatch),
            _ => None,
        }
    }

    pub fn to_edlib(&self) -> u8 {
        match self {
            EditOp::Match => 0,
            EditOp::Insert => 1,
            EditOp::Delete => 2,
            EditOp::Mismatch => 3,
        }
    }

    /// Decode an extended CIGAR operation character
    pub fn from_cigar_char(c: char) -> Option<Self> {
        match c {
            '=' | 'M' => Some(EditOp::Match),
            'X' => Some(EditOp::Mismatch),
            'I' => Some(EditOp::Insert),
            'D' => Some(EditOp::Delete),
            _ => None,
        }
    }

    pub fn to_cigar_char(&self) -> char {
        match self {
            EditOp::Match => '=',
            EditOp::Mismatch => 'X',
            EditOp::Insert => 'I',
            EditOp::Delete => 'D',
        }
    }

    /// True for columns that pair a query base with a target base
    #[inline]
    pub fn is_aligned(&self) -> bool {
        matches!(self, EditOp::Match | EditOp::Mismatch)
    }

    #[inline]
    pub fn consumes_target(&self) -> bool {
        !matches!(self, EditOp::Insert)
    }

    #[inline]
    pub fn consumes_query(&self) -> bool {
        !matches!(self, EditOp::Delete)
    }
}

/// Owned, ordered sequence of alignment columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// Decode a buffer of edlib operation codes
    pub fn from_edlib_bytes(bytes: &[u8]) -> EditScriptResult<Self> {
        let ops = bytes
            .iter()
            .enumerate()
            .map(|(column, &code)| {
                EditOp::from_edlib(code)
                    .ok_or(EditScriptError::InvalidEdlibCode { code, column })
            })
            .collect::<EditScriptResult<Vec<_>>>()?;
        Ok(Self { ops })
    }

    /// Expand an extended CIGAR string into one op per column
    ///
    /// # Examples
    /// ```
    /// use overlap_sampler::core::{EditOp, EditScript};
    /// let script = EditScript::from_cigar("2=1D1X").unwrap();
    /// assert_eq!(
    ///     script.ops(),
    ///     &[EditOp::Match, EditOp::Match, EditOp::Delete, EditOp::Mismatch]
    /// );
    /// ```
    pub fn from_cigar(cigar: &str) -> EditScriptResult<Self> {
        Ok(Self::from_runs(&parse_cigar_runs(cigar)?))
    }

    /// Expand `(length, op)` runs into one op per column
    pub fn from_runs(runs: &[(usize, EditOp)]) -> Self {
        let mut ops = Vec::new();
        for &(len, op) in runs {
            ops.extend(std::iter::repeat(op).take(len));
        }
        Self { ops }
    }

    /// Run-length compact into `(length, op)` pairs
    pub fn runs(&self) -> Vec<(usize, EditOp)> {
        let mut runs: Vec<(usize, EditOp)> = Vec::new();
        for &op in &self.ops {
            match runs.last_mut() {
                Some((len, last)) if *last == op => *len += 1,
                _ => runs.push((1, op)),
            }
        }
        runs
    }

    /// Render as an extended CIGAR string
    pub fn to_cigar(&self) -> String {
        self.runs()
            .iter()
            .map(|(len, op)| format!("{}{}", len, op.to_cigar_char()))
            .collect()
    }

    /// Encode as edlib operation codes
    pub fn to_edlib_bytes(&self) -> Vec<u8> {
        self.ops.iter().map(EditOp::to_edlib).collect()
    }

    /// Number of target bases covered by the script
    pub fn target_len(&self) -> u64 {
        self.ops.iter().filter(|op| op.consumes_target()).count() as u64
    }

    /// Number of query bases covered by the script
    pub fn query_len(&self) -> u64 {
        self.ops.iter().filter(|op| op.consumes_query()).count() as u64
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        Self::new(ops)
    }
}

impl AsRef<[EditOp]> for EditScript {
    fn as_ref(&self) -> &[EditOp] {
        &self.ops
    }
}

/// Split an extended CIGAR string into `(length, op)` runs without expanding it
pub fn parse_cigar_runs(cigar: &str) -> EditScriptResult<Vec<(usize, EditOp)>> {
    let mut runs = Vec::new();
    let mut run: Option<usize> = None;

    for (offset, c) in cigar.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            let len = run
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|len| len.checked_add(digit as usize))
                .ok_or(EditScriptError::CigarLengthOverflow { offset })?;
            run = Some(len);
            continue;
        }
        let op = EditOp::from_cigar_char(c)
            .ok_or(EditScriptError::InvalidCigarOp { op: c, offset })?;
        let len = run
            .take()
            .ok_or(EditScriptError::MissingCigarLength { op: c, offset })?;
        runs.push((len, op));
    }

    if run.is_some() {
        return Err(EditScriptError::TrailingCigarLength);
    }
    Ok(runs)
}
