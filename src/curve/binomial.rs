//! Cached rows of Pascal's triangle for Bernstein weights.

use crate::util::{SpinError, SpinResult};

/// Largest degree whose central coefficient still fits in a `u64`.
const MAX_LEVELS: usize = 67;

/// Immutable table of binomial coefficients for degrees `1..=levels`.
///
/// Row `n` holds `C(n, 0)..=C(n, n)`. Storage starts at degree 1, so row `n`
/// lives at index `n - 1`. The table is built once and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinomialTable {
    rows: Vec<Vec<u64>>,
}

impl BinomialTable {
    /// Precomputes `levels` rows (degrees 1 through `levels`).
    pub fn new(levels: usize) -> SpinResult<Self> {
        if levels == 0 {
            return Err(SpinError::InvalidInput("binomial table needs at least one level"));
        }
        if levels > MAX_LEVELS {
            return Err(SpinError::InvalidInput(
                "binomial table levels above 67 overflow u64 coefficients",
            ));
        }

        let mut rows: Vec<Vec<u64>> = Vec::with_capacity(levels);
        rows.push(vec![1, 1]);
        for degree in 2..=levels {
            let prev = &rows[degree - 2];
            let mut row = Vec::with_capacity(degree + 1);
            row.push(1);
            row.extend(prev.windows(2).map(|pair| pair[0] + pair[1]));
            row.push(1);
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Number of precomputed rows; the highest degree served.
    pub fn levels(&self) -> usize {
        self.rows.len()
    }

    /// Returns the coefficients for degree `n` (`n + 1` entries).
    pub fn row(&self, n: usize) -> SpinResult<&[u64]> {
        n.checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .map(Vec::as_slice)
            .ok_or(SpinError::RowOutOfRange {
                n,
                max: self.rows.len(),
            })
    }
}
