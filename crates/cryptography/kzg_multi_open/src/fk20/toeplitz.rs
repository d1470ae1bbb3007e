use bls12_381::Scalar;

/// A square matrix that is constant along each diagonal, stored as its first
/// row and first column (`row[0] == col[0]`).
///
/// ```text
/// row = [a, b, c], col = [a, d, e]
///
/// [a b c]
/// [d a b]
/// [e d a]
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ToeplitzMatrix {
    row: Vec<Scalar>,
    col: Vec<Scalar>,
}

impl ToeplitzMatrix {
    pub(crate) fn new(row: Vec<Scalar>, col: Vec<Scalar>) -> Self {
        assert!(!row.is_empty(), "toeplitz matrix must not be empty");
        assert_eq!(row.len(), col.len(), "only square toeplitz matrices are supported");
        assert_eq!(row[0], col[0], "row and column must share their first entry");
        Self { row, col }
    }

    pub(crate) fn size(&self) -> usize {
        self.row.len()
    }

    /// First column of the `2n x 2n` circulant matrix whose top-left `n x n`
    /// block is this matrix.
    ///
    /// A circulant matrix `C[i][j] = c[(i - j) mod 2n]` multiplies a vector by
    /// cyclic convolution with `c`, so it is diagonalised by the FFT. Below the
    /// diagonal `c` follows `col`. Above it `c[2n - d] = row[d]`. The entry
    /// `c[n]` never meets the top-left block and is set to zero.
    pub(crate) fn circulant_column(&self) -> Vec<Scalar> {
        let n = self.size();
        let mut column = Vec::with_capacity(2 * n);
        column.extend_from_slice(&self.col);
        column.push(Scalar::from(0u64));
        column.extend(self.row[1..].iter().rev());
        column
    }
}
