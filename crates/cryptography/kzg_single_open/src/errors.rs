/// Errors returned by the opening verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check did not hold.
    InvalidProof,
    /// The slices handed to batch verification have different lengths.
    BatchVerificationInputsMustHaveSameLength {
        commitments_len: usize,
        points_len: usize,
        evaluations_len: usize,
        proofs_len: usize,
        weights_len: usize,
    },
}

impl std::fmt::Display for VerifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProof => write!(f, "invalid proof"),
            Self::BatchVerificationInputsMustHaveSameLength {
                commitments_len,
                points_len,
                evaluations_len,
                proofs_len,
                weights_len,
            } => write!(
                f,
                "batch inputs have different lengths: {commitments_len} commitments, {points_len} points, \
                 {evaluations_len} evaluations, {proofs_len} proofs, {weights_len} weights"
            ),
        }
    }
}

impl std::error::Error for VerifierError {}
