use erasure_codes::RSError;
use serialization::SerializationError;

pub use blobs::ErrorKind;

use crate::CellIndex;

/// Errors from the cell and blob methods of [`crate::Context`].
#[derive(Debug)]
pub enum Error {
    /// Error that occurred while computing cells or reassembling a blob.
    Prover(ProverError),
    /// Error that occurred during verification.
    Verifier(VerifierError),
    /// Error that occurred during data recovery.
    Recovery(RecoveryError),
    /// Error that occurred while serializing or deserializing data.
    Serialization(SerializationError),
    /// Error from one of the blob proof methods.
    Blob(blobs::Error),
    /// The shared context was initialized twice.
    AlreadyInitialized,
    /// The shared context was read before it was initialized.
    NotInitialized,
}

impl Error {
    /// Returns true if the reason for the error was a proof failing verification.
    ///
    /// The verification methods return `Ok(false)` for proofs that do not
    /// verify, so this is only true for errors built by hand from a lower layer.
    pub const fn is_proof_invalid(&self) -> bool {
        matches!(
            self,
            Self::Verifier(VerifierError::FK20(
                kzg_multi_open::VerifierError::InvalidProof
            ))
        ) || matches!(self, Self::Blob(err) if err.is_proof_invalid())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Prover(ProverError::AllocationFailure { .. })
            | Self::Serialization(SerializationError::AllocationFailure { .. }) => {
                ErrorKind::AllocationFailure
            }
            Self::Recovery(RecoveryError::ReedSolomon(RSError::PolynomialHasInvalidLength {
                ..
            })) => ErrorKind::InternalError,
            Self::Blob(err) => err.kind(),
            Self::Prover(_)
            | Self::Verifier(_)
            | Self::Recovery(_)
            | Self::Serialization(_)
            | Self::AlreadyInitialized
            | Self::NotInitialized => ErrorKind::BadArguments,
        }
    }
}

impl From<ProverError> for Error {
    fn from(value: ProverError) -> Self {
        Self::Prover(value)
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<RecoveryError> for Error {
    fn from(value: RecoveryError) -> Self {
        Self::Recovery(value)
    }
}

impl From<RSError> for Error {
    fn from(value: RSError) -> Self {
        Self::Recovery(RecoveryError::ReedSolomon(value))
    }
}

impl From<blobs::Error> for Error {
    fn from(value: blobs::Error) -> Self {
        Self::Blob(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prover(err) => write!(f, "{err}"),
            Self::Verifier(err) => write!(f, "{err}"),
            Self::Recovery(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "{err}"),
            Self::Blob(err) => write!(f, "{err}"),
            Self::AlreadyInitialized => write!(f, "shared context is already initialized"),
            Self::NotInitialized => write!(f, "shared context has not been initialized"),
        }
    }
}

impl std::error::Error for Error {}

/// Errors from computing cells or reassembling a blob from them.
#[derive(Debug)]
pub enum ProverError {
    /// `cells_to_blob` needs every cell of the extended blob.
    NumCellsNotEqualToCellsPerExtBlob { num_cells: usize, expected: usize },
    /// The cells are not the extension of any blob: the polynomial they
    /// interpolate has too many coefficients.
    CellsDoNotEncodeABlob {
        num_coefficients: usize,
        max_num_coefficients: usize,
    },
    AllocationFailure { num_scalars: usize },
}

impl std::fmt::Display for ProverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumCellsNotEqualToCellsPerExtBlob {
                num_cells,
                expected,
            } => write!(f, "got {num_cells} cells, expected {expected}"),
            Self::CellsDoNotEncodeABlob {
                num_coefficients,
                max_num_coefficients,
            } => write!(
                f,
                "cells interpolate a polynomial with {num_coefficients} coefficients, at most {max_num_coefficients} are allowed"
            ),
            Self::AllocationFailure { num_scalars } => {
                write!(f, "could not allocate {num_scalars} scalars")
            }
        }
    }
}

/// Error type returned when data reconstruction via erasure coding fails.
#[derive(Debug)]
pub enum RecoveryError {
    NotEnoughCellsToReconstruct {
        num_cells_received: usize,
        min_cells_needed: usize,
    },
    NumCellIndicesNotEqualToNumCells {
        num_cell_indices: usize,
        num_cells: usize,
    },
    TooManyCellsReceived {
        num_cells_received: usize,
        max_cells_needed: usize,
    },
    CellIndexOutOfRange {
        cell_index: CellIndex,
        max_number_of_cells: u64,
    },
    DuplicateCellIndex {
        cell_index: CellIndex,
    },
    /// Failure in the underlying Reed-Solomon decoding.
    ReedSolomon(RSError),
}

impl From<RSError> for RecoveryError {
    fn from(value: RSError) -> Self {
        Self::ReedSolomon(value)
    }
}

impl std::fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughCellsToReconstruct {
                num_cells_received,
                min_cells_needed,
            } => write!(
                f,
                "got {num_cells_received} cells, need at least {min_cells_needed} to reconstruct"
            ),
            Self::NumCellIndicesNotEqualToNumCells {
                num_cell_indices,
                num_cells,
            } => write!(f, "got {num_cell_indices} cell indices for {num_cells} cells"),
            Self::TooManyCellsReceived {
                num_cells_received,
                max_cells_needed,
            } => write!(
                f,
                "got {num_cells_received} cells, an extended blob only has {max_cells_needed}"
            ),
            Self::CellIndexOutOfRange {
                cell_index,
                max_number_of_cells,
            } => write!(
                f,
                "cell index {cell_index} is out of range, there are {max_number_of_cells} cells"
            ),
            Self::DuplicateCellIndex { cell_index } => {
                write!(f, "cell index {cell_index} appears more than once")
            }
            Self::ReedSolomon(err) => write!(f, "{err}"),
        }
    }
}

/// Errors that can occur while calling a method in the Verifier API
#[derive(Debug)]
pub enum VerifierError {
    CellIndexOutOfRange {
        cell_index: CellIndex,
        max_number_of_cells: u64,
    },
    InvalidCommitmentIndex {
        commitment_index: u64,
        max_number_of_commitments: u64,
    },
    BatchVerificationInputsMustHaveSameLength {
        commitment_indices_len: usize,
        cell_indices_len: usize,
        cells_len: usize,
        proofs_len: usize,
    },
    /// Failure in the multi-opening verifier.
    FK20(kzg_multi_open::VerifierError),
}

impl From<kzg_multi_open::VerifierError> for VerifierError {
    fn from(value: kzg_multi_open::VerifierError) -> Self {
        Self::FK20(value)
    }
}

impl std::fmt::Display for VerifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CellIndexOutOfRange {
                cell_index,
                max_number_of_cells,
            } => write!(
                f,
                "cell index {cell_index} is out of range, there are {max_number_of_cells} cells"
            ),
            Self::InvalidCommitmentIndex {
                commitment_index,
                max_number_of_commitments,
            } => write!(
                f,
                "commitment index {commitment_index} is out of range, there are {max_number_of_commitments} commitments"
            ),
            Self::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len,
                cell_indices_len,
                cells_len,
                proofs_len,
            } => write!(
                f,
                "batch has {commitment_indices_len} commitment indices, {cell_indices_len} cell indices, \
                 {cells_len} cells and {proofs_len} proofs"
            ),
            Self::FK20(err) => write!(f, "{err}"),
        }
    }
}
