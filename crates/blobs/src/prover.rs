use polynomial::reverse_bit_order;
use serialization::{
    deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
    serialize_g1_compressed,
};

use crate::{
    fiat_shamir::compute_fiat_shamir_challenge, BlobRef, Bytes48Ref, Context, Error,
    KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

impl Context {
    /// Commits to the polynomial whose evaluations are the blob.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        let mut evaluations = deserialize_blob_to_scalars(blob)?;
        reverse_bit_order(&mut evaluations);

        let commitment = self.prover.commit(&evaluations);

        Ok(serialize_g1_compressed(&commitment))
    }

    /// Opens the blob's polynomial at `z`, returning the proof and `y = p(z)`.
    ///
    /// `z` may be any scalar, including a point of the evaluation domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        let mut evaluations = deserialize_blob_to_scalars(blob)?;
        let z = deserialize_bytes_to_scalar(&z)?;
        reverse_bit_order(&mut evaluations);

        let (proof, y) = self.prover.compute_kzg_proof(&evaluations, z);

        Ok((serialize_g1_compressed(&proof), y.to_bytes_be()))
    }

    /// Opens the blob at the challenge derived from the blob and its commitment.
    ///
    /// The commitment is checked to be a valid point, not that it commits to
    /// this blob.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
    ) -> Result<KZGProof, Error> {
        let mut evaluations = deserialize_blob_to_scalars(blob)?;
        let _ = deserialize_compressed_g1(commitment)?;
        reverse_bit_order(&mut evaluations);

        let z = compute_fiat_shamir_challenge(blob, commitment, self.prover.domain.size());

        let (proof, _) = self.prover.compute_kzg_proof(&evaluations, z);

        Ok(serialize_g1_compressed(&proof))
    }
}
