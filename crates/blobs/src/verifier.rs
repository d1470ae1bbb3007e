use bls12_381::Scalar;
use maybe_rayon::prelude::*;
use polynomial::reverse_bit_order;
use serialization::{
    deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
};

use crate::{
    fiat_shamir::{compute_fiat_shamir_challenge, compute_r_powers_for_verify_kzg_proof_batch},
    BlobRef, Bytes48Ref, Context, Error, KZGOpeningEvaluation, KZGOpeningPoint, VerifierError,
};

/// A failed pairing check is a valid answer, not an error.
fn proof_validity(result: Result<(), VerifierError>) -> Result<bool, Error> {
    match result {
        Ok(()) => Ok(true),
        Err(VerifierError::InvalidProof) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

impl Context {
    /// Checks that `proof` shows the committed polynomial evaluates to `y` at `z`.
    pub fn verify_kzg_proof(
        &self,
        commitment: Bytes48Ref,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: Bytes48Ref,
    ) -> Result<bool, Error> {
        let commitment = deserialize_compressed_g1(commitment)?;
        let proof = deserialize_compressed_g1(proof)?;
        let z = deserialize_bytes_to_scalar(&z)?;
        let y = deserialize_bytes_to_scalar(&y)?;

        proof_validity(self.verifier.verify_kzg_proof(commitment, z, y, proof))
    }

    /// Checks a proof made by [`Context::compute_blob_kzg_proof`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
        proof: Bytes48Ref,
    ) -> Result<bool, Error> {
        let mut evaluations = deserialize_blob_to_scalars(blob)?;
        let commitment_g1 = deserialize_compressed_g1(commitment)?;
        let proof = deserialize_compressed_g1(proof)?;
        reverse_bit_order(&mut evaluations);

        let z = compute_fiat_shamir_challenge(blob, commitment, self.verifier.domain.size());
        let y = self.verifier.evaluate(&evaluations, z);

        proof_validity(self.verifier.verify_kzg_proof(commitment_g1, z, y, proof))
    }

    /// Checks many blob proofs with a single pairing check.
    ///
    /// An empty batch is valid.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[Bytes48Ref],
        proofs: &[Bytes48Ref],
    ) -> Result<bool, Error> {
        let same_length = (blobs.len() == commitments.len()) & (blobs.len() == proofs.len());
        if !same_length {
            return Err(Error::BatchVerificationInputsMustHaveSameLength {
                blobs_len: blobs.len(),
                commitments_len: commitments.len(),
                proofs_len: proofs.len(),
            });
        }

        match blobs.len() {
            0 => return Ok(true),
            1 => return self.verify_blob_kzg_proof(blobs[0], commitments[0], proofs[0]),
            _ => {}
        }

        let polynomials = blobs
            .iter()
            .map(|blob| -> Result<Vec<Scalar>, Error> {
                let mut evaluations = deserialize_blob_to_scalars(*blob)?;
                reverse_bit_order(&mut evaluations);
                Ok(evaluations)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let commitments_g1 = commitments
            .iter()
            .map(|commitment| deserialize_compressed_g1(*commitment))
            .collect::<Result<Vec<_>, _>>()?;
        let proofs_g1 = proofs
            .iter()
            .map(|proof| deserialize_compressed_g1(*proof))
            .collect::<Result<Vec<_>, _>>()?;

        let domain_size = self.verifier.domain.size();

        let openings: Vec<(Scalar, Scalar)> = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("evaluate blobs").entered();
            (0..blobs.len())
                .maybe_into_par_iter()
                .map(|i| {
                    let z = compute_fiat_shamir_challenge(blobs[i], commitments[i], domain_size);
                    let y = self.verifier.evaluate(&polynomials[i], z);
                    (z, y)
                })
                .collect()
        };
        let (zs, ys): (Vec<_>, Vec<_>) = openings.into_iter().unzip();

        let r_powers =
            compute_r_powers_for_verify_kzg_proof_batch(domain_size, commitments, &zs, &ys, proofs);

        proof_validity(self.verifier.verify_kzg_proof_batch(
            &commitments_g1,
            &zs,
            &ys,
            &proofs_g1,
            &r_powers,
        ))
    }
}
