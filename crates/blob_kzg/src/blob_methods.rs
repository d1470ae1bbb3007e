use crate::{
    BlobRef, Bytes48Ref, Context, Error, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint,
    KZGProof,
};

// Blob proof methods, forwarded to the blob context.
impl Context {
    /// Commits to the polynomial whose evaluations are the blob.
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        self.blob_ctx
            .blob_to_kzg_commitment(blob)
            .map_err(Error::Blob)
    }

    /// Opens the blob's polynomial at `z`, returning the proof and `y = p(z)`.
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        self.blob_ctx
            .compute_kzg_proof(blob, z)
            .map_err(Error::Blob)
    }

    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
    ) -> Result<KZGProof, Error> {
        self.blob_ctx
            .compute_blob_kzg_proof(blob, commitment)
            .map_err(Error::Blob)
    }

    pub fn verify_kzg_proof(
        &self,
        commitment: Bytes48Ref,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: Bytes48Ref,
    ) -> Result<bool, Error> {
        self.blob_ctx
            .verify_kzg_proof(commitment, z, y, proof)
            .map_err(Error::Blob)
    }

    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: Bytes48Ref,
        proof: Bytes48Ref,
    ) -> Result<bool, Error> {
        self.blob_ctx
            .verify_blob_kzg_proof(blob, commitment, proof)
            .map_err(Error::Blob)
    }

    /// Checks many blob proofs at once. An empty batch is valid.
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[Bytes48Ref],
        proofs: &[Bytes48Ref],
    ) -> Result<bool, Error> {
        self.blob_ctx
            .verify_blob_kzg_proof_batch(blobs, commitments, proofs)
            .map_err(Error::Blob)
    }
}
