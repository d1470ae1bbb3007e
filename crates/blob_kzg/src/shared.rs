use std::sync::OnceLock;

use bls12_381::fixed_base_msm::UsePrecomp;

use crate::{Context, Error, TrustedSetup};

static SHARED_CONTEXT: OnceLock<Context> = OnceLock::new();

/// A process-wide [`Context`], built once and then borrowed for the
/// lifetime of the program.
///
/// Building a context is expensive; callers that only ever use one trusted
/// setup can initialize it at startup and fetch it with [`SharedContext::get`].
#[derive(Debug, Clone, Copy)]
pub struct SharedContext;

impl SharedContext {
    /// Builds the shared context without precomputed tables.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if a context was already built.
    pub fn initialize(trusted_setup: &TrustedSetup) -> Result<&'static Context, Error> {
        Self::initialize_with_precomp(trusted_setup, UsePrecomp::No)
    }

    /// Builds the shared context, letting the caller choose the prover's
    /// precomputation.
    pub fn initialize_with_precomp(
        trusted_setup: &TrustedSetup,
        use_precomp: UsePrecomp,
    ) -> Result<&'static Context, Error> {
        let mut built_here = false;
        let context = SHARED_CONTEXT.get_or_init(|| {
            built_here = true;
            Context::new(trusted_setup, use_precomp)
        });

        if built_here {
            Ok(context)
        } else {
            Err(Error::AlreadyInitialized)
        }
    }

    /// Returns the shared context, or [`Error::NotInitialized`] before any
    /// call to `initialize`.
    pub fn get() -> Result<&'static Context, Error> {
        SHARED_CONTEXT.get().ok_or(Error::NotInitialized)
    }
}
