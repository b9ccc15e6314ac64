//! Mirror pass error types.

use mirror_core::MirrorError;
use thiserror::Error;

/// Errors that abort a mirror pass.
///
/// All of these are host contract breaches; normal conditions such as a
/// mirror facing away are reported as skipped passes instead.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The host reports stereo presentation but exposes no stereo rig.
    #[error("stereo presentation is active but the host exposes no stereo rig")]
    MissingStereoRig,

    /// An eye camera was passed to the hook while stereo presentation is inactive.
    #[error("viewer is eye {0} but stereo presentation is not active")]
    EyeWithoutStereo(usize),

    /// Mirror math failed.
    #[error(transparent)]
    Mirror(#[from] MirrorError),
}

/// A specialized Result type for mirror passes.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
