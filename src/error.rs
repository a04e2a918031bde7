use thiserror::Error;

use crate::InstructionSet;

/// Errors surfaced by engine selection. Array operations themselves are
/// infallible; NaN and infinity are values, not errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The requested tag is not compiled for this target architecture.
    #[error("instruction set `{0}` is not available on this target")]
    UnsupportedInstructionSet(InstructionSet),

    /// The target has no runtime CPU feature identification mechanism.
    #[error("CPU feature detection is not supported on this target")]
    FeatureDetectionUnavailable,
}
