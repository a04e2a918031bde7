//! Instruction-set tags and runtime CPU feature probing.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::KernelError;

/// Closed set of instruction-set tags the crate can dispatch to.
///
/// The derived `Ord` is the capability rank used for selection: `Scalar` is
/// the minimum on every target and wider tags compare greater. `Neon` never
/// coexists with the x86 tags, so only the x86 prefix order and the
/// Scalar/Neon order are ever compared at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstructionSet {
    Scalar,
    Sse2,
    Avx2,
    Avx512,
    Neon,
}

impl InstructionSet {
    pub fn name(self) -> &'static str {
        match self {
            InstructionSet::Scalar => "scalar",
            InstructionSet::Sse2 => "sse2",
            InstructionSet::Avx2 => "avx2",
            InstructionSet::Avx512 => "avx512",
            InstructionSet::Neon => "neon",
        }
    }

    /// Tags the running CPU supports. `Scalar` is always a member.
    ///
    /// The `Avx2` tag requires both avx2 and fma, since its kernels use
    /// fused multiply-add unconditionally. Targets with no feature
    /// detection mechanism report an error instead of guessing.
    pub(crate) fn detect() -> Result<BTreeSet<InstructionSet>, KernelError> {
        #[cfg(target_arch = "x86_64")]
        {
            let mut sets = BTreeSet::from([InstructionSet::Scalar]);
            if std::arch::is_x86_feature_detected!("sse2") {
                sets.insert(InstructionSet::Sse2);
            }
            if std::arch::is_x86_feature_detected!("avx2")
                && std::arch::is_x86_feature_detected!("fma")
            {
                sets.insert(InstructionSet::Avx2);
            }
            if std::arch::is_x86_feature_detected!("avx512f") {
                sets.insert(InstructionSet::Avx512);
            }
            Ok(sets)
        }
        #[cfg(target_arch = "aarch64")]
        {
            // NEON is part of the aarch64 baseline.
            Ok(BTreeSet::from([InstructionSet::Scalar, InstructionSet::Neon]))
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Err(KernelError::FeatureDetectionUnavailable)
        }
    }
}

impl fmt::Display for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
