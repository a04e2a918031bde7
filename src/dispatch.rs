//! Runtime engine selection.

use std::collections::BTreeSet;

use crate::kernels::tables_for;
use crate::{ArrayEngine, InstructionSet, KernelError};

/// Instruction sets the running CPU supports, in rank order.
/// `Scalar` is always a member on targets with feature detection.
pub fn supported_instruction_sets() -> Result<BTreeSet<InstructionSet>, KernelError> {
    InstructionSet::detect()
}

/// Engine for the highest-ranked instruction set the CPU supports.
///
/// Detection failures surface here rather than silently downgrading.
pub fn select_engine() -> Result<ArrayEngine, KernelError> {
    let sets = InstructionSet::detect()?;
    let best = sets.into_iter().max().unwrap_or(InstructionSet::Scalar);
    log::debug!("selected instruction set `{best}`");
    Ok(ArrayEngine::new(best))
}

/// Engine for an explicitly chosen tag, bypassing detection.
///
/// Errors if the tag is not compiled for this target at all. A tag the
/// target compiles but the CPU lacks is accepted; running such an engine on
/// non-Scalar data is the caller's responsibility (useful for forcing a
/// narrower tag in tests and comparisons).
pub fn select_engine_for(isa: InstructionSet) -> Result<ArrayEngine, KernelError> {
    if tables_for(isa).is_none() {
        return Err(KernelError::UnsupportedInstructionSet(isa));
    }
    log::debug!("selected instruction set `{isa}` (explicit)");
    Ok(ArrayEngine::new(isa))
}
