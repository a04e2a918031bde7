//! Per-ISA kernel modules and their static dispatch tables.
//!
//! Each submodule instantiates the math templates and `expand_isa_kernels!`
//! for one instruction set, and exposes a single `TABLES` static. Dispatch is
//! a table lookup; no trait objects and no per-call feature checks.

use crate::InstructionSet;

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod avx2;
#[cfg(target_arch = "x86_64")]
pub mod avx512;
#[cfg(target_arch = "x86_64")]
pub mod sse2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

/// In-place unary chunk kernel over `n` elements (`n` a lane multiple).
pub type UnaryKernel<T> = unsafe fn(*mut T, usize);
/// In-place array-op-scalar chunk kernel.
pub type ScalarKernel<T> = unsafe fn(*mut T, usize, T);
/// In-place pairwise chunk kernel; result overwrites the first array.
pub type PairKernel<T> = unsafe fn(*mut T, *const T, usize);

pub const UNARY_OPS: usize = 13;
pub const SCALAR_OPS: usize = 2;
pub const PAIR_OPS: usize = 3;

/// The capability descriptor for one instruction set: its lane widths plus
/// the full chunk-kernel table, indexed by the op enums in [`crate::apply`].
///
/// # Safety
/// Calling any kernel in a table is sound only if the CPU supports
/// `isa` and the pointers are valid for the given element count.
pub struct IsaTables {
    pub isa: InstructionSet,
    pub f32_lanes: usize,
    pub f64_lanes: usize,
    pub unary_f32: [UnaryKernel<f32>; UNARY_OPS],
    pub unary_f64: [UnaryKernel<f64>; UNARY_OPS],
    pub scalar_f32: [ScalarKernel<f32>; SCALAR_OPS],
    pub scalar_f64: [ScalarKernel<f64>; SCALAR_OPS],
    pub pair_f32: [PairKernel<f32>; PAIR_OPS],
    pub pair_f64: [PairKernel<f64>; PAIR_OPS],
}

/// Dispatch table for an instruction set, or `None` if it is not compiled
/// for this target.
pub fn tables_for(isa: InstructionSet) -> Option<&'static IsaTables> {
    match isa {
        InstructionSet::Scalar => Some(&scalar::TABLES),
        #[cfg(target_arch = "x86_64")]
        InstructionSet::Sse2 => Some(&sse2::TABLES),
        #[cfg(target_arch = "x86_64")]
        InstructionSet::Avx2 => Some(&avx2::TABLES),
        #[cfg(target_arch = "x86_64")]
        InstructionSet::Avx512 => Some(&avx512::TABLES),
        #[cfg(target_arch = "aarch64")]
        InstructionSet::Neon => Some(&neon::TABLES),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Fallback chain starting at `isa`: the tag itself, then every narrower
/// tag down to Scalar. Scalar (one lane) makes the final remainder empty,
/// so walking a chain always terminates with the whole array processed.
pub fn chain_for(isa: InstructionSet) -> &'static [&'static IsaTables] {
    #[cfg(target_arch = "x86_64")]
    {
        static AVX512: [&IsaTables; 4] =
            [&avx512::TABLES, &avx2::TABLES, &sse2::TABLES, &scalar::TABLES];
        static AVX2: [&IsaTables; 3] = [&avx2::TABLES, &sse2::TABLES, &scalar::TABLES];
        static SSE2: [&IsaTables; 2] = [&sse2::TABLES, &scalar::TABLES];
        static SCALAR: [&IsaTables; 1] = [&scalar::TABLES];
        match isa {
            InstructionSet::Avx512 => &AVX512,
            InstructionSet::Avx2 => &AVX2,
            InstructionSet::Sse2 => &SSE2,
            _ => &SCALAR,
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        static NEON: [&IsaTables; 2] = [&neon::TABLES, &scalar::TABLES];
        static SCALAR: [&IsaTables; 1] = [&scalar::TABLES];
        match isa {
            InstructionSet::Neon => &NEON,
            _ => &SCALAR,
        }
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        static SCALAR: [&IsaTables; 1] = [&scalar::TABLES];
        let _ = isa;
        &SCALAR
    }
}
