//! simd-math-kernels: runtime-dispatched SIMD kernels for elementwise
//! transcendental math.
//!
//! The crate applies erf, exp, tanh and composite formulas built from them
//! (normal/logistic CDF and PDF, GELU, swish, and their derivatives) to
//! slices in place, with:
//! - **Runtime ISA selection**: the dispatcher probes the CPU once and hands
//!   back an engine bound to the widest supported instruction set
//! - **Width-reducing remainders**: lengths that are not a lane multiple
//!   fall through to narrower instruction sets, ending at a scalar kernel,
//!   so any length works and no load touches memory past the slice
//! - **One formula, every ISA**: polynomial and formula bodies are written
//!   once as macro templates and instantiated per instruction set
//!
//! # Quick Start
//!
//! ```
//! let engine = simd_math_kernels::select_engine()?;
//!
//! let mut a = vec![-1.0_f32, 0.0, 1.0, 2.0];
//! engine.geluf(&mut a);
//! # Ok::<(), simd_math_kernels::KernelError>(())
//! ```

#[macro_use]
pub mod macros;

pub mod kernels;

mod apply;
mod dispatch;
mod engine;
mod error;
mod isa;

pub use dispatch::{select_engine, select_engine_for, supported_instruction_sets};
pub use engine::ArrayEngine;
pub use error::KernelError;
pub use isa::InstructionSet;

#[cfg(test)]
mod tests;
