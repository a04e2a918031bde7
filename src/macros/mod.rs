//! Macro system for simd-math-kernels.
//!
//! Follows a strict 3-layer architecture:
//! 1. simd_primitive! (hardware primitives, per ISA x element)
//! 2. math_templates! / formula_templates! (transcendental and composite
//!    formula bodies, written once)
//! 3. expand_isa_kernels! (per-ISA chunk-kernel and dispatch-table expansion)

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod math_templates;
#[macro_use]
pub mod formula_templates;
#[macro_use]
pub mod expand;
