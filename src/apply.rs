//! Width-reducing applicators.
//!
//! An operation runs over the engine's fallback chain, widest tag first:
//! the slice is split at the largest lane multiple, the tag's chunk kernel
//! handles the head, and the remainder is handed to the next (narrower)
//! tag. Scalar has one lane, so the walk always ends with nothing left.
//! No kernel ever loads or stores past the end of the caller's slice.

use crate::kernels::{IsaTables, PairKernel, ScalarKernel, UnaryKernel};

/// Unary operations, in dispatch-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    Erf,
    Exp,
    Tanh,
    Neg,
    Recip,
    NormalCdf,
    NormalPdf,
    LogisticCdf,
    LogisticPdf,
    Gelu,
    GeluBackward,
    Swish,
    SwishBackward,
}

/// Array-op-scalar operations, in dispatch-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarOp {
    AddScalar,
    MulScalar,
}

/// Pairwise operations, in dispatch-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PairOp {
    Add,
    Mul,
    Div,
}

/// Selects the element-typed column of an [`IsaTables`].
pub(crate) trait Element: Copy {
    fn lanes(tables: &IsaTables) -> usize;
    fn unary(tables: &IsaTables, op: UnaryOp) -> UnaryKernel<Self>;
    fn scalar(tables: &IsaTables, op: ScalarOp) -> ScalarKernel<Self>;
    fn pair(tables: &IsaTables, op: PairOp) -> PairKernel<Self>;
}

impl Element for f32 {
    fn lanes(tables: &IsaTables) -> usize {
        tables.f32_lanes
    }
    fn unary(tables: &IsaTables, op: UnaryOp) -> UnaryKernel<f32> {
        tables.unary_f32[op as usize]
    }
    fn scalar(tables: &IsaTables, op: ScalarOp) -> ScalarKernel<f32> {
        tables.scalar_f32[op as usize]
    }
    fn pair(tables: &IsaTables, op: PairOp) -> PairKernel<f32> {
        tables.pair_f32[op as usize]
    }
}

impl Element for f64 {
    fn lanes(tables: &IsaTables) -> usize {
        tables.f64_lanes
    }
    fn unary(tables: &IsaTables, op: UnaryOp) -> UnaryKernel<f64> {
        tables.unary_f64[op as usize]
    }
    fn scalar(tables: &IsaTables, op: ScalarOp) -> ScalarKernel<f64> {
        tables.scalar_f64[op as usize]
    }
    fn pair(tables: &IsaTables, op: PairOp) -> PairKernel<f64> {
        tables.pair_f64[op as usize]
    }
}

pub(crate) fn apply_unary<E: Element>(
    chain: &[&'static IsaTables],
    op: UnaryOp,
    a: &mut [E],
) {
    let mut rest = a;
    for tables in chain {
        let lanes = E::lanes(tables);
        let split = rest.len() - rest.len() % lanes;
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(split);
        if !head.is_empty() {
            // SAFETY: the engine only holds tags the target compiles and the
            // caller selected; head.len() is an exact lane multiple and the
            // pointer covers head.len() elements.
            unsafe { E::unary(tables, op)(head.as_mut_ptr(), head.len()) };
        }
        rest = tail;
        if rest.is_empty() {
            break;
        }
    }
    debug_assert!(rest.is_empty());
}

pub(crate) fn apply_scalar<E: Element>(
    chain: &[&'static IsaTables],
    op: ScalarOp,
    a: &mut [E],
    c: E,
) {
    let mut rest = a;
    for tables in chain {
        let lanes = E::lanes(tables);
        let split = rest.len() - rest.len() % lanes;
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(split);
        if !head.is_empty() {
            // SAFETY: as in apply_unary.
            unsafe { E::scalar(tables, op)(head.as_mut_ptr(), head.len(), c) };
        }
        rest = tail;
        if rest.is_empty() {
            break;
        }
    }
    debug_assert!(rest.is_empty());
}

/// Pairwise walk; both slices advance in lockstep and must be equal length.
pub(crate) fn apply_pairwise<E: Element>(
    chain: &[&'static IsaTables],
    op: PairOp,
    a: &mut [E],
    b: &[E],
) {
    assert_eq!(a.len(), b.len(), "pairwise operands must have equal length");
    let mut rest = a;
    let mut rest_b = b;
    for tables in chain {
        let lanes = E::lanes(tables);
        let split = rest.len() - rest.len() % lanes;
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(split);
        let (head_b, tail_b) = rest_b.split_at(split);
        if !head.is_empty() {
            // SAFETY: as in apply_unary; both heads have the same length.
            unsafe { E::pair(tables, op)(head.as_mut_ptr(), head_b.as_ptr(), head.len()) };
        }
        rest = tail;
        rest_b = tail_b;
        if rest.is_empty() {
            break;
        }
    }
    debug_assert!(rest.is_empty());
}
