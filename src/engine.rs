//! The uniform array-operation interface.

use crate::apply::{apply_pairwise, apply_scalar, apply_unary, PairOp, ScalarOp, UnaryOp};
use crate::kernels::{chain_for, IsaTables};
use crate::InstructionSet;

/// An immutable handle bound to one instruction set and its fallback chain.
///
/// Every method mutates the caller's slice in place and handles any length,
/// including zero; remainders shorter than the widest register fall through
/// to narrower tags, ending at Scalar. Double-precision methods carry the
/// plain name, single-precision ones the `f` suffix.
///
/// Engines are cheap to copy and hold no mutable state, so one handle can be
/// shared freely across threads.
#[derive(Clone, Copy)]
pub struct ArrayEngine {
    isa: InstructionSet,
    chain: &'static [&'static IsaTables],
}

impl std::fmt::Debug for ArrayEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayEngine")
            .field("isa", &self.isa)
            .finish_non_exhaustive()
    }
}

macro_rules! unary_op_method {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $op:ident) => {
        $(#[$doc])*
        pub fn $name(&self, a: &mut [$ty]) {
            apply_unary(self.chain, UnaryOp::$op, a);
        }
    };
}

macro_rules! scalar_op_method {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $op:ident) => {
        $(#[$doc])*
        pub fn $name(&self, a: &mut [$ty], c: $ty) {
            apply_scalar(self.chain, ScalarOp::$op, a, c);
        }
    };
}

macro_rules! pairwise_op_method {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $op:ident) => {
        $(#[$doc])*
        /// Panics if the slices differ in length.
        pub fn $name(&self, a: &mut [$ty], b: &[$ty]) {
            apply_pairwise(self.chain, PairOp::$op, a, b);
        }
    };
}

impl ArrayEngine {
    pub(crate) fn new(isa: InstructionSet) -> Self {
        ArrayEngine {
            isa,
            chain: chain_for(isa),
        }
    }

    /// The tag this engine leads with.
    pub fn instruction_set(&self) -> InstructionSet {
        self.isa
    }

    // --- f64 ---

    unary_op_method!(
        /// erf(x), elementwise in place.
        erf, f64, Erf
    );
    unary_op_method!(
        /// e^x, elementwise in place.
        exp, f64, Exp
    );
    unary_op_method!(
        /// tanh(x), elementwise in place.
        tanh, f64, Tanh
    );
    unary_op_method!(
        /// -x, elementwise in place.
        neg, f64, Neg
    );
    unary_op_method!(
        /// 1/x, elementwise in place.
        recip, f64, Recip
    );
    unary_op_method!(
        /// Standard normal CDF Φ(x), elementwise in place.
        normal_cdf, f64, NormalCdf
    );
    unary_op_method!(
        /// Standard normal PDF φ(x), elementwise in place.
        normal_pdf, f64, NormalPdf
    );
    unary_op_method!(
        /// Logistic CDF (sigmoid) σ(x), elementwise in place.
        logistic_cdf, f64, LogisticCdf
    );
    unary_op_method!(
        /// Logistic PDF σ(x)(1 − σ(x)), elementwise in place.
        logistic_pdf, f64, LogisticPdf
    );
    unary_op_method!(
        /// GELU x·Φ(x), elementwise in place.
        gelu, f64, Gelu
    );
    unary_op_method!(
        /// GELU derivative Φ(x) + x·φ(x), elementwise in place.
        gelu_backward, f64, GeluBackward
    );
    unary_op_method!(
        /// Swish x·σ(x), elementwise in place.
        swish, f64, Swish
    );
    unary_op_method!(
        /// Swish derivative σ(x) + x·σ(x)(1 − σ(x)), elementwise in place.
        swish_backward, f64, SwishBackward
    );

    scalar_op_method!(
        /// x + c, elementwise in place.
        add_scalar, f64, AddScalar
    );
    scalar_op_method!(
        /// x · c, elementwise in place.
        mul_scalar, f64, MulScalar
    );

    pairwise_op_method!(
        /// a[i] + b[i], into `a`.
        add, f64, Add
    );
    pairwise_op_method!(
        /// a[i] · b[i], into `a`.
        mul, f64, Mul
    );
    pairwise_op_method!(
        /// a[i] / b[i], into `a`.
        div, f64, Div
    );

    // --- f32 ---

    unary_op_method!(
        /// erf(x), elementwise in place.
        erff, f32, Erf
    );
    unary_op_method!(
        /// e^x, elementwise in place.
        expf, f32, Exp
    );
    unary_op_method!(
        /// tanh(x), elementwise in place.
        tanhf, f32, Tanh
    );
    unary_op_method!(
        /// -x, elementwise in place.
        negf, f32, Neg
    );
    unary_op_method!(
        /// 1/x, elementwise in place.
        recipf, f32, Recip
    );
    unary_op_method!(
        /// Standard normal CDF Φ(x), elementwise in place.
        normal_cdff, f32, NormalCdf
    );
    unary_op_method!(
        /// Standard normal PDF φ(x), elementwise in place.
        normal_pdff, f32, NormalPdf
    );
    unary_op_method!(
        /// Logistic CDF (sigmoid) σ(x), elementwise in place.
        logistic_cdff, f32, LogisticCdf
    );
    unary_op_method!(
        /// Logistic PDF σ(x)(1 − σ(x)), elementwise in place.
        logistic_pdff, f32, LogisticPdf
    );
    unary_op_method!(
        /// GELU x·Φ(x), elementwise in place.
        geluf, f32, Gelu
    );
    unary_op_method!(
        /// GELU derivative Φ(x) + x·φ(x), elementwise in place.
        geluf_backward, f32, GeluBackward
    );
    unary_op_method!(
        /// Swish x·σ(x), elementwise in place.
        swishf, f32, Swish
    );
    unary_op_method!(
        /// Swish derivative σ(x) + x·σ(x)(1 − σ(x)), elementwise in place.
        swishf_backward, f32, SwishBackward
    );

    scalar_op_method!(
        /// x + c, elementwise in place.
        addf_scalar, f32, AddScalar
    );
    scalar_op_method!(
        /// x · c, elementwise in place.
        mulf_scalar, f32, MulScalar
    );

    pairwise_op_method!(
        /// a[i] + b[i], into `a`.
        addf, f32, Add
    );
    pairwise_op_method!(
        /// a[i] · b[i], into `a`.
        mulf, f32, Mul
    );
    pairwise_op_method!(
        /// a[i] / b[i], into `a`.
        divf, f32, Div
    );
}
