/// Composite elementwise formulas, defined once and instantiated per
/// (ISA, element type).
///
/// Every function here is register-in/register-out and single-pass: the
/// backward formulas derive both the CDF and PDF factors from the one input
/// register instead of staging whole-array intermediates.
#[macro_export]
macro_rules! define_composite_formulas {
    ($isa:ident, $elem:ident) => {
        /// Standard normal CDF: Φ(x) = 0.5 * (1 + erf(x / √2)).
        #[inline(always)]
        pub unsafe fn normal_cdf(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);
            let half = $crate::simd_primitive!($isa, $elem, splat, 0.5);
            let e = $crate::simd_primitive!($isa, $elem, erf,
                $crate::simd_primitive!($isa, $elem, mul, x,
                    $crate::simd_primitive!($isa, $elem, splat, std::$elem::consts::FRAC_1_SQRT_2)));
            $crate::simd_primitive!($isa, $elem, mul, half,
                $crate::simd_primitive!($isa, $elem, add, e, one))
        }

        /// Standard normal PDF: φ(x) = exp(-x²/2) / √2π.
        #[inline(always)]
        pub unsafe fn normal_pdf(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let e = $crate::simd_primitive!($isa, $elem, exp,
                $crate::simd_primitive!($isa, $elem, mul,
                    $crate::simd_primitive!($isa, $elem, mul, x, x),
                    $crate::simd_primitive!($isa, $elem, splat, -0.5)));
            $crate::simd_primitive!($isa, $elem, mul, e,
                $crate::simd_primitive!($isa, $elem, splat, 0.398_942_280_401_432_7))
        }

        /// Logistic CDF (sigmoid): σ(x) = 1 / (1 + exp(-x)).
        #[inline(always)]
        pub unsafe fn logistic_cdf(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);
            let e = $crate::simd_primitive!($isa, $elem, exp,
                $crate::simd_primitive!($isa, $elem, neg, x));
            $crate::simd_primitive!($isa, $elem, recip,
                $crate::simd_primitive!($isa, $elem, add, e, one))
        }

        /// Logistic PDF: σ(x) * (1 - σ(x)).
        #[inline(always)]
        pub unsafe fn logistic_pdf(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);
            let s = logistic_cdf(x);
            $crate::simd_primitive!($isa, $elem, mul, s,
                $crate::simd_primitive!($isa, $elem, sub, one, s))
        }

        /// GELU: x * Φ(x).
        #[inline(always)]
        pub unsafe fn gelu(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            $crate::simd_primitive!($isa, $elem, mul, x, normal_cdf(x))
        }

        /// GELU derivative: Φ(x) + x * φ(x), fused from one load of x.
        #[inline(always)]
        pub unsafe fn gelu_backward(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            $crate::simd_primitive!($isa, $elem, fma, x, normal_pdf(x), normal_cdf(x))
        }

        /// Swish (SiLU): x * σ(x).
        #[inline(always)]
        pub unsafe fn swish(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            $crate::simd_primitive!($isa, $elem, mul, x, logistic_cdf(x))
        }

        /// Swish derivative: σ(x) + x * σ(x)(1 - σ(x)), fused from one load.
        #[inline(always)]
        pub unsafe fn swish_backward(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);
            let s = logistic_cdf(x);
            let ds = $crate::simd_primitive!($isa, $elem, mul, s,
                $crate::simd_primitive!($isa, $elem, sub, one, s));
            $crate::simd_primitive!($isa, $elem, fma, x, ds, s)
        }
    };
}
