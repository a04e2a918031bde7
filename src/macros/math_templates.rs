/// Unified transcendental-function templates over the simd_primitive! layer.
///
/// Each macro emits one polynomial body per (function, precision); the per-ISA
/// kernel modules instantiate them, so every ISA evaluates the identical
/// polynomial and the only difference is the underlying intrinsics.

/// Generates the body of a Cephes-style exp(x) approximation for f32 vectors.
///
/// Algorithm: clamp → t = x * log2e → k = round(t) → Cody-Waite range
/// reduction → degree-5 Horner polynomial → multiply by 2^k (IEEE-754
/// exponent construction, via the `pow2` primitive).
///
/// Usage:
/// ```ignore
/// define_exp_f32!(avx2);   // generates exp_f32 for __m256
/// define_exp_f32!(neon);   // generates exp_f32 for float32x4_t
/// ```
#[macro_export]
macro_rules! define_exp_f32 {
    ($isa:ident) => {
        /// Fast vectorized exp(x) for f32 vectors.
        /// Cephes-style degree-5 polynomial with Cody-Waite range reduction.
        /// Input clamped to [-88.376, 88.376] to avoid NaN/Inf; NaN lanes
        /// propagate to the output.
        #[inline(always)]
        pub unsafe fn exp_f32(x: $crate::simd_vec_ty!($isa, f32)) -> $crate::simd_vec_ty!($isa, f32) {
            // The clamp absorbs NaN lanes (min/max pick the finite bound),
            // so keep the raw input to reinsert them at the end.
            let raw = x;

            // Clamp input to avoid overflow/underflow in 2^k computation
            let x = $crate::simd_primitive!($isa, f32, min,
                $crate::simd_primitive!($isa, f32, max, x,
                    $crate::simd_primitive!($isa, f32, splat, -88.376_f32)),
                $crate::simd_primitive!($isa, f32, splat, 88.376_f32));

            let v_log2e = $crate::simd_primitive!($isa, f32, splat, 1.442_695_04_f32);

            // Cody-Waite range reduction: ln2 = c1 + c2 (c1 exact in float)
            let c1 = $crate::simd_primitive!($isa, f32, splat, -0.693_359_375_f32);
            let c2 = $crate::simd_primitive!($isa, f32, splat, 2.121_944_4e-4_f32);

            // k = round(x * log2e)
            let k = $crate::simd_primitive!($isa, f32, round_nearest,
                $crate::simd_primitive!($isa, f32, mul, x, v_log2e));

            // y = x - k*ln2 (two-step for precision)
            let mut y = $crate::simd_primitive!($isa, f32, fma, k, c1, x);
            y = $crate::simd_primitive!($isa, f32, fma, k, c2, y);

            // Degree-5 minimax polynomial (Horner's method)
            let p0 = $crate::simd_primitive!($isa, f32, splat, 1.987_569_15E-4_f32);
            let p1 = $crate::simd_primitive!($isa, f32, splat, 1.398_199_950_7E-3_f32);
            let p2 = $crate::simd_primitive!($isa, f32, splat, 8.333_451_907_3E-3_f32);
            let p3 = $crate::simd_primitive!($isa, f32, splat, 4.166_579_589_4E-2_f32);
            let p4 = $crate::simd_primitive!($isa, f32, splat, 1.666_666_545_9E-1_f32);
            let p5 = $crate::simd_primitive!($isa, f32, splat, 5.000_000_120_1E-1_f32);
            let one = $crate::simd_primitive!($isa, f32, splat, 1.0_f32);

            let mut p = p0;
            p = $crate::simd_primitive!($isa, f32, fma, p, y, p1);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, p2);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, p3);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, p4);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, p5);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, one);
            p = $crate::simd_primitive!($isa, f32, fma, p, y, one);

            // 2^k via IEEE-754 exponent manipulation
            let fact = $crate::simd_primitive!($isa, f32, pow2, k);
            let r = $crate::simd_primitive!($isa, f32, mul, p, fact);
            $crate::simd_primitive!($isa, f32, propagate_nan, r, raw)
        }
    };
}

/// Generates the body of a Cephes-style exp(x) approximation for f64 vectors.
///
/// Same structure as the f32 variant but with the double-precision rational
/// approximation exp(y) ≈ 1 + 2*px/(q - px) over the reduced argument.
#[macro_export]
macro_rules! define_exp_f64 {
    ($isa:ident) => {
        /// Fast vectorized exp(x) for f64 vectors.
        /// Cephes-style rational approximation with Cody-Waite range reduction.
        /// Input clamped to [-708.396, 708.396] to avoid NaN/Inf; NaN lanes
        /// propagate to the output.
        #[inline(always)]
        pub unsafe fn exp_f64(x: $crate::simd_vec_ty!($isa, f64)) -> $crate::simd_vec_ty!($isa, f64) {
            let raw = x;

            // The upper bound keeps k = round(x*log2e) at most 1022; anything
            // higher would build an all-ones exponent field (Inf) in pow2.
            let x = $crate::simd_primitive!($isa, f64, min,
                $crate::simd_primitive!($isa, f64, max, x,
                    $crate::simd_primitive!($isa, f64, splat, -708.396_f64)),
                $crate::simd_primitive!($isa, f64, splat, 708.396_f64));

            let v_log2e = $crate::simd_primitive!($isa, f64, splat, 1.442_695_040_888_963_4_f64);

            // Cody-Waite: ln2 = c1 + c2, c1 exact in double
            let c1 = $crate::simd_primitive!($isa, f64, splat, -6.931_457_519_531_25E-1_f64);
            let c2 = $crate::simd_primitive!($isa, f64, splat, -1.428_606_820_309_417_2E-6_f64);

            let k = $crate::simd_primitive!($isa, f64, round_nearest,
                $crate::simd_primitive!($isa, f64, mul, x, v_log2e));

            let mut y = $crate::simd_primitive!($isa, f64, fma, k, c1, x);
            y = $crate::simd_primitive!($isa, f64, fma, k, c2, y);

            // exp(y) = 1 + 2*y*P(y^2) / (Q(y^2) - y*P(y^2))
            let p0 = $crate::simd_primitive!($isa, f64, splat, 1.261_771_930_748_105_9E-4_f64);
            let p1 = $crate::simd_primitive!($isa, f64, splat, 3.029_944_077_074_419_6E-2_f64);
            let p2 = $crate::simd_primitive!($isa, f64, splat, 9.999_999_999_999_999_9E-1_f64);
            let q0 = $crate::simd_primitive!($isa, f64, splat, 3.001_985_051_386_644_6E-6_f64);
            let q1 = $crate::simd_primitive!($isa, f64, splat, 2.524_483_403_496_841E-3_f64);
            let q2 = $crate::simd_primitive!($isa, f64, splat, 2.272_655_482_081_550_3E-1_f64);
            let q3 = $crate::simd_primitive!($isa, f64, splat, 2.0_f64);

            let yy = $crate::simd_primitive!($isa, f64, mul, y, y);

            let mut px = p0;
            px = $crate::simd_primitive!($isa, f64, fma, px, yy, p1);
            px = $crate::simd_primitive!($isa, f64, fma, px, yy, p2);
            px = $crate::simd_primitive!($isa, f64, mul, px, y);

            let mut q = q0;
            q = $crate::simd_primitive!($isa, f64, fma, q, yy, q1);
            q = $crate::simd_primitive!($isa, f64, fma, q, yy, q2);
            q = $crate::simd_primitive!($isa, f64, fma, q, yy, q3);

            let r = $crate::simd_primitive!($isa, f64, div, px,
                $crate::simd_primitive!($isa, f64, sub, q, px));

            let one = $crate::simd_primitive!($isa, f64, splat, 1.0_f64);
            let two = $crate::simd_primitive!($isa, f64, splat, 2.0_f64);
            let e = $crate::simd_primitive!($isa, f64, fma, two, r, one);

            let fact = $crate::simd_primitive!($isa, f64, pow2, k);
            let r = $crate::simd_primitive!($isa, f64, mul, e, fact);
            $crate::simd_primitive!($isa, f64, propagate_nan, r, raw)
        }
    };
}

/// Generates an erf(x) approximation (Abramowitz & Stegun 7.1.26) for the
/// given ISA and element type. Max absolute error ≈ 1.5e-7.
///
/// Usage:
/// ```ignore
/// define_erf!(avx2, f32, erf_f32);
/// define_erf!(avx2, f64, erf_f64);
/// ```
#[macro_export]
macro_rules! define_erf {
    ($isa:ident, $elem:ident, $name:ident) => {
        /// Vectorized erf(x): rational pre-factor times exp(-x^2), sign
        /// restored from the input. Odd, saturates at ±1.
        #[inline(always)]
        pub unsafe fn $name(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);

            let ax = $crate::simd_primitive!($isa, $elem, abs, x);

            // t = 1 / (1 + P*|x|)
            let t = $crate::simd_primitive!($isa, $elem, recip,
                $crate::simd_primitive!($isa, $elem, fma, ax,
                    $crate::simd_primitive!($isa, $elem, splat, 0.327_591_1), one));

            let a1 = $crate::simd_primitive!($isa, $elem, splat, 0.254_829_592);
            let a2 = $crate::simd_primitive!($isa, $elem, splat, -0.284_496_736);
            let a3 = $crate::simd_primitive!($isa, $elem, splat, 1.421_413_741);
            let a4 = $crate::simd_primitive!($isa, $elem, splat, -1.453_152_027);
            let a5 = $crate::simd_primitive!($isa, $elem, splat, 1.061_405_429);

            let mut p = a5;
            p = $crate::simd_primitive!($isa, $elem, fma, p, t, a4);
            p = $crate::simd_primitive!($isa, $elem, fma, p, t, a3);
            p = $crate::simd_primitive!($isa, $elem, fma, p, t, a2);
            p = $crate::simd_primitive!($isa, $elem, fma, p, t, a1);
            p = $crate::simd_primitive!($isa, $elem, mul, p, t);

            // e = exp(-x^2)
            let e = $crate::simd_primitive!($isa, $elem, exp,
                $crate::simd_primitive!($isa, $elem, neg,
                    $crate::simd_primitive!($isa, $elem, mul, ax, ax)));

            // erf(|x|) = 1 - p*e, then restore sign
            let y = $crate::simd_primitive!($isa, $elem, sub, one,
                $crate::simd_primitive!($isa, $elem, mul, p, e));
            $crate::simd_primitive!($isa, $elem, copysign, y, x)
        }
    };
}

/// Generates tanh(x) for the given ISA and element type via the sigmoid
/// identity tanh(x) = 1 - 2/(exp(2x) + 1), reusing the ISA's exp kernel.
#[macro_export]
macro_rules! define_tanh {
    ($isa:ident, $elem:ident, $name:ident) => {
        /// Vectorized tanh(x). Saturates to ±1 once exp(2x) over/underflows
        /// its clamped range.
        #[inline(always)]
        pub unsafe fn $name(x: $crate::simd_vec_ty!($isa, $elem)) -> $crate::simd_vec_ty!($isa, $elem) {
            let one = $crate::simd_primitive!($isa, $elem, splat, 1.0);
            let two = $crate::simd_primitive!($isa, $elem, splat, 2.0);

            let e = $crate::simd_primitive!($isa, $elem, exp,
                $crate::simd_primitive!($isa, $elem, mul, two, x));
            let d = $crate::simd_primitive!($isa, $elem, add, e, one);
            $crate::simd_primitive!($isa, $elem, sub, one,
                $crate::simd_primitive!($isa, $elem, div, two, d))
        }
    };
}
