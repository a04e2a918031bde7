/// Maps abstract register operations to concrete hardware intrinsics.
///
/// # Architecture
/// This macro is "Layer 1" of the kernel architecture: the per-ISA capability
/// descriptor. It provides, for every `(isa, element)` pair, the register
/// type's lane count and the primitive set the formula layers build on:
///
/// - load/store and `splat`
/// - arithmetic: `add`, `sub`, `mul`, `div`, `fma`, `neg`, `abs`, `min`,
///   `max`, `recip`, `copysign`
/// - range-reduction helpers: `round_nearest`, `pow2` (2^k from an
///   integer-valued float register, via IEEE-754 exponent construction)
/// - `propagate_nan`: reinserts NaN lanes of the original input into a
///   computed result (the clamp in the exp templates would absorb them)
/// - transcendentals: `erf`, `exp`, `tanh` (scalar: libm; vector ISAs: the
///   polynomial kernels in each ISA's `math` module)
///
/// The scalar branch carries only the arms its kernels expand: libm covers
/// the transcendentals directly, so the range-reduction helpers have no
/// scalar form.
///
/// # Usage
/// ```ignore
/// simd_primitive!(scalar, f32, add, a, b) // -> a + b
/// simd_primitive!(avx2, f32, add, a, b)   // -> _mm256_add_ps(a, b)
/// ```
///
/// All operations are pure register-in/register-out. `recip` is a
/// full-precision division rather than the hardware reciprocal estimate so
/// that every ISA produces the same IEEE result.
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // Scalar (register = one value; the mandatory fallback base case)
    // ========================================================================

    (scalar, f32, lanes) => { 1 };
    (scalar, f32, splat, $v:expr) => { $v };
    (scalar, f32, load, $p:expr) => { *$p };
    (scalar, f32, store, $p:expr, $v:expr) => { *$p = $v };
    (scalar, f32, add, $a:expr, $b:expr) => { $a + $b };
    (scalar, f32, sub, $a:expr, $b:expr) => { $a - $b };
    (scalar, f32, mul, $a:expr, $b:expr) => { $a * $b };
    (scalar, f32, div, $a:expr, $b:expr) => { $a / $b };
    (scalar, f32, fma, $a:expr, $b:expr, $c:expr) => { $a.mul_add($b, $c) };
    (scalar, f32, neg, $a:expr) => { -$a };
    (scalar, f32, recip, $a:expr) => { 1.0 / $a };
    (scalar, f32, erf, $a:expr) => { libm::erff($a) };
    (scalar, f32, exp, $a:expr) => { libm::expf($a) };
    (scalar, f32, tanh, $a:expr) => { libm::tanhf($a) };

    (scalar, f64, lanes) => { 1 };
    (scalar, f64, splat, $v:expr) => { $v };
    (scalar, f64, load, $p:expr) => { *$p };
    (scalar, f64, store, $p:expr, $v:expr) => { *$p = $v };
    (scalar, f64, add, $a:expr, $b:expr) => { $a + $b };
    (scalar, f64, sub, $a:expr, $b:expr) => { $a - $b };
    (scalar, f64, mul, $a:expr, $b:expr) => { $a * $b };
    (scalar, f64, div, $a:expr, $b:expr) => { $a / $b };
    (scalar, f64, fma, $a:expr, $b:expr, $c:expr) => { $a.mul_add($b, $c) };
    (scalar, f64, neg, $a:expr) => { -$a };
    (scalar, f64, recip, $a:expr) => { 1.0 / $a };
    (scalar, f64, erf, $a:expr) => { libm::erf($a) };
    (scalar, f64, exp, $a:expr) => { libm::exp($a) };
    (scalar, f64, tanh, $a:expr) => { libm::tanh($a) };

    // ========================================================================
    // SSE2 (4 x f32, 2 x f64)
    // ========================================================================

    (sse2, f32, lanes) => { 4 };
    (sse2, f32, splat, $v:expr) => { std::arch::x86_64::_mm_set1_ps($v) };
    (sse2, f32, load, $p:expr) => { std::arch::x86_64::_mm_loadu_ps($p) };
    (sse2, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (sse2, f32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_ps($a, $b) };
    (sse2, f32, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm_sub_ps($a, $b) };
    (sse2, f32, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm_mul_ps($a, $b) };
    (sse2, f32, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm_div_ps($a, $b) };
    // SSE2 has no fused multiply-add instruction.
    (sse2, f32, fma, $a:expr, $b:expr, $c:expr) => {
        std::arch::x86_64::_mm_add_ps(std::arch::x86_64::_mm_mul_ps($a, $b), $c)
    };
    (sse2, f32, neg, $a:expr) => {
        std::arch::x86_64::_mm_xor_ps($a, std::arch::x86_64::_mm_set1_ps(-0.0))
    };
    (sse2, f32, abs, $a:expr) => {
        std::arch::x86_64::_mm_andnot_ps(std::arch::x86_64::_mm_set1_ps(-0.0), $a)
    };
    (sse2, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm_min_ps($a, $b) };
    (sse2, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_ps($a, $b) };
    (sse2, f32, recip, $a:expr) => {
        std::arch::x86_64::_mm_div_ps(std::arch::x86_64::_mm_set1_ps(1.0), $a)
    };
    (sse2, f32, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm_set1_ps(-0.0);
        std::arch::x86_64::_mm_or_ps(
            std::arch::x86_64::_mm_and_ps($sgn, m),
            std::arch::x86_64::_mm_andnot_ps(m, $mag),
        )
    }};
    // SSE2 lacks roundps; the epi32 round trip rounds to nearest-even via MXCSR.
    (sse2, f32, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm_cvtepi32_ps(std::arch::x86_64::_mm_cvtps_epi32($a))
    };
    (sse2, f32, pow2, $k:expr) => {
        std::arch::x86_64::_mm_castsi128_ps(std::arch::x86_64::_mm_slli_epi32(
            std::arch::x86_64::_mm_add_epi32(
                std::arch::x86_64::_mm_cvtps_epi32($k),
                std::arch::x86_64::_mm_set1_epi32(127),
            ),
            23,
        ))
    };
    (sse2, f32, propagate_nan, $r:expr, $x:expr) => {{
        let m = std::arch::x86_64::_mm_cmpunord_ps($x, $x);
        std::arch::x86_64::_mm_or_ps(
            std::arch::x86_64::_mm_and_ps(m, $x),
            std::arch::x86_64::_mm_andnot_ps(m, $r),
        )
    }};
    (sse2, f32, erf, $a:expr) => { $crate::kernels::sse2::math::erf_f32($a) };
    (sse2, f32, exp, $a:expr) => { $crate::kernels::sse2::math::exp_f32($a) };
    (sse2, f32, tanh, $a:expr) => { $crate::kernels::sse2::math::tanh_f32($a) };

    (sse2, f64, lanes) => { 2 };
    (sse2, f64, splat, $v:expr) => { std::arch::x86_64::_mm_set1_pd($v) };
    (sse2, f64, load, $p:expr) => { std::arch::x86_64::_mm_loadu_pd($p) };
    (sse2, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_pd($p, $v) };
    (sse2, f64, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm_add_pd($a, $b) };
    (sse2, f64, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm_sub_pd($a, $b) };
    (sse2, f64, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm_mul_pd($a, $b) };
    (sse2, f64, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm_div_pd($a, $b) };
    (sse2, f64, fma, $a:expr, $b:expr, $c:expr) => {
        std::arch::x86_64::_mm_add_pd(std::arch::x86_64::_mm_mul_pd($a, $b), $c)
    };
    (sse2, f64, neg, $a:expr) => {
        std::arch::x86_64::_mm_xor_pd($a, std::arch::x86_64::_mm_set1_pd(-0.0))
    };
    (sse2, f64, abs, $a:expr) => {
        std::arch::x86_64::_mm_andnot_pd(std::arch::x86_64::_mm_set1_pd(-0.0), $a)
    };
    (sse2, f64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm_min_pd($a, $b) };
    (sse2, f64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_pd($a, $b) };
    (sse2, f64, recip, $a:expr) => {
        std::arch::x86_64::_mm_div_pd(std::arch::x86_64::_mm_set1_pd(1.0), $a)
    };
    (sse2, f64, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm_set1_pd(-0.0);
        std::arch::x86_64::_mm_or_pd(
            std::arch::x86_64::_mm_and_pd($sgn, m),
            std::arch::x86_64::_mm_andnot_pd(m, $mag),
        )
    }};
    (sse2, f64, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm_cvtepi32_pd(std::arch::x86_64::_mm_cvtpd_epi32($a))
    };
    // 2^k for two doubles: (k+1023)<<20 lands in the high dword of each lane.
    (sse2, f64, pow2, $k:expr) => {
        std::arch::x86_64::_mm_castsi128_pd(std::arch::x86_64::_mm_unpacklo_epi32(
            std::arch::x86_64::_mm_setzero_si128(),
            std::arch::x86_64::_mm_slli_epi32(
                std::arch::x86_64::_mm_add_epi32(
                    std::arch::x86_64::_mm_cvtpd_epi32($k),
                    std::arch::x86_64::_mm_set1_epi32(1023),
                ),
                20,
            ),
        ))
    };
    (sse2, f64, propagate_nan, $r:expr, $x:expr) => {{
        let m = std::arch::x86_64::_mm_cmpunord_pd($x, $x);
        std::arch::x86_64::_mm_or_pd(
            std::arch::x86_64::_mm_and_pd(m, $x),
            std::arch::x86_64::_mm_andnot_pd(m, $r),
        )
    }};
    (sse2, f64, erf, $a:expr) => { $crate::kernels::sse2::math::erf_f64($a) };
    (sse2, f64, exp, $a:expr) => { $crate::kernels::sse2::math::exp_f64($a) };
    (sse2, f64, tanh, $a:expr) => { $crate::kernels::sse2::math::tanh_f64($a) };

    // ========================================================================
    // AVX2 (8 x f32, 4 x f64; probed as avx2+fma)
    // ========================================================================

    (avx2, f32, lanes) => { 8 };
    (avx2, f32, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_ps($v) };
    (avx2, f32, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx2, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx2, f32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_ps($a, $b) };
    (avx2, f32, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_ps($a, $b) };
    (avx2, f32, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_ps($a, $b) };
    (avx2, f32, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_div_ps($a, $b) };
    (avx2, f32, fma, $a:expr, $b:expr, $c:expr) => { std::arch::x86_64::_mm256_fmadd_ps($a, $b, $c) };
    (avx2, f32, neg, $a:expr) => {
        std::arch::x86_64::_mm256_xor_ps($a, std::arch::x86_64::_mm256_set1_ps(-0.0))
    };
    (avx2, f32, abs, $a:expr) => {
        std::arch::x86_64::_mm256_andnot_ps(std::arch::x86_64::_mm256_set1_ps(-0.0), $a)
    };
    (avx2, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_ps($a, $b) };
    (avx2, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_ps($a, $b) };
    (avx2, f32, recip, $a:expr) => {
        std::arch::x86_64::_mm256_div_ps(std::arch::x86_64::_mm256_set1_ps(1.0), $a)
    };
    (avx2, f32, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm256_set1_ps(-0.0);
        std::arch::x86_64::_mm256_or_ps(
            std::arch::x86_64::_mm256_and_ps($sgn, m),
            std::arch::x86_64::_mm256_andnot_ps(m, $mag),
        )
    }};
    (avx2, f32, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm256_round_ps(
            $a,
            std::arch::x86_64::_MM_FROUND_TO_NEAREST_INT | std::arch::x86_64::_MM_FROUND_NO_EXC,
        )
    };
    (avx2, f32, pow2, $k:expr) => {
        std::arch::x86_64::_mm256_castsi256_ps(std::arch::x86_64::_mm256_slli_epi32(
            std::arch::x86_64::_mm256_add_epi32(
                std::arch::x86_64::_mm256_cvtps_epi32($k),
                std::arch::x86_64::_mm256_set1_epi32(127),
            ),
            23,
        ))
    };
    (avx2, f32, propagate_nan, $r:expr, $x:expr) => {
        std::arch::x86_64::_mm256_blendv_ps(
            $r,
            $x,
            std::arch::x86_64::_mm256_cmp_ps($x, $x, std::arch::x86_64::_CMP_UNORD_Q),
        )
    };
    (avx2, f32, erf, $a:expr) => { $crate::kernels::avx2::math::erf_f32($a) };
    (avx2, f32, exp, $a:expr) => { $crate::kernels::avx2::math::exp_f32($a) };
    (avx2, f32, tanh, $a:expr) => { $crate::kernels::avx2::math::tanh_f32($a) };

    (avx2, f64, lanes) => { 4 };
    (avx2, f64, splat, $v:expr) => { std::arch::x86_64::_mm256_set1_pd($v) };
    (avx2, f64, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_pd($p) };
    (avx2, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_pd($p, $v) };
    (avx2, f64, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_add_pd($a, $b) };
    (avx2, f64, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_sub_pd($a, $b) };
    (avx2, f64, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_mul_pd($a, $b) };
    (avx2, f64, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_div_pd($a, $b) };
    (avx2, f64, fma, $a:expr, $b:expr, $c:expr) => { std::arch::x86_64::_mm256_fmadd_pd($a, $b, $c) };
    (avx2, f64, neg, $a:expr) => {
        std::arch::x86_64::_mm256_xor_pd($a, std::arch::x86_64::_mm256_set1_pd(-0.0))
    };
    (avx2, f64, abs, $a:expr) => {
        std::arch::x86_64::_mm256_andnot_pd(std::arch::x86_64::_mm256_set1_pd(-0.0), $a)
    };
    (avx2, f64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_pd($a, $b) };
    (avx2, f64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_pd($a, $b) };
    (avx2, f64, recip, $a:expr) => {
        std::arch::x86_64::_mm256_div_pd(std::arch::x86_64::_mm256_set1_pd(1.0), $a)
    };
    (avx2, f64, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm256_set1_pd(-0.0);
        std::arch::x86_64::_mm256_or_pd(
            std::arch::x86_64::_mm256_and_pd($sgn, m),
            std::arch::x86_64::_mm256_andnot_pd(m, $mag),
        )
    }};
    (avx2, f64, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm256_round_pd(
            $a,
            std::arch::x86_64::_MM_FROUND_TO_NEAREST_INT | std::arch::x86_64::_MM_FROUND_NO_EXC,
        )
    };
    // 2^k for four doubles: (k+1023)<<20 into the high dword of each lane,
    // widening the four 32-bit words across the two 128-bit halves.
    (avx2, f64, pow2, $k:expr) => {{
        let t = std::arch::x86_64::_mm_slli_epi32(
            std::arch::x86_64::_mm_add_epi32(
                std::arch::x86_64::_mm256_cvtpd_epi32($k),
                std::arch::x86_64::_mm_set1_epi32(1023),
            ),
            20,
        );
        let z = std::arch::x86_64::_mm_setzero_si128();
        std::arch::x86_64::_mm256_castsi256_pd(std::arch::x86_64::_mm256_set_m128i(
            std::arch::x86_64::_mm_unpackhi_epi32(z, t),
            std::arch::x86_64::_mm_unpacklo_epi32(z, t),
        ))
    }};
    (avx2, f64, propagate_nan, $r:expr, $x:expr) => {
        std::arch::x86_64::_mm256_blendv_pd(
            $r,
            $x,
            std::arch::x86_64::_mm256_cmp_pd($x, $x, std::arch::x86_64::_CMP_UNORD_Q),
        )
    };
    (avx2, f64, erf, $a:expr) => { $crate::kernels::avx2::math::erf_f64($a) };
    (avx2, f64, exp, $a:expr) => { $crate::kernels::avx2::math::exp_f64($a) };
    (avx2, f64, tanh, $a:expr) => { $crate::kernels::avx2::math::tanh_f64($a) };

    // ========================================================================
    // AVX-512 (16 x f32, 8 x f64)
    //
    // Bitwise float ops go through integer xor/and/andnot, which only need
    // AVX512F (the float forms would require AVX512DQ).
    // ========================================================================

    (avx512, f32, lanes) => { 16 };
    (avx512, f32, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_ps($v) };
    (avx512, f32, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_ps($p) };
    (avx512, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_ps($p, $v) };
    (avx512, f32, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_ps($a, $b) };
    (avx512, f32, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_ps($a, $b) };
    (avx512, f32, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mul_ps($a, $b) };
    (avx512, f32, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_div_ps($a, $b) };
    (avx512, f32, fma, $a:expr, $b:expr, $c:expr) => { std::arch::x86_64::_mm512_fmadd_ps($a, $b, $c) };
    (avx512, f32, neg, $a:expr) => {
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_xor_si512(
            std::arch::x86_64::_mm512_castps_si512($a),
            std::arch::x86_64::_mm512_set1_epi32(i32::MIN),
        ))
    };
    (avx512, f32, abs, $a:expr) => { std::arch::x86_64::_mm512_abs_ps($a) };
    (avx512, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_ps($a, $b) };
    (avx512, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_ps($a, $b) };
    (avx512, f32, recip, $a:expr) => {
        std::arch::x86_64::_mm512_div_ps(std::arch::x86_64::_mm512_set1_ps(1.0), $a)
    };
    (avx512, f32, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm512_set1_epi32(i32::MIN);
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_or_si512(
            std::arch::x86_64::_mm512_and_si512(std::arch::x86_64::_mm512_castps_si512($sgn), m),
            std::arch::x86_64::_mm512_andnot_si512(m, std::arch::x86_64::_mm512_castps_si512($mag)),
        ))
    }};
    (avx512, f32, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm512_roundscale_ps(
            $a,
            std::arch::x86_64::_MM_FROUND_TO_NEAREST_INT | std::arch::x86_64::_MM_FROUND_NO_EXC,
        )
    };
    (avx512, f32, pow2, $k:expr) => {
        std::arch::x86_64::_mm512_castsi512_ps(std::arch::x86_64::_mm512_slli_epi32(
            std::arch::x86_64::_mm512_add_epi32(
                std::arch::x86_64::_mm512_cvtps_epi32($k),
                std::arch::x86_64::_mm512_set1_epi32(127),
            ),
            23,
        ))
    };
    (avx512, f32, propagate_nan, $r:expr, $x:expr) => {
        std::arch::x86_64::_mm512_mask_mov_ps(
            $r,
            std::arch::x86_64::_mm512_cmp_ps_mask($x, $x, std::arch::x86_64::_CMP_UNORD_Q),
            $x,
        )
    };
    (avx512, f32, erf, $a:expr) => { $crate::kernels::avx512::math::erf_f32($a) };
    (avx512, f32, exp, $a:expr) => { $crate::kernels::avx512::math::exp_f32($a) };
    (avx512, f32, tanh, $a:expr) => { $crate::kernels::avx512::math::tanh_f32($a) };

    (avx512, f64, lanes) => { 8 };
    (avx512, f64, splat, $v:expr) => { std::arch::x86_64::_mm512_set1_pd($v) };
    (avx512, f64, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_pd($p) };
    (avx512, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_pd($p, $v) };
    (avx512, f64, add, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_add_pd($a, $b) };
    (avx512, f64, sub, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_sub_pd($a, $b) };
    (avx512, f64, mul, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mul_pd($a, $b) };
    (avx512, f64, div, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_div_pd($a, $b) };
    (avx512, f64, fma, $a:expr, $b:expr, $c:expr) => { std::arch::x86_64::_mm512_fmadd_pd($a, $b, $c) };
    (avx512, f64, neg, $a:expr) => {
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_xor_si512(
            std::arch::x86_64::_mm512_castpd_si512($a),
            std::arch::x86_64::_mm512_set1_epi64(i64::MIN),
        ))
    };
    (avx512, f64, abs, $a:expr) => { std::arch::x86_64::_mm512_abs_pd($a) };
    (avx512, f64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_pd($a, $b) };
    (avx512, f64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_pd($a, $b) };
    (avx512, f64, recip, $a:expr) => {
        std::arch::x86_64::_mm512_div_pd(std::arch::x86_64::_mm512_set1_pd(1.0), $a)
    };
    (avx512, f64, copysign, $mag:expr, $sgn:expr) => {{
        let m = std::arch::x86_64::_mm512_set1_epi64(i64::MIN);
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_or_si512(
            std::arch::x86_64::_mm512_and_si512(std::arch::x86_64::_mm512_castpd_si512($sgn), m),
            std::arch::x86_64::_mm512_andnot_si512(m, std::arch::x86_64::_mm512_castpd_si512($mag)),
        ))
    }};
    (avx512, f64, round_nearest, $a:expr) => {
        std::arch::x86_64::_mm512_roundscale_pd(
            $a,
            std::arch::x86_64::_MM_FROUND_TO_NEAREST_INT | std::arch::x86_64::_MM_FROUND_NO_EXC,
        )
    };
    (avx512, f64, pow2, $k:expr) => {
        std::arch::x86_64::_mm512_castsi512_pd(std::arch::x86_64::_mm512_slli_epi64(
            std::arch::x86_64::_mm512_add_epi64(
                std::arch::x86_64::_mm512_cvtepi32_epi64(std::arch::x86_64::_mm512_cvtpd_epi32($k)),
                std::arch::x86_64::_mm512_set1_epi64(1023),
            ),
            52,
        ))
    };
    (avx512, f64, propagate_nan, $r:expr, $x:expr) => {
        std::arch::x86_64::_mm512_mask_mov_pd(
            $r,
            std::arch::x86_64::_mm512_cmp_pd_mask($x, $x, std::arch::x86_64::_CMP_UNORD_Q),
            $x,
        )
    };
    (avx512, f64, erf, $a:expr) => { $crate::kernels::avx512::math::erf_f64($a) };
    (avx512, f64, exp, $a:expr) => { $crate::kernels::avx512::math::exp_f64($a) };
    (avx512, f64, tanh, $a:expr) => { $crate::kernels::avx512::math::tanh_f64($a) };

    // ========================================================================
    // NEON (4 x f32, 2 x f64; aarch64 baseline)
    // ========================================================================

    (neon, f32, lanes) => { 4 };
    (neon, f32, splat, $v:expr) => { std::arch::aarch64::vdupq_n_f32($v) };
    (neon, f32, load, $p:expr) => { std::arch::aarch64::vld1q_f32($p) };
    (neon, f32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f32($p, $v) };
    (neon, f32, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_f32($a, $b) };
    (neon, f32, sub, $a:expr, $b:expr) => { std::arch::aarch64::vsubq_f32($a, $b) };
    (neon, f32, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_f32($a, $b) };
    (neon, f32, div, $a:expr, $b:expr) => { std::arch::aarch64::vdivq_f32($a, $b) };
    (neon, f32, fma, $a:expr, $b:expr, $c:expr) => { std::arch::aarch64::vfmaq_f32($c, $a, $b) };
    (neon, f32, neg, $a:expr) => { std::arch::aarch64::vnegq_f32($a) };
    (neon, f32, abs, $a:expr) => { std::arch::aarch64::vabsq_f32($a) };
    (neon, f32, min, $a:expr, $b:expr) => { std::arch::aarch64::vminq_f32($a, $b) };
    (neon, f32, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_f32($a, $b) };
    (neon, f32, recip, $a:expr) => {
        std::arch::aarch64::vdivq_f32(std::arch::aarch64::vdupq_n_f32(1.0), $a)
    };
    (neon, f32, copysign, $mag:expr, $sgn:expr) => {
        std::arch::aarch64::vbslq_f32(std::arch::aarch64::vdupq_n_u32(0x8000_0000), $sgn, $mag)
    };
    (neon, f32, round_nearest, $a:expr) => { std::arch::aarch64::vrndnq_f32($a) };
    (neon, f32, pow2, $k:expr) => {
        std::arch::aarch64::vreinterpretq_f32_s32(std::arch::aarch64::vshlq_n_s32(
            std::arch::aarch64::vaddq_s32(
                std::arch::aarch64::vcvtnq_s32_f32($k),
                std::arch::aarch64::vdupq_n_s32(127),
            ),
            23,
        ))
    };
    (neon, f32, propagate_nan, $r:expr, $x:expr) => {
        std::arch::aarch64::vbslq_f32(std::arch::aarch64::vceqq_f32($x, $x), $r, $x)
    };
    (neon, f32, erf, $a:expr) => { $crate::kernels::neon::math::erf_f32($a) };
    (neon, f32, exp, $a:expr) => { $crate::kernels::neon::math::exp_f32($a) };
    (neon, f32, tanh, $a:expr) => { $crate::kernels::neon::math::tanh_f32($a) };

    (neon, f64, lanes) => { 2 };
    (neon, f64, splat, $v:expr) => { std::arch::aarch64::vdupq_n_f64($v) };
    (neon, f64, load, $p:expr) => { std::arch::aarch64::vld1q_f64($p) };
    (neon, f64, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f64($p, $v) };
    (neon, f64, add, $a:expr, $b:expr) => { std::arch::aarch64::vaddq_f64($a, $b) };
    (neon, f64, sub, $a:expr, $b:expr) => { std::arch::aarch64::vsubq_f64($a, $b) };
    (neon, f64, mul, $a:expr, $b:expr) => { std::arch::aarch64::vmulq_f64($a, $b) };
    (neon, f64, div, $a:expr, $b:expr) => { std::arch::aarch64::vdivq_f64($a, $b) };
    (neon, f64, fma, $a:expr, $b:expr, $c:expr) => { std::arch::aarch64::vfmaq_f64($c, $a, $b) };
    (neon, f64, neg, $a:expr) => { std::arch::aarch64::vnegq_f64($a) };
    (neon, f64, abs, $a:expr) => { std::arch::aarch64::vabsq_f64($a) };
    (neon, f64, min, $a:expr, $b:expr) => { std::arch::aarch64::vminq_f64($a, $b) };
    (neon, f64, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_f64($a, $b) };
    (neon, f64, recip, $a:expr) => {
        std::arch::aarch64::vdivq_f64(std::arch::aarch64::vdupq_n_f64(1.0), $a)
    };
    (neon, f64, copysign, $mag:expr, $sgn:expr) => {
        std::arch::aarch64::vbslq_f64(
            std::arch::aarch64::vdupq_n_u64(0x8000_0000_0000_0000),
            $sgn,
            $mag,
        )
    };
    (neon, f64, round_nearest, $a:expr) => { std::arch::aarch64::vrndnq_f64($a) };
    (neon, f64, pow2, $k:expr) => {
        std::arch::aarch64::vreinterpretq_f64_s64(std::arch::aarch64::vshlq_n_s64(
            std::arch::aarch64::vaddq_s64(
                std::arch::aarch64::vcvtnq_s64_f64($k),
                std::arch::aarch64::vdupq_n_s64(1023),
            ),
            52,
        ))
    };
    (neon, f64, propagate_nan, $r:expr, $x:expr) => {
        std::arch::aarch64::vbslq_f64(std::arch::aarch64::vceqq_f64($x, $x), $r, $x)
    };
    (neon, f64, erf, $a:expr) => { $crate::kernels::neon::math::erf_f64($a) };
    (neon, f64, exp, $a:expr) => { $crate::kernels::neon::math::exp_f64($a) };
    (neon, f64, tanh, $a:expr) => { $crate::kernels::neon::math::tanh_f64($a) };
}

/// Concrete register type for an `(isa, element)` pair.
#[macro_export]
macro_rules! simd_vec_ty {
    (scalar, f32) => { f32 };
    (scalar, f64) => { f64 };
    (sse2, f32) => { std::arch::x86_64::__m128 };
    (sse2, f64) => { std::arch::x86_64::__m128d };
    (avx2, f32) => { std::arch::x86_64::__m256 };
    (avx2, f64) => { std::arch::x86_64::__m256d };
    (avx512, f32) => { std::arch::x86_64::__m512 };
    (avx512, f64) => { std::arch::x86_64::__m512d };
    (neon, f32) => { std::arch::aarch64::float32x4_t };
    (neon, f64) => { std::arch::aarch64::float64x2_t };
}
