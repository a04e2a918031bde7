//! AVX2 kernels: 8 x f32, 4 x f64.
//!
//! The tag is probed as avx2+fma together, so the generated kernels may use
//! fused multiply-add unconditionally.

pub(crate) mod math {
    crate::define_exp_f32!(avx2);
    crate::define_exp_f64!(avx2);
    crate::define_erf!(avx2, f32, erf_f32);
    crate::define_erf!(avx2, f64, erf_f64);
    crate::define_tanh!(avx2, f32, tanh_f32);
    crate::define_tanh!(avx2, f64, tanh_f64);
}

crate::expand_isa_kernels!(f32k, avx2, f32, #[target_feature(enable = "avx2,fma")]);
crate::expand_isa_kernels!(f64k, avx2, f64, #[target_feature(enable = "avx2,fma")]);

crate::define_isa_tables!(avx2, Avx2, f32k, f64k);
