//! AVX-512 kernels: 16 x f32, 8 x f64. Requires only the F subset; Layer 1
//! routes bitwise float ops through integer registers to stay off DQ.

pub(crate) mod math {
    crate::define_exp_f32!(avx512);
    crate::define_exp_f64!(avx512);
    crate::define_erf!(avx512, f32, erf_f32);
    crate::define_erf!(avx512, f64, erf_f64);
    crate::define_tanh!(avx512, f32, tanh_f32);
    crate::define_tanh!(avx512, f64, tanh_f64);
}

crate::expand_isa_kernels!(f32k, avx512, f32, #[target_feature(enable = "avx512f")]);
crate::expand_isa_kernels!(f64k, avx512, f64, #[target_feature(enable = "avx512f")]);

crate::define_isa_tables!(avx512, Avx512, f32k, f64k);
