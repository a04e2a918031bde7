//! NEON kernels: 4 x f32, 2 x f64. Part of the aarch64 baseline, so the
//! chain on that target is just Neon then Scalar.

pub(crate) mod math {
    crate::define_exp_f32!(neon);
    crate::define_exp_f64!(neon);
    crate::define_erf!(neon, f32, erf_f32);
    crate::define_erf!(neon, f64, erf_f64);
    crate::define_tanh!(neon, f32, tanh_f32);
    crate::define_tanh!(neon, f64, tanh_f64);
}

crate::expand_isa_kernels!(f32k, neon, f32, #[target_feature(enable = "neon")]);
crate::expand_isa_kernels!(f64k, neon, f64, #[target_feature(enable = "neon")]);

crate::define_isa_tables!(neon, Neon, f32k, f64k);
