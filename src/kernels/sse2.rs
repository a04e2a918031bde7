//! SSE2 kernels: 4 x f32, 2 x f64.
//!
//! Baseline on x86_64, so this tag is always in the fallback chain there.
//! No FMA and no roundps; Layer 1 substitutes mul+add and the cvt round
//! trip, which keeps the shared templates usable unchanged.

pub(crate) mod math {
    crate::define_exp_f32!(sse2);
    crate::define_exp_f64!(sse2);
    crate::define_erf!(sse2, f32, erf_f32);
    crate::define_erf!(sse2, f64, erf_f64);
    crate::define_tanh!(sse2, f32, tanh_f32);
    crate::define_tanh!(sse2, f64, tanh_f64);
}

crate::expand_isa_kernels!(f32k, sse2, f32, #[target_feature(enable = "sse2")]);
crate::expand_isa_kernels!(f64k, sse2, f64, #[target_feature(enable = "sse2")]);

crate::define_isa_tables!(sse2, Sse2, f32k, f64k);
