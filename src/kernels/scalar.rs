//! Scalar kernels: one element per "register", always available.
//!
//! Terminates every fallback chain; with a lane width of 1 the remainder
//! after this tag is empty. Transcendentals come from libm through the
//! Layer 1 arms rather than a polynomial module, so the scalar path doubles
//! as the accuracy reference in tests.

crate::expand_isa_kernels!(f32k, scalar, f32);
crate::expand_isa_kernels!(f64k, scalar, f64);

crate::define_isa_tables!(scalar, Scalar, f32k, f64k);
