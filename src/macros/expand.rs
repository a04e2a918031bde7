/// Expands the chunk-kernel set for a specific ISA and element type.
///
/// This is "Layer 3" of the architecture. `expand_isa_kernels!` takes a
/// module name, an ISA identifier, an element type, and the target-feature
/// attribute the generated functions must carry, and emits a module with one
/// chunk kernel per operation:
///
/// - unary:            `unsafe fn(a: *mut T, n: usize)`
/// - scalar-broadcast: `unsafe fn(a: *mut T, n: usize, c: T)`
/// - pairwise:         `unsafe fn(a: *mut T, b: *const T, n: usize)`
///
/// Kernels process `n - n % LANES` elements; the applicator hands any
/// remainder to a narrower ISA. Callers must ensure the pointers are valid
/// for `n` elements and that the CPU supports the ISA.
#[macro_export]
macro_rules! expand_isa_kernels {
    ($module_name:ident, $isa:ident, $elem:ident $(, #[$feat:meta])?) => {
        pub mod $module_name {
            mod formula {
                $crate::define_composite_formulas!($isa, $elem);
            }

            $crate::unary_chunk_kernel!($isa, $elem, erf, prim $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, exp, prim $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, tanh, prim $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, neg, prim $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, recip, prim $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, normal_cdf, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, normal_pdf, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, logistic_cdf, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, logistic_pdf, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, gelu, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, gelu_backward, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, swish, formula $(, #[$feat])?);
            $crate::unary_chunk_kernel!($isa, $elem, swish_backward, formula $(, #[$feat])?);

            $crate::scalar_chunk_kernel!($isa, $elem, add_scalar, add $(, #[$feat])?);
            $crate::scalar_chunk_kernel!($isa, $elem, mul_scalar, mul $(, #[$feat])?);

            $crate::pairwise_chunk_kernel!($isa, $elem, add, add $(, #[$feat])?);
            $crate::pairwise_chunk_kernel!($isa, $elem, mul, mul $(, #[$feat])?);
            $crate::pairwise_chunk_kernel!($isa, $elem, div, div $(, #[$feat])?);
        }
    };
}

/// One in-place unary chunk kernel. `prim` bodies go straight to the Layer 1
/// primitive of the same name; `formula` bodies go through the composite
/// formula module generated alongside the kernels.
#[macro_export]
macro_rules! unary_chunk_kernel {
    ($isa:ident, $elem:ident, $name:ident, prim $(, #[$feat:meta])?) => {
        $(#[$feat])?
        pub unsafe fn $name(a: *mut $elem, n: usize) {
            const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
            let mut i = 0;
            while i + LANES <= n {
                let v = $crate::simd_primitive!($isa, $elem, load, a.add(i));
                let r = $crate::simd_primitive!($isa, $elem, $name, v);
                $crate::simd_primitive!($isa, $elem, store, a.add(i), r);
                i += LANES;
            }
        }
    };
    ($isa:ident, $elem:ident, $name:ident, formula $(, #[$feat:meta])?) => {
        $(#[$feat])?
        pub unsafe fn $name(a: *mut $elem, n: usize) {
            const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
            let mut i = 0;
            while i + LANES <= n {
                let v = $crate::simd_primitive!($isa, $elem, load, a.add(i));
                let r = formula::$name(v);
                $crate::simd_primitive!($isa, $elem, store, a.add(i), r);
                i += LANES;
            }
        }
    };
}

/// One in-place array-op-scalar chunk kernel (the scalar operand is splat
/// into a register once, outside the loop).
#[macro_export]
macro_rules! scalar_chunk_kernel {
    ($isa:ident, $elem:ident, $name:ident, $op:ident $(, #[$feat:meta])?) => {
        $(#[$feat])?
        pub unsafe fn $name(a: *mut $elem, n: usize, c: $elem) {
            const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
            let vc = $crate::simd_primitive!($isa, $elem, splat, c);
            let mut i = 0;
            while i + LANES <= n {
                let v = $crate::simd_primitive!($isa, $elem, load, a.add(i));
                let r = $crate::simd_primitive!($isa, $elem, $op, v, vc);
                $crate::simd_primitive!($isa, $elem, store, a.add(i), r);
                i += LANES;
            }
        }
    };
}

/// One in-place pairwise chunk kernel; the result overwrites `a`.
#[macro_export]
macro_rules! pairwise_chunk_kernel {
    ($isa:ident, $elem:ident, $name:ident, $op:ident $(, #[$feat:meta])?) => {
        $(#[$feat])?
        pub unsafe fn $name(a: *mut $elem, b: *const $elem, n: usize) {
            const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
            let mut i = 0;
            while i + LANES <= n {
                let va = $crate::simd_primitive!($isa, $elem, load, a.add(i));
                let vb = $crate::simd_primitive!($isa, $elem, load, b.add(i));
                let r = $crate::simd_primitive!($isa, $elem, $op, va, vb);
                $crate::simd_primitive!($isa, $elem, store, a.add(i), r);
                i += LANES;
            }
        }
    };
}

/// Builds the static dispatch table for one ISA from its two generated
/// kernel modules. Array order must match the op enums in `apply`.
#[macro_export]
macro_rules! define_isa_tables {
    ($isa:ident, $variant:ident, $f32m:ident, $f64m:ident) => {
        pub(crate) static TABLES: $crate::kernels::IsaTables = $crate::kernels::IsaTables {
            isa: $crate::InstructionSet::$variant,
            f32_lanes: $crate::simd_primitive!($isa, f32, lanes),
            f64_lanes: $crate::simd_primitive!($isa, f64, lanes),
            unary_f32: [
                $f32m::erf,
                $f32m::exp,
                $f32m::tanh,
                $f32m::neg,
                $f32m::recip,
                $f32m::normal_cdf,
                $f32m::normal_pdf,
                $f32m::logistic_cdf,
                $f32m::logistic_pdf,
                $f32m::gelu,
                $f32m::gelu_backward,
                $f32m::swish,
                $f32m::swish_backward,
            ],
            unary_f64: [
                $f64m::erf,
                $f64m::exp,
                $f64m::tanh,
                $f64m::neg,
                $f64m::recip,
                $f64m::normal_cdf,
                $f64m::normal_pdf,
                $f64m::logistic_cdf,
                $f64m::logistic_pdf,
                $f64m::gelu,
                $f64m::gelu_backward,
                $f64m::swish,
                $f64m::swish_backward,
            ],
            scalar_f32: [$f32m::add_scalar, $f32m::mul_scalar],
            scalar_f64: [$f64m::add_scalar, $f64m::mul_scalar],
            pair_f32: [$f32m::add, $f32m::mul, $f32m::div],
            pair_f64: [$f64m::add, $f64m::mul, $f64m::div],
        };
    };
}
