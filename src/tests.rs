//! Kernel regression tests: every detected instruction set must agree with
//! the scalar reference path, across lengths that exercise the full
//! fallback chain (exact lane multiples, off-by-one remainders, empty).

use crate::kernels::tables_for;
use crate::{
    select_engine, select_engine_for, supported_instruction_sets, ArrayEngine, InstructionSet,
    KernelError,
};

const ATOL: f64 = 1e-4;
const RTOL: f64 = 1e-4;

fn assert_close_f32(got: &[f32], want: &[f32], label: &str) {
    assert_eq!(got.len(), want.len(), "{label}: length mismatch");
    for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
        let tol = ATOL as f32 + RTOL as f32 * w.abs();
        assert!(
            (g - w).abs() <= tol,
            "{label}[{i}]: got={g}, want={w}, diff={}",
            (g - w).abs()
        );
    }
}

fn assert_close_f64(got: &[f64], want: &[f64], label: &str) {
    assert_eq!(got.len(), want.len(), "{label}: length mismatch");
    for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
        let tol = ATOL + RTOL * w.abs();
        assert!(
            (g - w).abs() <= tol,
            "{label}[{i}]: got={g}, want={w}, diff={}",
            (g - w).abs()
        );
    }
}

/// One engine per instruction set the running CPU reports.
fn detected_engines() -> Vec<ArrayEngine> {
    supported_instruction_sets()
        .unwrap()
        .into_iter()
        .map(|isa| select_engine_for(isa).unwrap())
        .collect()
}

fn scalar_engine() -> ArrayEngine {
    select_engine_for(InstructionSet::Scalar).unwrap()
}

/// Inputs covering negatives, zero, positives and fractional values,
/// cycled over [-10, 10) to the requested length.
fn grid_f64(n: usize) -> Vec<f64> {
    (0..n).map(|i| -10.0 + (i as f64 * 0.37) % 20.0).collect()
}

fn grid_f32(n: usize) -> Vec<f32> {
    grid_f64(n).into_iter().map(|x| x as f32).collect()
}

const UNARY_F32: [(&str, fn(&ArrayEngine, &mut [f32])); 13] = [
    ("erff", ArrayEngine::erff),
    ("expf", ArrayEngine::expf),
    ("tanhf", ArrayEngine::tanhf),
    ("negf", ArrayEngine::negf),
    ("recipf", ArrayEngine::recipf),
    ("normal_cdff", ArrayEngine::normal_cdff),
    ("normal_pdff", ArrayEngine::normal_pdff),
    ("logistic_cdff", ArrayEngine::logistic_cdff),
    ("logistic_pdff", ArrayEngine::logistic_pdff),
    ("geluf", ArrayEngine::geluf),
    ("geluf_backward", ArrayEngine::geluf_backward),
    ("swishf", ArrayEngine::swishf),
    ("swishf_backward", ArrayEngine::swishf_backward),
];

const UNARY_F64: [(&str, fn(&ArrayEngine, &mut [f64])); 13] = [
    ("erf", ArrayEngine::erf),
    ("exp", ArrayEngine::exp),
    ("tanh", ArrayEngine::tanh),
    ("neg", ArrayEngine::neg),
    ("recip", ArrayEngine::recip),
    ("normal_cdf", ArrayEngine::normal_cdf),
    ("normal_pdf", ArrayEngine::normal_pdf),
    ("logistic_cdf", ArrayEngine::logistic_cdf),
    ("logistic_pdf", ArrayEngine::logistic_pdf),
    ("gelu", ArrayEngine::gelu),
    ("gelu_backward", ArrayEngine::gelu_backward),
    ("swish", ArrayEngine::swish),
    ("swish_backward", ArrayEngine::swish_backward),
];

// ============================================================================
// Cross-ISA equivalence
// ============================================================================

#[test]
fn unary_f32_matches_scalar_across_lengths() {
    let reference = scalar_engine();
    for engine in detected_engines() {
        let isa = engine.instruction_set();
        let lanes = tables_for(isa).unwrap().f32_lanes;
        for n in 0..=3 * lanes + 1 {
            for (name, op) in UNARY_F32 {
                let mut got = grid_f32(n);
                let mut want = grid_f32(n);
                op(&engine, &mut got);
                op(&reference, &mut want);
                assert_close_f32(&got, &want, &format!("{isa}/{name}/n={n}"));
            }
        }
    }
}

#[test]
fn unary_f64_matches_scalar_across_lengths() {
    let reference = scalar_engine();
    for engine in detected_engines() {
        let isa = engine.instruction_set();
        let lanes = tables_for(isa).unwrap().f64_lanes;
        for n in 0..=3 * lanes + 1 {
            for (name, op) in UNARY_F64 {
                let mut got = grid_f64(n);
                let mut want = grid_f64(n);
                op(&engine, &mut got);
                op(&reference, &mut want);
                assert_close_f64(&got, &want, &format!("{isa}/{name}/n={n}"));
            }
        }
    }
}

#[test]
fn scalar_broadcast_ops_match_reference() {
    for engine in detected_engines() {
        let isa = engine.instruction_set();
        for n in [0, 1, 7, 16, 33] {
            let mut a = grid_f64(n);
            engine.add_scalar(&mut a, 2.5);
            engine.mul_scalar(&mut a, -0.5);
            let want: Vec<f64> = grid_f64(n).iter().map(|x| (x + 2.5) * -0.5).collect();
            assert_close_f64(&a, &want, &format!("{isa}/scalar ops/n={n}"));

            let mut af = grid_f32(n);
            engine.addf_scalar(&mut af, 2.5);
            engine.mulf_scalar(&mut af, -0.5);
            let wantf: Vec<f32> = grid_f32(n).iter().map(|x| (x + 2.5) * -0.5).collect();
            assert_close_f32(&af, &wantf, &format!("{isa}/scalar ops f32/n={n}"));
        }
    }
}

#[test]
fn pairwise_ops_match_reference() {
    for engine in detected_engines() {
        let isa = engine.instruction_set();
        for n in [0, 1, 7, 16, 33] {
            let b: Vec<f64> = grid_f64(n).iter().map(|x| x + 0.25).collect();

            let mut a = grid_f64(n);
            engine.add(&mut a, &b);
            let want: Vec<f64> = grid_f64(n).iter().zip(&b).map(|(x, y)| x + y).collect();
            assert_close_f64(&a, &want, &format!("{isa}/add/n={n}"));

            let mut a = grid_f64(n);
            engine.mul(&mut a, &b);
            let want: Vec<f64> = grid_f64(n).iter().zip(&b).map(|(x, y)| x * y).collect();
            assert_close_f64(&a, &want, &format!("{isa}/mul/n={n}"));

            let mut a = grid_f64(n);
            engine.div(&mut a, &b);
            let want: Vec<f64> = grid_f64(n).iter().zip(&b).map(|(x, y)| x / y).collect();
            assert_close_f64(&a, &want, &format!("{isa}/div/n={n}"));

            let bf: Vec<f32> = b.iter().map(|x| *x as f32).collect();
            let mut af = grid_f32(n);
            engine.divf(&mut af, &bf);
            let wantf: Vec<f32> = grid_f32(n).iter().zip(&bf).map(|(x, y)| x / y).collect();
            assert_close_f32(&af, &wantf, &format!("{isa}/divf/n={n}"));
        }
    }
}

#[test]
#[should_panic(expected = "equal length")]
fn pairwise_length_mismatch_panics() {
    let engine = scalar_engine();
    let mut a = vec![1.0_f64; 4];
    let b = vec![1.0_f64; 3];
    engine.add(&mut a, &b);
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn erf_reference_points() {
    for engine in detected_engines() {
        let mut a = vec![0.0_f64, 1.0, -1.0, 2.0];
        engine.erf(&mut a);
        let want = [0.0, 0.842_700_79, -0.842_700_79, 0.995_322_27];
        assert_close_f64(&a, &want, &format!("{}/erf points", engine.instruction_set()));
    }
}

#[test]
fn erf_grid() {
    // erf on -3..=3 step 0.5, 4-decimal reference values.
    let want = [
        -1.0000, -0.9996, -0.9953, -0.9661, -0.8427, -0.5205, 0.0000, 0.5205, 0.8427, 0.9661,
        0.9953, 0.9996, 1.0000,
    ];
    for engine in detected_engines() {
        let isa = engine.instruction_set();

        let mut a: Vec<f64> = (0..13).map(|i| -3.0 + 0.5 * i as f64).collect();
        engine.erf(&mut a);
        assert_close_f64(&a, &want, &format!("{isa}/erf grid"));

        let mut af: Vec<f32> = (0..13).map(|i| -3.0 + 0.5 * i as f32).collect();
        engine.erff(&mut af);
        let wantf: Vec<f32> = want.iter().map(|x| *x as f32).collect();
        assert_close_f32(&af, &wantf, &format!("{isa}/erff grid"));
    }
}

#[test]
fn gelu_backward_grid() {
    // GELU gradient on -3..=3 step 0.5, values cross-checked against
    // autograd output to 4 decimals.
    let want = [
        -0.0119, -0.0376, -0.0852, -0.1275, -0.0833, 0.1325, 0.5000, 0.8675, 1.0833, 1.1275,
        1.0852, 1.0376, 1.0119,
    ];
    for engine in detected_engines() {
        let isa = engine.instruction_set();

        let mut a: Vec<f64> = (0..13).map(|i| -3.0 + 0.5 * i as f64).collect();
        engine.gelu_backward(&mut a);
        assert_close_f64(&a, &want, &format!("{isa}/gelu_backward grid"));

        let mut af: Vec<f32> = (0..13).map(|i| -3.0 + 0.5 * i as f32).collect();
        engine.geluf_backward(&mut af);
        let wantf: Vec<f32> = want.iter().map(|x| *x as f32).collect();
        assert_close_f32(&af, &wantf, &format!("{isa}/geluf_backward grid"));
    }
}

#[test]
fn tanh_saturates() {
    for engine in detected_engines() {
        let mut a = vec![-20.0_f64, 20.0, -500.0, 500.0];
        engine.tanh(&mut a);
        assert_close_f64(&a, &[-1.0, 1.0, -1.0, 1.0], "tanh saturation");
    }
}

// ============================================================================
// Composition identities
// ============================================================================

#[test]
fn gelu_is_x_times_normal_cdf() {
    for engine in detected_engines() {
        let x = grid_f64(33);

        let mut got = x.clone();
        engine.gelu(&mut got);

        let mut cdf = x.clone();
        engine.normal_cdf(&mut cdf);
        let want: Vec<f64> = x.iter().zip(&cdf).map(|(x, c)| x * c).collect();

        assert_close_f64(&got, &want, &format!("{}/gelu identity", engine.instruction_set()));
    }
}

#[test]
fn swish_is_x_times_logistic_cdf() {
    for engine in detected_engines() {
        let x = grid_f64(33);

        let mut got = x.clone();
        engine.swish(&mut got);

        let mut s = x.clone();
        engine.logistic_cdf(&mut s);
        let want: Vec<f64> = x.iter().zip(&s).map(|(x, s)| x * s).collect();

        assert_close_f64(&got, &want, &format!("{}/swish identity", engine.instruction_set()));
    }
}

#[test]
fn logistic_pdf_is_sigmoid_times_complement() {
    for engine in detected_engines() {
        let x = grid_f64(33);

        let mut got = x.clone();
        engine.logistic_pdf(&mut got);

        let mut s = x.clone();
        engine.logistic_cdf(&mut s);
        let want: Vec<f64> = s.iter().map(|s| s * (1.0 - s)).collect();

        assert_close_f64(
            &got,
            &want,
            &format!("{}/logistic_pdf identity", engine.instruction_set()),
        );
    }
}

// ============================================================================
// Derivatives against finite differences
// ============================================================================

fn central_difference(engine: &ArrayEngine, f: fn(&ArrayEngine, &mut [f64]), x: f64) -> f64 {
    let eps = 1e-3;
    let mut hi = [x + eps];
    let mut lo = [x - eps];
    f(engine, &mut hi);
    f(engine, &mut lo);
    (hi[0] - lo[0]) / (2.0 * eps)
}

#[test]
fn gelu_backward_matches_finite_difference() {
    for engine in detected_engines() {
        for x in [-5.0, -1.0, 0.0, 1.0, 5.0] {
            let fd = central_difference(&engine, ArrayEngine::gelu, x);
            let mut got = [x];
            engine.gelu_backward(&mut got);
            assert!(
                (got[0] - fd).abs() <= 1e-4 + 1e-3 * fd.abs(),
                "{}/gelu_backward({x}): got={}, fd={fd}",
                engine.instruction_set(),
                got[0]
            );
        }
    }
}

#[test]
fn swish_backward_matches_finite_difference() {
    for engine in detected_engines() {
        for x in [-5.0, -1.0, 0.0, 1.0, 5.0] {
            let fd = central_difference(&engine, ArrayEngine::swish, x);
            let mut got = [x];
            engine.swish_backward(&mut got);
            assert!(
                (got[0] - fd).abs() <= 1e-4 + 1e-3 * fd.abs(),
                "{}/swish_backward({x}): got={}, fd={fd}",
                engine.instruction_set(),
                got[0]
            );
        }
    }
}

// ============================================================================
// Exceptional inputs
// ============================================================================

#[test]
fn exp_f64_stays_finite_near_the_overflow_bound() {
    // Values just below f64 exp overflow; the clamp must keep the built
    // 2^k exponent field below all-ones instead of producing Inf.
    let edge = [700.0, 708.0, 709.6, 709.782];
    let reference = scalar_engine();
    for engine in detected_engines() {
        let isa = engine.instruction_set();
        let mut a: Vec<f64> = edge.iter().copied().cycle().take(16).collect();
        engine.exp(&mut a);
        for (i, v) in a.iter().enumerate() {
            assert!(v.is_finite(), "{isa}/exp({})=inf", edge[i % 4]);
        }

        // Inside the clamp range the result still matches the scalar path.
        let mut got = vec![700.0, 708.0, 708.39, -708.0];
        let mut want = got.clone();
        engine.exp(&mut got);
        reference.exp(&mut want);
        for (g, w) in got.iter().zip(&want) {
            assert!(
                ((g - w) / w).abs() <= RTOL,
                "{isa}/exp near bound: got={g}, want={w}"
            );
        }
    }
}

#[test]
fn nan_propagates_through_every_unary_op() {
    let nan_at = [0usize, 7, 19, 32];
    for engine in detected_engines() {
        let isa = engine.instruction_set();

        for (name, op) in UNARY_F64 {
            let mut a = grid_f64(33);
            for &i in &nan_at {
                a[i] = f64::NAN;
            }
            op(&engine, &mut a);
            for (i, v) in a.iter().enumerate() {
                if nan_at.contains(&i) {
                    assert!(v.is_nan(), "{isa}/{name}[{i}]: NaN became {v}");
                } else {
                    assert!(!v.is_nan(), "{isa}/{name}[{i}]: {v} became NaN");
                }
            }
        }

        for (name, op) in UNARY_F32 {
            let mut a = grid_f32(33);
            for &i in &nan_at {
                a[i] = f32::NAN;
            }
            op(&engine, &mut a);
            for (i, v) in a.iter().enumerate() {
                if nan_at.contains(&i) {
                    assert!(v.is_nan(), "{isa}/{name}[{i}]: NaN became {v}");
                } else {
                    assert!(!v.is_nan(), "{isa}/{name}[{i}]: {v} became NaN");
                }
            }
        }
    }
}

#[test]
fn saturating_ops_handle_infinity() {
    for engine in detected_engines() {
        let isa = engine.instruction_set();

        let mut a = vec![f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY];
        engine.tanh(&mut a);
        assert_close_f64(&a, &[-1.0, 1.0, -1.0, 1.0], &format!("{isa}/tanh(±inf)"));

        let mut a = vec![f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY];
        engine.logistic_cdf(&mut a);
        assert_close_f64(&a, &[0.0, 1.0, 0.0, 1.0], &format!("{isa}/sigmoid(±inf)"));

        let mut a = vec![f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY];
        engine.erf(&mut a);
        assert_close_f64(&a, &[-1.0, 1.0, -1.0, 1.0], &format!("{isa}/erf(±inf)"));

        let mut af = vec![f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY];
        engine.tanhf(&mut af);
        assert_close_f32(&af, &[-1.0, 1.0, -1.0, 1.0], &format!("{isa}/tanhf(±inf)"));
    }
}

// ============================================================================
// Memory discipline
// ============================================================================

#[test]
fn kernels_stay_inside_the_slice() {
    const CANARY: f32 = 123_456.75;
    for engine in detected_engines() {
        let lanes = tables_for(engine.instruction_set()).unwrap().f32_lanes;
        for n in [0, 1, lanes - 1, lanes, lanes + 1, 3 * lanes + 1] {
            let mut buf = vec![CANARY; n + 8];
            for (i, slot) in buf[4..4 + n].iter_mut().enumerate() {
                *slot = i as f32 * 0.25 - 1.0;
            }
            for (name, op) in UNARY_F32 {
                let mut work = buf.clone();
                op(&engine, &mut work[4..4 + n]);
                assert!(
                    work[..4].iter().chain(work[4 + n..].iter()).all(|c| *c == CANARY),
                    "{}/{name}/n={n}: wrote outside the slice",
                    engine.instruction_set()
                );
            }
        }
    }
}

#[test]
fn empty_slices_are_noops() {
    let engine = select_engine().unwrap();
    let mut a: [f64; 0] = [];
    for (_, op) in UNARY_F64 {
        op(&engine, &mut a);
    }
    let mut af: [f32; 0] = [];
    for (_, op) in UNARY_F32 {
        op(&engine, &mut af);
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

#[test]
fn select_engine_picks_highest_rank() {
    let sets = supported_instruction_sets().unwrap();
    let engine = select_engine().unwrap();
    assert_eq!(Some(engine.instruction_set()), sets.into_iter().max());
}

#[test]
fn scalar_is_always_supported() {
    assert!(supported_instruction_sets()
        .unwrap()
        .contains(&InstructionSet::Scalar));
}

#[test]
#[cfg(target_arch = "x86_64")]
fn foreign_tag_is_rejected() {
    assert_eq!(
        select_engine_for(InstructionSet::Neon).err(),
        Some(KernelError::UnsupportedInstructionSet(InstructionSet::Neon))
    );
}

#[test]
#[cfg(target_arch = "aarch64")]
fn foreign_tag_is_rejected() {
    assert_eq!(
        select_engine_for(InstructionSet::Avx2).err(),
        Some(KernelError::UnsupportedInstructionSet(InstructionSet::Avx2))
    );
}

#[test]
fn explicit_selection_matches_requested_tag() {
    for isa in supported_instruction_sets().unwrap() {
        let engine = select_engine_for(isa).unwrap();
        assert_eq!(engine.instruction_set(), isa);
    }
}
