//! Backend equivalence tests
//!
//! Every backend must return what the scalar reference returns: same
//! values, same signed zeros, NaN in the same positions.

mod common;

use common::*;
use vecops_core::{best_available_backend, KernelPrimitives, ScalarBackend, Stride};

/// Bitwise equality for non-NaN values, NaN matching any NaN
fn identical(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        a.is_nan() && b.is_nan()
    } else {
        a.to_bits() == b.to_bits()
    }
}

fn assert_identical(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(identical(a, e), "{context}: index {i} got {a:?}, expected {e:?}");
    }
}

/// Run every kernel on `backend` and compare with the scalar reference
fn check_against_scalar<B: KernelPrimitives>(backend: &B, len: usize) {
    let scalar = ScalarBackend::new();
    let name = backend.backend_name();

    for offset in [0, 2] {
        let a = generate_special_data(len, offset);
        let b = generate_special_data(len + 1, offset + 3);
        let ctx = |op: &str| format!("{name} {op} len={len} offset={offset}");

        for (op, got, want) in [
            ("abs_sum", backend.abs_sum(&a), scalar.abs_sum(&a)),
            ("sum", backend.sum(&a), scalar.sum(&a)),
            ("dot", backend.dot(&a, &b), scalar.dot(&a, &b)),
            ("l1_norm", backend.l1_norm(&a, &b), scalar.l1_norm(&a, &b)),
            ("linf_norm", backend.linf_norm(&a, &b), scalar.linf_norm(&a, &b)),
            ("l2_norm", backend.l2_norm(&a), scalar.l2_norm(&a)),
            ("l2_distance", backend.l2_distance(&a, &b), scalar.l2_distance(&a, &b)),
        ] {
            assert!(identical(got, want), "{}: got {got:?}, expected {want:?}", ctx(op));
        }

        let mut got = a.clone();
        let mut want = a.clone();
        backend.add_const(-1.5, &mut got);
        scalar.add_const(-1.5, &mut want);
        assert_identical(&got, &want, &ctx("add_const"));

        backend.add(&mut got, &b);
        scalar.add(&mut want, &b);
        assert_identical(&got, &want, &ctx("add"));

        backend.scale(-0.0, &mut got);
        scalar.scale(-0.0, &mut want);
        assert_identical(&got, &want, &ctx("scale"));

        let mut got = a.clone();
        let mut want = a.clone();
        backend.axpy(3.0, &b, &mut got);
        scalar.axpy(3.0, &b, &mut want);
        assert_identical(&got, &want, &ctx("axpy"));

        backend.div(&mut got, &b);
        scalar.div(&mut want, &b);
        assert_identical(&got, &want, &ctx("div"));

        let mut got = vec![0.0; len + 2];
        let mut want = vec![0.0; len + 2];
        let n = backend.div_to(&mut got, &a, &b).len();
        scalar.div_to(&mut want, &a, &b);
        assert_eq!(n, len);
        assert_identical(&got, &want, &ctx("div_to"));

        backend.axpy_to(&mut got, -2.0, &b, &a);
        scalar.axpy_to(&mut want, -2.0, &b, &a);
        assert_identical(&got, &want, &ctx("axpy_to"));

        backend.cum_sum(&mut got, &a);
        scalar.cum_sum(&mut want, &a);
        assert_identical(&got, &want, &ctx("cum_sum"));

        backend.cum_prod(&mut got, &b);
        scalar.cum_prod(&mut want, &b);
        assert_identical(&got, &want, &ctx("cum_prod"));

        let s = Stride::unit(len / 2);
        assert!(identical(backend.abs_sum_inc(&a, s), scalar.abs_sum_inc(&a, s)));
        if let Ok(s) = Stride::new(len / 3, 3) {
            assert!(identical(backend.sum_inc(&a, s), scalar.sum_inc(&a, s)));
            assert!(identical(backend.l2_norm_inc(&a, s), scalar.l2_norm_inc(&a, s)));
        }
    }
}

#[test]
fn test_auto_backend_matches_scalar() {
    let backend = best_available_backend();
    for len in edge_case_lengths() {
        check_against_scalar(&backend, len);
    }
}

#[test]
fn test_linf_norm_nan_in_every_lane_position() {
    let scalar = ScalarBackend::new();
    let backend = best_available_backend();
    for len in [4, 8, 9, 16] {
        for pos in 0..len {
            let mut s: Vec<f64> = (0..len).map(|i| i as f64).collect();
            s[pos] = NAN;
            let t = vec![0.5; len];
            let got = backend.linf_norm(&s, &t);
            assert!(got.is_nan(), "len={len} pos={pos}: got {got}");
            assert!(identical(got, scalar.linf_norm(&s, &t)));
        }
    }
}

#[test]
fn test_backend_name_is_known() {
    let name = best_available_backend().backend_name();
    assert!(["scalar", "avx2"].contains(&name), "unexpected backend {name}");
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod avx2 {
    use super::*;
    use vecops_core::Avx2Backend;

    #[test]
    fn test_avx2_matches_scalar() {
        if !Avx2Backend::is_available() {
            eprintln!("Skipping AVX2 test - CPU doesn't support AVX2");
            return;
        }
        let backend = Avx2Backend::new();
        assert_eq!(backend.simd_width(), 4);
        for len in edge_case_lengths() {
            check_against_scalar(&backend, len);
        }
    }

    #[test]
    fn test_avx2_guards_intact() {
        if !Avx2Backend::is_available() {
            return;
        }
        let backend = Avx2Backend::new();
        for len in edge_case_lengths() {
            let config = GuardConfig::default().with_sentinel(NAN);
            let src = Guarded::new(&generate_test_data_complement(len), config);
            let mut dst = Guarded::new(&generate_test_data(len), config);
            backend.add(dst.as_mut_slice(), src.as_slice());
            backend.div(dst.as_mut_slice(), src.as_slice());
            backend.add_const(2.0, dst.as_mut_slice());
            backend.scale(0.5, dst.as_mut_slice());
            backend.axpy(1.0, src.as_slice(), dst.as_mut_slice());
            assert!(!backend.linf_norm(dst.as_slice(), src.as_slice()).is_nan());
            dst.check().unwrap();
            src.check().unwrap();

            let mut out = Guarded::new(&vec![0.0; len], config);
            backend.div_to(out.as_mut_slice(), dst.as_slice(), src.as_slice());
            backend.axpy_to(out.as_mut_slice(), 2.0, dst.as_slice(), src.as_slice());
            out.check().unwrap();
        }
    }
}
