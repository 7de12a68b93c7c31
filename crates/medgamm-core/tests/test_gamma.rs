mod common;

use ndarray::{array, Array3, ArrayD, IxDyn};

use medgamm_core::error::MedGammError;
use medgamm_core::filters::gamma::{
    gamma_transform, gamma_transform_array, gamma_transform_with, Gamma, GammaLut, RoundingPolicy,
};

use common::{make_frame, make_ramp_frame, sample_2x2, slider_gammas};

// ---------------------------------------------------------------------------
// Gamma validation
// ---------------------------------------------------------------------------

#[test]
fn test_gamma_rejects_zero() {
    assert!(matches!(
        Gamma::new(0.0),
        Err(MedGammError::InvalidParameter { .. })
    ));
}

#[test]
fn test_gamma_rejects_negative() {
    assert!(matches!(
        Gamma::new(-1.0),
        Err(MedGammError::InvalidParameter { gamma }) if gamma == -1.0
    ));
}

#[test]
fn test_gamma_rejects_non_finite() {
    assert!(Gamma::new(f32::NAN).is_err());
    assert!(Gamma::new(f32::INFINITY).is_err());
    assert!(Gamma::new(f32::NEG_INFINITY).is_err());
}

#[test]
fn test_gamma_accepts_outside_slider_range() {
    assert!(Gamma::new(0.01).is_ok());
    assert!(Gamma::new(10.0).is_ok());
}

#[test]
fn test_gamma_display_whole_and_half() {
    assert_eq!(format!("{}", Gamma::new(2.0).unwrap()), "2.0");
    assert_eq!(format!("{}", Gamma::new(0.5).unwrap()), "0.5");
}

#[test]
fn test_gamma_display_keeps_full_precision() {
    assert_eq!(format!("{}", Gamma::new(1.04).unwrap()), "1.04");
    assert_eq!(format!("{}", Gamma::new(0.96).unwrap()), "0.96");
}

// ---------------------------------------------------------------------------
// gamma_transform errors
// ---------------------------------------------------------------------------

#[test]
fn test_transform_zero_gamma_is_invalid_parameter() {
    let frame = sample_2x2();
    let err = gamma_transform(&frame, 0.0).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidParameter { .. }), "got {err}");
}

#[test]
fn test_transform_negative_gamma_is_invalid_parameter() {
    let frame = sample_2x2();
    let err = gamma_transform(&frame, -1.0).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidParameter { .. }), "got {err}");
}

#[test]
fn test_transform_array_rejects_three_channels() {
    let rgb = Array3::<u8>::zeros((4, 4, 3)).into_dyn();
    let err = gamma_transform_array(rgb.view(), 1.5).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_transform_array_rejects_one_dimensional() {
    let line = ArrayD::<u8>::zeros(IxDyn(&[16]));
    let err = gamma_transform_array(line.view(), 1.5).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_transform_array_rejects_four_dimensional() {
    let volume = ArrayD::<u8>::zeros(IxDyn(&[2, 2, 1, 1]));
    let err = gamma_transform_array(volume.view(), 1.5).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_transform_array_checks_gamma_before_input() {
    let rgb = Array3::<u8>::zeros((4, 4, 3)).into_dyn();
    let err = gamma_transform_array(rgb.view(), 0.0).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidParameter { .. }), "got {err}");
}

#[test]
fn test_transform_array_accepts_trailing_single_channel() {
    let mut data = Array3::<u8>::zeros((2, 3, 1));
    data[[1, 2, 0]] = 255;
    let out = gamma_transform_array(data.into_dyn().view(), 2.0).unwrap();
    assert_eq!(out.height(), 2);
    assert_eq!(out.width(), 3);
    assert_eq!(out.data[[1, 2]], 255);
    assert_eq!(out.data[[0, 0]], 0);
}

// ---------------------------------------------------------------------------
// Lookup table properties
// ---------------------------------------------------------------------------

#[test]
fn test_identity_table_at_gamma_one() {
    for policy in [RoundingPolicy::Truncate, RoundingPolicy::Round] {
        let lut = GammaLut::with_policy(1.0, policy).unwrap();
        for (i, &v) in lut.table().iter().enumerate() {
            assert_eq!(v as usize, i, "policy {policy}: table[{i}] = {v}");
        }
    }
}

#[test]
fn test_table_monotonic_for_all_slider_values() {
    let mut gammas = slider_gammas();
    gammas.extend([0.05, 0.37, 4.5, 12.0]);
    for gamma in gammas {
        for policy in [RoundingPolicy::Truncate, RoundingPolicy::Round] {
            let lut = GammaLut::with_policy(gamma, policy).unwrap();
            for pair in lut.table().windows(2) {
                assert!(
                    pair[0] <= pair[1],
                    "gamma={gamma} policy={policy}: {} > {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn test_table_endpoints_fixed() {
    for gamma in slider_gammas() {
        let lut = GammaLut::new(gamma).unwrap();
        assert_eq!(lut.lookup(0), 0, "gamma={gamma}");
        assert_eq!(lut.lookup(255), 255, "gamma={gamma}");
    }
}

#[test]
fn test_table_deterministic() {
    let a = GammaLut::new(1.7).unwrap();
    let b = GammaLut::new(1.7).unwrap();
    assert_eq!(a.table(), b.table());
    assert_eq!(a, b);
}

#[test]
fn test_truncate_and_round_differ_by_at_most_one() {
    for gamma in slider_gammas() {
        let t = GammaLut::with_policy(gamma, RoundingPolicy::Truncate).unwrap();
        let r = GammaLut::with_policy(gamma, RoundingPolicy::Round).unwrap();
        for (a, b) in t.table().iter().zip(r.table().iter()) {
            assert!(*b >= *a && *b - *a <= 1, "gamma={gamma}: {a} vs {b}");
        }
    }
}

#[test]
fn test_table_known_values_gamma_two() {
    // sqrt(64/255) * 255 = 127.75, sqrt(128/255) * 255 = 180.67
    let t = GammaLut::with_policy(2.0, RoundingPolicy::Truncate).unwrap();
    assert_eq!(t.lookup(64), 127);
    assert_eq!(t.lookup(128), 180);

    let r = GammaLut::with_policy(2.0, RoundingPolicy::Round).unwrap();
    assert_eq!(r.lookup(64), 128);
    assert_eq!(r.lookup(128), 181);
}

#[test]
fn test_lut_reports_parameters() {
    let lut = GammaLut::with_policy(0.8, RoundingPolicy::Round).unwrap();
    assert_eq!(lut.gamma().value(), 0.8);
    assert_eq!(lut.policy(), RoundingPolicy::Round);
}

#[test]
fn test_default_policy_is_truncate() {
    assert_eq!(RoundingPolicy::default(), RoundingPolicy::Truncate);
}

// ---------------------------------------------------------------------------
// gamma_transform
// ---------------------------------------------------------------------------

#[test]
fn test_transform_identity_exact() {
    let ramp = make_ramp_frame(16, 33);
    let out = gamma_transform(&ramp, 1.0).unwrap();
    assert_eq!(out, ramp);
}

#[test]
fn test_transform_preserves_shape() {
    let ramp = make_ramp_frame(7, 13);
    for gamma in slider_gammas() {
        let out = gamma_transform(&ramp, gamma).unwrap();
        assert_eq!(out.data.dim(), ramp.data.dim(), "gamma={gamma}");
    }
}

#[test]
fn test_transform_does_not_mutate_input() {
    let frame = sample_2x2();
    let before = frame.clone();
    let _ = gamma_transform(&frame, 2.5).unwrap();
    assert_eq!(frame, before);
}

#[test]
fn test_transform_gamma_two_scenario() {
    let frame = sample_2x2();
    let out = gamma_transform(&frame, 2.0).unwrap();
    assert_eq!(out.data, array![[0u8, 180], [255, 127]]);

    let rounded = gamma_transform_with(&frame, 2.0, RoundingPolicy::Round).unwrap();
    assert_eq!(rounded.data, array![[0u8, 181], [255, 128]]);
}

#[test]
fn test_transform_gamma_half_darkens_midtones() {
    // (128/255)^2 * 255 = 64.25
    let frame = sample_2x2();
    let out = gamma_transform(&frame, 0.5).unwrap();
    assert_eq!(out.data[[0, 0]], 0);
    assert_eq!(out.data[[1, 0]], 255);
    assert!(out.data[[0, 1]] < 128, "got {}", out.data[[0, 1]]);
    assert_eq!(out.data[[0, 1]], 64);
}

#[test]
fn test_transform_direction_matches_regime() {
    let frame = make_frame(4, 4, 100);
    let brighter = gamma_transform(&frame, 2.2).unwrap();
    let darker = gamma_transform(&frame, 0.4).unwrap();
    assert!(brighter.data.iter().all(|&v| v > 100));
    assert!(darker.data.iter().all(|&v| v < 100));
}

#[test]
fn test_transform_preserves_ordering() {
    let ramp = make_ramp_frame(1, 256);
    let out = gamma_transform(&ramp, 0.3).unwrap();
    let row: Vec<u8> = out.data.row(0).to_vec();
    assert!(row.windows(2).all(|w| w[0] <= w[1]));
}
