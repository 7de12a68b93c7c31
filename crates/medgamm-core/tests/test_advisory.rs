use medgamm_core::advisory::{GammaRegime, Severity};
use medgamm_core::filters::gamma::Gamma;

fn regime(v: f32) -> GammaRegime {
    GammaRegime::classify(Gamma::new(v).unwrap())
}

#[test]
fn test_regime_below_one() {
    assert_eq!(regime(0.1), GammaRegime::StretchDarks);
    assert_eq!(regime(0.9), GammaRegime::StretchDarks);
}

#[test]
fn test_regime_exactly_one() {
    assert_eq!(regime(1.0), GammaRegime::Identity);
}

#[test]
fn test_regime_above_one() {
    assert_eq!(regime(1.1), GammaRegime::StretchBrights);
    assert_eq!(regime(3.0), GammaRegime::StretchBrights);
}

#[test]
fn test_regimes_cover_slider_exclusively() {
    for i in 1..=30 {
        let v = i as f32 / 10.0;
        let r = regime(v);
        let expected = if i < 10 {
            GammaRegime::StretchDarks
        } else if i == 10 {
            GammaRegime::Identity
        } else {
            GammaRegime::StretchBrights
        };
        assert_eq!(r, expected, "gamma={v}");
    }
}

#[test]
fn test_severity_per_regime() {
    assert_eq!(GammaRegime::StretchDarks.severity(), Severity::Info);
    assert_eq!(GammaRegime::Identity.severity(), Severity::Success);
    assert_eq!(GammaRegime::StretchBrights.severity(), Severity::Warning);
}

#[test]
fn test_headline_and_advice_per_regime() {
    let g = Gamma::new(0.4).unwrap();
    let regime = GammaRegime::classify(g);
    assert_eq!(regime.headline(g), "Gamma < 1 (0.4)");
    assert!(regime.advice().contains("dark intervals"));

    let g = Gamma::new(2.5).unwrap();
    let regime = GammaRegime::classify(g);
    assert_eq!(regime.headline(g), "Gamma > 1 (2.5)");
    assert!(regime.advice().contains("washed out"));
}

#[test]
fn test_headline_does_not_round_gamma() {
    let g = Gamma::new(1.04).unwrap();
    assert_eq!(GammaRegime::classify(g).headline(g), "Gamma > 1 (1.04)");
    let g = Gamma::new(0.96).unwrap();
    assert_eq!(GammaRegime::classify(g).headline(g), "Gamma < 1 (0.96)");
}

#[test]
fn test_identity_advice() {
    let g = Gamma::new(1.0).unwrap();
    assert_eq!(GammaRegime::Identity.headline(g), "Gamma = 1");
    assert!(GammaRegime::Identity.advice().contains("No correction applied"));
}

#[test]
fn test_regime_display() {
    assert_eq!(format!("{}", GammaRegime::StretchDarks), "Stretch Darks");
    assert_eq!(format!("{}", GammaRegime::Identity), "Identity");
    assert_eq!(format!("{}", GammaRegime::StretchBrights), "Stretch Brights");
}
