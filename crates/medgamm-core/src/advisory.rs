use std::fmt;

use crate::filters::gamma::Gamma;

/// Which side of the identity a gamma value falls on.
///
/// The three variants are exclusive and cover every valid gamma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GammaRegime {
    /// gamma < 1: dark intervals are stretched.
    StretchDarks,
    /// gamma = 1: no correction.
    Identity,
    /// gamma > 1: bright intervals are stretched.
    StretchBrights,
}

/// How prominently an advisory should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl GammaRegime {
    pub fn classify(gamma: Gamma) -> Self {
        if gamma.is_identity() {
            GammaRegime::Identity
        } else if gamma.value() < 1.0 {
            GammaRegime::StretchDarks
        } else {
            GammaRegime::StretchBrights
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            GammaRegime::StretchDarks => Severity::Info,
            GammaRegime::Identity => Severity::Success,
            GammaRegime::StretchBrights => Severity::Warning,
        }
    }

    pub fn headline(self, gamma: Gamma) -> String {
        match self {
            GammaRegime::StretchDarks => format!("Gamma < 1 ({gamma})"),
            GammaRegime::Identity => "Gamma = 1".to_string(),
            GammaRegime::StretchBrights => format!("Gamma > 1 ({gamma})"),
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            GammaRegime::StretchDarks => {
                "Stretches the dark intervals. Use this to look for detail in shadowed \
                 areas or in underexposed scans."
            }
            GammaRegime::Identity => "No correction applied. This is the raw sensor data.",
            GammaRegime::StretchBrights => {
                "Stretches the bright intervals. Use this when the scan is washed out \
                 (overexposed) to see density variation better."
            }
        }
    }
}

impl fmt::Display for GammaRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GammaRegime::StretchDarks => write!(f, "Stretch Darks"),
            GammaRegime::Identity => write!(f, "Identity"),
            GammaRegime::StretchBrights => write!(f, "Stretch Brights"),
        }
    }
}

/// Background text shown before an image is opened.
pub const INTRO_TEXT: &str = "The human eye responds to light roughly logarithmically, \
while imaging sensors respond linearly. Gamma correction redistributes intensities so \
that detail hidden in the darkest or brightest parts of a scan becomes visible on screen.";
