use std::fmt;

use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{GAMMA_IDENTITY_TOLERANCE, LUT_SIZE, MAX_INTENSITY};
use crate::error::{MedGammError, Result};
use crate::frame::Frame;

/// A validated gamma exponent: finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Gamma(f32);

impl Gamma {
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MedGammError::InvalidParameter { gamma: value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Exponent actually applied to normalized intensities.
    pub fn inverse(self) -> f64 {
        1.0 / self.0 as f64
    }

    pub fn is_identity(self) -> bool {
        (self.0 - 1.0).abs() <= GAMMA_IDENTITY_TOLERANCE
    }
}

/// Shortest exact form: `2.0`, `0.5`, `1.04`.
impl fmt::Display for Gamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// How a floating-point table value is converted back to an 8-bit level.
///
/// `Truncate` reproduces the classic cast-to-uint8 table and is the default.
/// `Round` picks the nearest level; the two differ by at most one level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingPolicy {
    #[default]
    Truncate,
    Round,
}

impl RoundingPolicy {
    fn quantize(self, value: f64) -> u8 {
        let value = match self {
            RoundingPolicy::Truncate => value.trunc(),
            RoundingPolicy::Round => value.round(),
        };
        value.clamp(0.0, MAX_INTENSITY) as u8
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingPolicy::Truncate => write!(f, "Truncate"),
            RoundingPolicy::Round => write!(f, "Round"),
        }
    }
}

/// 256-entry power-law lookup table: `out = (in / 255)^(1/gamma) * 255`.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaLut {
    gamma: Gamma,
    policy: RoundingPolicy,
    table: [u8; LUT_SIZE],
}

impl GammaLut {
    pub fn new(gamma: f32) -> Result<Self> {
        Self::with_policy(gamma, RoundingPolicy::default())
    }

    pub fn with_policy(gamma: f32, policy: RoundingPolicy) -> Result<Self> {
        let gamma = Gamma::new(gamma)?;
        Ok(Self::from_gamma(gamma, policy))
    }

    pub fn from_gamma(gamma: Gamma, policy: RoundingPolicy) -> Self {
        let mut table = [0u8; LUT_SIZE];

        if gamma.is_identity() {
            // Exact identity; (i / 255) * 255 is not always exactly i in floating point.
            for (i, entry) in table.iter_mut().enumerate() {
                *entry = i as u8;
            }
        } else {
            let inv_gamma = gamma.inverse();
            for (i, entry) in table.iter_mut().enumerate() {
                let normalized = i as f64 / MAX_INTENSITY;
                *entry = policy.quantize(normalized.powf(inv_gamma) * MAX_INTENSITY);
            }
        }

        debug!(gamma = gamma.value(), %policy, "built gamma lookup table");

        Self {
            gamma,
            policy,
            table,
        }
    }

    pub fn gamma(&self) -> Gamma {
        self.gamma
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    pub fn table(&self) -> &[u8; LUT_SIZE] {
        &self.table
    }

    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Map every pixel through the table into a new frame of the same shape.
    pub fn apply(&self, frame: &Frame) -> Frame {
        Frame::new(frame.data.mapv(|v| self.lookup(v)))
    }
}

/// Apply gamma correction with the default (truncating) table.
///
/// gamma > 1.0 brightens midtones, gamma < 1.0 darkens them.
pub fn gamma_transform(frame: &Frame, gamma: f32) -> Result<Frame> {
    gamma_transform_with(frame, gamma, RoundingPolicy::default())
}

pub fn gamma_transform_with(frame: &Frame, gamma: f32, policy: RoundingPolicy) -> Result<Frame> {
    let lut = GammaLut::with_policy(gamma, policy)?;
    Ok(lut.apply(frame))
}

/// Apply gamma correction to an untyped sample array.
///
/// The gamma is validated first, then the array must be `(rows, cols)` or
/// `(rows, cols, 1)`.
pub fn gamma_transform_array(samples: ArrayViewD<'_, u8>, gamma: f32) -> Result<Frame> {
    let lut = GammaLut::new(gamma)?;
    let frame = Frame::from_view(samples)?;
    Ok(lut.apply(&frame))
}
