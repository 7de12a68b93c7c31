/// Lower bound of the interactive gamma slider.
pub const GAMMA_MIN: f32 = 0.1;

/// Upper bound of the interactive gamma slider.
pub const GAMMA_MAX: f32 = 3.0;

/// Slider increment for gamma.
pub const GAMMA_STEP: f32 = 0.1;

/// Gamma shown when an image is first opened (no correction).
pub const GAMMA_DEFAULT: f32 = 1.0;

/// Distance from 1.0 within which gamma is treated as the identity transform.
pub const GAMMA_IDENTITY_TOLERANCE: f32 = 1e-6;

/// Number of distinct 8-bit intensities, and therefore lookup table entries.
pub const LUT_SIZE: usize = 256;

/// Number of histogram bins, one per 8-bit intensity over [0, 256).
pub const HISTOGRAM_BINS: usize = 256;

/// Largest 8-bit intensity as a float, used to normalize into [0.0, 1.0].
pub const MAX_INTENSITY: f64 = 255.0;
