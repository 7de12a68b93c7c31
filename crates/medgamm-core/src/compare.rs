use tracing::debug;

use crate::advisory::GammaRegime;
use crate::error::Result;
use crate::filters::gamma::{Gamma, GammaLut, RoundingPolicy};
use crate::filters::histogram::{Histogram, ImageStats};
use crate::frame::Frame;

/// Everything needed to show an original/corrected pair side by side.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub gamma: Gamma,
    pub regime: GammaRegime,
    pub original: Frame,
    pub corrected: Frame,
    pub original_histogram: Histogram,
    pub corrected_histogram: Histogram,
    pub original_stats: Option<ImageStats>,
    pub corrected_stats: Option<ImageStats>,
}

/// Correct `image` with `gamma` and gather both histograms.
///
/// Stateless: the same `(image, gamma, policy)` always yields the same result.
pub fn compare(image: &Frame, gamma: f32, policy: RoundingPolicy) -> Result<Comparison> {
    let lut = GammaLut::with_policy(gamma, policy)?;
    let corrected = lut.apply(image);

    let original_histogram = Histogram::from_frame(image);
    let corrected_histogram = Histogram::from_frame(&corrected);
    let gamma = lut.gamma();
    let regime = GammaRegime::classify(gamma);

    debug!(
        gamma = gamma.value(),
        %regime,
        width = image.width(),
        height = image.height(),
        "comparison computed"
    );

    Ok(Comparison {
        gamma,
        regime,
        original: image.clone(),
        corrected,
        original_stats: ImageStats::from_histogram(&original_histogram),
        corrected_stats: ImageStats::from_histogram(&corrected_histogram),
        original_histogram,
        corrected_histogram,
    })
}
