use std::fmt::Write;

use crate::consts::HISTOGRAM_BINS;
use crate::frame::Frame;

/// Intensity histogram of an 8-bit frame: bin `i` counts pixels equal to `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; HISTOGRAM_BINS],
        }
    }
}

impl Histogram {
    pub fn from_frame(frame: &Frame) -> Self {
        let mut hist = Self::default();
        for &v in frame.data.iter() {
            hist.counts[v as usize] += 1;
        }
        hist
    }

    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// First non-empty bin.
    pub fn min_intensity(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Last non-empty bin.
    pub fn max_intensity(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Most populated bin as `(intensity, count)`. Ties resolve to the darker bin.
    pub fn peak(&self) -> Option<(u8, u64)> {
        if self.is_empty() {
            return None;
        }
        let mut best = (0u8, 0u64);
        for (i, &c) in self.counts.iter().enumerate() {
            if c > best.1 {
                best = (i as u8, c);
            }
        }
        Some(best)
    }

    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum();
        Some(sum / total as f64)
    }

    /// `intensity,count` rows with a header line.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("intensity,count\n");
        for (i, c) in self.counts.iter().enumerate() {
            let _ = writeln!(out, "{i},{c}");
        }
        out
    }
}

/// Summary statistics shown under the corrected image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
    pub pixel_count: usize,
}

impl ImageStats {
    pub fn from_histogram(hist: &Histogram) -> Option<Self> {
        Some(Self {
            min: hist.min_intensity()?,
            max: hist.max_intensity()?,
            mean: hist.mean()?,
            pixel_count: hist.total() as usize,
        })
    }

    /// `None` only for a frame with no pixels.
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        Self::from_histogram(&Histogram::from_frame(frame))
    }
}
