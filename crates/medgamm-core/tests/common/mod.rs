#![allow(dead_code)]

use ndarray::{array, Array2};

use medgamm_core::frame::Frame;

/// The 2x2 reference image `[[0, 128], [255, 64]]`.
pub fn sample_2x2() -> Frame {
    Frame::new(array![[0u8, 128], [255, 64]])
}

/// Frame filled with a single intensity.
pub fn make_frame(h: usize, w: usize, fill: u8) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

/// Frame whose pixels walk through every intensity 0..=255 repeatedly.
pub fn make_ramp_frame(h: usize, w: usize) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(row, col)| {
        ((row * w + col) % 256) as u8
    }))
}

/// Gamma values on the interactive slider: 0.1, 0.2, ..., 3.0.
pub fn slider_gammas() -> Vec<f32> {
    (1..=30).map(|i| i as f32 / 10.0).collect()
}
