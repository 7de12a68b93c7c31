use ndarray::{Array2, ArrayViewD, Axis, Ix2};

use crate::error::{MedGammError, Result};

/// A single-channel 8-bit intensity image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl Frame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Build a frame from interleaved raw samples.
    ///
    /// Only `channels == 1` is accepted; color data must be converted to
    /// luma by the decoder before it reaches the core.
    pub fn from_raw(width: usize, height: usize, channels: usize, samples: Vec<u8>) -> Result<Self> {
        if channels != 1 {
            return Err(MedGammError::InvalidInput(format!(
                "expected 1 channel, got {channels}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(MedGammError::InvalidInput(format!(
                "empty image ({width}x{height})"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            MedGammError::InvalidInput(format!("image too large ({width}x{height})"))
        })?;
        if samples.len() != expected {
            return Err(MedGammError::InvalidInput(format!(
                "expected {expected} samples for {width}x{height}, got {}",
                samples.len()
            )));
        }

        let data = Array2::from_shape_vec((height, width), samples)
            .map_err(|e| MedGammError::InvalidInput(e.to_string()))?;
        Ok(Self::new(data))
    }

    /// Build a frame from an n-dimensional sample array.
    ///
    /// Accepts shape `(rows, cols)` or `(rows, cols, 1)`.
    pub fn from_view(view: ArrayViewD<'_, u8>) -> Result<Self> {
        let shape = view.shape().to_vec();
        let plane = match shape.as_slice() {
            [_, _] => view,
            [_, _, 1] => view.index_axis_move(Axis(2), 0),
            [_, _, c] => {
                return Err(MedGammError::InvalidInput(format!(
                    "expected 1 channel, got {c}"
                )))
            }
            _ => {
                return Err(MedGammError::InvalidInput(format!(
                    "expected a 2-D array, got shape {shape:?}"
                )))
            }
        };

        if plane.is_empty() {
            return Err(MedGammError::InvalidInput(format!(
                "empty image (shape {shape:?})"
            )));
        }

        let plane = plane
            .into_dimensionality::<Ix2>()
            .map_err(|e| MedGammError::InvalidInput(e.to_string()))?;
        Ok(Self::new(plane.to_owned()))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}
