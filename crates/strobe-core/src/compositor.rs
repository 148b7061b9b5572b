//! Strobe composition: per-pixel maximum-deviation selection.
//!
//! # Algorithm
//!
//! 1. **Sample** frames at indices `offset, offset + stride, …`.
//! 2. **Deviation**: per sampled frame, the signed `f32` difference from the
//!    background at every pixel/channel.
//! 3. **Selection**: score each pixel with a luma-weighted grayscale of the
//!    absolute deviations; a strictly greater score replaces the recorded
//!    deviation, so ties keep the earliest sampled frame.
//! 4. **Composition**: background plus the winning deviations, clamped and
//!    truncated to 8-bit.
//!
//! The grayscale score picks all three channels from the same source frame,
//! which avoids channel-mixing artifacts at motion edges.

use rayon::prelude::*;
use strobo_common::{StroboError, StroboResult};

use crate::background::Background;
use crate::frame::{sequence_dimensions, Frame, CHANNELS};

// Luma weights applied to the absolute per-channel deviation. These match
// OpenCV's RGB2GRAY coefficients and are kept bit-exact: a different norm
// changes which frame wins at tie-adjacent pixels.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// An 8-bit composite image: background plus the strongest observed
/// deviations.
///
/// Stored as interleaved RGB; [`StrobeImage::rgba_bytes`] yields the
/// 4-channel opaque-alpha form when the sink wants one. A 0×0 image is the
/// defined result of composing an empty frame sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrobeImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl StrobeImage {
    /// The empty image produced for an empty frame sequence.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height) pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Interleaved RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB sample at (x, y). Panics if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ]
    }

    /// Consume the image, returning its RGB buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Interleaved RGBA bytes with a fully opaque alpha channel.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() / CHANNELS * 4);
        for rgb in self.pixels.chunks_exact(CHANNELS) {
            out.extend_from_slice(rgb);
            out.push(u8::MAX);
        }
        out
    }
}

/// Per-composition scratch: the strongest signed deviation seen so far at
/// each pixel, and its grayscale magnitude. Freshly zeroed for every
/// composition so independent calls cannot observe each other.
struct DeviationState {
    /// Signed per-channel deviation, 3 per pixel.
    deviation: Vec<f32>,
    /// Grayscale deviation magnitude, 1 per pixel.
    magnitude: Vec<f32>,
}

impl DeviationState {
    fn zeroed(pixel_count: usize) -> Self {
        Self {
            deviation: vec![0.0; pixel_count * CHANNELS],
            magnitude: vec![0.0; pixel_count],
        }
    }
}

/// A composition session over one frame sequence and one background.
///
/// Construction validates dimensions once; afterwards any number of strobe
/// images or series can be composed against the shared, read-only inputs.
pub struct StrobeCompositor<'a> {
    frames: &'a [Frame],
    background: &'a Background,
}

impl<'a> StrobeCompositor<'a> {
    /// Create a session.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the frames do not all share the first frame's
    /// dimensions, or if the background's dimensions differ from them. An
    /// empty sequence is accepted; composing over it yields
    /// [`StrobeImage::empty`].
    pub fn new(frames: &'a [Frame], background: &'a Background) -> StroboResult<Self> {
        if let Some(dims) = sequence_dimensions(frames)? {
            if background.dimensions() != dims {
                return Err(StroboError::dimension_mismatch(
                    dims,
                    background.dimensions(),
                ));
            }
        }
        Ok(Self { frames, background })
    }

    /// Compose one strobe image from the frames at `offset, offset + stride, …`.
    ///
    /// An empty frame sequence short-circuits to an empty image. An empty
    /// sample set (`offset >= frame count`) yields the background converted
    /// to 8-bit. Both are defined results, not errors.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `stride < 1` or `offset >= stride`.
    pub fn compose(&self, stride: usize, offset: usize) -> StroboResult<StrobeImage> {
        if stride < 1 {
            return Err(StroboError::invalid_parameter(format!(
                "stride must be at least 1, got {stride}"
            )));
        }
        if offset >= stride {
            return Err(StroboError::invalid_parameter(format!(
                "offset {offset} must be below stride {stride}"
            )));
        }
        if self.frames.is_empty() {
            return Ok(StrobeImage::empty());
        }

        let (width, height) = self.frames[0].dimensions();
        let row_px = width as usize;
        let row_len = row_px * CHANNELS;
        let mut state = DeviationState::zeroed(row_px * height as usize);

        state
            .deviation
            .par_chunks_mut(row_len)
            .zip(state.magnitude.par_chunks_mut(row_px))
            .enumerate()
            .for_each(|(y, (dev_row, mag_row))| {
                let bg_row = &self.background.as_slice()[y * row_len..][..row_len];
                let mut index = offset;
                while index < self.frames.len() {
                    let frame_row = &self.frames[index].as_bytes()[y * row_len..][..row_len];
                    for x in 0..row_px {
                        let i = x * CHANNELS;
                        let dr = frame_row[i] as f32 - bg_row[i];
                        let dg = frame_row[i + 1] as f32 - bg_row[i + 1];
                        let db = frame_row[i + 2] as f32 - bg_row[i + 2];
                        let mag = LUMA_R * dr.abs() + LUMA_G * dg.abs() + LUMA_B * db.abs();
                        // Strict comparison: ties keep the earliest frame.
                        if mag > mag_row[x] {
                            mag_row[x] = mag;
                            dev_row[i] = dr;
                            dev_row[i + 1] = dg;
                            dev_row[i + 2] = db;
                        }
                    }
                    index += stride;
                }
            });

        let mut pixels = vec![0u8; row_len * height as usize];
        pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, out_row)| {
                let bg_row = &self.background.as_slice()[y * row_len..][..row_len];
                let dev_row = &state.deviation[y * row_len..][..row_len];
                for ((out, &bg), &dev) in out_row.iter_mut().zip(bg_row).zip(dev_row) {
                    *out = (bg + dev).clamp(0.0, 255.0) as u8;
                }
            });

        tracing::debug!(stride, offset, width, height, "composed strobe image");

        Ok(StrobeImage {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn frames(&self) -> &[Frame] {
        self.frames
    }
}
