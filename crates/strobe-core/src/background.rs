//! Background estimation by temporal averaging.
//!
//! The background is the per-pixel mean of every frame in the sequence,
//! accumulated in `f32` so repeated integer truncation cannot skew it. With
//! motion averaged out it approximates the static scene, and the compositor
//! measures every sampled frame against it.

use rayon::prelude::*;
use strobo_common::{StroboError, StroboResult};

use crate::frame::{sequence_dimensions, Frame, CHANNELS};

/// Per-pixel 3-channel `f32` temporal mean of a frame sequence.
///
/// Immutable after estimation; one background can serve many strobe
/// computations over the same sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Background {
    /// Estimate the background of a non-empty frame sequence.
    ///
    /// # Errors
    ///
    /// `EmptySequence` if `frames` is empty; `DimensionMismatch` if any
    /// frame's dimensions differ from the first frame's.
    pub fn estimate(frames: &[Frame]) -> StroboResult<Self> {
        let Some((width, height)) = sequence_dimensions(frames)? else {
            return Err(StroboError::EmptySequence);
        };

        let row_len = width as usize * CHANNELS;
        let mut data = vec![0.0f32; row_len * height as usize];

        // Rows are independent; frames within a row are accumulated in
        // sequence order, so the result is deterministic.
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, acc_row)| {
                for frame in frames {
                    let src_row = &frame.as_bytes()[y * row_len..][..row_len];
                    for (acc, &sample) in acc_row.iter_mut().zip(src_row) {
                        *acc += sample as f32;
                    }
                }
            });

        let scale = 1.0 / frames.len() as f32;
        for value in &mut data {
            *value *= scale;
        }

        tracing::debug!(
            frames = frames.len(),
            width,
            height,
            "estimated background"
        );

        Ok(Self {
            width,
            height,
            data,
        })
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

    /// Interleaved RGB means, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_frame_background_equals_frame() {
        let frame = Frame::new(2, 1, vec![10, 20, 30, 200, 150, 100]).unwrap();
        let background = Background::estimate(std::slice::from_ref(&frame)).unwrap();

        for (mean, &sample) in background.as_slice().iter().zip(frame.as_bytes()) {
            assert_eq!(*mean, sample as f32);
        }
    }

    #[test]
    fn two_frame_background_is_midpoint() {
        let frames = vec![
            Frame::filled(2, 2, [100, 0, 50]),
            Frame::filled(2, 2, [200, 50, 150]),
        ];
        let background = Background::estimate(&frames).unwrap();

        for pixel in background.as_slice().chunks(CHANNELS) {
            assert_eq!(pixel, [150.0, 25.0, 100.0]);
        }
    }

    #[test]
    fn background_is_order_independent() {
        let frames = vec![
            Frame::filled(3, 2, [10, 20, 30]),
            Frame::filled(3, 2, [90, 80, 70]),
            Frame::filled(3, 2, [55, 55, 55]),
        ];
        let mut reversed = frames.clone();
        reversed.reverse();

        let forward = Background::estimate(&frames).unwrap();
        let backward = Background::estimate(&reversed).unwrap();

        for (a, b) in forward.as_slice().iter().zip(backward.as_slice()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn empty_sequence_is_an_error() {
        assert!(matches!(
            Background::estimate(&[]),
            Err(StroboError::EmptySequence)
        ));
    }

    #[test]
    fn mismatched_frames_are_an_error() {
        let frames = vec![Frame::filled(2, 2, [0; 3]), Frame::filled(2, 3, [0; 3])];
        assert!(matches!(
            Background::estimate(&frames),
            Err(StroboError::DimensionMismatch { .. })
        ));
    }
}
