//! Strobe series generation: one image per phase offset.

use rayon::prelude::*;
use strobo_common::{StroboError, StroboResult};

use crate::compositor::{StrobeCompositor, StrobeImage};

/// An ordered set of strobe images, one per phase offset in `0..stride`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrobeSeries {
    stride: usize,
    images: Vec<StrobeImage>,
}

impl StrobeSeries {
    /// The stride the series was generated with.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of images; always equals the stride.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The image for phase offset `k`.
    pub fn get(&self, offset: usize) -> Option<&StrobeImage> {
        self.images.get(offset)
    }

    pub fn images(&self) -> &[StrobeImage] {
        &self.images
    }

    pub fn into_images(self) -> Vec<StrobeImage> {
        self.images
    }
}

/// Generate the full strobe series for a stride: image `k` equals
/// [`StrobeCompositor::compose`] with `offset = k`, for `k` in `0..stride`.
///
/// Offsets are computed in parallel; each gets fresh working state and reads
/// only the shared immutable frames and background, so the output is
/// identical to composing the offsets one by one.
///
/// # Errors
///
/// `InvalidParameter` if `stride < 1`. Any failing offset fails the whole
/// series; no partial series is returned.
pub fn generate_strobe_series(
    compositor: &StrobeCompositor<'_>,
    stride: usize,
) -> StroboResult<StrobeSeries> {
    if stride < 1 {
        return Err(StroboError::invalid_parameter(format!(
            "stride must be at least 1, got {stride}"
        )));
    }

    let images = (0..stride)
        .into_par_iter()
        .map(|offset| compositor.compose(stride, offset))
        .collect::<StroboResult<Vec<_>>>()?;

    tracing::debug!(stride, frames = compositor.frames().len(), "generated strobe series");

    Ok(StrobeSeries { stride, images })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::Background;
    use crate::frame::Frame;

    fn ramp_frames() -> Vec<Frame> {
        (0..6u8)
            .map(|i| Frame::filled(4, 3, [i * 40, 255 - i * 40, 10 + i * 7]))
            .collect()
    }

    #[test]
    fn series_has_exactly_stride_images() {
        let frames = ramp_frames();
        let background = Background::estimate(&frames).unwrap();
        let compositor = StrobeCompositor::new(&frames, &background).unwrap();

        for stride in 1..5 {
            let series = generate_strobe_series(&compositor, stride).unwrap();
            assert_eq!(series.len(), stride);
            assert_eq!(series.stride(), stride);
        }
    }

    #[test]
    fn series_images_match_standalone_composition() {
        let frames = ramp_frames();
        let background = Background::estimate(&frames).unwrap();
        let compositor = StrobeCompositor::new(&frames, &background).unwrap();

        let stride = 4;
        let series = generate_strobe_series(&compositor, stride).unwrap();
        for offset in 0..stride {
            let standalone = compositor.compose(stride, offset).unwrap();
            assert_eq!(series.get(offset), Some(&standalone));
        }
    }

    #[test]
    fn zero_stride_is_rejected() {
        let frames = ramp_frames();
        let background = Background::estimate(&frames).unwrap();
        let compositor = StrobeCompositor::new(&frames, &background).unwrap();

        assert!(matches!(
            generate_strobe_series(&compositor, 0),
            Err(StroboError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn empty_sequence_yields_empty_images() {
        let reference = Frame::filled(2, 2, [9, 9, 9]);
        let background = Background::estimate(std::slice::from_ref(&reference)).unwrap();
        let compositor = StrobeCompositor::new(&[], &background).unwrap();

        let series = generate_strobe_series(&compositor, 3).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.images().iter().all(|image| image.is_empty()));
    }
}
