//! Frame and frame-sequence primitives.
//!
//! A [`Frame`] is an immutable W×H grid of 8-bit RGB samples, stored
//! row-major interleaved. A frame sequence is simply `&[Frame]` in temporal
//! order; the pipeline borrows it read-only and never retains it.

use strobo_common::{StroboError, StroboResult};

/// Number of color channels per pixel.
pub const CHANNELS: usize = 3;

/// An immutable RGB frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame from raw interleaved RGB bytes.
    ///
    /// `width` and `height` must be non-zero and `data.len()` must equal
    /// `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> StroboResult<Self> {
        if width == 0 || height == 0 {
            return Err(StroboError::invalid_parameter(format!(
                "frame dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(StroboError::invalid_parameter(format!(
                "frame buffer length {} does not match {}x{} RGB ({} bytes)",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame filled with a single color. Handy for tests and
    /// synthetic sequences. Panics on zero dimensions.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        assert!(
            width > 0 && height > 0,
            "filled frame needs non-zero dimensions"
        );
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
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

    /// Raw interleaved RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGB sample at (x, y). Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Check that every frame shares the first frame's dimensions and return
/// them. `Ok(None)` for an empty sequence.
pub(crate) fn sequence_dimensions(frames: &[Frame]) -> StroboResult<Option<(u32, u32)>> {
    let Some(first) = frames.first() else {
        return Ok(None);
    };
    let expected = first.dimensions();
    for frame in &frames[1..] {
        if frame.dimensions() != expected {
            return Err(StroboError::dimension_mismatch(expected, frame.dimensions()));
        }
    }
    Ok(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let result = Frame::new(2, 2, vec![0u8; 11]);
        assert!(matches!(
            result,
            Err(StroboError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        // A 0-wide buffer trivially satisfies the length check, so the
        // dimensions themselves must be validated.
        assert!(matches!(
            Frame::new(0, 4, vec![]),
            Err(StroboError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Frame::new(4, 0, vec![]),
            Err(StroboError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Frame::new(0, 0, vec![]),
            Err(StroboError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn pixel_accessor_reads_interleaved_layout() {
        let data = vec![
            1, 2, 3, 4, 5, 6, //
            7, 8, 9, 10, 11, 12,
        ];
        let frame = Frame::new(2, 2, data).unwrap();
        assert_eq!(frame.pixel(0, 0), [1, 2, 3]);
        assert_eq!(frame.pixel(1, 0), [4, 5, 6]);
        assert_eq!(frame.pixel(0, 1), [7, 8, 9]);
        assert_eq!(frame.pixel(1, 1), [10, 11, 12]);
    }

    #[test]
    fn sequence_dimensions_flags_mismatch() {
        let frames = vec![Frame::filled(2, 2, [0; 3]), Frame::filled(3, 2, [0; 3])];
        assert!(matches!(
            sequence_dimensions(&frames),
            Err(StroboError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn sequence_dimensions_empty_is_none() {
        assert_eq!(sequence_dimensions(&[]).unwrap(), None);
    }
}
