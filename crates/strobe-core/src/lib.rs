//! Strobo Core — strobe-image compositing
//!
//! Turns a frame sequence into a single composite that shows the static
//! background with the strongest observed motion overlaid:
//! - **Background estimation:** per-pixel temporal mean of the sequence
//! - **Strobe composition:** per-pixel maximum-deviation selection over a
//!   sampled subset of frames
//! - **Series generation:** one strobe image per phase offset of a stride
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod background;
pub mod compositor;
pub mod frame;
pub mod series;

pub use background::Background;
pub use compositor::{StrobeCompositor, StrobeImage};
pub use frame::Frame;
pub use series::{generate_strobe_series, StrobeSeries};

pub use strobo_common::{StroboError, StroboResult};
