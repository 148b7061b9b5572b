//! Compose a single strobe image from a frame directory.

use std::path::PathBuf;

use strobo_common::config::AppConfig;
use strobo_core::{Background, StrobeCompositor};

use super::frames;

pub fn run(
    dir: PathBuf,
    output: PathBuf,
    stride: Option<usize>,
    offset: usize,
    rgba: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let stride = stride.unwrap_or(config.strobe.stride);
    let rgba = rgba || config.strobe.rgba_output;

    println!("Loading frames from: {}", dir.display());
    let frames = frames::load_sequence(&dir)?;
    println!("  Loaded {} frames", frames.len());

    if frames.is_empty() {
        println!("  No frames to compose.");
        return Ok(());
    }

    let (width, height) = frames[0].dimensions();
    println!("  Dimensions: {width}x{height}");

    let background = Background::estimate(&frames)?;
    let compositor = StrobeCompositor::new(&frames, &background)?;

    println!("  Composing strobe image (stride={stride}, offset={offset})...");
    let strobe = compositor.compose(stride, offset)?;

    frames::write_image(&strobe, &output, rgba)?;
    println!("  Strobe image written to: {}", output.display());

    Ok(())
}
