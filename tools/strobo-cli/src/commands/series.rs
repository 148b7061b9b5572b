//! Compose the full strobe series for a stride.

use std::path::PathBuf;

use strobo_common::config::AppConfig;
use strobo_core::{generate_strobe_series, Background, StrobeCompositor};

use super::frames;

pub fn run(
    dir: PathBuf,
    output: PathBuf,
    stride: Option<usize>,
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

    let background = Background::estimate(&frames)?;
    let compositor = StrobeCompositor::new(&frames, &background)?;

    println!("  Generating strobe series (stride={stride})...");
    let series = generate_strobe_series(&compositor, stride)?;

    std::fs::create_dir_all(&output)?;
    for (offset, image) in series.images().iter().enumerate() {
        let path = output.join(format!("strobe-{offset:03}.png"));
        frames::write_image(image, &path, rgba)?;
        println!("  Wrote {}", path.display());
    }

    println!("\nSeries complete: {} images.", series.len());

    Ok(())
}
