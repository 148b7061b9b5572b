//! Show information about a frame sequence directory.

use std::path::PathBuf;

use super::frames;

pub fn run(dir: PathBuf) -> anyhow::Result<()> {
    let frames = frames::load_sequence(&dir)?;

    println!("Frame sequence: {}", dir.display());
    println!("  Frames: {}", frames.len());

    let Some(first) = frames.first() else {
        return Ok(());
    };

    let (width, height) = first.dimensions();
    println!("  Dimensions: {width}x{height}");

    let mismatched = frames
        .iter()
        .filter(|frame| frame.dimensions() != (width, height))
        .count();
    if mismatched > 0 {
        println!("  WARNING: {mismatched} frames differ from the first frame's dimensions");
    }

    // f32 background plus the 8-bit frames themselves.
    let frame_bytes: usize = frames.iter().map(|f| f.as_bytes().len()).sum();
    let background_bytes = first.as_bytes().len() * std::mem::size_of::<f32>();
    println!(
        "  Approx. working memory: {} MB",
        (frame_bytes + background_bytes) / 1024 / 1024
    );

    Ok(())
}
