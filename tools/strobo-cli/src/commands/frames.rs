//! Frame source and export sink for the CLI.
//!
//! Loads a directory of still images as an RGB frame sequence (name-sorted,
//! alpha dropped on decode) and writes strobe images back out as PNG/JPEG/BMP
//! via the `image` crate. The numeric core never touches the filesystem.

use std::path::{Path, PathBuf};

use anyhow::Context;
use strobo_core::{Frame, StrobeImage, StroboError};

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Load every supported image in `dir` as a frame, sorted by file name.
pub fn load_sequence(dir: &Path) -> anyhow::Result<Vec<Frame>> {
    if !dir.is_dir() {
        return Err(StroboError::FileNotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        let decoded = image::open(path)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        frames.push(Frame::new(width, height, rgb.into_raw())?);
        tracing::debug!(path = %path.display(), width, height, "loaded frame");
    }

    Ok(frames)
}

/// Write a strobe image to `path`, as RGBA when requested.
pub fn write_image(strobe: &StrobeImage, path: &Path, rgba: bool) -> anyhow::Result<()> {
    if strobe.is_empty() {
        anyhow::bail!("refusing to write an empty strobe image");
    }

    let (width, height) = strobe.dimensions();
    if rgba {
        image::save_buffer(
            path,
            &strobe.rgba_bytes(),
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )
    } else {
        image::save_buffer(
            path,
            strobe.as_bytes(),
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )
    }
    .with_context(|| format!("Failed to write {}", path.display()))
}
