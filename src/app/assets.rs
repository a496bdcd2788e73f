use std::path::Path;

use anyhow::{ensure, Context, Result};

/// Checks that the ball sprite under `asset_dir` exists and decodes as an image.
/// Returns its pixel size.
pub fn ensure_ball_sprite(asset_dir: &Path, sprite: &str) -> Result<(u32, u32)> {
    let path = asset_dir.join(sprite);
    let (w, h) = image::image_dimensions(&path)
        .with_context(|| format!("ball sprite asset '{}' is missing or unreadable", path.display()))?;
    ensure!(w > 0 && h > 0, "ball sprite asset '{}' is empty", path.display());
    Ok((w, h))
}
