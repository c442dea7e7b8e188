use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use shading::Color;

pub fn average_color(path: &Path) -> anyhow::Result<Color> {
    let img = image::open(path)
        .with_context(|| format!("failed to load texture {}", path.display()))?
        .to_rgba8();
    Ok(average_of(&img))
}

pub fn average_of(img: &RgbaImage) -> Color {
    let count = img.pixels().len() as u64;
    if count == 0 {
        return Color::BLACK;
    }
    let mut sums = [0u64; 3];
    for p in img.pixels() {
        sums[0] += p[0] as u64;
        sums[1] += p[1] as u64;
        sums[2] += p[2] as u64;
    }
    Color::new(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}
