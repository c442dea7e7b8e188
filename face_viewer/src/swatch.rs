use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use itertools::Itertools;
use shading::Color;

// One tile per face: unshaded base color on the left half, shaded on the right.
pub struct Swatch {
    tile_size: u32,
    columns: u32,
    image: RgbImage,
}

impl Swatch {
    pub fn new(tiles: usize, tile_size: u32, columns: u32) -> anyhow::Result<Self> {
        let tile_size = tile_size.max(2);
        let tiles = u32::try_from(tiles).context("too many faces for a swatch")?;
        let columns = columns.clamp(1, tiles.max(1));
        let rows = tiles.div_ceil(columns).max(1);
        let (width, height) = columns
            .checked_mul(tile_size)
            .zip(rows.checked_mul(tile_size))
            .with_context(|| {
                format!(
                    "swatch of {}x{} tiles of {} pixels is too large",
                    columns, rows, tile_size
                )
            })?;
        Ok(Self {
            tile_size,
            columns,
            image: RgbImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn draw_tile(&mut self, index: usize, base: Color, shaded: Color) {
        let column = index as u32 % self.columns;
        let row = index as u32 / self.columns;
        let (left, top) = (column * self.tile_size, row * self.tile_size);
        let half = self.tile_size / 2;

        for (y, x) in (0..self.tile_size).cartesian_product(0..self.tile_size) {
            let color = if x < half { base } else { shaded };
            self.image
                .put_pixel(left + x, top + y, Rgb(color.to_array()));
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(self.image.get_pixel(x, y).0)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("failed to write swatch {}", path.display()))
    }
}
