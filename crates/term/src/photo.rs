//! Photo loading for block textures and the background reveal.
//!
//! A photo is decoded once and averaged down to one colour per grid cell, so
//! rendering is a plain table lookup. Photos that fail to load are skipped
//! with a warning; the view falls back to flat colours.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::fb::Rgb;
use crate::types::{COLS, ROWS};

/// Colour used wherever a photo tile is missing
pub const FALLBACK_TILE: Rgb = Rgb::new(176, 132, 96);

/// A photo reduced to one colour per grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    tiles: [[Rgb; COLS]; ROWS],
}

impl Photo {
    /// Decode a PNG file.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening photo {}", path.display()))?;
        let mut decoder = png::Decoder::new(BufReader::new(file));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .with_context(|| format!("reading PNG header of {}", path.display()))?;

        let size = reader
            .output_buffer_size()
            .with_context(|| format!("{} is too large to decode", path.display()))?;
        let mut buf = vec![0; size];
        let frame = reader
            .next_frame(&mut buf)
            .with_context(|| format!("decoding {}", path.display()))?;

        let channels = match frame.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            png::ColorType::Indexed => bail!("{}: palette was not expanded", path.display()),
        };

        Self::from_pixels(
            frame.width as usize,
            frame.height as usize,
            channels,
            frame.line_size,
            &buf[..frame.buffer_size()],
        )
    }

    /// Average 8-bit pixel rows down to the grid.
    ///
    /// `channels` is 1 (gray), 2 (gray+alpha), 3 (RGB) or 4 (RGBA); alpha is
    /// ignored. `stride` is the byte length of one source row.
    pub fn from_pixels(
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
        data: &[u8],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("photo has no pixels");
        }
        if !(1..=4).contains(&channels) {
            bail!("unsupported channel count {}", channels);
        }
        if stride < width * channels || data.len() < stride * (height - 1) + width * channels {
            bail!("pixel buffer too short for {}x{}", width, height);
        }

        let mut tiles = [[FALLBACK_TILE; COLS]; ROWS];
        for (ty, row) in tiles.iter_mut().enumerate() {
            let (y0, y1) = span(ty, ROWS, height);
            for (tx, tile) in row.iter_mut().enumerate() {
                let (x0, x1) = span(tx, COLS, width);
                let mut sum = [0u64; 3];
                let mut count = 0u64;
                for y in y0..y1 {
                    for x in x0..x1 {
                        let p = &data[y * stride + x * channels..];
                        let rgb = if channels < 3 {
                            [p[0], p[0], p[0]]
                        } else {
                            [p[0], p[1], p[2]]
                        };
                        for (s, v) in sum.iter_mut().zip(rgb) {
                            *s += v as u64;
                        }
                        count += 1;
                    }
                }
                *tile = Rgb::new(
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                );
            }
        }
        Ok(Self { tiles })
    }

    /// Colour of the tile under grid cell (x, y)
    pub fn tile(&self, x: usize, y: usize) -> Rgb {
        self.tiles
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(FALLBACK_TILE)
    }
}

/// Source pixel range covered by tile `i` of `tiles`; never empty
fn span(i: usize, tiles: usize, pixels: usize) -> (usize, usize) {
    let start = (i * pixels / tiles).min(pixels - 1);
    let end = ((i + 1) * pixels / tiles).clamp(start + 1, pixels);
    (start, end)
}

/// The photos the player supplied, in the order given
#[derive(Debug, Clone, Default)]
pub struct PhotoSet {
    photos: Vec<Photo>,
}

impl PhotoSet {
    /// Load every path, skipping (and logging) the ones that fail.
    pub fn load_all(paths: &[PathBuf]) -> Self {
        let mut photos = Vec::with_capacity(paths.len());
        for path in paths {
            match Photo::load(path) {
                Ok(photo) => {
                    info!("loaded photo {}", path.display());
                    photos.push(photo);
                }
                Err(err) => warn!("skipping photo: {:#}", err),
            }
        }
        Self { photos }
    }

    pub fn from_photos(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photo shown behind revealed rows
    pub fn background(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Colour of photo `index` at grid cell (x, y), wrapping the index
    pub fn tile(&self, index: u16, x: usize, y: usize) -> Option<Rgb> {
        if self.photos.is_empty() {
            return None;
        }
        let photo = &self.photos[index as usize % self.photos.len()];
        Some(photo.tile(x, y))
    }
}
