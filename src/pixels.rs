//! The pixel grid being packed, and the color closeness used to test it.

use {
  crate::{
    error::{Error, Result},
    geometry::{Circle, ColorRecord, Point, Size}
  },
  anyhow::Context,
  image::{Rgb, RgbImage},
  std::{
    fmt::{Debug, Formatter},
    path::Path
  }
};


pub type Pixel = Rgb<u8>;

/// Marks claimed pixels. It is a marker, never image data: any pixel equal to it is
/// treated as consumed.
pub const SENTINEL: Pixel = Rgb([218, 235, 111]);
/// Returned for coordinates outside of the image.
pub const NEUTRAL: Pixel = Rgb([255, 255, 255]);

/// Distance between two colors, on a `0..=255` scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ColorMetric {
  /// `(|Δr| + |Δg| + |Δb|) / 3`, truncated.
  #[default]
  MeanAbsolute,
  /// Low cost perceptual approximation, weighting the channels by the mean red level.
  Redmean,
}

impl ColorMetric {
  pub fn distance(self, a: Pixel, b: Pixel) -> u32 {
    let [r1, g1, b1] = a.0.map(i32::from);
    let [r2, g2, b2] = b.0.map(i32::from);
    let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);
    match self {
      ColorMetric::MeanAbsolute =>
        ((dr.abs() + dg.abs() + db.abs()) / 3) as u32,
      ColorMetric::Redmean => {
        let red_mean = (r1 + r2) as f64 / 2.0;
        let (dr, dg, db) = (dr as f64, dg as f64, db as f64);
        let d = ((2.0 + red_mean / 256.0) * dr * dr
          + 4.0 * dg * dg
          + (2.0 + (255.0 - red_mean) / 256.0) * db * db)
          .sqrt();
        (d / 3.0) as u32
      }
    }
  }
}

/// Rectangular grid of RGB pixels, with claimed regions painted over in [`SENTINEL`].
#[derive(Clone, PartialEq)]
pub struct PixelGrid {
  image: RgbImage
}

impl PixelGrid {
  /// Decode an image file. Alpha and other color types are converted to RGB8.
  ///
  /// Pixels which already hold [`SENTINEL`] are treated as claimed, this is only warned about.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let image = image::open(path)
      .map_err(|source| Error::Open { path: path.to_owned(), source })?;
    let grid = Self { image: image.to_rgb8() };
    match grid.claimed_pixels() {
      0 => (),
      n => log::warn!("{:?}: {} pixels already have the claim marker color, they will be skipped", path, n)
    }
    Ok(grid)
  }

  pub fn from_fn(width: u32, height: u32, f: impl FnMut(u32, u32) -> Pixel) -> Self {
    Self { image: RgbImage::from_fn(width, height, f) }
  }

  pub fn solid(width: u32, height: u32, color: Pixel) -> Self {
    Self { image: RgbImage::from_pixel(width, height, color) }
  }

  pub fn width(&self) -> u32 {
    self.image.width()
  }

  pub fn height(&self) -> u32 {
    self.image.height()
  }

  pub fn size(&self) -> Size {
    self.image.dimensions().into()
  }

  pub fn contains(&self, point: Point) -> bool {
    point.x < self.width() && point.y < self.height()
  }

  /// Never fails: off-image coordinates read as [`NEUTRAL`].
  pub fn get(&self, point: Point) -> Pixel {
    if self.contains(point) {
      *self.image.get_pixel(point.x, point.y)
    } else {
      NEUTRAL
    }
  }

  pub fn put(&mut self, point: Point, color: Pixel) {
    if self.contains(point) {
      self.image.put_pixel(point.x, point.y, color);
    }
  }

  pub fn is_claimed(&self, point: Point) -> bool {
    self.get(point) == SENTINEL
  }

  /// Paint the disk of `circle` with [`SENTINEL`]. Returns the number of newly claimed pixels.
  pub fn claim(&mut self, circle: &Circle) -> u64 {
    let size = self.size();
    circle.pixels(size).fold(0, |claimed, point| {
      let pixel = self.image.get_pixel_mut(point.x, point.y);
      if *pixel == SENTINEL {
        claimed
      } else {
        *pixel = SENTINEL;
        claimed + 1
      }
    })
  }

  pub fn claimed_pixels(&self) -> u64 {
    self.image.pixels()
      .filter(|&&pixel| pixel == SENTINEL)
      .count() as u64
  }

  /// Pair circles with the current color of their centers.
  pub fn colors_of(&self, circles: impl IntoIterator<Item = Circle>) -> Vec<ColorRecord> {
    circles.into_iter()
      .map(|circle| ColorRecord { circle, color: self.get(circle.center) })
      .collect()
  }

  /// Encode to `path`, the format is picked by its extension.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.image.save(path)
      .with_context(|| format!("cannot save pixel grid to {:?}", path))
  }
}

impl Debug for PixelGrid {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("PixelGrid")
      .field("width", &self.width())
      .field("height", &self.height())
      .field("claimed", &self.claimed_pixels())
      .field("size", &self.image.as_raw().len().file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}
