//! .
//!
//! The origin of coordinate system is in top-left corner. Circles are tested by sampling a
//! sparse set of points on their edge, see [`boundary_offsets`].

use {
  euclid::{Point2D, Vector2D as V2, Size2D, Box2D},
  std::f64::consts::FRAC_PI_2
};

pub mod shapes;
pub use shapes::*;

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSpace;

pub type Point = Point2D<u32, PixelSpace>;
/// A point which may lie outside of the image.
pub type SignedPoint = Point2D<i64, PixelSpace>;
pub type Offset = V2<i32, PixelSpace>;
pub type Size = Size2D<u32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Edge samples of a circle, relative to its center.
///
/// One quadrant is walked in `(radius + 1) * density` equal angular steps, taking every
/// `radius_step`-th of them, and each sample is mirrored into the other three quadrants.
/// The sampling is sparse: a divergent pixel lying between two samples goes unnoticed.
/// `density = 1` is the reference sampling; results of denser settings are not comparable
/// with it.
///
/// Every component of every offset is within `[-radius, radius]`.
pub fn boundary_offsets(radius: u32, radius_step: u32, density: u32) -> Vec<Offset> {
  edge_offsets(radius, 0, radius_step, density)
}

/// Like [`boundary_offsets`], but the samples lie `margin` pixels beyond the edge.
///
/// With `margin = 1` a circle is tested just outside of the pixels it claims. Such a circle
/// is no longer decided by the pixels within `center ± radius` alone.
pub fn edge_offsets(radius: u32, margin: u32, radius_step: u32, density: u32) -> Vec<Offset> {
  if radius <= 1 {
    return vec![];
  }
  let steps = (radius + 1) * density.max(1);
  let angle = FRAC_PI_2 / steps as f64;
  let r = (radius + margin) as f64;

  (1..=steps)
    .step_by(radius_step.max(1) as usize)
    .map(|k| {
      let (sin, cos) = (k as f64 * angle).sin_cos();
      ((r * cos).round() as i32, (r * sin).round() as i32)
    })
    .flat_map(|(x, y)| [
      Offset::new(x, y),
      Offset::new(x, -y),
      Offset::new(-x, y),
      Offset::new(-x, -y),
    ])
    .collect()
}

/// Boundary offsets for every radius up to `max_radius`, computed once per round.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
  offsets: Vec<Vec<Offset>>
}

impl BoundaryTable {
  pub fn new(max_radius: u32, margin: u32, radius_step: u32, density: u32) -> Self {
    Self {
      offsets: (0..=max_radius)
        .map(|radius| edge_offsets(radius, margin, radius_step, density))
        .collect()
    }
  }

  pub fn max_radius(&self) -> u32 {
    self.offsets.len() as u32 - 1
  }

  pub fn get(&self, radius: u32) -> Option<&[Offset]> {
    self.offsets.get(radius as usize).map(Vec::as_slice)
  }
}

pub fn in_bounds(point: SignedPoint, size: Size) -> bool {
  point.x >= 0 && point.y >= 0 &&
  point.x < size.width as i64 && point.y < size.height as i64
}

/// `center + offset`, if it lands on the image.
pub fn offset_point(center: Point, offset: Offset, size: Size) -> Option<Point> {
  let point = center.to_i64() + offset.to_i64();
  in_bounds(point, size).then(|| point.to_u32())
}

/// Whether `center ± radius` lies within `[0, width] × [0, height]`.
pub fn circle_fits_bounds(center: Point, radius: u32, size: Size) -> bool {
  let bounds = Circle { center, radius }.bounding_box();
  bounds.min.x >= 0 && bounds.min.y >= 0 &&
  bounds.max.x <= size.width as i64 && bounds.max.y <= size.height as i64
}
