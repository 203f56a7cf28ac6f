use {
  crate::{
    config::{Config, ColorMetric},
    geometry::{self, BoundaryTable, Point},
    pixels::{PixelGrid, SENTINEL}
  }
};

/// Decides whether a circle is uniform enough and unclaimed, reading the grid only.
#[derive(Debug, Clone)]
pub struct CircleTester<'a> {
  grid: &'a PixelGrid,
  boundary: BoundaryTable,
  threshold: u32,
  maximum_size: u32,
  metric: ColorMetric
}

impl<'a> CircleTester<'a> {
  pub fn new(grid: &'a PixelGrid, config: &Config, threshold: u32) -> Self {
    // nothing larger than half the short side fits the image
    let fitting = grid.width().min(grid.height()) / 2;
    Self {
      grid,
      boundary: BoundaryTable::new(
        config.maximum_size.min(fitting),
        config.outer_edge as u32,
        config.radius_step,
        config.sampling_density
      ),
      threshold,
      maximum_size: config.maximum_size,
      metric: config.metric
    }
  }

  pub fn grid(&self) -> &'a PixelGrid {
    self.grid
  }

  /// A circle is accepted when it fits the image, does not exceed the maximum size, its
  /// center is on the image and unclaimed, and every edge sample is on the image, unclaimed, and within
  /// `threshold` of the center color.
  pub fn accepts(&self, center: Point, radius: u32) -> bool {
    let size = self.grid.size();
    if !geometry::circle_fits_bounds(center, radius, size) || radius > self.maximum_size {
      return false;
    }
    let offsets = match self.boundary.get(radius) {
      Some(offsets) => offsets,
      None => return false
    };
    let reference = self.grid.get(center);
    if !self.grid.contains(center) || reference == SENTINEL {
      return false;
    }
    offsets.iter().all(|&offset| match geometry::offset_point(center, offset, size) {
      Some(point) => {
        let pixel = self.grid.get(point);
        pixel != SENTINEL && self.metric.distance(reference, pixel) <= self.threshold
      }
      None => false
    })
  }

  /// Largest accepted radius found by growing from `starting_radius`.
  ///
  /// Radii below the start are never tested: a caller passes the best radius known so far,
  /// as nothing smaller can win. When the start itself is rejected, `starting_radius - 1`
  /// is returned, which is below that best and thus never selected.
  pub fn grow(&self, center: Point, starting_radius: u32) -> u32 {
    let mut radius = starting_radius;
    while self.accepts(center, radius) {
      radius += 1;
    }
    radius.saturating_sub(1)
  }
}
