use {
  super::{BoundingBox, PixelSpace, Point, SignedPoint, Size},
  crate::util,
  euclid::Box2D,
  image::Rgb,
  std::{fmt, str::FromStr}
};

/// A circle on the pixel grid. Radii 0 and 1 have no edge samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
  pub center: Point,
  pub radius: u32
}

impl Circle {
  pub fn new(x: u32, y: u32, radius: u32) -> Self {
    Self { center: Point::new(x, y), radius }
  }

  /// Whole pixels covered, `⌊πr²⌋`.
  pub fn area(&self) -> u64 {
    util::disk_area(self.radius)
  }

  pub fn contains(&self, point: SignedPoint) -> bool {
    let d = point - self.center.to_i64();
    d.square_length() <= (self.radius as i64).pow(2)
  }

  /// Pixels of the filled disk, clipped to the image.
  pub fn pixels(&self, size: Size) -> impl Iterator<Item = Point> + '_ {
    let bounds = self.bounding_box();
    let x_range = bounds.min.x.max(0)..=bounds.max.x.min(size.width as i64 - 1);
    let y_range = bounds.min.y.max(0)..=bounds.max.y.min(size.height as i64 - 1);
    itertools::iproduct!(y_range, x_range)
      .map(|(y, x)| SignedPoint::new(x, y))
      .filter(move |&point| self.contains(point))
      .map(|point| point.to_u32())
  }
}

impl BoundingBox<i64, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<i64, PixelSpace> {
    let r = self.radius as i64;
    let c = self.center.to_i64();
    Box2D::new(
      SignedPoint::new(c.x - r, c.y - r),
      SignedPoint::new(c.x + r, c.y + r)
    )}}

/// Formats as `(x, y, radius)`, one circle log line.
impl fmt::Display for Circle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.center.x, self.center.y, self.radius)
  }
}

impl FromStr for Circle {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let inner = s.trim()
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .ok_or_else(|| anyhow::anyhow!("expected a parenthesized tuple"))?;
    let fields = inner.split(',')
      .map(|field| field.trim().parse::<u32>())
      .collect::<Result<Vec<_>, _>>()?;
    match fields[..] {
      [x, y, radius] => Ok(Circle::new(x, y, radius)),
      _ => anyhow::bail!("expected 3 fields, found {}", fields.len())
    }
  }
}

/// A placed circle, and the color of its center at the moment it was accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorRecord {
  pub circle: Circle,
  pub color: Rgb<u8>
}

impl fmt::Display for ColorRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [r, g, b] = self.color.0;
    write!(f, "({}, ({}, {}, {}))", self.circle, r, g, b)
  }
}
