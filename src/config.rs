//! Parameters of a single pass.
//!
//! ```
//! # use ellipsify::config::Config;
//! let coarse = Config::default()
//!   .threshold(7)
//!   .precision(3)
//!   .minimum_size(2);
//! let fine = coarse.clone()
//!   .threshold(12)
//!   .minimum_size(1)
//!   .pass_number(1);
//! assert!(fine.validate().is_ok());
//! ```

use crate::error::{Error, Result};
pub use crate::pixels::ColorMetric;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Largest color distance between an edge sample and the center.
  pub threshold: u32,
  /// Spacing of candidate centers, in pixels.
  pub precision: u32,
  /// The pass ends once the best circle of a round is no larger than this.
  pub minimum_size: u32,
  /// Largest radius ever accepted.
  pub maximum_size: u32,
  /// Use every n-th angular step of the edge sampling.
  pub radius_step: u32,
  /// Raise the threshold after this many circles, `0` never does.
  pub threshold_increase_frequency: u32,
  pub threshold_increase_amount: u32,
  pub num_threads: usize,
  /// `0` starts a fresh circle log, anything else resumes the existing one.
  pub pass_number: u32,
  /// Multiplies the number of edge samples. `1` is the reference sampling.
  pub sampling_density: u32,
  /// Sample one pixel beyond the edge, at `radius + 1`, as the original tool did. Off by
  /// default: acceptance then also depends on pixels just outside the circle.
  pub outer_edge: bool,
  pub metric: ColorMetric,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      threshold: 7,
      precision: 2,
      minimum_size: 1,
      maximum_size: 50,
      radius_step: 1,
      threshold_increase_frequency: 10,
      threshold_increase_amount: 0,
      num_threads: rayon::current_num_threads(),
      pass_number: 0,
      sampling_density: 1,
      outer_edge: false,
      metric: ColorMetric::MeanAbsolute,
    }
  }
}

impl Config {
  pub fn threshold(mut self, value: u32) -> Self {
    self.threshold = value;
    self
  }

  pub fn precision(mut self, value: u32) -> Self {
    self.precision = value;
    self
  }

  pub fn minimum_size(mut self, value: u32) -> Self {
    self.minimum_size = value;
    self
  }

  pub fn maximum_size(mut self, value: u32) -> Self {
    self.maximum_size = value;
    self
  }

  pub fn radius_step(mut self, value: u32) -> Self {
    self.radius_step = value;
    self
  }

  /// Raise the threshold by `amount` every `frequency` accepted circles.
  pub fn threshold_increase(mut self, frequency: u32, amount: u32) -> Self {
    self.threshold_increase_frequency = frequency;
    self.threshold_increase_amount = amount;
    self
  }

  pub fn num_threads(mut self, value: usize) -> Self {
    self.num_threads = value;
    self
  }

  pub fn pass_number(mut self, value: u32) -> Self {
    self.pass_number = value;
    self
  }

  pub fn sampling_density(mut self, value: u32) -> Self {
    self.sampling_density = value;
    self
  }

  pub fn outer_edge(mut self, value: bool) -> Self {
    self.outer_edge = value;
    self
  }

  pub fn metric(mut self, value: ColorMetric) -> Self {
    self.metric = value;
    self
  }

  pub fn validate(&self) -> Result<()> {
    let zero = [
      ("precision", self.precision as usize),
      ("radius_step", self.radius_step as usize),
      ("sampling_density", self.sampling_density as usize),
      ("num_threads", self.num_threads),
    ].into_iter()
      .find(|(_, value)| *value == 0);
    match zero {
      Some((name, _)) => Err(Error::InvalidConfig(format!("{} must be positive", name)).into()),
      None => Ok(())
    }
  }
}
