use {
  super::{round::{Candidate, RoundCoordinator}},
  crate::{
    checkpoint::Checkpoint,
    config::Config,
    error::Result,
    geometry::{Circle, ColorRecord},
    pixels::PixelGrid,
    util::profile
  },
  std::{
    fmt,
    path::Path,
    time::{Duration, Instant}
  }
};

/// Threshold and progress of a running pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchState {
  pub threshold: u32,
  pub minimum_size: u32,
  pub found: u32
}

impl SearchState {
  pub fn new(config: &Config) -> Self {
    Self {
      threshold: config.threshold,
      minimum_size: config.minimum_size,
      found: 0
    }
  }

  /// Count an accepted circle, stepping the threshold every
  /// `threshold_increase_frequency` circles.
  pub fn record(&mut self, config: &Config) {
    self.found += 1;
    let frequency = config.threshold_increase_frequency;
    if frequency > 0 && self.found % frequency == 0 {
      self.threshold += config.threshold_increase_amount;
    }
  }
}

enum Round {
  Pending,
  Resolved(Option<Candidate>),
  Terminated
}

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassSummary {
  pub pass_number: u32,
  pub circles: usize,
  pub covered_pixels: u64,
  /// Threshold in effect when the pass ended.
  pub threshold: u32,
  pub elapsed: Duration
}

impl fmt::Display for PassSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "pass {}: calculated {} circles encompassing {} pixels in {} second(s)",
      self.pass_number, self.circles, self.covered_pixels, self.elapsed.as_secs())
  }
}

/// Greedy circle packing over a pixel grid.
///
/// Each round finds the largest acceptable circle, claims its pixels and logs it, until
/// the best circle of a round is no larger than the minimum size. Passes can be chained
/// with looser settings, each one building on the circles of the previous ones.
///
/// It is built by [`Ellipsifier::start`] or [`Ellipsifier::resume`] only, so the grid always
/// agrees with the checkpoint:
/// ```compile_fail
/// # use ellipsify::{checkpoint::MemoryCheckpoint, pixels::PixelGrid, solver::Ellipsifier};
/// let grid = PixelGrid::solid(4, 4, image::Rgb([0, 0, 0]));
/// let engine = Ellipsifier::new(grid, MemoryCheckpoint::default());
/// ```
pub struct Ellipsifier<C> {
  grid: PixelGrid,
  checkpoint: C,
  records: Vec<ColorRecord>,
  resumed: usize
}

impl<C: Checkpoint> Ellipsifier<C> {
  /// Wrap a grid without touching the checkpoint.
  pub(crate) fn new(grid: PixelGrid, checkpoint: C) -> Self {
    Self { grid, checkpoint, records: vec![], resumed: 0 }
  }

  /// A fresh search for pass `0`, otherwise resume from the checkpoint.
  pub fn start(grid: PixelGrid, mut checkpoint: C, pass_number: u32) -> Result<Self> {
    if pass_number == 0 {
      checkpoint.reset()?;
      Ok(Self::new(grid, checkpoint))
    } else {
      Self::resume(grid, checkpoint)
    }
  }

  /// Re-apply every logged circle to the original grid, in log order. The color of each
  /// circle is read right before claiming it, as it was when first accepted.
  pub fn resume(grid: PixelGrid, checkpoint: C) -> Result<Self> {
    let circles = checkpoint.replay()?;
    let mut engine = Self::new(grid, checkpoint);
    for circle in circles {
      let color = engine.grid.get(circle.center);
      engine.grid.claim(&circle);
      engine.records.push(ColorRecord { circle, color });
    }
    engine.resumed = engine.records.len();
    log::info!("resumed {} circles", engine.resumed);
    Ok(engine)
  }

  pub fn run_pass(&mut self, config: &Config) -> Result<PassSummary> {
    config.validate()?;
    let t0 = Instant::now();
    let first = self.records.len();
    let mut state = SearchState::new(config);
    let mut round = Round::Pending;

    loop {
      round = match round {
        Round::Pending => Round::Resolved(profile!(
          "round",
          RoundCoordinator::new(&self.grid, config, state.threshold).run()
        )?),
        Round::Resolved(Some(winner)) if winner.circle.radius > state.minimum_size => {
          self.accept(winner.circle);
          state.record(config);
          Round::Pending
        }
        Round::Resolved(_) => Round::Terminated,
        Round::Terminated => break
      }
    }

    let placed = &self.records[first..];
    let summary = PassSummary {
      pass_number: config.pass_number,
      circles: placed.len(),
      covered_pixels: placed.iter().map(|record| record.circle.area()).sum(),
      threshold: state.threshold,
      elapsed: t0.elapsed()
    };
    log::info!("{}", summary);
    Ok(summary)
  }

  /// Record, log, claim and snapshot. Persistence failures are reported and otherwise
  /// ignored, the records in memory stay valid.
  fn accept(&mut self, circle: Circle) {
    let color = self.grid.get(circle.center);
    log::info!("found radius {}", circle);

    if let Err(e) = self.checkpoint.append(&circle) {
      log::warn!("circle {} not logged: {:#}", circle, e);
    }
    self.grid.claim(&circle);
    if let Err(e) = self.checkpoint.snapshot(&self.grid) {
      log::warn!("snapshot skipped: {:#}", e);
    }
    self.records.push(ColorRecord { circle, color });
  }

  /// All records in discovery order, replayed ones first.
  pub fn records(&self) -> &[ColorRecord] {
    &self.records
  }

  /// Number of leading records restored from the checkpoint.
  pub fn resumed(&self) -> usize {
    self.resumed
  }

  pub fn grid(&self) -> &PixelGrid {
    &self.grid
  }

  pub fn checkpoint(&self) -> &C {
    &self.checkpoint
  }

  pub fn into_ellipsis(self) -> Ellipsis {
    Ellipsis {
      width: self.grid.width(),
      height: self.grid.height(),
      records: self.records
    }
  }
}

/// Everything a renderer needs: the records in discovery order, and the image size.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsis {
  pub width: u32,
  pub height: u32,
  pub records: Vec<ColorRecord>
}

impl Ellipsis {
  pub fn records(&self) -> &[ColorRecord] {
    &self.records
  }

  pub fn covered_pixels(&self) -> u64 {
    self.records.iter()
      .map(|record| record.circle.area())
      .sum()
  }
}

/// Open an image and run `passes` in order against one checkpoint.
///
/// The first pass decides between a fresh log and resuming it, see [`Ellipsifier::start`].
/// Nothing is written if the image can not be opened.
pub fn ellipsify<C: Checkpoint>(
  path: impl AsRef<Path>,
  passes: &[Config],
  checkpoint: C
) -> Result<Ellipsis> {
  passes.iter().try_for_each(Config::validate)?;
  let grid = PixelGrid::open(path)?;
  let pass_number = passes.first().map_or(0, |config| config.pass_number);
  let mut engine = Ellipsifier::start(grid, checkpoint, pass_number)?;
  for config in passes {
    engine.run_pass(config)?;
  }
  Ok(engine.into_ellipsis())
}
