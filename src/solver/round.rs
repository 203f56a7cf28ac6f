//! One round: a parallel scan of every candidate center for the largest acceptable circle.
//!
//! Candidate columns are handed out through a shared queue to a fixed pool of workers.
//! Each worker grows a circle at every candidate of its columns, seeded with the best
//! radius found so far by anyone, and offers the result to a single lock-guarded best.
//! A strict `>` decides, so among equal radii the first one offered wins. With more than
//! one worker which one that is depends on scheduling, and is not reproducible.

use {
  super::CircleTester,
  crate::{
    config::Config,
    error::{Error, Result},
    geometry::{Circle, Point},
    pixels::PixelGrid
  },
  parking_lot::Mutex,
  std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::atomic::{AtomicU32, AtomicUsize, Ordering}
  }
};

/// The winner of a round, and the worker which found it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
  pub circle: Circle,
  pub owner: usize
}

/// Candidate columns, `precision, 2 * precision, ..` below `width - precision`.
#[derive(Debug)]
pub(crate) struct ColumnQueue {
  columns: Vec<u32>,
  cursor: AtomicUsize
}

impl ColumnQueue {
  pub fn new(width: u32, precision: u32) -> Self {
    Self {
      columns: candidates(width, precision),
      cursor: AtomicUsize::new(0)
    }
  }

  pub fn len(&self) -> usize {
    self.columns.len()
  }

  /// `None` once drained, which is the normal exit of a worker.
  pub fn pop(&self) -> Option<u32> {
    let i = self.cursor.fetch_add(1, Ordering::Relaxed);
    self.columns.get(i).copied()
  }
}

fn candidates(extent: u32, precision: u32) -> Vec<u32> {
  (precision..extent.saturating_sub(precision))
    .step_by(precision.max(1) as usize)
    .collect()
}

/// Best candidate of the current round.
#[derive(Debug, Default)]
struct SharedBest {
  /// Mirrors `best`, readable without the lock. May be stale.
  radius: AtomicU32,
  best: Mutex<Option<Candidate>>
}

impl SharedBest {
  fn hint(&self) -> u32 {
    self.radius.load(Ordering::Relaxed)
  }

  fn offer(&self, candidate: Candidate) -> bool {
    let mut best = self.best.lock();
    let current = best.map_or(0, |best| best.circle.radius);
    if candidate.circle.radius > current {
      *best = Some(candidate);
      self.radius.store(candidate.circle.radius, Ordering::Relaxed);
      true
    } else {
      false
    }
  }
}

pub struct RoundCoordinator<'a> {
  tester: CircleTester<'a>,
  precision: u32,
  num_threads: usize
}

impl<'a> RoundCoordinator<'a> {
  pub fn new(grid: &'a PixelGrid, config: &Config, threshold: u32) -> Self {
    Self {
      tester: CircleTester::new(grid, config, threshold),
      precision: config.precision,
      num_threads: config.num_threads.max(1)
    }
  }

  /// Largest circle over all candidates, `None` if not a single one was accepted.
  /// Fails if any worker panicked.
  pub fn run(&self) -> Result<Option<Candidate>> {
    let grid_height = self.tester.grid().height();
    let queue = ColumnQueue::new(self.tester.grid().width(), self.precision);
    let rows = candidates(grid_height, self.precision);
    let shared = SharedBest::default();
    log::trace!("round: {} columns x {} rows, {} workers", queue.len(), rows.len(), self.num_threads);

    run_workers(self.num_threads, |owner| {
      while let Some(x) = queue.pop() {
        for &y in &rows {
          let center = Point::new(x, y);
          let radius = self.tester.grow(center, shared.hint());
          shared.offer(Candidate { circle: Circle { center, radius }, owner });
        }
      }
    })?;

    Ok(shared.best.into_inner())
  }
}

/// Run `work(owner)` for every `owner` in `0..num_threads` on a pool of as many threads,
/// returning once all of them finished.
pub(crate) fn run_workers(num_threads: usize, work: impl Fn(usize) + Sync) -> Result<()> {
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(num_threads)
    .thread_name(|i| format!("ellipsify-worker-{}", i))
    .build()?;
  let work = &work;
  panic::catch_unwind(AssertUnwindSafe(|| pool.scope(|scope| {
    for owner in 0..num_threads {
      scope.spawn(move |_| work(owner));
    }
  }))).map_err(|payload| Error::WorkerPanicked(panic_message(payload)).into())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
  payload.downcast_ref::<&str>().map(|s| s.to_string())
    .or_else(|| payload.downcast_ref::<String>().cloned())
    .unwrap_or_else(|| "unknown panic".into())
}
