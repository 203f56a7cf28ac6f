//! Persistence of a running search.
//!
//! Every accepted circle is appended to a plain text log, one `(x, y, radius)` per line.
//! Replaying the log in order over the original image reproduces the claimed pixels,
//! which lets a search be stopped between rounds and continued by a later pass.

use {
  crate::{
    error::{Error, Result},
    geometry::Circle,
    pixels::PixelGrid
  },
  anyhow::Context,
  std::{
    fs::{self, File, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf}
  }
};

#[cfg(test)] mod tests;

/// Sink for the progress of a search.
pub trait Checkpoint {
  /// Circles placed by earlier passes, in placement order.
  fn replay(&self) -> Result<Vec<Circle>>;
  /// Forget earlier passes.
  fn reset(&mut self) -> Result<()>;
  fn append(&mut self, circle: &Circle) -> Result<()>;
  /// Persist the current state of the grid, claimed regions included.
  fn snapshot(&mut self, grid: &PixelGrid) -> Result<()>;
}

/// Append-only circle log on disk.
#[derive(Debug, Clone)]
pub struct CircleLog {
  path: PathBuf
}

impl CircleLog {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// `<image path>.txt`
  pub fn beside(image: impl AsRef<Path>) -> Self {
    let mut path = image.as_ref().as_os_str().to_owned();
    path.push(".txt");
    Self::new(path)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn truncate(&self) -> Result<()> {
    File::create(&self.path)
      .with_context(|| format!("cannot truncate circle log {:?}", self.path))?;
    Ok(())
  }

  pub fn append(&self, circle: &Circle) -> Result<()> {
    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)
      .with_context(|| format!("cannot open circle log {:?}", self.path))?;
    writeln!(file, "{}", circle)?;
    Ok(())
  }

  /// A missing log holds no circles. Blank lines are ignored, any other unparsable line
  /// fails the whole replay.
  pub fn replay(&self) -> Result<Vec<Circle>> {
    let text = match fs::read_to_string(&self.path) {
      Ok(text) => text,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
      Err(e) => return Err(e)
        .with_context(|| format!("cannot read circle log {:?}", self.path))
    };
    parse_lines(&text)
  }
}

pub(crate) fn parse_lines(text: &str) -> Result<Vec<Circle>> {
  text.lines()
    .enumerate()
    .filter(|(_, line)| !line.trim().is_empty())
    .map(|(i, line)| line.parse::<Circle>()
      .context(Error::MalformedLog { line: i + 1, content: line.to_string() }))
    .collect()
}

/// Circle log plus an optional image snapshot, rewritten after every circle.
#[derive(Debug, Clone)]
pub struct FileCheckpoint {
  pub log: CircleLog,
  pub snapshot: Option<PathBuf>
}

impl FileCheckpoint {
  pub fn new(log: CircleLog) -> Self {
    Self { log, snapshot: None }
  }

  pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
    self.snapshot = Some(path.into());
    self
  }
}

impl Checkpoint for FileCheckpoint {
  fn replay(&self) -> Result<Vec<Circle>> {
    self.log.replay()
  }

  fn reset(&mut self) -> Result<()> {
    self.log.truncate()
  }

  fn append(&mut self, circle: &Circle) -> Result<()> {
    self.log.append(circle)
  }

  fn snapshot(&mut self, grid: &PixelGrid) -> Result<()> {
    match &self.snapshot {
      Some(path) => grid.save(path),
      None => Ok(())
    }
  }
}

/// Keeps the log lines in memory. Useful when nothing has to survive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCheckpoint {
  pub lines: Vec<String>,
  pub snapshots: usize
}

impl Checkpoint for MemoryCheckpoint {
  fn replay(&self) -> Result<Vec<Circle>> {
    parse_lines(&self.lines.join("\n"))
  }

  fn reset(&mut self) -> Result<()> {
    self.lines.clear();
    Ok(())
  }

  fn append(&mut self, circle: &Circle) -> Result<()> {
    self.lines.push(circle.to_string());
    Ok(())
  }

  fn snapshot(&mut self, _: &PixelGrid) -> Result<()> {
    self.snapshots += 1;
    Ok(())
  }
}
