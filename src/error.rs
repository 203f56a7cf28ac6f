//! .
//!
//! Errors are propagated as [`anyhow::Error`]. The failures a caller may want to tell apart
//! are carried as [`Error`] inside it, and can be recovered with `downcast_ref::<Error>()`.
use {
  std::path::PathBuf,
  thiserror::Error
};

/// Crate-wide result, any error converts into [`anyhow::Error`].
pub type Result<T> = anyhow::Result<T>;

#[derive(Debug, Error)]
pub enum Error {
  /// Missing or undecodable input image.
  #[error("cannot open image {path:?}")]
  Open {
    path: PathBuf,
    #[source]
    source: image::ImageError
  },
  /// The circle log is the source of truth for claimed pixels, so an unreadable line
  /// is never skipped.
  #[error("malformed circle log, line {line}: {content:?}")]
  MalformedLog {
    line: usize,
    content: String
  },
  #[error("round worker panicked: {0}")]
  WorkerPanicked(String),
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}

/// Render the whole chain of causes, one per line.
pub fn display(error: &anyhow::Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}
