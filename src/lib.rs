//! This is a library for approximating raster images with packed circles.
//!
//! The search is greedy: each round scans the image for the largest circle whose edge is
//! uniform enough in color and does not touch any pixel claimed by an earlier circle, then
//! claims the pixels of that circle. A pass repeats rounds until the best circle falls to a
//! minimum size. Results are [`ColorRecord`](geometry::ColorRecord)s, in discovery order,
//! for a renderer to draw.
//!
//! # Basic usage
//! ```no_run
//! # use ellipsify::{
//! #   error::Result,
//! #   config::Config,
//! #   checkpoint::{CircleLog, FileCheckpoint},
//! #   solver::ellipsify
//! # };
//! # fn main() -> Result<()> {
//! let path = "TestImage.jpg";
//!
//! // Coarse circles first, then progressively finer detail in the gaps.
//! let coarse = Config::default()
//!   .threshold(7)
//!   .precision(3)
//!   .minimum_size(2);
//! let passes = [
//!   coarse.clone(),
//!   coarse.clone().threshold(12).minimum_size(1).pass_number(1),
//! ];
//!
//! // Every circle is appended to `TestImage.jpg.txt`. Starting again with `pass_number > 0`
//! // replays it instead of searching the same circles again.
//! let checkpoint = FileCheckpoint::new(CircleLog::beside(path))
//!   .with_snapshot("temp.png");
//! let ellipsis = ellipsify(path, &passes, checkpoint)?;
//!
//! for record in ellipsis.records() {
//!   println!("{}", record);
//! }
//! #   Ok(())
//! # }
//! ```
//!
//! # Parallelism
//! Rounds are split by candidate columns over `Config::num_threads` workers. The pixel grid
//! is only read during a round and only written between rounds. When several candidates
//! share the largest radius, the first one found wins; with more than one worker, which
//! one that is can differ between runs. A single worker is fully reproducible.

mod util;

pub mod error;
pub mod geometry;
pub mod pixels;
pub mod config;
pub mod checkpoint;
pub mod solver;
