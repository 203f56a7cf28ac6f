//! The circle packing search.
//!
//! [`CircleTester`] decides single circles, [`RoundCoordinator`] finds the best circle of
//! the whole grid, and [`Ellipsifier`] chains rounds into passes.

pub mod circle_test;
pub use circle_test::CircleTester;

pub mod round;
pub use round::{Candidate, RoundCoordinator};

pub mod engine;
pub use engine::{Ellipsifier, Ellipsis, PassSummary, SearchState, ellipsify};
