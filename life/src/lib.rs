//! Conway's Game of Life on an unbounded plane.
//!
//! A [`Grid`] holds the live cells of one generation and is never mutated in
//! place; [`engine::tick`] produces the next one. Generations are viewed and
//! stored either as ASCII art through a [`Viewport`] ([`ascii`]) or as a full
//! coordinate-keyed [`Snapshot`]. [`Session`] bundles the state a front end
//! keeps between frames.

pub mod ascii;
pub mod cell;
pub mod engine;
pub mod error;
pub mod format;
pub mod grid;
pub mod neighbours;
pub mod patterns;
pub mod session;
pub mod snapshot;
pub mod viewport;

pub use cell::Cell;
pub use engine::tick;
pub use error::{LifeError, Result};
pub use format::FileFormat;
pub use grid::Grid;
pub use session::{Pan, Session, SessionConfig};
pub use snapshot::Snapshot;
pub use viewport::Viewport;
