//! **raster-core** — a dense 2D integer raster.
//!
//! This crate provides the storage and geometry side of *raster*: integer
//! points and ranges, the exclusively owned [`Grid`] with checked accessors,
//! pixel-wise arithmetic and nearest-neighbor resampling, plus simple shape
//! rasterization. Graph traversals over a `Grid` live in `raster-paths`.

pub mod draw;
pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, Result};
pub use geom::{Point, Range};
pub use grid::{Grid, GridIter};
