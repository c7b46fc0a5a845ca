//! Breadth-first traversal over a [`raster_core::Grid`].
//!
//! One engine, [`Bfs`], drives every traversal on a 4-connected raster with
//! optional toroidal wrap ([`Edges`]). The behavior of a traversal is
//! supplied by a [`Search`]: which cells may be entered, what to record when
//! a cell is discovered, and when to stop.
//!
//! The [`Traverse`] extension trait builds the three grid operations on top:
//!
//! - **Flood fill** ([`Traverse::flood_fill`])
//! - **Shortest path** ([`Traverse::shortest_path`])
//! - **Distance map** ([`Traverse::all_distances`])
//!
//! All three report "nothing to do" through sentinels (`0`, `None`,
//! [`UNREACHED`]) rather than errors.

mod bfs;
mod distance;
mod fill;
mod neighbors;
mod path;
mod traits;
mod traverse;

pub use bfs::Bfs;
pub use distance::{UNREACHED, manhattan, toroidal_manhattan};
pub use neighbors::{CARDINAL, Edges, cardinal, step, wrap_coord};
pub use traits::{Search, Traverse};
