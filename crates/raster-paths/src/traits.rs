use std::ops::ControlFlow;

use raster_core::{Grid, Point};

use crate::neighbors::Edges;

/// Per-traversal policy plugged into [`Bfs::run`](crate::Bfs::run).
///
/// The engine owns the queue and visited mask; a `Search` decides which
/// cells may be entered and what happens when cells are reached.
pub trait Search {
    /// Whether the traversal may enter `p`. Only asked for unvisited,
    /// in-grid cells.
    fn passable(&self, p: Point) -> bool;

    /// Called once when `to` is first reached from `from`, right before it
    /// is enqueued.
    fn discover(&mut self, _from: Point, _to: Point) {}

    /// Called when `p` is dequeued. Returning `Break` ends the traversal
    /// before `p` is expanded.
    fn visit(&mut self, _p: Point) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Breadth-first operations on a [`Grid`].
///
/// Misuse never raises here: an absent or out-of-grid endpoint yields the
/// documented sentinel (`0`, `None` or an all-[`UNREACHED`](crate::UNREACHED)
/// grid).
pub trait Traverse {
    /// Repaint the 4-connected region of cells equal to the value at `start`
    /// with `value`. Returns the number of cells changed.
    fn flood_fill(
        &mut self,
        start: impl Into<Option<Point>>,
        value: i32,
        edges: impl Into<Edges>,
    ) -> usize;

    /// A shortest 4-connected path from `start` to `goal` (both included)
    /// avoiding cells equal to `obstacle`.
    fn shortest_path(
        &self,
        start: impl Into<Option<Point>>,
        goal: impl Into<Option<Point>>,
        obstacle: i32,
        edges: impl Into<Edges>,
    ) -> Option<Vec<Point>>;

    /// Step distance from `start` to every cell, avoiding cells equal to
    /// `obstacle`. Unreached cells hold [`UNREACHED`](crate::UNREACHED).
    fn all_distances(
        &self,
        start: impl Into<Option<Point>>,
        obstacle: i32,
        edges: impl Into<Edges>,
    ) -> Grid;
}
