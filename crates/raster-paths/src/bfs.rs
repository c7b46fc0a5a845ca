use std::collections::VecDeque;

use raster_core::{Grid, Point};

use crate::neighbors::{self, Edges};
use crate::traits::Search;

/// Breadth-first traversal engine over a `width` x `height` raster.
///
/// `Bfs` owns the FIFO queue and the visited mask. Both are reset at the
/// start of every [`run`](Bfs::run), so one instance can be reused for many
/// traversals without reallocating.
#[derive(Debug, Clone)]
pub struct Bfs {
    size: Point,
    visited: Vec<bool>,
    queue: VecDeque<Point>,
}

impl Bfs {
    /// Create an engine for a `width` x `height` raster.
    pub fn new(width: i32, height: i32) -> Self {
        let size = Point::new(width.max(0), height.max(0));
        Self {
            size,
            visited: vec![false; cell_count(size)],
            queue: VecDeque::new(),
        }
    }

    /// Create an engine sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Raster size this engine traverses.
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// Change the raster size, reallocating the mask only when it grows.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.size = Point::new(width.max(0), height.max(0));
        let len = cell_count(self.size);
        if self.visited.len() < len {
            self.visited.resize(len, false);
        }
    }

    /// Flat index of an in-grid point.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        flat(self.size, p)
    }

    /// Traverse breadth-first from `start`.
    ///
    /// Cells are marked visited when enqueued, so each one is handed to
    /// [`Search::visit`] at most once. Neighbors are resolved with
    /// [`neighbors::step`] and filtered by [`Search::passable`]; the start
    /// cell itself is not checked. Returns the number of cells dequeued, or
    /// `0` when `start` lies outside the raster.
    pub fn run<S: Search>(&mut self, start: Point, edges: impl Into<Edges>, search: &mut S) -> usize {
        let edges = edges.into();
        let size = self.size;

        let len = cell_count(size);
        self.visited[..len].fill(false);
        self.queue.clear();

        if !(start.x >= 0 && start.y >= 0 && start.x < size.x && start.y < size.y) {
            return 0;
        }

        let si = self.idx(start);
        self.visited[si] = true;
        self.queue.push_back(start);

        let mut dequeued = 0;
        while let Some(cur) = self.queue.pop_front() {
            dequeued += 1;
            if search.visit(cur).is_break() {
                break;
            }
            for n in neighbors::cardinal(cur, size, edges) {
                let ni = flat(size, n);
                if self.visited[ni] || !search.passable(n) {
                    continue;
                }
                self.visited[ni] = true;
                search.discover(cur, n);
                self.queue.push_back(n);
            }
        }

        log::trace!("bfs from {start} ({edges:?}): {dequeued} cells dequeued");
        dequeued
    }
}

#[inline]
fn cell_count(size: Point) -> usize {
    size.x as usize * size.y as usize
}

#[inline]
pub(crate) fn flat(size: Point, p: Point) -> usize {
    p.y as usize * size.x as usize + p.x as usize
}
