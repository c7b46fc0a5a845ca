//! Single-source step-distance maps and closed-form distances.

use raster_core::{Grid, Point};

use crate::bfs::Bfs;
use crate::neighbors::Edges;
use crate::traits::Search;

/// Distance-map value of cells that were never reached.
pub const UNREACHED: i32 = -1;

struct Distances<'g> {
    grid: &'g Grid,
    obstacle: i32,
    out: Grid,
}

impl Search for Distances<'_> {
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|v| v != self.obstacle)
    }

    fn discover(&mut self, from: Point, to: Point) {
        let Some(d) = self.out.at(from) else {
            return;
        };
        if let Some(c) = self.out.at_mut(to) {
            *c = d + 1;
        }
    }
}

pub(crate) fn all_distances(grid: &Grid, start: Option<Point>, obstacle: i32, edges: Edges) -> Grid {
    let mut out = grid.filled_like(UNREACHED);
    let Some(start) = start.filter(|&p| grid.is_inside(p)) else {
        log::trace!("distance map: start {start:?} is absent or outside");
        return out;
    };
    if let Some(c) = out.at_mut(start) {
        *c = 0;
    }

    let mut bfs = Bfs::for_grid(grid);
    let mut search = Distances {
        grid,
        obstacle,
        out,
    };
    bfs.run(start, edges, &mut search);
    search.out
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Manhattan distance on a `size` torus: each axis takes the shorter way
/// around. Equals the BFS distance on an obstacle-free wrapped grid.
#[inline]
pub fn toroidal_manhattan(a: Point, b: Point, size: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx.min(size.x - dx) + dy.min(size.y - dy)
}
