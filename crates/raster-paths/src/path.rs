//! Unweighted shortest path with predecessor reconstruction.

use std::ops::ControlFlow;

use raster_core::{Grid, Point};

use crate::bfs::{Bfs, flat};
use crate::neighbors::Edges;
use crate::traits::Search;

struct ShortestPath<'g> {
    grid: &'g Grid,
    obstacle: i32,
    goal: Point,
    /// Discovering predecessor of each cell, indexed like the grid.
    parents: Vec<Option<Point>>,
    found: bool,
}

impl ShortestPath<'_> {
    fn parent(&self, p: Point) -> Option<Point> {
        self.parents[flat(self.grid.size(), p)]
    }

    /// Walk predecessors back from the goal, then reverse.
    fn reconstruct(&self, start: Point) -> Option<Vec<Point>> {
        let mut path = vec![self.goal];
        let mut cur = self.goal;
        while cur != start {
            cur = self.parent(cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

impl Search for ShortestPath<'_> {
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|v| v != self.obstacle)
    }

    fn discover(&mut self, from: Point, to: Point) {
        let i = flat(self.grid.size(), to);
        self.parents[i] = Some(from);
    }

    fn visit(&mut self, p: Point) -> ControlFlow<()> {
        if p == self.goal {
            self.found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

pub(crate) fn shortest_path(
    grid: &Grid,
    start: Option<Point>,
    goal: Option<Point>,
    obstacle: i32,
    edges: Edges,
) -> Option<Vec<Point>> {
    let (start, goal) = (start?, goal?);
    let open = |p: Point| grid.at(p).is_some_and(|v| v != obstacle);
    if !open(start) || !open(goal) {
        log::trace!("shortest path: endpoint {start} or {goal} is outside or blocked");
        return None;
    }

    let mut bfs = Bfs::for_grid(grid);
    let mut search = ShortestPath {
        grid,
        obstacle,
        goal,
        parents: vec![None; grid.bounds().len()],
        found: false,
    };
    bfs.run(start, edges, &mut search);
    if !search.found {
        return None;
    }
    search.reconstruct(start)
}
