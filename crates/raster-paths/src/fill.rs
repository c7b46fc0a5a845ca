//! Flood fill.

use std::ops::ControlFlow;

use raster_core::{Grid, Point};

use crate::bfs::Bfs;
use crate::neighbors::Edges;
use crate::traits::Search;

/// Repaints dequeued cells that still hold `target`.
struct FloodFill<'g> {
    grid: &'g mut Grid,
    target: i32,
    replacement: i32,
    painted: usize,
}

impl Search for FloodFill<'_> {
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p) == Some(self.target)
    }

    fn visit(&mut self, p: Point) -> ControlFlow<()> {
        if let Some(c) = self.grid.at_mut(p) {
            if *c == self.target {
                *c = self.replacement;
                self.painted += 1;
            }
        }
        ControlFlow::Continue(())
    }
}

pub(crate) fn flood_fill(grid: &mut Grid, start: Option<Point>, value: i32, edges: Edges) -> usize {
    let Some((start, target)) = start.and_then(|p| grid.at(p).map(|v| (p, v))) else {
        log::trace!("flood fill: start {start:?} is absent or outside");
        return 0;
    };
    if target == value {
        return 0;
    }

    let mut bfs = Bfs::for_grid(grid);
    let mut search = FloodFill {
        grid,
        target,
        replacement: value,
        painted: 0,
    };
    bfs.run(start, edges, &mut search);
    search.painted
}

#[cfg(test)]
mod tests {
    use crate::Traverse;

    use super::*;

    #[test]
    fn isolated_center_cell() {
        let mut g = Grid::square(3).unwrap();
        g.set(1, 1, 5).unwrap();
        assert_eq!(g.flood_fill(Point::new(1, 1), 9, false), 1);
        assert_eq!(g.get(1, 1), Ok(9));
        assert_eq!(g.count(0), 8);
    }

    #[test]
    fn checkerboard_center() {
        let mut g = Grid::from_columns(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        g.set(1, 1, 5).unwrap();
        assert_eq!(g.flood_fill(Point::new(1, 1), 9, false), 1);
        assert_eq!(g.get(1, 1), Ok(9));
    }

    #[test]
    fn fills_whole_component_then_nothing() {
        let mut g = Grid::new(5, 4, 0).unwrap();
        g.draw_line(Point::new(2, 0), Point::new(2, 3), 1).unwrap();
        assert_eq!(g.flood_fill(Point::new(0, 0), 7, false), 8);
        assert_eq!(g.count(7), 8);
        assert_eq!(g.get(3, 0), Ok(0));
        assert_eq!(g.flood_fill(Point::new(0, 0), 7, false), 0);
    }

    #[test]
    fn wrap_joins_split_regions() {
        let mut bounded = Grid::new(5, 4, 0).unwrap();
        bounded.draw_line(Point::new(2, 0), Point::new(2, 3), 1).unwrap();
        let mut wrapped = bounded.clone();

        assert_eq!(bounded.flood_fill(Point::new(0, 0), 7, false), 8);
        assert_eq!(wrapped.flood_fill(Point::new(0, 0), 7, true), 16);
        assert_eq!(wrapped.count(1), 4);
    }

    #[test]
    fn same_value_is_a_no_op() {
        let mut g = Grid::new(2, 2, 4).unwrap();
        let before = g.clone();
        assert_eq!(g.flood_fill(Point::new(0, 0), 4, true), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn absent_or_outside_start() {
        let mut g = Grid::new(2, 2, 0).unwrap();
        let before = g.clone();
        assert_eq!(g.flood_fill(None, 1, false), 0);
        assert_eq!(g.flood_fill(Point::new(2, 0), 1, false), 0);
        assert_eq!(g.flood_fill(Point::new(-1, 1), 1, true), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn large_open_grid() {
        let mut g = Grid::from_columns(&vec![vec![0; 500]; 500]).unwrap();
        assert_eq!(g.flood_fill(Point::new(3, 2), 1, true), 250_000);
        assert_eq!(g.count(1), 250_000);
    }
}
