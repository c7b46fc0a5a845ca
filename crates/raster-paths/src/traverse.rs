use raster_core::{Grid, Point};

use crate::neighbors::Edges;
use crate::traits::Traverse;
use crate::{distance, fill, path};

impl Traverse for Grid {
    fn flood_fill(
        &mut self,
        start: impl Into<Option<Point>>,
        value: i32,
        edges: impl Into<Edges>,
    ) -> usize {
        fill::flood_fill(self, start.into(), value, edges.into())
    }

    fn shortest_path(
        &self,
        start: impl Into<Option<Point>>,
        goal: impl Into<Option<Point>>,
        obstacle: i32,
        edges: impl Into<Edges>,
    ) -> Option<Vec<Point>> {
        path::shortest_path(self, start.into(), goal.into(), obstacle, edges.into())
    }

    fn all_distances(
        &self,
        start: impl Into<Option<Point>>,
        obstacle: i32,
        edges: impl Into<Edges>,
    ) -> Grid {
        distance::all_distances(self, start.into(), obstacle, edges.into())
    }
}
