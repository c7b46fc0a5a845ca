//! Rasterization of circles, lines and rectangles onto a [`Grid`].
//!
//! Shapes are clipped to the grid silently; only a missing point argument
//! is an error.

use crate::error::{GridError, Result};
use crate::geom::{Point, Range};
use crate::grid::Grid;

impl Grid {
    /// Set every cell whose Euclidean distance to `center` is at most
    /// `radius`.
    pub fn draw_circle(
        &mut self,
        center: impl Into<Option<Point>>,
        radius: f64,
        color: i32,
    ) -> Result<()> {
        let center = center.into().ok_or(GridError::NullCenter)?;
        for p in self.bounds() {
            if center.distance(p) <= radius {
                self.paint(p, color);
            }
        }
        Ok(())
    }

    /// Draw a straight segment from `p1` to `p2`, both ends included.
    ///
    /// Steps one cell at a time along the axis with the larger delta and
    /// rounds the other coordinate, so the segment has no gaps. Only the
    /// part of that axis inside the grid is walked, so far-away endpoints
    /// cost no more than the grid is wide.
    pub fn draw_line(
        &mut self,
        p1: impl Into<Option<Point>>,
        p2: impl Into<Option<Point>>,
        color: i32,
    ) -> Result<()> {
        let (a, b) = endpoints(p1, p2)?;
        if a == b {
            self.paint(a, color);
            return Ok(());
        }
        let (ax, ay) = (i64::from(a.x), i64::from(a.y));
        let (dx, dy) = (i64::from(b.x) - ax, i64::from(b.y) - ay);
        if dx.abs() >= dy.abs() {
            for x in clipped_span(ax, ax + dx, self.width()) {
                let t = (x - ax) as f64 / dx as f64;
                let y = (ay as f64 + t * dy as f64).round() as i32;
                self.paint(Point::new(x as i32, y), color);
            }
        } else {
            for y in clipped_span(ay, ay + dy, self.height()) {
                let t = (y - ay) as f64 / dy as f64;
                let x = (ax as f64 + t * dx as f64).round() as i32;
                self.paint(Point::new(x, y as i32), color);
            }
        }
        Ok(())
    }

    /// Fill the axis-aligned box with corners `p1` and `p2` (inclusive).
    pub fn draw_rect(
        &mut self,
        p1: impl Into<Option<Point>>,
        p2: impl Into<Option<Point>>,
        color: i32,
    ) -> Result<()> {
        let (a, b) = endpoints(p1, p2)?;
        let area: Range = Range::spanning(a, b).intersect(self.bounds());
        for p in area {
            self.paint(p, color);
        }
        Ok(())
    }

    #[inline]
    fn paint(&mut self, p: Point, color: i32) {
        if let Some(c) = self.at_mut(p) {
            *c = color;
        }
    }
}

/// The part of `[min(a, b), max(a, b)]` that lies in `[0, len)`.
fn clipped_span(a: i64, b: i64, len: i32) -> std::ops::RangeInclusive<i64> {
    a.min(b).max(0)..=a.max(b).min(i64::from(len) - 1)
}

fn endpoints(
    p1: impl Into<Option<Point>>,
    p2: impl Into<Option<Point>>,
) -> Result<(Point, Point)> {
    match (p1.into(), p2.into()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(GridError::NullEndpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(g: &Grid, color: i32) -> Vec<Point> {
        g.iter()
            .filter(|&(_, v)| v == color)
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn circle_covers_radius() {
        let mut g = Grid::square(3).unwrap();
        g.draw_circle(Point::new(1, 1), 1.5, 9).unwrap();
        // Corners are at sqrt(2) < 1.5.
        assert_eq!(g.count(9), 9);

        let mut g = Grid::square(3).unwrap();
        g.draw_circle(Point::new(1, 1), 1.0, 9).unwrap();
        assert_eq!(g.count(9), 5);
        assert_eq!(g.get(0, 0), Ok(0));
        assert_eq!(g.get(0, 1), Ok(9));
    }

    #[test]
    fn circle_center_may_lie_outside() {
        let mut g = Grid::square(4).unwrap();
        g.draw_circle(Point::new(-1, -1), 1.5, 3).unwrap();
        assert_eq!(painted(&g, 3), vec![Point::new(0, 0)]);
    }

    #[test]
    fn circle_requires_center() {
        let mut g = Grid::square(3).unwrap();
        assert_eq!(g.draw_circle(None, 2.0, 1), Err(GridError::NullCenter));
        assert_eq!(g.count(0), 9);
    }

    #[test]
    fn line_horizontal() {
        let mut g = Grid::square(3).unwrap();
        g.draw_line(Point::new(0, 0), Point::new(2, 0), 7).unwrap();
        assert_eq!(
            painted(&g, 7),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn line_single_point() {
        let mut g = Grid::square(3).unwrap();
        g.draw_line(Point::new(1, 2), Point::new(1, 2), 4).unwrap();
        assert_eq!(painted(&g, 4), vec![Point::new(1, 2)]);
        // Outside: nothing happens, no error.
        g.draw_line(Point::new(5, 5), Point::new(5, 5), 4).unwrap();
        assert_eq!(g.count(4), 1);
    }

    #[test]
    fn line_steep_walks_y() {
        let mut g = Grid::new(3, 5, 0).unwrap();
        g.draw_line(Point::new(2, 4), Point::new(0, 0), 1).unwrap();
        // One cell per row, no gaps.
        assert_eq!(g.count(1), 5);
        for y in 0..5 {
            assert_eq!((0..3).filter(|&x| g.get(x, y) == Ok(1)).count(), 1);
        }
        assert_eq!(g.get(0, 0), Ok(1));
        assert_eq!(g.get(2, 4), Ok(1));
    }

    #[test]
    fn line_is_clipped() {
        let mut g = Grid::square(3).unwrap();
        g.draw_line(Point::new(-2, 1), Point::new(5, 1), 2).unwrap();
        assert_eq!(g.count(2), 3);
        assert_eq!(painted(&g, 2)[0], Point::new(0, 1));
    }

    #[test]
    fn line_with_extreme_endpoints() {
        let mut g = Grid::square(3).unwrap();
        g.draw_line(Point::new(-2, 0), Point::new(i32::MAX, 0), 5).unwrap();
        assert_eq!(
            painted(&g, 5),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );

        g.draw_line(Point::new(i32::MAX, 1), Point::new(i32::MIN, 1), 6).unwrap();
        assert_eq!(g.count(6), 3);

        g.draw_line(Point::new(1, i32::MIN), Point::new(1, i32::MAX), 7).unwrap();
        assert_eq!(
            painted(&g, 7),
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn long_diagonal_walks_only_the_grid() {
        let mut g = Grid::square(3).unwrap();
        g.draw_line(Point::new(0, 0), Point::new(2_000_000_000, 2_000_000_000), 1)
            .unwrap();
        assert_eq!(
            painted(&g, 1),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn line_requires_endpoints() {
        let mut g = Grid::square(3).unwrap();
        assert_eq!(
            g.draw_line(None, Point::new(1, 1), 1),
            Err(GridError::NullEndpoint)
        );
        assert_eq!(
            g.draw_line(Point::new(1, 1), None, 1),
            Err(GridError::NullEndpoint)
        );
    }

    #[test]
    fn rect_inclusive_and_clipped() {
        let mut g = Grid::square(3).unwrap();
        g.draw_rect(Point::new(1, 2), Point::new(0, 1), 3).unwrap();
        assert_eq!(g.count(3), 4);
        assert_eq!(g.get(0, 1), Ok(3));
        assert_eq!(g.get(1, 2), Ok(3));

        let mut g = Grid::square(3).unwrap();
        g.draw_rect(Point::new(-5, -5), Point::new(1, 10), 8).unwrap();
        assert_eq!(g.count(8), 6);
    }

    #[test]
    fn rect_with_extreme_corners() {
        let mut g = Grid::square(3).unwrap();
        g.draw_rect(Point::new(0, 0), Point::new(i32::MAX, 1), 5).unwrap();
        assert_eq!(g.count(5), 6);
        assert_eq!(g.get(2, 1), Ok(5));
        assert_eq!(g.get(0, 2), Ok(0));

        let mut g = Grid::square(3).unwrap();
        g.draw_rect(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), 2)
            .unwrap();
        assert_eq!(g.count(2), 9);
    }

    #[test]
    fn rect_requires_endpoints() {
        let mut g = Grid::square(3).unwrap();
        assert_eq!(
            g.draw_rect(Point::new(0, 0), None, 1),
            Err(GridError::NullEndpoint)
        );
    }
}
