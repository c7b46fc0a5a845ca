use raster_core::Point;

/// How traversal treats the grid's outer edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edges {
    /// Stepping off an edge leads nowhere.
    #[default]
    Bounded,
    /// Opposite edges are adjacent on both axes (torus).
    Wrap,
}

impl From<bool> for Edges {
    /// `true` selects [`Edges::Wrap`].
    fn from(wrap: bool) -> Self {
        if wrap { Self::Wrap } else { Self::Bounded }
    }
}

/// The four axis-aligned unit steps, in expansion order: right, left, down, up.
pub const CARDINAL: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Normalize one coordinate component against an axis of length `dim`.
///
/// With [`Edges::Wrap`], `-1` becomes `dim - 1` and `dim` becomes `0`;
/// otherwise `c` is returned untouched and may still be out of range.
#[inline]
pub fn wrap_coord(c: i32, dim: i32, edges: Edges) -> i32 {
    match edges {
        Edges::Bounded => c,
        Edges::Wrap if c < 0 => dim - 1,
        Edges::Wrap if c >= dim => 0,
        Edges::Wrap => c,
    }
}

/// Resolve the neighbor of `p` in direction `d` on a grid of `size`.
///
/// Returns `None` when the step leaves a bounded grid.
#[inline]
pub fn step(p: Point, d: Point, size: Point, edges: Edges) -> Option<Point> {
    let n = Point::new(
        wrap_coord(p.x + d.x, size.x, edges),
        wrap_coord(p.y + d.y, size.y, edges),
    );
    (n.x >= 0 && n.y >= 0 && n.x < size.x && n.y < size.y).then_some(n)
}

/// In-grid 4-connected neighbors of `p`, in [`CARDINAL`] order.
pub fn cardinal(p: Point, size: Point, edges: Edges) -> impl Iterator<Item = Point> {
    CARDINAL
        .into_iter()
        .filter_map(move |d| step(p, d, size, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_coord_table() {
        assert_eq!(wrap_coord(-1, 5, Edges::Wrap), 4);
        assert_eq!(wrap_coord(5, 5, Edges::Wrap), 0);
        assert_eq!(wrap_coord(3, 5, Edges::Wrap), 3);
        assert_eq!(wrap_coord(-1, 5, Edges::Bounded), -1);
        assert_eq!(wrap_coord(5, 5, Edges::Bounded), 5);
    }

    #[test]
    fn edges_from_bool() {
        assert_eq!(Edges::from(true), Edges::Wrap);
        assert_eq!(Edges::from(false), Edges::Bounded);
        assert_eq!(Edges::default(), Edges::Bounded);
    }

    #[test]
    fn bounded_corner_has_two_neighbors() {
        let size = Point::new(4, 3);
        let n: Vec<_> = cardinal(Point::new(0, 0), size, Edges::Bounded).collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(cardinal(Point::new(1, 1), size, Edges::Bounded).count(), 4);
    }

    #[test]
    fn wrapped_corner_has_four_neighbors() {
        let size = Point::new(4, 3);
        let n: Vec<_> = cardinal(Point::new(0, 0), size, Edges::Wrap).collect();
        assert_eq!(
            n,
            vec![
                Point::new(1, 0),
                Point::new(3, 0),
                Point::new(0, 1),
                Point::new(0, 2),
            ]
        );
    }

    #[test]
    fn single_column_wraps_onto_itself() {
        let size = Point::new(1, 3);
        let n: Vec<_> = cardinal(Point::new(0, 1), size, Edges::Wrap).collect();
        // Both horizontal steps land back on the start cell.
        assert_eq!(n[0], Point::new(0, 1));
        assert_eq!(n[1], Point::new(0, 1));
        assert_eq!(n.len(), 4);
    }
}
