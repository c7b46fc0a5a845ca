//! The [`Grid`] type — a dense, exclusively owned 2D raster of `i32` cells.
//!
//! Unlike a view type, a `Grid` never shares storage: buffers passed in are
//! copied, buffers handed out are copies, and [`Clone`] is a deep copy.
//!
//! Bulk buffers use column layout: `columns[x][y]`, so the outer length is
//! the width and every inner length is the height.

use crate::error::{GridError, Result};
use crate::geom::{Point, Range, RangeIter};

/// A `width` x `height` grid of integer cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<i32>,
}

impl Grid {
    /// Create a `width` x `height` grid with every cell set to `fill`.
    ///
    /// Fails with [`GridError::InvalidDimension`] if a dimension is not
    /// positive or the cell buffer cannot be allocated.
    pub fn new(width: i32, height: i32, fill: i32) -> Result<Self> {
        let invalid = GridError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let cells = alloc_cells(width, height, fill).ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a `size` x `size` grid of zeros.
    pub fn square(size: i32) -> Result<Self> {
        Self::new(size, size, 0)
    }

    /// Create a grid by copying a rectangular column buffer (`columns[x][y]`).
    pub fn from_columns<C: AsRef<[i32]>>(columns: &[C]) -> Result<Self> {
        let (width, height) = check_shape(columns)?;
        let mut cells = alloc_cells(width, height, 0)
            .ok_or_else(|| GridError::InvalidShape(format!("{width}x{height} is too large")))?;
        for (x, col) in columns.iter().enumerate() {
            for (y, &v) in col.as_ref().iter().enumerate() {
                cells[y * width as usize + x] = v;
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A grid of the same size as `self` with every cell set to `fill`.
    pub fn filled_like(&self, fill: i32) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![fill; self.cells.len()],
        }
    }

    /// Re-initialize in place as a `width` x `height` grid of `fill`.
    ///
    /// On error the grid is left unchanged.
    pub fn reset(&mut self, width: i32, height: i32, fill: i32) -> Result<()> {
        *self = Self::new(width, height, fill)?;
        Ok(())
    }

    /// Replace the contents with a copy of `columns`, possibly changing the
    /// dimensions. On error the grid is left unchanged.
    pub fn load<C: AsRef<[i32]>>(&mut self, columns: &[C]) -> Result<()> {
        let next = Self::from_columns(columns)?;
        log::debug!(
            "grid reloaded: {}x{} -> {}x{}",
            self.width,
            self.height,
            next.width,
            next.height
        );
        *self = next;
        Ok(())
    }

    /// Copy the contents out as a column buffer (`columns[x][y]`).
    pub fn to_columns(&self) -> Vec<Vec<i32>> {
        (0..self.width)
            .map(|x| {
                (0..self.height)
                    .map(|y| self.cells[self.flat(x, y)])
                    .collect()
            })
            .collect()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn flat(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some(self.flat(x, y))
        } else {
            None
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<i32> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Write the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, value: i32) -> Result<()> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = value;
        Ok(())
    }

    /// Read the cell at `p`, or `None` if `p` is outside.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.index(p.x, p.y).map(|i| self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if `p` is outside.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut i32> {
        let i = self.index(p.x, p.y)?;
        Some(&mut self.cells[i])
    }

    /// Whether `p` is present and inside the grid. Never fails.
    #[inline]
    pub fn is_inside(&self, p: impl Into<Option<Point>>) -> bool {
        p.into().is_some_and(|p| self.index(p.x, p.y).is_some())
    }

    /// Whether `other` is present and has the same width and height.
    pub fn same_dimensions<'a>(&self, other: impl Into<Option<&'a Grid>>) -> bool {
        other
            .into()
            .is_some_and(|o| o.width == self.width && o.height == self.height)
    }

    /// Add `other` cell by cell (wrapping on overflow).
    ///
    /// Does nothing when `other` is absent or its dimensions differ; callers
    /// that need to detect the mismatch must check
    /// [`same_dimensions`](Grid::same_dimensions) first.
    pub fn add<'a>(&mut self, other: impl Into<Option<&'a Grid>>) {
        let Some(other) = other.into() else {
            return;
        };
        if !self.same_dimensions(other) {
            return;
        }
        for (a, b) in self.cells.iter_mut().zip(&other.cells) {
            *a = a.wrapping_add(*b);
        }
    }

    /// Multiply every cell by `factor`, rounding half away from zero.
    pub fn scale(&mut self, factor: f64) {
        for c in self.cells.iter_mut() {
            *c = (f64::from(*c) * factor).round() as i32;
        }
    }

    /// Resample to `round(width * sx)` x `round(height * sy)` (at least 1x1)
    /// using nearest-neighbor sampling.
    ///
    /// Fails with [`GridError::InvalidScale`] if a factor is not a positive
    /// finite number or the resampled buffer cannot be allocated, in which
    /// case the grid is left unchanged.
    pub fn resize(&mut self, sx: f64, sy: f64) -> Result<()> {
        if !(sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0) {
            return Err(GridError::InvalidScale { sx, sy });
        }
        let new_w = scaled_dim(self.width, sx).ok_or(GridError::InvalidScale { sx, sy })?;
        let new_h = scaled_dim(self.height, sy).ok_or(GridError::InvalidScale { sx, sy })?;

        let mut cells = reserve_cells(new_w, new_h).ok_or(GridError::InvalidScale { sx, sy })?;
        for y in 0..new_h {
            let src_y = ((f64::from(y) / sy).floor() as i32).clamp(0, self.height - 1);
            for x in 0..new_w {
                let src_x = ((f64::from(x) / sx).floor() as i32).clamp(0, self.width - 1);
                cells.push(self.cells[self.flat(src_x, src_y)]);
            }
        }

        log::debug!(
            "grid resized: {}x{} -> {}x{}",
            self.width,
            self.height,
            new_w,
            new_h
        );
        self.width = new_w;
        self.height = new_h;
        self.cells = cells;
        Ok(())
    }

    /// Count how many cells equal `value`.
    pub fn count(&self, value: i32) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Row-major iterator over `(Point, value)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

/// `max(1, round(dim * factor))`, or `None` if it does not fit an `i32`.
fn scaled_dim(dim: i32, factor: f64) -> Option<i32> {
    let d = (f64::from(dim) * factor).round().max(1.0);
    if d > f64::from(i32::MAX) {
        None
    } else {
        Some(d as i32)
    }
}

/// An empty buffer with room for `width * height` cells, or `None` if the
/// allocation is refused.
fn reserve_cells(width: i32, height: i32) -> Option<Vec<i32>> {
    let len = (width as usize).checked_mul(height as usize)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).ok()?;
    Some(cells)
}

fn alloc_cells(width: i32, height: i32, fill: i32) -> Option<Vec<i32>> {
    let mut cells = reserve_cells(width, height)?;
    // The product was checked by `reserve_cells`.
    cells.resize(width as usize * height as usize, fill);
    Some(cells)
}

fn check_shape<C: AsRef<[i32]>>(columns: &[C]) -> Result<(i32, i32)> {
    let Some(first) = columns.first() else {
        return Err(GridError::InvalidShape("buffer is empty".into()));
    };
    let height = first.as_ref().len();
    if height == 0 {
        return Err(GridError::InvalidShape("columns are empty".into()));
    }
    if let Some(x) = columns.iter().position(|c| c.as_ref().len() != height) {
        return Err(GridError::InvalidShape(format!(
            "column {x} has length {}, expected {height}",
            columns[x].as_ref().len()
        )));
    }
    let too_large = || GridError::InvalidShape("buffer is too large".into());
    let width = i32::try_from(columns.len()).map_err(|_| too_large())?;
    let height = i32::try_from(height).map_err(|_| too_large())?;
    Ok((width, height))
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, value)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, i32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.cells[self.grid.flat(p.x, p.y)]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, i32);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// On-disk shape of a [`Grid`]: dimensions plus the column buffer.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    cells: Vec<Vec<i32>>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width,
            height: g.height,
            cells: g.to_columns(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self> {
        let g = Grid::from_columns(&r.cells)?;
        if g.width != r.width || g.height != r.height {
            return Err(GridError::InvalidShape(format!(
                "declared {}x{} but cells are {}x{}",
                r.width, r.height, g.width, g.height
            )));
        }
        Ok(g)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_columns(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"width":2,"height":3,"cells":[[1,2,3],[4,5,6]]}"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_inconsistent_payload() {
        let bad = r#"{"width":3,"height":3,"cells":[[1,2,3],[4,5,6]]}"#;
        assert!(serde_json::from_str::<Grid>(bad).is_err());
        let ragged = r#"{"width":2,"height":3,"cells":[[1,2,3],[4,5]]}"#;
        assert!(serde_json::from_str::<Grid>(ragged).is_err());
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, -7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
