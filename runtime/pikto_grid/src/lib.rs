//! Pikto Grid - the walled, paintable board.
//!
//! A `Grid` is an `xsize × ysize` cell matrix with per-cell paint state and
//! per-edge walls. Coordinates start at `(0, 0)` in the north-west corner;
//! x grows to the east, y grows to the south. Walls live on edges between
//! cells: `vwalls[x][y]` is the wall on the *east* edge of cell `(x, y)`,
//! `hwalls[x][y]` the wall on its *south* edge. The outer boundary is
//! implicitly walled.
//!
//! # Contract
//!
//! No operation here can fail. Mutators silently ignore out-of-range
//! coordinates and queries return `false` for them - the editor guarantees
//! in-range calls, and the engine treats its own boundary crossings as
//! action failures, not grid errors. Queries accept negative coordinates so
//! callers can probe one cell past the edge (`knot` does).
//!
//! Storage is three flat `Vec<bool>`s, so `Clone` is a full deep copy with
//! no shared state - the engine clones the editing grid at run start.

/// A robot cell position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// The walled, paintable cell matrix.
#[derive(Clone, Debug)]
pub struct Grid {
    xsize: usize,
    ysize: usize,
    /// `painted[x * ysize + y]` - cell paint state.
    painted: Vec<bool>,
    /// `vwalls[x * ysize + y]` for x in `[0, xsize - 1)` - east-edge walls.
    vwalls: Vec<bool>,
    /// `hwalls[x * (ysize - 1) + y]` for y in `[0, ysize - 1)` - south-edge walls.
    hwalls: Vec<bool>,
}

/// The classroom default board, 10 cells wide by 11 tall.
impl Default for Grid {
    fn default() -> Self {
        Grid::new(10, 11)
    }
}

impl Grid {
    /// An unpainted, unwalled grid. Negative sizes clamp to zero.
    pub fn new(xsize: i32, ysize: i32) -> Self {
        let mut grid = Grid {
            xsize: 0,
            ysize: 0,
            painted: Vec::new(),
            vwalls: Vec::new(),
            hwalls: Vec::new(),
        };
        grid.set_size(xsize, ysize);
        grid
    }

    /// Grid width in cells.
    pub fn xsize(&self) -> i32 {
        as_i32(self.xsize)
    }

    /// Grid height in cells.
    pub fn ysize(&self) -> i32 {
        as_i32(self.ysize)
    }

    /// Resize, preserving paint and wall state wherever old and new extents
    /// overlap. New cells come unpainted and unwalled.
    pub fn set_size(&mut self, xsize: i32, ysize: i32) {
        let nx = to_extent(xsize);
        let ny = to_extent(ysize);

        let mut painted = vec![false; nx * ny];
        let mut vwalls = vec![false; nx.saturating_sub(1) * ny];
        let mut hwalls = vec![false; nx * ny.saturating_sub(1)];

        for x in 0..nx.min(self.xsize) {
            for y in 0..ny.min(self.ysize) {
                painted[x * ny + y] = self.painted[x * self.ysize + y];
            }
            for y in 0..ny.saturating_sub(1).min(self.ysize.saturating_sub(1)) {
                hwalls[x * (ny - 1) + y] = self.hwalls[x * (self.ysize - 1) + y];
            }
        }
        for x in 0..nx.saturating_sub(1).min(self.xsize.saturating_sub(1)) {
            for y in 0..ny.min(self.ysize) {
                vwalls[x * ny + y] = self.vwalls[x * self.ysize + y];
            }
        }

        self.xsize = nx;
        self.ysize = ny;
        self.painted = painted;
        self.vwalls = vwalls;
        self.hwalls = hwalls;
    }

    // Adjacency queries. Each is false at the corresponding perimeter and
    // for any out-of-range coordinate.

    /// Can a robot at `(x, y)` move one cell north?
    pub fn can_north(&self, x: i32, y: i32) -> bool {
        match self.cell(x, y) {
            Some((cx, cy)) if cy >= 1 => !self.hwalls[cx * (self.ysize - 1) + (cy - 1)],
            _ => false,
        }
    }

    /// Can a robot at `(x, y)` move one cell south?
    pub fn can_south(&self, x: i32, y: i32) -> bool {
        match self.cell(x, y) {
            Some((cx, cy)) if cy + 1 < self.ysize => !self.hwalls[cx * (self.ysize - 1) + cy],
            _ => false,
        }
    }

    /// Can a robot at `(x, y)` move one cell east?
    pub fn can_east(&self, x: i32, y: i32) -> bool {
        match self.cell(x, y) {
            Some((cx, cy)) if cx + 1 < self.xsize => !self.vwalls[cx * self.ysize + cy],
            _ => false,
        }
    }

    /// Can a robot at `(x, y)` move one cell west?
    pub fn can_west(&self, x: i32, y: i32) -> bool {
        match self.cell(x, y) {
            Some((cx, cy)) if cx >= 1 => !self.vwalls[(cx - 1) * self.ysize + cy],
            _ => false,
        }
    }

    // Wall mutators. Boundary edges are not stored - setting them is a no-op
    // like any other out-of-range write.

    /// Set or clear the wall on the north edge of `(x, y)`.
    pub fn set_wall_north(&mut self, x: i32, y: i32, wall: bool) {
        if let Some((cx, cy)) = self.cell(x, y) {
            if cy >= 1 {
                self.hwalls[cx * (self.ysize - 1) + (cy - 1)] = wall;
            }
        }
    }

    /// Set or clear the wall on the south edge of `(x, y)`.
    pub fn set_wall_south(&mut self, x: i32, y: i32, wall: bool) {
        if let Some((cx, cy)) = self.cell(x, y) {
            if cy + 1 < self.ysize {
                self.hwalls[cx * (self.ysize - 1) + cy] = wall;
            }
        }
    }

    /// Set or clear the wall on the east edge of `(x, y)`.
    pub fn set_wall_east(&mut self, x: i32, y: i32, wall: bool) {
        if let Some((cx, cy)) = self.cell(x, y) {
            if cx + 1 < self.xsize {
                self.vwalls[cx * self.ysize + cy] = wall;
            }
        }
    }

    /// Set or clear the wall on the west edge of `(x, y)`.
    pub fn set_wall_west(&mut self, x: i32, y: i32, wall: bool) {
        if let Some((cx, cy)) = self.cell(x, y) {
            if cx >= 1 {
                self.vwalls[(cx - 1) * self.ysize + cy] = wall;
            }
        }
    }

    // Paint

    /// Whether `(x, y)` is painted. False out of range.
    pub fn painted(&self, x: i32, y: i32) -> bool {
        match self.cell(x, y) {
            Some((cx, cy)) => self.painted[cx * self.ysize + cy],
            None => false,
        }
    }

    /// Paint or clear `(x, y)`. Out-of-range is ignored.
    pub fn set_painted(&mut self, x: i32, y: i32, painted: bool) {
        if let Some((cx, cy)) = self.cell(x, y) {
            self.painted[cx * self.ysize + cy] = painted;
        }
    }

    /// Whether the grid-line intersection `(x, y)` carries a knot - a wall
    /// corner decoration, present when any of the four walls meeting there
    /// is present. Valid for x in `0..=xsize`, y in `0..=ysize`; the outer
    /// boundary counts as walled, so perimeter knots are always present.
    pub fn knot(&self, x: i32, y: i32) -> bool {
        !self.can_east(x - 1, y - 1)
            || !self.can_south(x, y - 1)
            || !self.can_west(x, y)
            || !self.can_north(x - 1, y)
    }

    /// In-bounds conversion to array coordinates.
    fn cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let cx = usize::try_from(x).ok()?;
        let cy = usize::try_from(y).ok()?;
        (cx < self.xsize && cy < self.ysize).then_some((cx, cy))
    }
}

/// Clamp a requested extent to `[0, i32::MAX]` cells.
fn to_extent(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

fn as_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
