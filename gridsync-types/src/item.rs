//! Grid item geometry and constraints.
//!
//! Positions and sizes are measured in grid cells. An item's identity is its
//! `id`; two items with equal geometry but different ids are different items.

use std::fmt;

/// Size axis, used when reporting constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Reasons a [`GridItem`] can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item id must not be empty")]
    EmptyId,

    #[error("item {id}: size must be at least 1x1, got {w}x{h}")]
    ZeroSize { id: String, w: u32, h: u32 },

    #[error("item {id}: {axis} {value} outside bounds [{min:?}, {max:?}]")]
    OutOfBounds {
        id: String,
        axis: Axis,
        value: u32,
        min: Option<u32>,
        max: Option<u32>,
    },

    #[error("item {id}: minimum {axis} {min} exceeds maximum {max}")]
    InvertedBounds {
        id: String,
        axis: Axis,
        min: u32,
        max: u32,
    },
}

/// One rectangle in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridItem {
    /// Stable identity, never reused for a different item.
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub min_w: Option<u32>,
    pub min_h: Option<u32>,
    pub max_w: Option<u32>,
    pub max_h: Option<u32>,
    /// Static items ignore position/size edits coming from the client.
    pub is_static: bool,
    /// Advisory to the client only.
    pub is_draggable: bool,
    /// Advisory to the client only.
    pub is_resizable: bool,
}

impl GridItem {
    /// Width used by [`GridItem::with_default_size`].
    pub const DEFAULT_WIDTH: u32 = 4;
    /// Height used by [`GridItem::with_default_size`].
    pub const DEFAULT_HEIGHT: u32 = 3;

    /// Creates an unconstrained, draggable, resizable item.
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            min_h: None,
            max_w: None,
            max_h: None,
            is_static: false,
            is_draggable: true,
            is_resizable: true,
        }
    }

    /// Creates a 4x3 item at the origin.
    pub fn with_default_size(id: impl Into<String>) -> Self {
        Self::new(id, 0, 0, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    pub fn with_min_size(mut self, min_w: u32, min_h: u32) -> Self {
        self.min_w = Some(min_w);
        self.min_h = Some(min_h);
        self
    }

    pub fn with_max_size(mut self, max_w: u32, max_h: u32) -> Self {
        self.max_w = Some(max_w);
        self.max_h = Some(max_h);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn not_draggable(mut self) -> Self {
        self.is_draggable = false;
        self
    }

    pub fn not_resizable(mut self) -> Self {
        self.is_resizable = false;
        self
    }

    /// Moves the item, keeping size and constraints.
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// First row below the item.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// First column right of the item.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Whether the item occupies cell `(cx, cy)`.
    pub fn occupies(&self, cx: u32, cy: u32) -> bool {
        cx >= self.x && cx < self.right() && cy >= self.y && cy < self.bottom()
    }

    /// Whether the `w`x`h` rectangle at `(x, y)` shares a cell with this item.
    pub fn overlaps_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        x < self.right()
            && x.saturating_add(w) > self.x
            && y < self.bottom()
            && y.saturating_add(h) > self.y
    }

    /// Whether two items share at least one cell.
    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.overlaps_rect(other.x, other.y, other.w, other.h)
    }

    /// Checks id, minimum size and every bound that is set.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.id.is_empty() {
            return Err(ItemError::EmptyId);
        }
        if self.w == 0 || self.h == 0 {
            return Err(ItemError::ZeroSize {
                id: self.id.clone(),
                w: self.w,
                h: self.h,
            });
        }
        self.check_axis(Axis::Width, self.w, self.min_w, self.max_w)?;
        self.check_axis(Axis::Height, self.h, self.min_h, self.max_h)
    }

    fn check_axis(
        &self,
        axis: Axis,
        value: u32,
        min: Option<u32>,
        max: Option<u32>,
    ) -> Result<(), ItemError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(ItemError::InvertedBounds {
                    id: self.id.clone(),
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        let below = min.is_some_and(|lo| value < lo);
        let above = max.is_some_and(|hi| value > hi);
        if below || above {
            return Err(ItemError::OutOfBounds {
                id: self.id.clone(),
                axis,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GridItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{}) {}x{}", self.id, self.x, self.y, self.w, self.h)
    }
}
