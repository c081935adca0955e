//! Viewport-clamped tooltip placement.
//!
//! Pure geometry: given a slot's bounding rectangle, the tooltip's
//! measured size and the viewport width, compute where the tooltip
//! goes. Preferred position is above the slot, horizontally centered;
//! if the space above is too small the tooltip flips below, and the
//! horizontal center is clamped so neither edge crosses the viewport
//! margin. The returned x is the tooltip's center (the frontend
//! applies `translateX(-50%)`).

/// Minimum distance kept between the tooltip and any viewport edge,
/// and between the tooltip and the slot.
pub const EDGE_MARGIN: f64 = 10.0;

/// A bounding rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Measured tooltip dimensions (read after a layout pass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipSize {
    pub width: f64,
    pub height: f64,
}

/// Final tooltip position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Viewport-fixed top of the tooltip.
    pub top: f64,
    /// Viewport-fixed x of the tooltip's horizontal center.
    pub center_x: f64,
    /// True when the tooltip flipped below the slot.
    pub below: bool,
}

/// Place a tooltip relative to its slot.
pub fn place(slot: &Rect, tip: &TipSize, viewport_width: f64) -> Placement {
    let tentative_top = slot.top - EDGE_MARGIN;
    let (top, below) = if tentative_top - tip.height < EDGE_MARGIN {
        (slot.bottom() + EDGE_MARGIN, true)
    } else {
        (tentative_top - tip.height, false)
    };

    let half = tip.width / 2.0;
    let mut center_x = slot.center_x();
    if center_x - half < EDGE_MARGIN {
        center_x = EDGE_MARGIN + half;
    } else if center_x + half > viewport_width - EDGE_MARGIN {
        center_x = viewport_width - EDGE_MARGIN - half;
    }

    Placement {
        top,
        center_x,
        below,
    }
}
