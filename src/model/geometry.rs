//! Pixel-space geometry shared by the navigation controllers.
//!
//! All values are CSS pixels measured from the document (or viewport) top-left.
//! Coordinates are `f64` because browsers report fractional scroll offsets.

/// Vertical scroll offset of the document, in pixels from the top.
///
/// The raw value is kept as reported (elastic overscroll can produce small
/// negative offsets); only `NaN` is normalised to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollY(f64);

impl ScrollY {
    /// Document top.
    pub const TOP: ScrollY = ScrollY(0.0);

    /// Wrap a raw scroll offset.
    pub fn new(px: f64) -> Self {
        if px.is_nan() {
            Self(0.0)
        } else {
            Self(px)
        }
    }

    /// Raw offset in pixels.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Offset moved by `delta` pixels, clamped to `[0, max]`.
    pub fn offset_by(self, delta: f64, max: f64) -> Self {
        Self::new((self.0 + delta).clamp(0.0, max.max(0.0)))
    }
}

/// Vertical extent of the page's hero section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroRegion {
    /// Offset of the hero's top edge.
    pub top: f64,
    /// Offset of the hero's bottom edge (`top + height`).
    pub bottom: f64,
}

impl HeroRegion {
    /// Build a region from an element's offset and rendered height.
    pub fn from_offset(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    /// Rendered height of the region.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding rectangle in viewport coordinates
/// (the shape `getBoundingClientRect` reports).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl BoundingRect {
    /// Create a rectangle from its origin and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Half-open containment test: left/top edges inclusive, right/bottom exclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }
}
