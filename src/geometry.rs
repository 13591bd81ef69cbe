//! Coordinate spaces and the segment primitive shared by every renderer.
//!
//! Grid coordinates and pixel coordinates are different `euclid` units, so a
//! `GridPoint` can never be stroked directly: it has to go through
//! [`crate::components::canvas::mapper`] first.

use euclid::Point2D;

/// Logical cells of the square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpace;

/// Device pixels of the drawing surface (or of the background image).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelSpace;

/// A grid intersection, `0 <= x, y < N` for drawable edges.
pub type GridPoint = Point2D<u32, GridSpace>;
/// A position in surface (or background image) pixels.
pub type PixelPoint = Point2D<f64, PixelSpace>;

/// Shorthand for a [`GridPoint`].
pub fn grid_point(x: u32, y: u32) -> GridPoint {
	euclid::point2(x, y)
}

/// Shorthand for a [`PixelPoint`].
pub fn pixel_point(x: f64, y: f64) -> PixelPoint {
	euclid::point2(x, y)
}

/// A single coloured line between two points of the same space.
///
/// The colour is an opaque CSS colour string; the surface decides whether it
/// is drawable.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<P> {
	start: P,
	end: P,
	color: String,
}

impl<P: Copy> Segment<P> {
	/// A segment from `start` to `end` stroked in `color`.
	pub fn new(start: P, end: P, color: impl Into<String>) -> Self {
		Self {
			start,
			end,
			color: color.into(),
		}
	}

	/// First endpoint.
	pub fn start(&self) -> P {
		self.start
	}

	/// Second endpoint.
	pub fn end(&self) -> P {
		self.end
	}

	/// Stroke colour as given.
	pub fn color(&self) -> &str {
		&self.color
	}
}

/// Segment parsed from an edge list.
pub type GridSegment = Segment<GridPoint>;
/// Segment of a route overlay.
pub type PixelSegment = Segment<PixelPoint>;
