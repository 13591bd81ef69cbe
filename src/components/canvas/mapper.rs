//! Grid to pixel conversion. Every drawing path goes through here so the grid
//! lines and the segments on top of them can never drift apart.

use crate::geometry::{GridPoint, PixelPoint, pixel_point};
use crate::grid_size::GridSize;

/// Pixel extent of one grid cell on a `width` x `height` surface.
pub fn cell_size(size: GridSize, width: f64, height: f64) -> (f64, f64) {
	let n = size.get() as f64;
	(width / n, height / n)
}

/// Maps a grid point to the origin (top-left corner) of its cell.
pub fn to_pixel(point: GridPoint, size: GridSize, width: f64, height: f64) -> PixelPoint {
	let (cell_w, cell_h) = cell_size(size, width, height);
	pixel_point(point.x as f64 * cell_w, point.y as f64 * cell_h)
}

/// Route service coordinates are already pixels of the background image.
pub fn identity(point: PixelPoint) -> PixelPoint {
	point
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::geometry::grid_point;

	#[test]
	fn cell_origin_not_center() {
		let size = GridSize::new(4).unwrap();
		assert_eq!(to_pixel(grid_point(1, 2), size, 400.0, 200.0), pixel_point(100.0, 100.0));
	}

	proptest! {
		#[test]
		fn corners_map_to_surface_corners(n in 1i64..=100, w in 1.0..4000.0f64, h in 1.0..4000.0f64) {
			let size = GridSize::new(n).unwrap();
			let n = n as u32;
			prop_assert_eq!(to_pixel(grid_point(0, 0), size, w, h), pixel_point(0.0, 0.0));
			let far = to_pixel(grid_point(n, n), size, w, h);
			prop_assert!((far.x - w).abs() < 1e-9);
			prop_assert!((far.y - h).abs() < 1e-9);
		}
	}
}
