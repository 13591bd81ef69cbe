//! Full-redraw renderer over any [`Surface`](super::surface::Surface).

use crate::geometry::{grid_point, pixel_point};
use crate::grid_size::GridSize;

use super::mapper;
use super::state::{CanvasState, ImageSource, Scene};
use super::surface::Surface;

const DOT_RADIUS: f64 = 4.0;
const DOT_SHRINK_ABOVE: u32 = 50;

/// Dots shrink once the grid gets dense so neighbours don't touch.
pub fn dot_radius(size: GridSize) -> f64 {
	let n = size.get();
	if n > DOT_SHRINK_ABOVE {
		DOT_RADIUS * DOT_SHRINK_ABOVE as f64 / n as f64
	} else {
		DOT_RADIUS
	}
}

/// Full redraw: size the surface, paint the background, then every segment in
/// order so later segments cover earlier ones.
pub fn render<S: Surface>(surface: &mut S, state: &CanvasState<'_, S::Image>) {
	let (width, height) = match state.background_image {
		Some(image) => (image.width(), image.height()),
		None => (state.width.round() as u32, state.height.round() as u32),
	};
	surface.set_size(width, height);
	surface.clear();
	let (w, h) = (width as f64, height as f64);

	if let Some(image) = state.background_image {
		surface.draw_image(image, pixel_point(0.0, 0.0));
	}
	if let Scene::Grid { size, .. } = state.scene {
		draw_grid(surface, state, *size, w, h);
	}
	draw_segments(surface, state, w, h);
}

fn draw_grid<S: Surface>(surface: &mut S, state: &CanvasState<'_, S::Image>, size: GridSize, w: f64, h: f64) {
	let style = state.style;
	let n = size.get();

	if style.grid_line_width > 0.0 {
		surface.set_stroke_style(&style.grid_color);
		surface.set_line_width(style.grid_line_width);
		surface.begin_path();
		for i in 0..=n {
			surface.move_to(mapper::to_pixel(grid_point(i, 0), size, w, h));
			surface.line_to(mapper::to_pixel(grid_point(i, n), size, w, h));
			surface.move_to(mapper::to_pixel(grid_point(0, i), size, w, h));
			surface.line_to(mapper::to_pixel(grid_point(n, i), size, w, h));
		}
		surface.stroke();
	}

	if style.show_dots {
		let radius = dot_radius(size);
		surface.set_fill_style(&style.dot_color);
		for x in 0..n {
			for y in 0..n {
				surface.begin_path();
				surface.arc(mapper::to_pixel(grid_point(x, y), size, w, h), radius);
				surface.fill();
			}
		}
	}
}

fn draw_segments<S: Surface>(surface: &mut S, state: &CanvasState<'_, S::Image>, w: f64, h: f64) {
	surface.set_line_width(state.style.segment_width);
	for (start, end, color) in state.scene.pixel_segments(w, h) {
		surface.set_stroke_style(color);
		surface.begin_path();
		surface.move_to(start);
		surface.line_to(end);
		surface.stroke();
	}
}
