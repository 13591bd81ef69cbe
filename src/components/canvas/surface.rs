//! Browser side of the canvas: the 2d context behind [`Surface`] and
//! background image loading.

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::ResourceLoadError;
use crate::geometry::PixelPoint;

use super::state::{ImageSource, ImageState};

/// The immediate-mode drawing operations the renderer relies on.
pub trait Surface {
	/// Background images this surface can draw.
	type Image: ImageSource;

	/// Resets the backing store size. Clears the surface as a side effect.
	fn set_size(&mut self, width: u32, height: u32);
	/// Current backing store size.
	fn size(&self) -> (u32, u32);
	/// Makes every pixel transparent.
	fn clear(&mut self);
	/// Colour used by [`Surface::fill`].
	fn set_fill_style(&mut self, color: &str);
	/// Colour used by [`Surface::stroke`]. Unknown colours leave it unchanged.
	fn set_stroke_style(&mut self, color: &str);
	/// Width used by [`Surface::stroke`].
	fn set_line_width(&mut self, width: f64);
	/// Starts a new path.
	fn begin_path(&mut self);
	/// Starts a subpath at `p`.
	fn move_to(&mut self, p: PixelPoint);
	/// Extends the subpath to `p`.
	fn line_to(&mut self, p: PixelPoint);
	/// Adds a full circle to the path.
	fn arc(&mut self, center: PixelPoint, radius: f64);
	/// Strokes the current path.
	fn stroke(&mut self);
	/// Fills the current path.
	fn fill(&mut self);
	/// Copies `image` at its intrinsic size with its top-left corner at `at`.
	fn draw_image(&mut self, image: &Self::Image, at: PixelPoint);
}

impl ImageSource for HtmlImageElement {
	fn width(&self) -> u32 {
		self.natural_width()
	}

	fn height(&self) -> u32 {
		self.natural_height()
	}
}

/// A `<canvas>` element and its 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps an existing context of `canvas`.
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}

	/// `None` when the browser refuses a 2d context.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self::new(canvas, ctx))
	}
}

impl Surface for CanvasSurface {
	type Image = HtmlImageElement;

	fn set_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn size(&self) -> (u32, u32) {
		(self.canvas.width(), self.canvas.height())
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
	}

	fn set_fill_style(&mut self, color: &str) {
		self.ctx.set_fill_style_str(color);
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.ctx.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, p: PixelPoint) {
		self.ctx.move_to(p.x, p.y);
	}

	fn line_to(&mut self, p: PixelPoint) {
		self.ctx.line_to(p.x, p.y);
	}

	fn arc(&mut self, center: PixelPoint, radius: f64) {
		let _ = self
			.ctx
			.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
	}

	fn stroke(&mut self) {
		self.ctx.stroke();
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}

	fn draw_image(&mut self, image: &HtmlImageElement, at: PixelPoint) {
		if let Err(e) = self.ctx.draw_image_with_html_image_element(image, at.x, at.y) {
			warn!("draw_image failed: {e:?}");
		}
	}
}

/// Starts loading `url`. `on_done` is called once, with `Ready` or `Failed`.
pub fn load_image(
	url: &str,
	on_done: impl Fn(ImageState<HtmlImageElement>) + 'static,
) -> Result<(), JsValue> {
	let image = HtmlImageElement::new()?;
	let on_done = Rc::new(on_done);

	let (loaded, done) = (image.clone(), on_done.clone());
	let onload = Closure::<dyn FnMut()>::new(move || {
		info!(
			"background image loaded ({}x{})",
			loaded.natural_width(),
			loaded.natural_height()
		);
		(*done)(ImageState::Ready(loaded.clone()));
	});

	let failed_url = url.to_owned();
	let onerror = Closure::<dyn FnMut()>::new(move || {
		warn!("background image {failed_url} failed to load");
		(*on_done)(ImageState::Failed(ResourceLoadError {
			url: failed_url.clone(),
		}));
	});

	image.set_onload(Some(onload.as_ref().unchecked_ref()));
	image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
	// Both handlers live as long as the image element.
	onload.forget();
	onerror.forget();

	image.set_src(url);
	Ok(())
}
