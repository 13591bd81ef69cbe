//! Values a redraw is computed from.

use crate::config::RenderStyle;
use crate::error::ResourceLoadError;
use crate::geometry::{GridSegment, PixelPoint, PixelSegment};
use crate::grid_size::GridSize;

use super::mapper;

/// What the host asks the canvas to show. Replaced wholesale on every change.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
	/// Grid lines of `size` cells with grid-space segments on top.
	Grid {
		/// Active grid size.
		size: GridSize,
		/// Edges in draw order.
		segments: Vec<GridSegment>,
	},
	/// Pixel-space segments over the background image.
	Overlay {
		/// Route hops in draw order.
		segments: Vec<PixelSegment>,
	},
}

impl Default for Scene {
	fn default() -> Self {
		Scene::Overlay {
			segments: Vec::new(),
		}
	}
}

impl Scene {
	/// Bare grid of `size` cells.
	pub fn grid(size: GridSize) -> Self {
		Scene::Grid {
			size,
			segments: Vec::new(),
		}
	}

	/// Segments in draw order, mapped onto a `width` x `height` surface.
	pub fn pixel_segments(&self, width: f64, height: f64) -> Vec<(PixelPoint, PixelPoint, &str)> {
		match self {
			Scene::Grid { size, segments } => segments
				.iter()
				.map(|s| {
					(
						mapper::to_pixel(s.start(), *size, width, height),
						mapper::to_pixel(s.end(), *size, width, height),
						s.color(),
					)
				})
				.collect(),
			Scene::Overlay { segments } => segments
				.iter()
				.map(|s| (mapper::identity(s.start()), mapper::identity(s.end()), s.color()))
				.collect(),
		}
	}
}

/// Anything that can be drawn as a background and knows its intrinsic size.
pub trait ImageSource {
	/// Intrinsic width in pixels.
	fn width(&self) -> u32;
	/// Intrinsic height in pixels.
	fn height(&self) -> u32;
}

/// Background image lifecycle. Only `Ready` contributes to rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageState<I> {
	/// Requested, no outcome yet.
	Loading,
	/// Decoded and drawable.
	Ready(I),
	/// Never becomes drawable; the canvas stays without background.
	Failed(ResourceLoadError),
}

impl<I> ImageState<I> {
	/// The image, once it is drawable.
	pub fn ready(&self) -> Option<&I> {
		match self {
			ImageState::Ready(image) => Some(image),
			_ => None,
		}
	}
}

/// Everything one full redraw needs.
#[derive(Clone, Debug)]
pub struct CanvasState<'a, I> {
	/// Surface width when there is no background image.
	pub width: f64,
	/// Surface height when there is no background image.
	pub height: f64,
	/// Loaded background; its size overrides `width`/`height`.
	pub background_image: Option<&'a I>,
	/// What to draw.
	pub scene: &'a Scene,
	/// How to draw it.
	pub style: &'a RenderStyle,
}
