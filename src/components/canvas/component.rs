use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::config::RenderStyle;
use crate::error::ResourceLoadError;

use super::render;
use super::state::{CanvasState, ImageState, Scene};
use super::surface::{CanvasSurface, load_image};

/// A `<canvas>` that fully redraws `scene` whenever it, or the background
/// image, changes.
#[component]
pub fn SegmentCanvas(
	#[prop(into)] scene: Signal<Scene>,
	#[prop(default = RenderStyle::default())] style: RenderStyle,
	#[prop(default = 400.0)] width: f64,
	#[prop(default = 400.0)] height: f64,
	#[prop(optional, into)] image_url: Option<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let image = RwSignal::<ImageState<HtmlImageElement>, LocalStorage>::new_local(ImageState::Loading);

	if let Some(url) = image_url.as_deref() {
		let loaded = load_image(url, move |state| {
			let _ = image.try_set(state);
		});
		if let Err(e) = loaded {
			warn!("could not start loading {url}: {e:?}");
			image.set(ImageState::Failed(ResourceLoadError { url: url.to_owned() }));
		}
	}

	Effect::new(move |_| {
		let scene = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(mut surface) = CanvasSurface::from_canvas(canvas) else {
			warn!("no 2d context, skipping redraw");
			return;
		};
		image.with(|state| {
			render::render(
				&mut surface,
				&CanvasState {
					width,
					height,
					background_image: state.ready(),
					scene: &scene,
					style: &style,
				},
			);
		});
	});

	let notice = move || {
		image.with(|state| match state {
			ImageState::Failed(err) => Some(view! { <p class="notice">{err.to_string()}</p> }),
			_ => None,
		})
	};

	view! {
		<div class="segment-canvas">
			<canvas node_ref=canvas_ref style="display: block;" />
			{notice}
		</div>
	}
}
