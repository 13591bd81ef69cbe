#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use route_canvas::components::canvas::render::render;
use route_canvas::components::canvas::surface::{CanvasSurface, Surface, load_image};
use route_canvas::components::canvas::{CanvasState, ImageState, Scene};
use route_canvas::config::RenderStyle;
use route_canvas::edge_list::parse;
use route_canvas::geometry::{Segment, pixel_point};
use route_canvas::grid_size::GridSize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap()
}

#[wasm_bindgen_test]
fn renders_grid_scene_into_real_canvas() {
	let size = GridSize::new(5).unwrap();
	let parsed = parse("0,0 2,2 red\nbad line\n1,1 3,3 not-a-colour", size);
	let scene = Scene::Grid {
		size,
		segments: parsed.segments,
	};
	let style = RenderStyle::grid();
	let mut surface = CanvasSurface::from_canvas(canvas()).unwrap();

	render(
		&mut surface,
		&CanvasState {
			width: 250.0,
			height: 150.0,
			background_image: None,
			scene: &scene,
			style: &style,
		},
	);
	assert_eq!(surface.size(), (250, 150));
}

#[wasm_bindgen_test]
fn empty_overlay_without_image_is_fine() {
	let scene = Scene::default();
	let style = RenderStyle::route();
	let mut surface = CanvasSurface::from_canvas(canvas()).unwrap();
	render(
		&mut surface,
		&CanvasState {
			width: 10.0,
			height: 10.0,
			background_image: None,
			scene: &scene,
			style: &style,
		},
	);
	assert_eq!(surface.size(), (10, 10));
}

fn pixel(canvas: &HtmlCanvasElement, x: f64, y: f64) -> Vec<u8> {
	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap();
	ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().0
}

async fn load(url: &'static str) -> ImageState<HtmlImageElement> {
	let slot = Rc::new(RefCell::new(None));
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		let slot = slot.clone();
		load_image(url, move |state| {
			*slot.borrow_mut() = Some(state);
			resolve.call0(&JsValue::NULL).unwrap();
		})
		.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
	slot.borrow_mut().take().unwrap()
}

#[wasm_bindgen_test]
async fn failed_background_still_draws_segments_on_blank_surface() {
	let state = load("data:image/png;base64,bm90LWFuLWltYWdl").await;
	assert!(matches!(&state, ImageState::Failed(err) if err.url.starts_with("data:image/png")));
	assert!(state.ready().is_none());

	let scene = Scene::Overlay {
		segments: vec![Segment::new(pixel_point(0.0, 20.0), pixel_point(40.0, 20.0), "#ff0000")],
	};
	let style = RenderStyle {
		segment_width: 4.0,
		..RenderStyle::route()
	};
	let element = canvas();
	let mut surface = CanvasSurface::from_canvas(element.clone()).unwrap();
	render(
		&mut surface,
		&CanvasState {
			width: 40.0,
			height: 40.0,
			background_image: state.ready(),
			scene: &scene,
			style: &style,
		},
	);

	assert_eq!(surface.size(), (40, 40));
	assert_eq!(pixel(&element, 20.0, 20.0), vec![255, 0, 0, 255]);
	assert_eq!(pixel(&element, 20.0, 5.0)[3], 0);
}
