use leptos::prelude::*;

use crate::components::canvas::Scene;
use crate::components::{EdgeListInput, GridSizePicker, SegmentCanvas};
use crate::config::AppConfig;
use crate::edge_list;
use crate::grid_size::GridSize;

/// Coloured edges on an N x N grid. Bad lines are listed under the input;
/// the rest are drawn.
#[component]
pub fn Home() -> impl IntoView {
	let config = expect_context::<AppConfig>();

	let size = RwSignal::new(GridSize::default());
	// Text as of the last Draw; re-parsed whenever the grid size changes.
	let edge_text = RwSignal::new(String::new());
	let parsed = Memo::new(move |_| edge_list::parse(&edge_text.get(), size.get()));

	let scene = Signal::derive(move || Scene::Grid {
		size: size.get(),
		segments: parsed.with(|p| p.segments.clone()),
	});
	let errors = Signal::derive(move || parsed.with(|p| p.errors.clone()));

	view! {
		<div class="dots">
			<h1>"Grid Edges"</h1>
			<SegmentCanvas
				scene=scene
				style={config.grid_style.clone()}
				width=config.grid_canvas_size
				height=config.grid_canvas_size
			/>
			<GridSizePicker value=size on_change=move |s| size.set(s) />
			<EdgeListInput
				errors=errors
				on_draw=move |text| edge_text.set(text)
				on_clear=move |_: ()| edge_text.set(String::new())
			/>
		</div>
	}
}
