use leptos::prelude::*;

use crate::components::canvas::Scene;
use crate::components::{Header, RouteForm, SegmentCanvas};
use crate::config::AppConfig;
use crate::route::{RouteResult, to_segments};

/// Campus map with the route service's answer drawn on top.
#[component]
pub fn Campus() -> impl IntoView {
	let config = expect_context::<AppConfig>();
	let route = RwSignal::new(None::<RouteResult>);

	let scene = Signal::derive(move || Scene::Overlay {
		segments: route.with(|r| r.as_ref().map(to_segments).unwrap_or_default()),
	});
	let cost = move || {
		route.with(|r| {
			r.as_ref()
				.map(|r| view! { <p class="cost">{format!("Total cost: {:.3}", r.cost)}</p> })
		})
	};

	view! {
		<div class="app">
			<Header />
			<div class="app__body">
				<div>
					<RouteForm
						service_url={config.route_service_url.clone()}
						on_route=move |r| route.set(r)
					/>
					{cost}
				</div>
				<SegmentCanvas
					scene=scene
					style={config.route_style.clone()}
					image_url={config.campus_map_url.clone()}
				/>
			</div>
		</div>
	}
}
