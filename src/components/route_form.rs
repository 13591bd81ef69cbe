use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use crate::route::{RequestTracker, RouteResult, fetch_route};

const BUILDING_HINT: &str = "Enter short name of the building (e.g. CSE, KNE, EEB)";

/// Start/destination inputs that ask the route service for a path.
///
/// Only the most recent request may publish its result; a response that
/// arrives after a newer search (or after Clear) is dropped.
#[component]
pub fn RouteForm(
	#[prop(into)] service_url: String,
	#[prop(into)] on_route: Callback<Option<RouteResult>>,
) -> impl IntoView {
	let (start, set_start) = signal(String::new());
	let (dest, set_dest) = signal(String::new());
	let (notice, set_notice) = signal(None::<String>);
	let tracker = StoredValue::new_local(RequestTracker::default());

	let find = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let (from, to) = (start.get_untracked(), dest.get_untracked());
		let ticket = tracker.with_value(RequestTracker::begin);
		let base = service_url.clone();
		set_notice.set(None);

		spawn_local(async move {
			let result = fetch_route(&base, &from, &to).await;
			if !tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
				debug!("dropping stale route response {from} -> {to}");
				return;
			}
			match result {
				Ok(route) => {
					info!("route {from} -> {to}: {} hops, cost {}", route.path.len(), route.cost);
					on_route.run(Some(route));
				}
				Err(e) => {
					warn!("route lookup {from} -> {to} failed: {e}");
					let _ = set_notice.try_set(Some(format!("{BUILDING_HINT}. ({e})")));
				}
			}
		});
	};

	let clear = move |_: leptos::ev::MouseEvent| {
		tracker.with_value(RequestTracker::invalidate);
		set_start.set(String::new());
		set_dest.set(String::new());
		set_notice.set(None);
		on_route.run(None);
	};

	view! {
		<form class="searchForm" on:submit=find>
			<div class="formBox">
				<input
					type="text"
					name="start"
					placeholder="enter starting point"
					prop:value=move || start.get()
					on:input=move |ev| set_start.set(event_target_value(&ev))
				/>
			</div>
			<div class="formBox">
				<input
					type="text"
					name="dest"
					placeholder="enter destination"
					prop:value=move || dest.get()
					on:input=move |ev| set_dest.set(event_target_value(&ev))
				/>
			</div>
			<div class="formBox">
				<button type="submit">"Find Route"</button>
				<button type="button" on:click=clear>"Clear"</button>
			</div>
			{move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
		</form>
	}
}
