use leptos::prelude::*;

use crate::error::LineParseError;

/// Edge-list text area with Draw and Clear buttons.
///
/// The text is only published on Draw; parsing happens upstream so a grid
/// size change re-validates the last drawn list.
#[component]
pub fn EdgeListInput(
	#[prop(into)] errors: Signal<Vec<LineParseError>>,
	#[prop(into)] on_draw: Callback<String>,
	#[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
	let (text, set_text) = signal(String::new());

	let draw = move |_: leptos::ev::MouseEvent| on_draw.run(text.get_untracked());
	let clear = move |_: leptos::ev::MouseEvent| {
		set_text.set(String::new());
		on_clear.run(());
	};

	view! {
		<div id="edge-list">
			"Edges"
			<br />
			<textarea
				rows="5"
				cols="30"
				placeholder="x1,y1 x2,y2 color"
				prop:value=move || text.get()
				on:input=move |ev| set_text.set(event_target_value(&ev))
			/>
			<br />
			<button on:click=draw>"Draw"</button>
			<button on:click=clear>"Clear"</button>
			<ul class="errors">
				{move || {
					errors
						.get()
						.into_iter()
						.map(|e| view! { <li>{e.to_string()}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}
