use leptos::prelude::*;
use log::warn;

use crate::error::InvalidSize;
use crate::grid_size::{GridSize, validate};

/// Numeric grid size input. Only valid sizes reach `on_change`; anything else
/// is reported inline and the previous size stays active.
#[component]
pub fn GridSizePicker(
	#[prop(into)] value: Signal<GridSize>,
	#[prop(into)] on_change: Callback<GridSize>,
) -> impl IntoView {
	let (text, set_text) = signal(value.get_untracked().to_string());
	let (error, set_error) = signal(None::<InvalidSize>);

	let on_input = move |ev: leptos::ev::Event| {
		let raw = event_target_value(&ev);
		match validate(&raw) {
			Ok(size) => {
				set_error.set(None);
				on_change.run(size);
			}
			Err(e) => {
				warn!("rejected grid size {raw:?}: {e}");
				set_error.set(Some(e));
			}
		}
		set_text.set(raw);
	};

	view! {
		<div id="grid-size-picker">
			<label>
				"Grid Size: "
				<input
					type="number"
					min={GridSize::MIN.to_string()}
					max={GridSize::MAX.to_string()}
					prop:value=move || text.get()
					on:input=on_input
				/>
			</label>
			{move || error.get().map(|e| view! { <p class="error">{e.to_string()}</p> })}
		</div>
	}
}
