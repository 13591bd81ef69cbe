use leptos::prelude::*;

const LOGO_URL: &str = "https://s3-us-west-2.amazonaws.com/uw-s3-cdn/wp-content/uploads/sites/98/2017/06/07212347/BoundlessBand_LeftAngleWordmarkW-CMYK.png";

#[component]
pub fn Header() -> impl IntoView {
	view! {
		<div class="header">
			<div class="uwLogo">
				<img src=LOGO_URL alt="uwLogo" />
			</div>
		</div>
	}
}
