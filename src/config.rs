//! Application configuration.
//!
//! A CSR bundle has no runtime environment, so overrides are read at build
//! time (`ROUTE_SERVICE_URL=... trunk build`). The resolved [`AppConfig`] is
//! provided once through context at the app root.

const DEFAULT_ROUTE_SERVICE_URL: &str = "http://localhost:4567";
const DEFAULT_CAMPUS_MAP_URL: &str = "./campus_map.jpg";

/// How segments and the grid background are stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	/// Line width of every segment.
	pub segment_width: f64,
	/// Stroke colour of grid lines.
	pub grid_color: String,
	/// Grid line width; `0` hides the lines.
	pub grid_line_width: f64,
	/// Fill colour of grid-point dots.
	pub dot_color: String,
	/// Whether grid points get a dot.
	pub show_dots: bool,
}

impl RenderStyle {
	/// Thin segments over light grid lines and dots.
	pub fn grid() -> Self {
		Self {
			segment_width: 2.0,
			grid_color: "#d0d0d0".into(),
			grid_line_width: 1.0,
			dot_color: "#000000".into(),
			show_dots: true,
		}
	}

	/// Wide route strokes, no dots.
	pub fn route() -> Self {
		Self {
			segment_width: 15.0,
			show_dots: false,
			..Self::grid()
		}
	}
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self::grid()
	}
}

/// Settings shared by the pages.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Base url of the route service; `/findroute` is appended.
	pub route_service_url: String,
	/// Background image of the campus page.
	pub campus_map_url: String,
	/// Width and height of the square grid canvas, in pixels.
	pub grid_canvas_size: f64,
	/// Style of the grid page canvas.
	pub grid_style: RenderStyle,
	/// Style of the campus page canvas.
	pub route_style: RenderStyle,
}

impl AppConfig {
	/// Defaults, overridden by `ROUTE_SERVICE_URL` / `CAMPUS_MAP_URL` at build time.
	pub fn from_build_env() -> Self {
		Self::with_overrides(option_env!("ROUTE_SERVICE_URL"), option_env!("CAMPUS_MAP_URL"))
	}

	fn with_overrides(route_service_url: Option<&str>, campus_map_url: Option<&str>) -> Self {
		let base = Self::default();
		Self {
			route_service_url: route_service_url
				.filter(|s| !s.is_empty())
				.map_or(base.route_service_url, str::to_owned),
			campus_map_url: campus_map_url
				.filter(|s| !s.is_empty())
				.map_or(base.campus_map_url, str::to_owned),
			..base
		}
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			route_service_url: DEFAULT_ROUTE_SERVICE_URL.into(),
			campus_map_url: DEFAULT_CAMPUS_MAP_URL.into(),
			grid_canvas_size: 400.0,
			grid_style: RenderStyle::grid(),
			route_style: RenderStyle::route(),
		}
	}
}
