//! Route service client and the route overlay adapter.

use std::cell::Cell;

use log::{info, warn};
use serde::Deserialize;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::NetworkError;
use crate::geometry::{PixelSegment, Segment, pixel_point};

/// Stroke colour of a drawn route.
pub const ROUTE_COLOR: &str = "#ff0000";

/// Absolute position on the campus map image, as sent by the route service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RoutePoint {
	/// Pixels from the left edge of the map.
	pub x: f64,
	/// Pixels from the top edge of the map.
	pub y: f64,
}

/// One directed step of a route.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RouteHop {
	/// Where the hop leaves from.
	pub start: RoutePoint,
	/// Where the hop arrives.
	pub end: RoutePoint,
}

/// Answer to a shortest-path query: total cost and the ordered hops.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RouteResult {
	/// Total length of the route.
	pub cost: f64,
	/// Hops in travel order; empty when there is no route.
	#[serde(default)]
	pub path: Vec<RouteHop>,
}

impl RouteResult {
	/// Decode a `/findroute` response body.
	pub fn from_json(body: &str) -> Result<Self, NetworkError> {
		Ok(serde_json::from_str(body)?)
	}
}

/// One overlay segment per hop, in hop order. Route points are already image
/// pixels, so no grid mapping happens here.
pub fn to_segments(route: &RouteResult) -> Vec<PixelSegment> {
	route
		.path
		.iter()
		.map(|hop| {
			Segment::new(
				pixel_point(hop.start.x, hop.start.y),
				pixel_point(hop.end.x, hop.end.y),
				ROUTE_COLOR,
			)
		})
		.collect()
}

/// `GET {base}/findroute?start=..&dest=..`, keeping any path prefix of `base`.
pub fn route_url(base: &str, start: &str, dest: &str) -> Result<Url, NetworkError> {
	let mut url = Url::parse(base)?;
	url.path_segments_mut()
		.map_err(|_| NetworkError::InvalidUrl(format!("{base} cannot be a base url")))?
		.pop_if_empty()
		.push("findroute");
	url.query_pairs_mut()
		.append_pair("start", start.trim())
		.append_pair("dest", dest.trim());
	Ok(url)
}

/// Ticket handed out for each route request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-wins bookkeeping for overlapping route requests: a response is only
/// applied if its ticket is still the newest one issued.
#[derive(Debug, Default)]
pub struct RequestTracker {
	generation: Cell<u64>,
}

impl RequestTracker {
	/// Issues a new ticket, making all earlier ones stale.
	pub fn begin(&self) -> Ticket {
		self.invalidate();
		Ticket(self.generation.get())
	}

	/// Whether no newer ticket has been issued since `ticket`.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.generation.get() == ticket.0
	}

	/// Makes every ticket issued so far stale.
	pub fn invalidate(&self) {
		self.generation.set(self.generation.get() + 1);
	}
}

fn describe(value: JsValue) -> String {
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return String::from(err.message());
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Ask the route service for a path between two buildings (by short name).
pub async fn fetch_route(base: &str, start: &str, dest: &str) -> Result<RouteResult, NetworkError> {
	let url = route_url(base, start, dest)?;
	info!("requesting route {url}");

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::Cors);
	let request = Request::new_with_str_and_init(url.as_str(), &opts)
		.map_err(|e| NetworkError::Request(describe(e)))?;

	let window = web_sys::window().ok_or_else(|| NetworkError::Request("no window".into()))?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| NetworkError::Request(describe(e)))?
		.dyn_into()
		.map_err(|e| NetworkError::Request(describe(e)))?;

	if !response.ok() {
		warn!("route service returned {}", response.status());
		return Err(NetworkError::Status {
			status: response.status(),
		});
	}

	let text = response.text().map_err(|e| NetworkError::Body(describe(e)))?;
	let body = JsFuture::from(text)
		.await
		.map_err(|e| NetworkError::Body(describe(e)))?
		.as_string()
		.ok_or_else(|| NetworkError::Body("response body is not text".into()))?;
	RouteResult::from_json(&body)
}
