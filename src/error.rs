//! Error taxonomy.
//!
//! Validation and parse errors are returned as values and rendered next to the
//! input that caused them. Network and image errors are shown as notices; none
//! of them stops the canvas from drawing what it already has.

use std::fmt;

/// Why a grid size was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeErrorReason {
	/// The input is not an integer at all.
	NotANumber,
	/// An integer outside `1..=100`.
	OutOfRange,
}

impl fmt::Display for SizeErrorReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SizeErrorReason::NotANumber => "grid size must be a whole number",
			SizeErrorReason::OutOfRange => "size can not be less than 1 or bigger than 100",
		})
	}
}

/// A rejected grid size.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidSize {
	/// What was wrong with the input.
	pub reason: SizeErrorReason,
}

/// One of the four numeric fields of an edge line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	/// Start column.
	X1,
	/// Start row.
	Y1,
	/// End column.
	X2,
	/// End row.
	Y2,
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Field::X1 => "x1",
			Field::Y1 => "y1",
			Field::X2 => "x2",
			Field::Y2 => "y2",
		})
	}
}

/// Why an edge line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineErrorKind {
	/// The line is not `x1,y1 x2,y2 color`.
	#[error("malformed")]
	Malformed,

	/// A coordinate that does not parse as an integer.
	#[error("{field} is not an integer: {text:?}")]
	NotAnInteger {
		/// The offending coordinate.
		field: Field,
		/// The text found there.
		text: String,
	},

	/// An integer coordinate off the active grid.
	#[error("{field} = {value} is outside the grid [0, {size})")]
	OutOfRange {
		/// The offending coordinate.
		field: Field,
		/// Its value.
		value: i64,
		/// The active grid size.
		size: u32,
	},
}

/// A rejected edge-list line, 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LineParseError {
	/// 1-based line number in the input text.
	pub line: usize,
	/// What was wrong with it.
	pub kind: LineErrorKind,
}

impl LineParseError {
	/// The error text without the line prefix, e.g. `"malformed"`.
	pub fn message(&self) -> String {
		self.kind.to_string()
	}

	/// The coordinate the error is about, if any.
	pub fn field(&self) -> Option<Field> {
		match self.kind {
			LineErrorKind::Malformed => None,
			LineErrorKind::NotAnInteger { field, .. } | LineErrorKind::OutOfRange { field, .. } => {
				Some(field)
			}
		}
	}
}

/// Failure talking to the route service.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NetworkError {
	/// The configured base url cannot carry a `/findroute` path.
	#[error("invalid route service url: {0}")]
	InvalidUrl(String),

	/// The browser could not send the request or got no response.
	#[error("request failed: {0}")]
	Request(String),

	/// Non-2xx answer, e.g. for an unknown building.
	#[error("route service answered {status}")]
	Status {
		/// HTTP status code.
		status: u16,
	},

	/// The response body could not be read as text.
	#[error("could not read response body: {0}")]
	Body(String),

	/// The body is not a route result.
	#[error("malformed route response: {0}")]
	Decode(String),
}

impl From<serde_json::Error> for NetworkError {
	fn from(err: serde_json::Error) -> Self {
		NetworkError::Decode(err.to_string())
	}
}

impl From<url::ParseError> for NetworkError {
	fn from(err: url::ParseError) -> Self {
		NetworkError::InvalidUrl(err.to_string())
	}
}

/// The background image could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to load image {url}")]
pub struct ResourceLoadError {
	/// The image source that failed.
	pub url: String,
}
