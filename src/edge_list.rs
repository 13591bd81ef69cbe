//! Edge-list text to grid segments.
//!
//! One candidate edge per line, `x1,y1 x2,y2 color`. Parsing is total: every
//! well-formed line becomes a segment and every other non-blank line becomes a
//! [`LineParseError`], both in input order.

use log::debug;

use crate::error::{Field, LineErrorKind, LineParseError};
use crate::geometry::{GridPoint, GridSegment, Segment, grid_point};
use crate::grid_size::GridSize;

/// Result of parsing a whole edge list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedEdges {
	/// Well-formed lines, in input order.
	pub segments: Vec<GridSegment>,
	/// Rejected lines, in input order.
	pub errors: Vec<LineParseError>,
}

impl ParsedEdges {
	/// No line was rejected.
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty()
	}
}

/// Parse `text` against the active grid `size`. Never fails as a whole.
pub fn parse(text: &str, size: GridSize) -> ParsedEdges {
	let mut parsed = ParsedEdges::default();
	for (idx, line) in text.lines().enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		match parse_line(line, size) {
			Ok(segment) => parsed.segments.push(segment),
			Err(kind) => parsed.errors.push(LineParseError {
				line: idx + 1,
				kind,
			}),
		}
	}
	debug!(
		"parsed edge list: {} segments, {} errors (grid {})",
		parsed.segments.len(),
		parsed.errors.len(),
		size
	);
	parsed
}

fn parse_line(line: &str, size: GridSize) -> Result<GridSegment, LineErrorKind> {
	let mut tokens = line.split_whitespace();
	let (Some(first), Some(second), Some(color), None) =
		(tokens.next(), tokens.next(), tokens.next(), tokens.next())
	else {
		return Err(LineErrorKind::Malformed);
	};
	let start = parse_pair(first, (Field::X1, Field::Y1), size)?;
	let end = parse_pair(second, (Field::X2, Field::Y2), size)?;
	Ok(Segment::new(start, end, color))
}

fn parse_pair(token: &str, fields: (Field, Field), size: GridSize) -> Result<GridPoint, LineErrorKind> {
	let inner = token
		.strip_prefix('(')
		.and_then(|t| t.strip_suffix(')'))
		.unwrap_or(token);
	let (x, y) = inner.split_once(',').ok_or(LineErrorKind::Malformed)?;
	Ok(grid_point(
		parse_coordinate(x, fields.0, size)?,
		parse_coordinate(y, fields.1, size)?,
	))
}

fn parse_coordinate(text: &str, field: Field, size: GridSize) -> Result<u32, LineErrorKind> {
	let value: i64 = text.parse().map_err(|_| LineErrorKind::NotAnInteger {
		field,
		text: text.to_owned(),
	})?;
	if !size.contains(value) {
		return Err(LineErrorKind::OutOfRange {
			field,
			value,
			size: size.get(),
		});
	}
	Ok(value as u32)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn size(n: i64) -> GridSize {
		GridSize::new(n).unwrap()
	}

	#[test]
	fn keeps_valid_lines_and_reports_bad_ones() {
		let parsed = parse("0,0 2,2 red\nbad line\n1,1 3,3 blue", size(5));
		assert_eq!(
			parsed.segments,
			vec![
				Segment::new(grid_point(0, 0), grid_point(2, 2), "red"),
				Segment::new(grid_point(1, 1), grid_point(3, 3), "blue"),
			]
		);
		assert_eq!(parsed.errors.len(), 1);
		assert_eq!(parsed.errors[0].line, 2);
		assert_eq!(parsed.errors[0].message(), "malformed");
	}

	#[test]
	fn blank_lines_are_skipped_but_counted() {
		let parsed = parse("\n   \n0,0 1,1 green\r\n\nnope\n", size(3));
		assert_eq!(parsed.segments.len(), 1);
		assert_eq!(parsed.errors[0].line, 5);
	}

	#[rstest]
	#[case("0,0 5,1 red", Field::X2, LineErrorKind::OutOfRange { field: Field::X2, value: 5, size: 5 })]
	#[case("0,-1 1,1 red", Field::Y1, LineErrorKind::OutOfRange { field: Field::Y1, value: -1, size: 5 })]
	#[case("0,0 1,1.5 red", Field::Y2, LineErrorKind::NotAnInteger { field: Field::Y2, text: "1.5".into() })]
	#[case("a,0 1,1 red", Field::X1, LineErrorKind::NotAnInteger { field: Field::X1, text: "a".into() })]
	fn field_errors_name_the_offending_field(
		#[case] line: &str,
		#[case] field: Field,
		#[case] kind: LineErrorKind,
	) {
		let parsed = parse(line, size(5));
		assert!(parsed.segments.is_empty());
		assert_eq!(parsed.errors[0].field(), Some(field));
		assert_eq!(parsed.errors[0].kind, kind);
	}

	#[rstest]
	#[case("0,0 1,1")]
	#[case("0,0 1,1 red extra")]
	#[case("00 1,1 red")]
	#[case("0,0,1,1 red")]
	fn shape_errors_are_malformed(#[case] line: &str) {
		let parsed = parse(line, size(5));
		assert_eq!(parsed.errors[0].kind, LineErrorKind::Malformed);
		assert_eq!(parsed.errors[0].field(), None);
	}

	#[test]
	fn colors_are_opaque() {
		let parsed = parse("0,0 1,1 not-a-colour\n(1,1) (2,2) #00ff00", size(3));
		assert!(parsed.is_clean());
		assert_eq!(parsed.segments[0].color(), "not-a-colour");
		assert_eq!(parsed.segments[1].start(), grid_point(1, 1));
		assert_eq!(parsed.segments[1].color(), "#00ff00");
	}

	#[test]
	fn range_depends_on_active_grid_size() {
		let text = "0,0 9,9 red";
		assert!(parse(text, size(10)).is_clean());
		assert!(!parse(text, size(9)).is_clean());
	}

	proptest! {
		#[test]
		fn counts_match_line_kinds(
			lines in proptest::collection::vec((any::<bool>(), 0u32..10, 0u32..10, 0u32..10, 0u32..10), 0..20)
		) {
			let text: String = lines
				.iter()
				.map(|(good, a, b, c, d)| {
					if *good {
						format!("{a},{b} {c},{d} red\n")
					} else {
						format!("{a},{b} garbage\n")
					}
				})
				.collect();
			let good = lines.iter().filter(|l| l.0).count();
			let parsed = parse(&text, size(10));
			prop_assert_eq!(parsed.segments.len(), good);
			prop_assert_eq!(parsed.errors.len(), lines.len() - good);
			prop_assert_eq!(parse(&text, size(10)), parsed);
		}
	}
}
