//! Grid size validation.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{InvalidSize, SizeErrorReason};

/// Side length, in cells, of the square grid. Always within `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(u32);

impl GridSize {
	/// Smallest accepted size.
	pub const MIN: u32 = 1;
	/// Largest accepted size.
	pub const MAX: u32 = 100;

	/// Accepts `n` unchanged when it is in range; never clamps.
	pub fn new(n: i64) -> Result<Self, InvalidSize> {
		if (Self::MIN as i64..=Self::MAX as i64).contains(&n) {
			Ok(Self(n as u32))
		} else {
			Err(InvalidSize {
				reason: SizeErrorReason::OutOfRange,
			})
		}
	}

	/// Number of cells per side.
	pub fn get(self) -> u32 {
		self.0
	}

	/// Whether a grid coordinate lies on the grid, i.e. in `[0, N)`.
	pub fn contains(self, coordinate: i64) -> bool {
		(0..self.0 as i64).contains(&coordinate)
	}
}

impl Default for GridSize {
	fn default() -> Self {
		Self(4)
	}
}

impl fmt::Display for GridSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl FromStr for GridSize {
	type Err = InvalidSize;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		validate(s)
	}
}

/// Parse user input into a [`GridSize`].
///
/// Integers that overflow `i64` are still integers, so they are reported as
/// out of range rather than as not-a-number.
pub fn validate(input: &str) -> Result<GridSize, InvalidSize> {
	match input.trim().parse::<i64>() {
		Ok(n) => GridSize::new(n),
		Err(e) => {
			let reason = match e.kind() {
				IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SizeErrorReason::OutOfRange,
				_ => SizeErrorReason::NotANumber,
			};
			Err(InvalidSize { reason })
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("0", SizeErrorReason::OutOfRange)]
	#[case("101", SizeErrorReason::OutOfRange)]
	#[case("-3", SizeErrorReason::OutOfRange)]
	#[case("99999999999999999999999", SizeErrorReason::OutOfRange)]
	#[case("abc", SizeErrorReason::NotANumber)]
	#[case("", SizeErrorReason::NotANumber)]
	#[case("4.5", SizeErrorReason::NotANumber)]
	fn rejects_bad_input(#[case] input: &str, #[case] reason: SizeErrorReason) {
		assert_eq!(validate(input), Err(InvalidSize { reason }));
	}

	#[rstest]
	#[case("1", 1)]
	#[case("50", 50)]
	#[case(" 100 ", 100)]
	#[case("+7", 7)]
	fn accepts_in_range(#[case] input: &str, #[case] expected: u32) {
		assert_eq!(validate(input).map(GridSize::get), Ok(expected));
	}

	#[test]
	fn contains_is_half_open() {
		let size = GridSize::new(5).unwrap();
		assert!(size.contains(0));
		assert!(size.contains(4));
		assert!(!size.contains(5));
		assert!(!size.contains(-1));
	}

	proptest! {
		#[test]
		fn validate_succeeds_iff_in_range(n in any::<i64>()) {
			let result = validate(&n.to_string());
			prop_assert_eq!(result.is_ok(), (1..=100).contains(&n));
			if let Ok(size) = result {
				prop_assert_eq!(size.get() as i64, n);
			}
		}
	}
}
