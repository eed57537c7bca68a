//! Line-range clause preceding an ex command name.
//!
//! The range grammar is deliberately narrow: absolute lines, `.`, `$`, marks,
//! signed offsets, the `%` whole-buffer shorthand, and the `,`/`;` separators.
//! Search-pattern addresses (`/pat/`, `?pat?`) are not ranges here; such text
//! falls through to command-name resolution untouched.
//!
//! Resolving addresses against buffer state (current line, mark positions) is
//! the execution layer's job; this module only records what was typed.

use std::fmt;

use crate::scan::Scanner;

/// The anchor a line address counts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressBase {
	/// An absolute line number as typed (`12`).
	Absolute(u32),
	/// The current line (`.`), also the anchor of a bare signed offset.
	Current,
	/// The last line of the buffer (`$`).
	Last,
	/// A mark position (`'x`).
	Mark(char),
}

/// One line address: an anchor plus an accumulated signed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
	/// The anchor the offset applies to.
	pub base: AddressBase,
	/// Net offset from the anchor (`.+3-1` accumulates to `+2`).
	pub offset: i64,
}

impl Address {
	/// The current line with no offset.
	pub const CURRENT: Self = Self {
		base: AddressBase::Current,
		offset: 0,
	};

	/// An absolute line address with no offset.
	pub const fn line(n: u32) -> Self {
		Self {
			base: AddressBase::Absolute(n),
			offset: 0,
		}
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.base {
			AddressBase::Absolute(n) => write!(f, "{n}")?,
			AddressBase::Current => write!(f, ".")?,
			AddressBase::Last => write!(f, "$")?,
			AddressBase::Mark(m) => write!(f, "'{m}")?,
		}
		if self.offset > 0 {
			write!(f, "+{}", self.offset)?;
		} else if self.offset < 0 {
			write!(f, "{}", self.offset)?;
		}
		Ok(())
	}
}

/// Separator between the two addresses of a range pair.
///
/// `;` additionally asks the consumer to move the current line to the first
/// address before resolving the second; the parser only records which one was
/// typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
	/// `,`
	Comma,
	/// `;`
	Semicolon,
}

impl fmt::Display for Separator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Comma => write!(f, ","),
			Self::Semicolon => write!(f, ";"),
		}
	}
}

/// A parsed range clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRange {
	/// `%` — every line of the buffer (`1,$`).
	Whole,
	/// A single address.
	Single(Address),
	/// Two addresses joined by a separator.
	Pair {
		start: Address,
		sep: Separator,
		end: Address,
	},
}

impl LineRange {
	/// A pair of absolute line numbers joined by `,`.
	pub const fn lines(start: u32, end: u32) -> Self {
		Self::Pair {
			start: Address::line(start),
			sep: Separator::Comma,
			end: Address::line(end),
		}
	}

	/// Parses a range clause from the scanner.
	///
	/// On non-match the cursor is left untouched and `None` is returned;
	/// absence of a range is never an error at this stage.
	pub fn parse(s: &mut Scanner<'_>) -> Option<Self> {
		if s.eat_char('%') {
			return Some(Self::Whole);
		}

		s.attempt(|s| {
			let start = parse_address(s);
			let sep = s.attempt(|s| {
				s.skip_hspace();
				if s.eat_char(',') {
					Some(Separator::Comma)
				} else if s.eat_char(';') {
					Some(Separator::Semicolon)
				} else {
					None
				}
			});

			match (start, sep) {
				(None, None) => None,
				(Some(addr), None) => Some(Self::Single(addr)),
				(start, Some(sep)) => {
					s.skip_hspace();
					let end = parse_address(s).unwrap_or(Address::CURRENT);
					Some(Self::Pair {
						start: start.unwrap_or(Address::CURRENT),
						sep,
						end,
					})
				}
			}
		})
	}
}

impl fmt::Display for LineRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Whole => write!(f, "%"),
			Self::Single(addr) => write!(f, "{addr}"),
			Self::Pair { start, sep, end } => write!(f, "{start}{sep}{end}"),
		}
	}
}

/// Parses one address: an anchor (`12`, `.`, `$`, `'x`, or nothing for a bare
/// offset) followed by any number of signed offsets. A sign without digits
/// counts as one.
pub fn parse_address(s: &mut Scanner<'_>) -> Option<Address> {
	s.attempt(|s| {
		let base = if let Some(n) = s.eat_decimal() {
			AddressBase::Absolute(n)
		} else if s.eat_char('.') {
			AddressBase::Current
		} else if s.eat_char('$') {
			AddressBase::Last
		} else if s.eat_char('\'') {
			let mark = s.bump().filter(char::is_ascii_alphanumeric)?;
			AddressBase::Mark(mark)
		} else if matches!(s.peek(), Some('+' | '-')) {
			AddressBase::Current
		} else {
			return None;
		};

		let mut offset = 0i64;
		loop {
			let sign = match s.peek() {
				Some('+') => 1,
				Some('-') => -1,
				_ => break,
			};
			s.bump();
			offset += sign * i64::from(s.eat_decimal().unwrap_or(1));
		}

		Some(Address { base, offset })
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parse_str(input: &str) -> (Option<LineRange>, String) {
		let mut s = Scanner::new(input);
		let range = LineRange::parse(&mut s);
		(range, s.rest().to_string())
	}

	#[test]
	fn absolute_pair() {
		let (range, rest) = parse_str("1,5d");
		assert_eq!(range, Some(LineRange::lines(1, 5)));
		assert_eq!(rest, "d");
	}

	#[test]
	fn whole_buffer_shorthand() {
		let (range, rest) = parse_str("%s/a/b/");
		assert_eq!(range, Some(LineRange::Whole));
		assert_eq!(rest, "s/a/b/");
	}

	#[test]
	fn single_addresses() {
		assert_eq!(parse_str(".").0, Some(LineRange::Single(Address::CURRENT)));
		assert_eq!(
			parse_str("$-1").0,
			Some(LineRange::Single(Address {
				base: AddressBase::Last,
				offset: -1,
			}))
		);
		assert_eq!(
			parse_str("+3").0,
			Some(LineRange::Single(Address {
				base: AddressBase::Current,
				offset: 3,
			}))
		);
	}

	#[test]
	fn mark_pair_with_semicolon() {
		let (range, rest) = parse_str("'a;'b y");
		assert_eq!(
			range,
			Some(LineRange::Pair {
				start: Address {
					base: AddressBase::Mark('a'),
					offset: 0,
				},
				sep: Separator::Semicolon,
				end: Address {
					base: AddressBase::Mark('b'),
					offset: 0,
				},
			})
		);
		assert_eq!(rest, " y");
	}

	#[test]
	fn missing_sides_default_to_current_line() {
		assert_eq!(
			parse_str(",5").0,
			Some(LineRange::Pair {
				start: Address::CURRENT,
				sep: Separator::Comma,
				end: Address::line(5),
			})
		);
		let (range, rest) = parse_str("5,");
		assert_eq!(
			range,
			Some(LineRange::Pair {
				start: Address::line(5),
				sep: Separator::Comma,
				end: Address::CURRENT,
			})
		);
		assert_eq!(rest, "");
	}

	#[test]
	fn offsets_accumulate() {
		assert_eq!(
			parse_str(".+3-1").0,
			Some(LineRange::Single(Address {
				base: AddressBase::Current,
				offset: 2,
			}))
		);
		// A sign with no digits counts as one.
		assert_eq!(
			parse_str(".-").0,
			Some(LineRange::Single(Address {
				base: AddressBase::Current,
				offset: -1,
			}))
		);
	}

	#[test]
	fn non_range_consumes_nothing() {
		for input in ["bdx", "w file.txt", "/pat/d", "?pat?d", ""] {
			let mut s = Scanner::new(input);
			assert_eq!(LineRange::parse(&mut s), None, "input {input:?}");
			assert_eq!(s.offset(), 0, "input {input:?}");
		}
	}

	#[test]
	fn bare_mark_quote_consumes_nothing() {
		let mut s = Scanner::new("'!");
		assert_eq!(LineRange::parse(&mut s), None);
		assert_eq!(s.offset(), 0);
	}

	#[test]
	fn display_renders_typed_form() {
		assert_eq!(LineRange::lines(1, 5).to_string(), "1,5");
		assert_eq!(LineRange::Whole.to_string(), "%");
		assert_eq!(
			LineRange::Pair {
				start: Address {
					base: AddressBase::Mark('a'),
					offset: 0,
				},
				sep: Separator::Semicolon,
				end: Address {
					base: AddressBase::Last,
					offset: -2,
				},
			}
			.to_string(),
			"'a;$-2"
		);
	}
}
