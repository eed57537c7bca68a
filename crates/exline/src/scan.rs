//! Byte-offset-tracked cursor over one line of command input.
//!
//! Every grammar in this crate (range clause, command names, per-command
//! argument grammars) parses through [`Scanner`] so failure offsets are
//! reported under a single convention: the furthest byte position the
//! grammar could not proceed from.

use crate::error::ArgFailure;

/// Position-tracked view over a single input line.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Scanner<'a> {
	/// Creates a scanner positioned at the start of `input`.
	pub fn new(input: &'a str) -> Self {
		Self { input, pos: 0 }
	}

	/// Current byte offset into the input.
	pub fn offset(&self) -> usize {
		self.pos
	}

	/// Unconsumed remainder of the input.
	pub fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	/// Returns `true` once all input is consumed.
	pub fn is_end(&self) -> bool {
		self.pos == self.input.len()
	}

	/// Peeks at the next character without consuming it.
	pub fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	/// Consumes and returns the next character.
	pub fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		Some(ch)
	}

	/// Advances the cursor by `n` bytes.
	///
	/// `n` must land on a character boundary of the input.
	pub fn advance(&mut self, n: usize) {
		debug_assert!(self.input.is_char_boundary(self.pos + n));
		self.pos += n;
	}

	/// Consumes `expected` if the remaining input starts with it.
	pub fn eat_literal(&mut self, expected: &str) -> bool {
		if self.rest().starts_with(expected) {
			self.pos += expected.len();
			true
		} else {
			false
		}
	}

	/// Consumes `expected` if it is the next character.
	pub fn eat_char(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.pos += expected.len_utf8();
			true
		} else {
			false
		}
	}

	/// Skips horizontal whitespace (spaces and tabs).
	pub fn skip_hspace(&mut self) {
		while matches!(self.peek(), Some(' ' | '\t')) {
			self.pos += 1;
		}
	}

	/// Consumes characters while `pred` holds and returns the consumed slice.
	pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
		let start = self.pos;
		while let Some(ch) = self.peek() {
			if !pred(ch) {
				break;
			}
			self.pos += ch.len_utf8();
		}
		&self.input[start..self.pos]
	}

	/// Consumes and returns everything up to end of input.
	pub fn take_rest(&mut self) -> &'a str {
		let rest = self.rest();
		self.pos = self.input.len();
		rest
	}

	/// Consumes a run of ASCII digits as a decimal number.
	///
	/// Returns `None` without consuming anything when the next character is
	/// not a digit or the value would overflow `u32`.
	pub fn eat_decimal(&mut self) -> Option<u32> {
		let snapshot = self.pos;
		let digits = self.take_while(|c| c.is_ascii_digit());
		if digits.is_empty() {
			return None;
		}
		match digits.parse() {
			Ok(n) => Some(n),
			Err(_) => {
				self.pos = snapshot;
				None
			}
		}
	}

	/// Runs `f`, restoring the cursor position when it yields `None`.
	pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
		let snapshot = self.pos;
		let result = f(self);
		if result.is_none() {
			self.pos = snapshot;
		}
		result
	}

	/// Builds a grammar failure at the current offset.
	pub fn fail(&self, expected: &'static str) -> ArgFailure {
		ArgFailure {
			offset: self.pos,
			expected,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn literal_and_char_consumption() {
		let mut s = Scanner::new(":wq!");
		assert!(s.eat_char(':'));
		assert!(s.eat_literal("wq"));
		assert!(!s.eat_literal("wq"));
		assert!(s.eat_char('!'));
		assert!(s.is_end());
	}

	#[test]
	fn decimal_does_not_consume_on_failure() {
		let mut s = Scanner::new("abc");
		assert_eq!(s.eat_decimal(), None);
		assert_eq!(s.offset(), 0);

		let mut s = Scanner::new("120 lines");
		assert_eq!(s.eat_decimal(), Some(120));
		assert_eq!(s.rest(), " lines");
	}

	#[test]
	fn decimal_overflow_restores_position() {
		let mut s = Scanner::new("99999999999999999999");
		assert_eq!(s.eat_decimal(), None);
		assert_eq!(s.offset(), 0);
	}

	#[test]
	fn attempt_restores_on_none() {
		let mut s = Scanner::new("12x");
		let got = s.attempt(|s| {
			s.eat_decimal()?;
			if s.eat_char('!') { Some(()) } else { None }
		});
		assert_eq!(got, None);
		assert_eq!(s.offset(), 0);
	}

	#[test]
	fn hspace_skips_tabs_and_spaces_only() {
		let mut s = Scanner::new(" \t x");
		s.skip_hspace();
		assert_eq!(s.rest(), "x");
	}

	#[test]
	fn failure_carries_current_offset() {
		let mut s = Scanner::new("ab");
		s.bump();
		let failure = s.fail("digit");
		assert_eq!(failure.offset, 1);
		assert_eq!(failure.expected, "digit");
	}
}
