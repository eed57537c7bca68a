//! Error taxonomy for ex command-line parsing.

use thiserror::Error;

/// Failure reported by a range or argument grammar.
///
/// `offset` is a byte offset into the text the grammar was given, pointing at
/// the furthest position it could not proceed from. The classifier in
/// [`crate::parse`] relies on this convention: a failure exactly at the end of
/// the argument text means the grammar ran out of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgFailure {
	/// Byte offset of the failure within the parsed text.
	pub offset: usize,
	/// What the grammar expected at that position.
	pub expected: &'static str,
}

/// A classified parse failure for one submitted command line.
///
/// Every failure aborts parsing of the line; there is no recovery. The
/// carried text is verbatim user input, kept for message rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExParseError {
	/// No registered command name matched the input.
	#[error("E492: Not an editor command: {0}")]
	NotAnEditorCommand(String),
	/// A command was recognized but its argument grammar ran out of input.
	#[error("E471: Argument required")]
	ArgumentRequired,
	/// A command was recognized but its argument text is malformed.
	#[error("E474: Invalid argument")]
	InvalidArgument,
	/// Valid command and arguments followed by unconsumed non-whitespace text.
	#[error("E488: Trailing characters: {0}")]
	TrailingCharacters(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_render_with_error_numbers() {
		assert_eq!(
			ExParseError::NotAnEditorCommand("bdx".into()).to_string(),
			"E492: Not an editor command: bdx"
		);
		assert_eq!(ExParseError::ArgumentRequired.to_string(), "E471: Argument required");
		assert_eq!(ExParseError::InvalidArgument.to_string(), "E474: Invalid argument");
		assert_eq!(
			ExParseError::TrailingCharacters("extra".into()).to_string(),
			"E488: Trailing characters: extra"
		);
	}
}
