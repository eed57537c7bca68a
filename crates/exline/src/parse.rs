//! Top-level grammar for one ex command line.
//!
//! Sequence: leading colons and whitespace, an optional range clause, the
//! command name, that command's argument grammar, then a whitespace-only
//! trailer. Any failure aborts the line and classifies into one of the four
//! [`ExParseError`] kinds; there is no recovery.
//!
//! Command separators (`|`) and trailing comments (`"`) are unsupported and
//! surface as [`ExParseError::TrailingCharacters`].

use tracing::{debug, trace};

use crate::command::BoxedCommand;
use crate::commands::placeholder::Unimplemented;
use crate::error::ExParseError;
use crate::range::LineRange;
use crate::registry::{ArgGrammar, BUILTIN_EX_COMMANDS, CommandSpec};
use crate::resolve::resolve_in;
use crate::scan::Scanner;

/// The result of parsing one full command line: an optional range clause and
/// exactly one command value.
///
/// Produced once per submitted line, handed to the execution layer, then
/// discarded.
#[derive(Debug)]
pub struct ParsedExLine {
	/// The range clause, when one was typed.
	pub range: Option<LineRange>,
	/// The parsed command, ready to execute.
	pub command: BoxedCommand,
}

impl PartialEq for ParsedExLine {
	fn eq(&self, other: &Self) -> bool {
		self.range == other.range
			&& format!("{:?}", self.command) == format!("{:?}", other.command)
	}
}

/// Parses one command line against the builtin registry.
///
/// `line` is the text following the command prompt; leading `:` characters
/// are accepted and ignored.
pub fn parse(line: &str) -> Result<ParsedExLine, ExParseError> {
	parse_with(BUILTIN_EX_COMMANDS, line)
}

/// Parses one command line against an explicit registry.
///
/// The registry must be in ascending registration order; the builtin table
/// already is. Exposed separately so the grammar and the error classifier can
/// be driven by stub registries in tests.
pub fn parse_with(registry: &[CommandSpec], line: &str) -> Result<ParsedExLine, ExParseError> {
	let mut s = Scanner::new(line);

	// Vestigial prompt markers: whitespace and any number of colons.
	s.skip_hspace();
	while s.eat_char(':') {
		s.skip_hspace();
	}

	// Everything from here on is what an error message should echo back.
	let context_start = s.offset();

	let range = LineRange::parse(&mut s);
	s.skip_hspace();

	let Some(resolved) = resolve_in(registry, s.rest()) else {
		return Err(ExParseError::NotAnEditorCommand(
			line[context_start..].to_string(),
		));
	};
	s.advance(resolved.consumed);
	s.skip_hspace();

	let args = s.rest();
	debug!(
		command = %resolved.spec.display_name(),
		range = ?range,
		args,
		"parsed command name"
	);

	let command: BoxedCommand = match resolved.spec.grammar {
		ArgGrammar::Unimplemented => {
			// Recognized but unsupported: swallow the arguments so the user
			// hears "not implemented" instead of a syntax error.
			Box::new(Unimplemented::new(resolved.spec.display_name()))
		}
		ArgGrammar::Parser(parse_args) => {
			let mut arg_scanner = Scanner::new(args);
			let command = parse_args(&mut arg_scanner).map_err(|failure| {
				trace!(
					offset = failure.offset,
					expected = failure.expected,
					"argument grammar failed"
				);
				if failure.offset == args.len() {
					ExParseError::ArgumentRequired
				} else {
					ExParseError::InvalidArgument
				}
			})?;

			arg_scanner.skip_hspace();
			if !arg_scanner.is_end() {
				return Err(ExParseError::TrailingCharacters(
					arg_scanner.rest().to_string(),
				));
			}
			command
		}
	};

	Ok(ParsedExLine { range, command })
}
