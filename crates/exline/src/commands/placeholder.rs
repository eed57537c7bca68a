//! Stand-in command values: recognized-but-unimplemented and the no-op line.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::range::LineRange;
use crate::scan::Scanner;

/// A command the grammar recognizes but the editor does not implement yet.
///
/// Typing one is not a syntax error: the line parses, and execution only
/// reports the command's status. Any argument text is accepted and discarded,
/// so the argument stage can never fail for these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unimplemented {
	name: String,
}

impl Unimplemented {
	/// Creates the placeholder for the command with the given display name.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	/// The display name of the command this stands in for.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl ExCommand for Unimplemented {
	// Don't block these commands for users who delegate execution to an
	// attached neovim instance.
	fn neovim_capable(&self) -> bool {
		true
	}

	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.show_status(&format!("Command :{} is not yet implemented", self.name));
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, _range: &LineRange) -> CommandResult {
		self.execute(ops)
	}
}

/// The `#!` line: parses by consuming the rest of the line and does nothing.
///
/// Unlike [`Unimplemented`] this is a permanent, intentional no-op, so that a
/// command file starting with a shebang is valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoOp;

impl ExCommand for NoOp {
	fn execute(&self, _ops: &mut dyn EditorOps) -> CommandResult {
		Ok(CommandOutcome::Ok)
	}
}

/// Argument grammar for `#!`: swallow everything to end of line.
pub fn parse_shebang(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	s.take_rest();
	Ok(Box::new(NoOp))
}
