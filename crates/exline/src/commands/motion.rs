//! The bare-range command: a line with only an address jumps to it.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::range::LineRange;
use crate::scan::Scanner;

/// The empty-named command: `:5` moves the cursor to line 5.
///
/// Without a range this is a no-op (a bare `:` does nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoLine;

impl ExCommand for GotoLine {
	fn execute(&self, _ops: &mut dyn EditorOps) -> CommandResult {
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.jump_to_range(range)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Argument grammar for the empty name: takes nothing.
pub fn parse_goto(_s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	Ok(Box::new(GotoLine))
}
