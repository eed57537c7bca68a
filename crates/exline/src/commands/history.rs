//! Change-history commands: `:undo` and `:redo`.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::scan::Scanner;

/// `:undo [count]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
	/// How many changes to undo; defaults to one.
	pub count: Option<u32>,
}

impl ExCommand for Undo {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.undo(self.count.unwrap_or(1))?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:undo`.
pub fn parse_undo(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	let count = s.eat_decimal();
	Ok(Box::new(Undo { count }))
}

/// `:redo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redo;

impl ExCommand for Redo {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.redo()?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:redo`: takes nothing.
pub fn parse_redo(_s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	Ok(Box::new(Redo))
}
