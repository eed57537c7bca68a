//! Session commands: quit variants and `:only`.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::scan::Scanner;

/// `:quit[!]` / `:qall[!]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quit {
	/// Quit every window, not just the current one.
	pub all: bool,
	/// Discard unsaved changes without prompting.
	pub force: bool,
}

impl ExCommand for Quit {
	fn execute(&self, _ops: &mut dyn EditorOps) -> CommandResult {
		Ok(match (self.all, self.force) {
			(false, false) => CommandOutcome::Quit,
			(false, true) => CommandOutcome::ForceQuit,
			(true, false) => CommandOutcome::QuitAll,
			(true, true) => CommandOutcome::ForceQuitAll,
		})
	}
}

fn parse_quit_args(s: &mut Scanner<'_>, all: bool) -> Result<BoxedCommand, ArgFailure> {
	let force = s.eat_char('!');
	Ok(Box::new(Quit { all, force }))
}

/// Grammar for `:quit`.
pub fn parse_quit(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_quit_args(s, false)
}

/// Grammar for `:qall` / `:quitall`.
pub fn parse_quit_all(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_quit_args(s, true)
}

/// `:only[!]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Only {
	/// Close modified windows too.
	pub force: bool,
}

impl ExCommand for Only {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.close_other_windows(self.force)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:only`.
pub fn parse_only(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let force = s.eat_char('!');
	Ok(Box::new(Only { force }))
}
