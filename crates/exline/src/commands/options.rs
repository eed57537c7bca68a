//! Option commands: `:set` and `:nohlsearch`.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::scan::Scanner;

/// `:set {expr}`
///
/// The option expression's own grammar (`nu`, `no{option}`, `{option}={val}`,
/// …) belongs to the options layer; the command line passes it through
/// verbatim. An empty expression is valid and lists changed options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
	/// The raw option expression after the command name.
	pub expr: String,
}

impl ExCommand for Set {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.set_option(&self.expr)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:set`: the rest of the line, verbatim.
pub fn parse_set(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let expr = s.take_rest().trim_end().to_string();
	Ok(Box::new(Set { expr }))
}

/// `:nohlsearch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nohl;

impl ExCommand for Nohl {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.clear_search_highlight();
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:nohlsearch`: takes nothing.
pub fn parse_nohl(_s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	Ok(Box::new(Nohl))
}
