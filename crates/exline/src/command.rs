//! The command value contract between parsing and execution.
//!
//! Parsing produces boxed [`ExCommand`] values; the execution layer drives
//! them through the narrow [`EditorOps`] seam. Commands never touch editor
//! state directly, so the parser core can be exercised against a mock.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::range::{Address, LineRange};

/// A parsed ex command, boxed for uniform dispatch.
pub type BoxedCommand = Box<dyn ExCommand>;

/// Simplified result type for command execution.
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
	/// Command completed normally.
	Ok,
	/// Command requests closing the current window (may prompt for unsaved
	/// changes).
	Quit,
	/// Command requests closing the current window immediately (no prompts).
	ForceQuit,
	/// Command requests quitting the editor entirely.
	QuitAll,
	/// Command requests quitting the editor immediately (no prompts).
	ForceQuitAll,
}

/// Errors that can occur during command execution.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
	/// General command failure with message.
	#[error("{0}")]
	Failed(String),
	/// File I/O operation failed.
	#[error("I/O error: {0}")]
	Io(String),
	/// Operation not supported by the hosting editor.
	#[error("unsupported operation: {0}")]
	Unsupported(&'static str),
}

/// Direction of a line-shift command (`:<` / `:>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
	/// `:<` — dedent.
	Left,
	/// `:>` — indent.
	Right,
}

/// Input source for `:read`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadSource {
	/// Insert the contents of a file.
	File(PathBuf),
	/// Insert the output of a shell command.
	Shell(String),
}

/// Editor operations available to ex commands.
///
/// The hosting editor implements this; every method resolves addresses and
/// applies effects on its side. A `None` range means "act where the cursor
/// is" with each command's usual default scope.
pub trait EditorOps {
	/// Shows a status-line message.
	fn show_status(&mut self, message: &str);
	/// Moves the cursor to the line a range resolves to.
	fn jump_to_range(&mut self, range: &LineRange) -> Result<(), CommandError>;
	/// Prints lines, with line numbers and/or text per the flags.
	fn print_lines(
		&mut self,
		range: Option<&LineRange>,
		numbers: bool,
		text: bool,
		count: Option<u32>,
	) -> Result<(), CommandError>;
	/// Shifts lines one indent step left or right.
	fn shift_lines(
		&mut self,
		dir: ShiftDirection,
		range: Option<&LineRange>,
		count: Option<u32>,
	) -> Result<(), CommandError>;
	/// Deletes lines into a register.
	fn delete_lines(
		&mut self,
		range: Option<&LineRange>,
		register: Option<char>,
		count: Option<u32>,
	) -> Result<(), CommandError>;
	/// Yanks lines into a register.
	fn yank_lines(
		&mut self,
		range: Option<&LineRange>,
		register: Option<char>,
		count: Option<u32>,
	) -> Result<(), CommandError>;
	/// Copies lines below the destination address.
	fn copy_lines(&mut self, range: Option<&LineRange>, dest: Address) -> Result<(), CommandError>;
	/// Moves lines below the destination address.
	fn move_lines(&mut self, range: Option<&LineRange>, dest: Address) -> Result<(), CommandError>;
	/// Saves the current buffer, optionally to a new path.
	fn save(&mut self, path: Option<&Path>, force: bool) -> Result<(), CommandError>;
	/// Saves every modified buffer.
	fn save_all(&mut self, force: bool) -> Result<(), CommandError>;
	/// Inserts text from a file or shell command below the addressed line.
	fn read_source(
		&mut self,
		range: Option<&LineRange>,
		source: &ReadSource,
	) -> Result<(), CommandError>;
	/// Unloads buffers by number, or the current buffer when none are given.
	fn delete_buffers(&mut self, force: bool, buffers: &[u32]) -> Result<(), CommandError>;
	/// Applies an option expression (`:set` argument text).
	fn set_option(&mut self, expr: &str) -> Result<(), CommandError>;
	/// Clears search-match highlighting.
	fn clear_search_highlight(&mut self);
	/// Undoes the last `count` changes.
	fn undo(&mut self, count: u32) -> Result<(), CommandError>;
	/// Redoes the last undone change.
	fn redo(&mut self) -> Result<(), CommandError>;
	/// Closes every window except the current one.
	fn close_other_windows(&mut self, force: bool) -> Result<(), CommandError>;
}

/// One parsed ex command, ready for the execution layer.
pub trait ExCommand: fmt::Debug {
	/// Whether an attached neovim integration may run this command on the
	/// editor's behalf instead of the builtin implementation.
	fn neovim_capable(&self) -> bool {
		false
	}

	/// Executes the command with no range clause.
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult;

	/// Executes the command with the range clause that preceded it.
	///
	/// Commands that ignore ranges inherit this delegation to [`execute`].
	///
	/// [`execute`]: ExCommand::execute
	fn execute_with_range(&self, ops: &mut dyn EditorOps, _range: &LineRange) -> CommandResult {
		self.execute(ops)
	}
}
