//! File commands: write variants and `:read`.

use std::path::PathBuf;

use crate::command::{
	BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand, ReadSource,
};
use crate::error::ArgFailure;
use crate::range::LineRange;
use crate::scan::Scanner;

fn parse_bang_and_file(s: &mut Scanner<'_>) -> (bool, Option<PathBuf>) {
	let force = s.eat_char('!');
	s.skip_hspace();
	let file = s.take_while(|c| !c.is_whitespace());
	let file = (!file.is_empty()).then(|| PathBuf::from(file));
	(force, file)
}

/// `:write[!] [file]` (also `:update`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
	/// Overwrite read-only targets.
	pub force: bool,
	/// Write to this path instead of the buffer's own.
	pub file: Option<PathBuf>,
}

impl ExCommand for Write {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.save(self.file.as_deref(), self.force)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:write` / `:update`.
pub fn parse_write(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let (force, file) = parse_bang_and_file(s);
	Ok(Box::new(Write { force, file }))
}

/// `:wq[!] [file]` (also `:xit`, `:exit`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteQuit {
	/// Force both the write and the quit.
	pub force: bool,
	/// Write to this path instead of the buffer's own.
	pub file: Option<PathBuf>,
}

impl ExCommand for WriteQuit {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.save(self.file.as_deref(), self.force)?;
		Ok(if self.force {
			CommandOutcome::ForceQuit
		} else {
			CommandOutcome::Quit
		})
	}
}

/// Grammar for `:wq` / `:xit` / `:exit`.
pub fn parse_write_quit(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let (force, file) = parse_bang_and_file(s);
	Ok(Box::new(WriteQuit { force, file }))
}

/// `:wall[!]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteAll {
	/// Overwrite read-only targets.
	pub force: bool,
}

impl ExCommand for WriteAll {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.save_all(self.force)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:wall`.
pub fn parse_write_all(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let force = s.eat_char('!');
	Ok(Box::new(WriteAll { force }))
}

/// `:wqall[!]` (also `:xall`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteQuitAll {
	/// Force both the writes and the quit.
	pub force: bool,
}

impl ExCommand for WriteQuitAll {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.save_all(self.force)?;
		Ok(if self.force {
			CommandOutcome::ForceQuitAll
		} else {
			CommandOutcome::QuitAll
		})
	}
}

/// Grammar for `:wqall` / `:xall`.
pub fn parse_write_quit_all(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let force = s.eat_char('!');
	Ok(Box::new(WriteQuitAll { force }))
}

/// `:read {file}` or `:read !{cmd}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
	/// Where the inserted text comes from.
	pub source: ReadSource,
}

impl ExCommand for Read {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.read_source(None, &self.source)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.read_source(Some(range), &self.source)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:read`: a file path, or `!` followed by a shell command.
///
/// The argument is required; a bare `:read` fails at end of input.
pub fn parse_read(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	if s.eat_char('!') {
		let cmd = s.take_rest().trim_end();
		if cmd.is_empty() {
			return Err(s.fail("shell command"));
		}
		return Ok(Box::new(Read {
			source: ReadSource::Shell(cmd.to_string()),
		}));
	}

	let file = s.take_while(|c| !c.is_whitespace());
	if file.is_empty() {
		return Err(s.fail("file name"));
	}
	Ok(Box::new(Read {
		source: ReadSource::File(PathBuf::from(file)),
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn write_with_bang_and_target() {
		let mut s = Scanner::new("! out.txt");
		let cmd = parse_write(&mut s).unwrap();
		assert_eq!(
			format!("{cmd:?}"),
			format!("{:?}", Write {
				force: true,
				file: Some(PathBuf::from("out.txt")),
			})
		);
		assert!(s.is_end());
	}

	#[test]
	fn read_requires_a_source() {
		let mut s = Scanner::new("");
		assert_eq!(parse_read(&mut s).unwrap_err().offset, 0);

		// `!` with nothing behind it fails at end of input, so the caller
		// classifies it as a missing argument rather than a malformed one.
		let input = "! ";
		let mut s = Scanner::new(input);
		assert_eq!(parse_read(&mut s).unwrap_err().offset, input.len());
	}

	#[test]
	fn read_shell_keeps_interior_spaces() {
		let mut s = Scanner::new("!ls -la /tmp");
		let cmd = parse_read(&mut s).unwrap();
		assert_eq!(
			format!("{cmd:?}"),
			format!("{:?}", Read {
				source: ReadSource::Shell("ls -la /tmp".to_string()),
			})
		);
	}
}
