//! Line-operation commands: print, shift, delete, yank, copy, move.

use crate::command::{
	BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand, ShiftDirection,
};
use crate::error::ArgFailure;
use crate::range::{Address, LineRange, parse_address};
use crate::scan::Scanner;

/// Parses the common `[register] [count]` argument tail.
///
/// The register is a single ASCII alphanumeric or `"`; a lone digit counts as
/// a register name here, matching the numbered registers.
fn parse_register_count(s: &mut Scanner<'_>) -> (Option<char>, Option<u32>) {
	s.skip_hspace();
	let register = s.attempt(|s| s.bump().filter(|c| c.is_ascii_alphanumeric() || *c == '"'));
	s.skip_hspace();
	let count = s.eat_decimal();
	(register, count)
}

/// `:print` / `:number` / `:list` / `:#` / `:=` with baked-in display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Print {
	/// Print line numbers.
	pub numbers: bool,
	/// Print line text.
	pub text: bool,
	/// Optional count of lines to print.
	pub count: Option<u32>,
}

impl ExCommand for Print {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.print_lines(None, self.numbers, self.text, self.count)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.print_lines(Some(range), self.numbers, self.text, self.count)?;
		Ok(CommandOutcome::Ok)
	}
}

fn parse_print(s: &mut Scanner<'_>, numbers: bool, text: bool) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	let count = s.eat_decimal();
	Ok(Box::new(Print {
		numbers,
		text,
		count,
	}))
}

/// Grammar for `:#` and `:number`: numbers and text.
pub fn parse_print_numbered(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_print(s, true, true)
}

/// Grammar for `:=`: line number only.
pub fn parse_print_line_number(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_print(s, true, false)
}

/// Grammar for `:print` and `:list`: text only.
pub fn parse_print_text(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_print(s, false, true)
}

/// `:<` / `:>` — shift lines one indent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
	/// Which way to shift.
	pub dir: ShiftDirection,
	/// Optional count of lines to act on.
	pub count: Option<u32>,
}

impl ExCommand for Shift {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.shift_lines(self.dir, None, self.count)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.shift_lines(self.dir, Some(range), self.count)?;
		Ok(CommandOutcome::Ok)
	}
}

fn parse_shift(s: &mut Scanner<'_>, dir: ShiftDirection) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	let count = s.eat_decimal();
	Ok(Box::new(Shift { dir, count }))
}

/// Grammar for `:<`.
pub fn parse_shift_left(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_shift(s, ShiftDirection::Left)
}

/// Grammar for `:>`.
pub fn parse_shift_right(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	parse_shift(s, ShiftDirection::Right)
}

/// `:delete [x] [count]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delete {
	/// Register to delete into.
	pub register: Option<char>,
	/// Count of lines, counted from the end of the range.
	pub count: Option<u32>,
}

impl ExCommand for Delete {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.delete_lines(None, self.register, self.count)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.delete_lines(Some(range), self.register, self.count)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:delete`.
pub fn parse_delete(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let (register, count) = parse_register_count(s);
	Ok(Box::new(Delete { register, count }))
}

/// `:yank [x] [count]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yank {
	/// Register to yank into.
	pub register: Option<char>,
	/// Count of lines, counted from the end of the range.
	pub count: Option<u32>,
}

impl ExCommand for Yank {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.yank_lines(None, self.register, self.count)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.yank_lines(Some(range), self.register, self.count)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:yank`.
pub fn parse_yank(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let (register, count) = parse_register_count(s);
	Ok(Box::new(Yank { register, count }))
}

/// `:copy {address}` (also `:t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyLines {
	/// Destination the copied lines land below.
	pub dest: Address,
}

impl ExCommand for CopyLines {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.copy_lines(None, self.dest)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.copy_lines(Some(range), self.dest)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:copy` / `:t`: one required destination address.
pub fn parse_copy(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	match parse_address(s) {
		Some(dest) => Ok(Box::new(CopyLines { dest })),
		None => Err(s.fail("destination address")),
	}
}

/// `:move {address}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLines {
	/// Destination the moved lines land below.
	pub dest: Address,
}

impl ExCommand for MoveLines {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.move_lines(None, self.dest)?;
		Ok(CommandOutcome::Ok)
	}

	fn execute_with_range(&self, ops: &mut dyn EditorOps, range: &LineRange) -> CommandResult {
		ops.move_lines(Some(range), self.dest)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:move`: one required destination address.
pub fn parse_move(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	s.skip_hspace();
	match parse_address(s) {
		Some(dest) => Ok(Box::new(MoveLines { dest })),
		None => Err(s.fail("destination address")),
	}
}
