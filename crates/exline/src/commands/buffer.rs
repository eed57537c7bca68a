//! Buffer commands: `:bdelete`.

use crate::command::{BoxedCommand, CommandOutcome, CommandResult, EditorOps, ExCommand};
use crate::error::ArgFailure;
use crate::scan::Scanner;

/// `:bdelete[!] [N ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDelete {
	/// Unload buffers even when they hold unsaved changes.
	pub force: bool,
	/// Buffer numbers to unload; empty means the current buffer.
	pub buffers: Vec<u32>,
}

impl ExCommand for BufferDelete {
	fn execute(&self, ops: &mut dyn EditorOps) -> CommandResult {
		ops.delete_buffers(self.force, &self.buffers)?;
		Ok(CommandOutcome::Ok)
	}
}

/// Grammar for `:bdelete`: optional `!`, then buffer numbers.
pub fn parse_buffer_delete(s: &mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure> {
	let force = s.eat_char('!');
	let mut buffers = Vec::new();
	loop {
		s.skip_hspace();
		match s.eat_decimal() {
			Some(n) => buffers.push(n),
			None => break,
		}
	}
	Ok(Box::new(BufferDelete { force, buffers }))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collects_buffer_numbers() {
		let mut s = Scanner::new("! 2 5 9");
		let cmd = parse_buffer_delete(&mut s).unwrap();
		assert_eq!(
			format!("{cmd:?}"),
			format!("{:?}", BufferDelete {
				force: true,
				buffers: vec![2, 5, 9],
			})
		);
		assert!(s.is_end());
	}
}
