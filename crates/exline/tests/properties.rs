//! Property tests over the full builtin table.

use proptest::prelude::*;
use sable_exline::{BUILTIN_EX_COMMANDS, parse};

proptest! {
	// No hidden state: the same line always parses to the same result.
	#[test]
	fn parsing_is_idempotent(line in ".*") {
		let first = format!("{:?}", parse(&line));
		let second = format!("{:?}", parse(&line));
		prop_assert_eq!(first, second);
	}

	// Recognized-but-unimplemented commands accept any argument text; they
	// must never classify as an argument error.
	#[test]
	fn unimplemented_commands_swallow_any_arguments(args in ".*") {
		let line = format!("grep {args}");
		prop_assert!(parse(&line).is_ok(), "line {:?}", line);
	}

	// A name index into the table plus arbitrary trailing whitespace still
	// parses or fails the same classified way, never panics.
	#[test]
	fn every_full_name_parses(idx in 0usize..BUILTIN_EX_COMMANDS.len()) {
		let spec = &BUILTIN_EX_COMMANDS[idx];
		let line = format!(":{}{}", spec.required, spec.optional);
		// Every canonical name must at least resolve; rows with argument
		// grammars may still want arguments, which is a classified error,
		// not a recognition failure.
		match parse(&line) {
			Ok(_) => {}
			Err(err) => prop_assert!(
				!matches!(err, sable_exline::ExParseError::NotAnEditorCommand(_)),
				"{:?} -> {:?}",
				line,
				err
			),
		}
	}
}
