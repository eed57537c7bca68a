//! Command-name recognition: abbreviation matching and registry resolution.
//!
//! Matching is an explicit ordered search so the tie-break behavior is
//! testable on its own, independent of the top-level grammar:
//!
//! - a name matches its required prefix plus any length-prefix of its
//!   optional suffix, longest first;
//! - the registry is tried in reverse registration order, first match wins,
//!   so a later (more specific) name beats an earlier one whose abbreviation
//!   would otherwise claim the same text.

use tracing::trace;

use crate::registry::CommandSpec;

/// Outcome of matching one input span against the registry: the winning spec
/// and how many bytes of the input its name consumed.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCommand<'r> {
	/// The registry row that claimed the name.
	pub spec: &'r CommandSpec,
	/// Byte length of the matched name text.
	pub consumed: usize,
}

/// Matches one spec's name against the start of `input`.
///
/// Tries the longest abbreviation first: required prefix plus suffix prefixes
/// of decreasing length, down to the required prefix alone. A candidate only
/// wins if it also passes the word-boundary guard: unless the full name ends
/// in a non-letter symbol, the character after the consumed text must not be
/// alphabetic. The guard covers the empty name too, so a bare range line
/// resolves to the goto-line row while an unknown word matches nothing at
/// all.
///
/// Returns the number of bytes consumed.
pub fn match_abbrev(spec: &CommandSpec, input: &str) -> Option<usize> {
	let rest = input.strip_prefix(spec.required)?;

	let guarded = match spec.optional.chars().last().or_else(|| spec.required.chars().last()) {
		Some(last) => last.is_ascii_alphabetic(),
		None => true,
	};

	for len in (0..=spec.optional.len()).rev() {
		if !rest.starts_with(&spec.optional[..len]) {
			continue;
		}
		let consumed = spec.required.len() + len;
		if guarded
			&& input[consumed..]
				.chars()
				.next()
				.is_some_and(|c| c.is_ascii_alphabetic())
		{
			continue;
		}
		return Some(consumed);
	}
	None
}

/// Resolves which command `input` names, if any.
///
/// Specs are tried in reverse registration order with first-match-wins
/// semantics; `registry` must therefore be in ascending registration order
/// (as [`BUILTIN_EX_COMMANDS`] is).
///
/// An unresolved name is not an error here; the caller decides what that
/// means.
///
/// [`BUILTIN_EX_COMMANDS`]: crate::registry::BUILTIN_EX_COMMANDS
pub fn resolve_in<'r>(registry: &'r [CommandSpec], input: &str) -> Option<ResolvedCommand<'r>> {
	let resolved = registry.iter().rev().find_map(|spec| {
		match_abbrev(spec, input).map(|consumed| ResolvedCommand { spec, consumed })
	});

	match &resolved {
		Some(r) => trace!(
			name = %r.spec.display_name(),
			consumed = r.consumed,
			"resolved command name"
		),
		None => trace!(input, "no command name matched"),
	}
	resolved
}

#[cfg(test)]
mod tests {
	use std::ptr;

	use super::*;
	use crate::registry::{ArgGrammar, BUILTIN_EX_COMMANDS};

	fn resolve(input: &str) -> Option<ResolvedCommand<'_>> {
		resolve_in(BUILTIN_EX_COMMANDS, input)
	}

	fn spec_of(full_name: &str) -> &'static CommandSpec {
		BUILTIN_EX_COMMANDS
			.iter()
			.find(|s| format!("{}{}", s.required, s.optional) == full_name)
			.unwrap_or_else(|| panic!("no spec named {full_name:?}"))
	}

	#[test]
	fn required_prefix_and_full_name_resolve_to_their_spec() {
		for spec in BUILTIN_EX_COMMANDS {
			let by_prefix = resolve(spec.required)
				.unwrap_or_else(|| panic!("prefix {:?} did not resolve", spec.required));
			assert!(
				ptr::eq(by_prefix.spec, spec),
				"prefix {:?} resolved to {:?}",
				spec.required,
				by_prefix.spec.display_name(),
			);
			assert_eq!(by_prefix.consumed, spec.required.len());

			let full = format!("{}{}", spec.required, spec.optional);
			let by_full = resolve(&full)
				.unwrap_or_else(|| panic!("full name {full:?} did not resolve"));
			assert!(
				ptr::eq(by_full.spec, spec),
				"full name {full:?} resolved to {:?}",
				by_full.spec.display_name(),
			);
			assert_eq!(by_full.consumed, full.len());
		}
	}

	#[test]
	fn every_abbreviation_length_resolves_deterministically() {
		for spec in BUILTIN_EX_COMMANDS {
			for len in 0..=spec.optional.len() {
				let abbrev = format!("{}{}", spec.required, &spec.optional[..len]);
				let resolved = resolve(&abbrev)
					.unwrap_or_else(|| panic!("abbreviation {abbrev:?} did not resolve"));
				// A different winner is fine only when that winner's own name
				// claims the exact text (it is a later, more specific spec).
				if !ptr::eq(resolved.spec, spec) {
					assert_eq!(
						resolved.consumed,
						abbrev.len(),
						"abbreviation {abbrev:?} lost to {:?} without a full claim",
						resolved.spec.display_name(),
					);
				}
			}
		}
	}

	#[test]
	fn longest_suffix_prefix_wins() {
		// "read" must consume all of "ead", not stop at "ea".
		let resolved = resolve("read").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("read")));
		assert_eq!(resolved.consumed, 4);
	}

	#[test]
	fn word_boundary_guard_rejects_extended_words() {
		// "bd" is a valid abbreviation, but "bdx" must not match it.
		assert!(resolve("bd").is_some());
		assert!(resolve("bdx").is_none());
		assert!(resolve("zz").is_none());
	}

	#[test]
	fn empty_name_matches_only_at_a_word_boundary() {
		let resolved = resolve("").unwrap();
		assert_eq!(resolved.consumed, 0);
		assert_eq!(resolved.spec.display_name(), "");

		// An unknown word must not fall through to the goto-line row.
		assert!(resolve("qwerty").is_none());
	}

	#[test]
	fn later_registration_wins_ties() {
		// `#!` and `#` can both claim the start of a shebang line; the later
		// registered `#!` must win.
		let resolved = resolve("#!/bin/sh").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("#!")));
		assert_eq!(resolved.consumed, 2);

		let resolved = resolve("@@").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("@@")));

		// "tabnew" is fully claimed by its own row, not by `tabn[ext]`.
		let resolved = resolve("tabnew").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("tabnew")));
	}

	#[test]
	fn more_specific_command_beats_shorter_generic_one() {
		// "noh" belongs to nohlsearch, not to no[remap].
		let resolved = resolve("noh").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("nohlsearch")));

		// "cons" belongs to const, not to con[tinue].
		let resolved = resolve("cons").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("const")));
	}

	#[test]
	fn symbolic_names_skip_the_boundary_guard() {
		// `<` is a command and may be followed by anything.
		let resolved = resolve("<foo").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("<")));
		assert_eq!(resolved.consumed, 1);

		// `!` likewise.
		let resolved = resolve("!ls").unwrap();
		assert!(ptr::eq(resolved.spec, spec_of("!")));

		match resolved.spec.grammar {
			ArgGrammar::Unimplemented => {}
			ArgGrammar::Parser(_) => panic!("`!` should be unimplemented"),
		}
	}

	#[test]
	fn case_sensitive_matching() {
		// `Next` (capital N) and `next` are different rows.
		let upper = resolve("N").unwrap();
		assert!(ptr::eq(upper.spec, spec_of("Next")));
		let lower = resolve("n").unwrap();
		assert!(ptr::eq(lower.spec, spec_of("next")));
	}
}
