//! Ex command-line recognition and dispatch.
//!
//! Parses one line of command-mode input (the text after the `:` prompt):
//! an optional line range, a command name typed in full or abbreviated, and
//! that command's arguments. The output is a [`ParsedExLine`] holding the
//! range and a boxed [`ExCommand`] value for the execution layer, or one of
//! the four classified [`ExParseError`] kinds.
//!
//! The command-name grammar is inherently ambiguous: many abbreviations
//! overlap, and one command's abbreviation can be a textual prefix of
//! another's. Resolution is a deterministic ordered search over
//! [`BUILTIN_EX_COMMANDS`] — see [`resolve`] for the tie-break rule.
//!
//! # Modules
//!
//! - [`scan`] - Offset-tracked input cursor shared by every grammar here
//! - [`range`] - The line-range clause (`1,5`, `%`, `'a;$-2`, …)
//! - [`resolve`] - Abbreviation matching and name resolution
//! - [`registry`] - The builtin command table
//! - [`commands`] - Concrete command values and their argument grammars
//! - [`command`] - The command value contract and the editor-operations seam
//! - [`parse`] - The top-level line grammar and error classifier
//!
//! # Example
//!
//! ```
//! use sable_exline::{LineRange, parse};
//!
//! let line = parse(":1,5d").unwrap();
//! assert_eq!(line.range, Some(LineRange::lines(1, 5)));
//! ```

pub mod command;
pub mod commands;
pub mod error;
pub mod parse;
pub mod range;
pub mod registry;
pub mod resolve;
pub mod scan;

pub use command::{
	BoxedCommand, CommandError, CommandOutcome, CommandResult, EditorOps, ExCommand, ReadSource,
	ShiftDirection,
};
pub use error::{ArgFailure, ExParseError};
pub use parse::{ParsedExLine, parse, parse_with};
pub use range::{Address, AddressBase, LineRange, Separator};
pub use registry::{ArgGrammar, ArgParserFn, BUILTIN_EX_COMMANDS, CommandSpec};
pub use resolve::{ResolvedCommand, match_abbrev, resolve_in};
pub use scan::Scanner;
