//! The builtin ex command registry.
//!
//! One row per command: the minimal literal prefix the user must type, the
//! optional remainder of the full name, and the argument grammar (or the
//! unimplemented marker). The table is pure data; resolution order and
//! tie-breaking live in [`crate::resolve`].
//!
//! Rows are registered in ascending order of full name, which makes reverse
//! trial order resolve the most specific name first. The resolver depends on
//! this, so the table is fixed at build time and never sorted at runtime.

use crate::command::BoxedCommand;
use crate::commands::{buffer, file, history, lines, motion, options, placeholder, session};
use crate::error::ArgFailure;
use crate::scan::Scanner;

/// Argument grammar bound to one registry row.
pub type ArgParserFn = fn(&mut Scanner<'_>) -> Result<BoxedCommand, ArgFailure>;

/// How a command's arguments parse once its name is recognized.
#[derive(Clone, Copy)]
pub enum ArgGrammar {
	/// The command is recognized but has no behavior yet. Its effective
	/// grammar accepts and discards all remaining text, and the parsed line
	/// carries an [`Unimplemented`] placeholder.
	///
	/// [`Unimplemented`]: crate::commands::placeholder::Unimplemented
	Unimplemented,
	/// A fully defined grammar for this command's arguments.
	Parser(ArgParserFn),
}

impl std::fmt::Debug for ArgGrammar {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Unimplemented => write!(f, "Unimplemented"),
			Self::Parser(_) => write!(f, "Parser(..)"),
		}
	}
}

/// One row of the command registry.
///
/// `required` plus `optional` spells the command's canonical full name, which
/// is unique across the registry. Canonical names are ASCII.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
	/// Literal text that must be typed for this row to match. May be empty or
	/// symbolic (`&`, `<`, `~`).
	pub required: &'static str,
	/// Remainder of the full name; any prefix of it may also be typed.
	pub optional: &'static str,
	/// The argument grammar bound to this command.
	pub grammar: ArgGrammar,
}

impl CommandSpec {
	/// Display name in `prefix[suffix]` form (or just the prefix when there
	/// is no optional part).
	pub fn display_name(&self) -> String {
		if self.optional.is_empty() {
			self.required.to_string()
		} else {
			format!("{}[{}]", self.required, self.optional)
		}
	}
}

macro_rules! spec {
	($required:literal, $optional:literal) => {
		CommandSpec {
			required: $required,
			optional: $optional,
			grammar: ArgGrammar::Unimplemented,
		}
	};
	($required:literal, $optional:literal, $parser:expr) => {
		CommandSpec {
			required: $required,
			optional: $optional,
			grammar: ArgGrammar::Parser($parser),
		}
	};
}

/// Every builtin ex command, in registration order.
///
/// The list follows the classic `:help index` command set. Unimplemented rows
/// still resolve, so typing them reports a status instead of a syntax error.
pub static BUILTIN_EX_COMMANDS: &[CommandSpec] = &[
	spec!("", "", motion::parse_goto),
	spec!("!", ""),
	spec!("#", "", lines::parse_print_numbered),
	spec!("#!", "", placeholder::parse_shebang),
	spec!("&", ""),
	spec!("*", ""),
	spec!("<", "", lines::parse_shift_left),
	spec!("=", "", lines::parse_print_line_number),
	spec!(">", "", lines::parse_shift_right),
	spec!("@", ""),
	spec!("@@", ""),
	spec!("N", "ext"),
	spec!("a", "ppend"),
	spec!("ab", "breviate"),
	spec!("abc", "lear"),
	spec!("abo", "veleft"),
	spec!("al", "l"),
	spec!("am", "enu"),
	spec!("an", "oremenu"),
	spec!("ar", "gs"),
	spec!("arga", "dd"),
	spec!("argd", "elete"),
	spec!("argdo", ""),
	spec!("arge", "dit"),
	spec!("argg", "lobal"),
	spec!("argl", "ocal"),
	spec!("argu", "ment"),
	spec!("as", "cii"),
	spec!("au", "tocmd"),
	spec!("aug", "roup"),
	spec!("aun", "menu"),
	spec!("b", "uffer"),
	spec!("bN", "ext"),
	spec!("ba", "ll"),
	spec!("bad", "d"),
	spec!("balt", ""),
	spec!("bd", "elete", buffer::parse_buffer_delete),
	spec!("be", "have"),
	spec!("bel", "owright"),
	spec!("bf", "irst"),
	spec!("bl", "ast"),
	spec!("bm", "odified"),
	spec!("bn", "ext"),
	spec!("bo", "tright"),
	spec!("bp", "revious"),
	spec!("br", "ewind"),
	spec!("brea", "k"),
	spec!("breaka", "dd"),
	spec!("breakd", "el"),
	spec!("breakl", "ist"),
	spec!("bro", "wse"),
	spec!("bufdo", ""),
	spec!("buffers", ""),
	spec!("bun", "load"),
	spec!("bw", "ipeout"),
	spec!("c", "hange"),
	spec!("cN", "ext"),
	spec!("cNf", "ile"),
	spec!("ca", "bbrev"),
	spec!("cabc", "lear"),
	spec!("cabo", "ve"),
	spec!("cad", "dbuffer"),
	spec!("cadde", "xpr"),
	spec!("caddf", "ile"),
	spec!("caf", "ter"),
	spec!("cal", "l"),
	spec!("cat", "ch"),
	spec!("cb", "uffer"),
	spec!("cbef", "ore"),
	spec!("cbel", "ow"),
	spec!("cbo", "ttom"),
	spec!("cc", ""),
	spec!("ccl", "ose"),
	spec!("cd", ""),
	spec!("cdo", ""),
	spec!("ce", "nter"),
	spec!("cex", "pr"),
	spec!("cf", "ile"),
	spec!("cfd", "o"),
	spec!("cfir", "st"),
	spec!("cg", "etfile"),
	spec!("cgetb", "uffer"),
	spec!("cgete", "xpr"),
	spec!("changes", ""),
	spec!("chd", "ir"),
	spec!("che", "ckpath"),
	spec!("checkh", "ealth"),
	spec!("checkt", "ime"),
	spec!("chi", "story"),
	spec!("cl", "ist"),
	spec!("cla", "st"),
	spec!("cle", "arjumps"),
	spec!("clo", "se"),
	spec!("cm", "ap"),
	spec!("cmapc", "lear"),
	spec!("cme", "nu"),
	spec!("cn", "ext"),
	spec!("cnew", "er"),
	spec!("cnf", "ile"),
	spec!("cno", "remap"),
	spec!("cnorea", "bbrev"),
	spec!("cnoreme", "nu"),
	spec!("co", "py", lines::parse_copy),
	spec!("col", "der"),
	spec!("colo", "rscheme"),
	spec!("com", "mand"),
	spec!("comc", "lear"),
	spec!("comp", "iler"),
	spec!("con", "tinue"),
	spec!("conf", "irm"),
	spec!("cons", "t"),
	spec!("cope", "n"),
	spec!("cp", "revious"),
	spec!("cpf", "ile"),
	spec!("cq", "uit"),
	spec!("cr", "ewind"),
	spec!("cs", "cope"),
	spec!("cst", "ag"),
	spec!("cu", "nmap"),
	spec!("cuna", "bbrev"),
	spec!("cunme", "nu"),
	spec!("cw", "indow"),
	spec!("d", "elete", lines::parse_delete),
	spec!("deb", "ug"),
	spec!("debugg", "reedy"),
	spec!("delc", "ommand"),
	spec!("delf", "unction"),
	spec!("delm", "arks"),
	spec!("di", "splay"),
	spec!("dif", "fupdate"),
	spec!("diffg", "et"),
	spec!("diffo", "ff"),
	spec!("diffp", "atch"),
	spec!("diffpu", "t"),
	spec!("diffs", "plit"),
	spec!("diffthis", ""),
	spec!("dig", "raphs"),
	spec!("dj", "ump"),
	spec!("dl", ""),
	spec!("dli", "st"),
	spec!("do", "autocmd"),
	spec!("doautoa", "ll"),
	spec!("dr", "op"),
	spec!("ds", "earch"),
	spec!("dsp", "lit"),
	spec!("e", "dit"),
	spec!("ea", "rlier"),
	spec!("ec", "ho"),
	spec!("echoe", "rr"),
	spec!("echoh", "l"),
	spec!("echom", "sg"),
	spec!("echon", ""),
	spec!("el", "se"),
	spec!("elsei", "f"),
	spec!("em", "enu"),
	spec!("en", "dif"),
	spec!("endf", "unction"),
	spec!("endfo", "r"),
	spec!("endt", "ry"),
	spec!("endw", "hile"),
	spec!("ene", "w"),
	spec!("ev", "al"),
	spec!("ex", ""),
	spec!("exe", "cute"),
	spec!("exi", "t", file::parse_write_quit),
	spec!("Ex", "plore"),
	spec!("exu", "sage"),
	spec!("f", "ile"),
	spec!("files", ""),
	spec!("filet", "ype"),
	spec!("filt", "er"),
	spec!("fin", "d"),
	spec!("fina", "lly"),
	spec!("fini", "sh"),
	spec!("fir", "st"),
	spec!("fo", "ld"),
	spec!("foldc", "lose"),
	spec!("foldd", "oopen"),
	spec!("folddoc", "losed"),
	spec!("foldo", "pen"),
	spec!("for", ""),
	spec!("fu", "nction"),
	spec!("g", "lobal"),
	spec!("go", "to"),
	spec!("gr", "ep"),
	spec!("grepa", "dd"),
	spec!("gu", "i"),
	spec!("gv", "im"),
	spec!("h", "elp"),
	spec!("ha", "rdcopy"),
	spec!("helpc", "lose"),
	spec!("helpg", "rep"),
	spec!("helpt", "ags"),
	spec!("hi", "ghlight"),
	spec!("hid", "e"),
	spec!("his", "tory"),
	spec!("i", "nsert"),
	spec!("ia", "bbrev"),
	spec!("iabc", "lear"),
	spec!("if", ""),
	spec!("ij", "ump"),
	spec!("il", "ist"),
	spec!("im", "ap"),
	spec!("imapc", "lear"),
	spec!("ime", "nu"),
	spec!("ino", "remap"),
	spec!("inorea", "bbrev"),
	spec!("inoreme", "nu"),
	spec!("int", "ro"),
	spec!("is", "earch"),
	spec!("isp", "lit"),
	spec!("iu", "nmap"),
	spec!("iuna", "bbrev"),
	spec!("iunme", "nu"),
	spec!("j", "oin"),
	spec!("ju", "mps"),
	spec!("k", ""),
	spec!("kee", "pmarks"),
	spec!("keepa", "lt"),
	spec!("keepj", "umps"),
	spec!("keepp", "atterns"),
	spec!("l", "ist", lines::parse_print_text),
	spec!("lN", "ext"),
	spec!("lNf", "ile"),
	spec!("la", "st"),
	spec!("lab", "ove"),
	spec!("lad", "dexpr"),
	spec!("laddb", "uffer"),
	spec!("laddf", "ile"),
	spec!("laf", "ter"),
	spec!("lan", "guage"),
	spec!("lat", "er"),
	spec!("lb", "uffer"),
	spec!("lbef", "ore"),
	spec!("lbel", "ow"),
	spec!("lbo", "ttom"),
	spec!("lc", "d"),
	spec!("lch", "dir"),
	spec!("lcl", "ose"),
	spec!("lcs", "cope"),
	spec!("ld", "o"),
	spec!("le", "ft"),
	spec!("lefta", "bove"),
	spec!("let", ""),
	spec!("lex", "pr"),
	spec!("lf", "ile"),
	spec!("lfd", "o"),
	spec!("lfir", "st"),
	spec!("lg", "etfile"),
	spec!("lgetb", "uffer"),
	spec!("lgete", "xpr"),
	spec!("lgr", "ep"),
	spec!("lgrepa", "dd"),
	spec!("lh", "elpgrep"),
	spec!("lhi", "story"),
	spec!("ll", ""),
	spec!("lla", "st"),
	spec!("lli", "st"),
	spec!("lm", "ap"),
	spec!("lmak", "e"),
	spec!("lmapc", "lear"),
	spec!("ln", "oremap"),
	spec!("lne", "xt"),
	spec!("lnew", "er"),
	spec!("lnf", "ile"),
	spec!("lo", "adview"),
	spec!("loadk", "eymap"),
	spec!("loc", "kmarks"),
	spec!("lockv", "ar"),
	spec!("lol", "der"),
	spec!("lope", "n"),
	spec!("lp", "revious"),
	spec!("lpf", "ile"),
	spec!("lr", "ewind"),
	spec!("ls", ""),
	spec!("lt", "ag"),
	spec!("lu", "nmap"),
	spec!("lua", ""),
	spec!("luad", "o"),
	spec!("luaf", "ile"),
	spec!("lv", "imgrep"),
	spec!("lvimgrepa", "dd"),
	spec!("lw", "indow"),
	spec!("m", "ove", lines::parse_move),
	spec!("ma", "rk"),
	spec!("mak", "e"),
	spec!("map", ""),
	spec!("mapc", "lear"),
	spec!("marks", ""),
	spec!("mat", "ch"),
	spec!("me", "nu"),
	spec!("menut", "ranslate"),
	spec!("mes", "sages"),
	spec!("mk", "exrc"),
	spec!("mks", "ession"),
	spec!("mksp", "ell"),
	spec!("mkv", "imrc"),
	spec!("mkvie", "w"),
	spec!("mod", "e"),
	spec!("n", "ext"),
	spec!("new", ""),
	spec!("nm", "ap"),
	spec!("nmapc", "lear"),
	spec!("nme", "nu"),
	spec!("nn", "oremap"),
	spec!("nnoreme", "nu"),
	spec!("no", "remap"),
	spec!("noa", "utocmd"),
	spec!("noh", "lsearch", options::parse_nohl),
	spec!("norea", "bbrev"),
	spec!("noreme", "nu"),
	spec!("norm", "al"),
	spec!("nos", "wapfile"),
	spec!("nu", "mber", lines::parse_print_numbered),
	spec!("nun", "map"),
	spec!("nunme", "nu"),
	spec!("ol", "dfiles"),
	spec!("om", "ap"),
	spec!("omapc", "lear"),
	spec!("ome", "nu"),
	spec!("on", "ly", session::parse_only),
	spec!("ono", "remap"),
	spec!("onoreme", "nu"),
	spec!("opt", "ions"),
	spec!("ou", "nmap"),
	spec!("ounme", "nu"),
	spec!("ow", "nsyntax"),
	spec!("p", "rint", lines::parse_print_text),
	spec!("pa", "ckadd"),
	spec!("packl", "oadall"),
	spec!("pc", "lose"),
	spec!("pe", "rl"),
	spec!("ped", "it"),
	spec!("perld", "o"),
	spec!("perlf", "ile"),
	spec!("po", "p"),
	spec!("popu", "p"),
	spec!("pp", "op"),
	spec!("pre", "serve"),
	spec!("prev", "ious"),
	spec!("prof", "ile"),
	spec!("profd", "el"),
	spec!("ps", "earch"),
	spec!("pt", "ag"),
	spec!("ptN", "ext"),
	spec!("ptf", "irst"),
	spec!("ptj", "ump"),
	spec!("ptl", "ast"),
	spec!("ptn", "ext"),
	spec!("ptp", "revious"),
	spec!("ptr", "ewind"),
	spec!("pts", "elect"),
	spec!("pu", "t"),
	spec!("pw", "d"),
	spec!("py", "thon"),
	spec!("py3", ""),
	spec!("py3d", "o"),
	spec!("py3f", "ile"),
	spec!("pyd", "o"),
	spec!("pyf", "ile"),
	spec!("python3", ""),
	spec!("pythonx", ""),
	spec!("pyx", ""),
	spec!("pyxd", "o"),
	spec!("pyxf", "ile"),
	spec!("q", "uit", session::parse_quit),
	spec!("qa", "ll", session::parse_quit_all),
	spec!("quita", "ll", session::parse_quit_all),
	spec!("r", "ead", file::parse_read),
	spec!("rec", "over"),
	spec!("red", "o", history::parse_redo),
	spec!("redi", "r"),
	spec!("redr", "aw"),
	spec!("redraws", "tatus"),
	spec!("redrawt", "abline"),
	spec!("reg", "isters"),
	spec!("res", "ize"),
	spec!("ret", "ab"),
	spec!("retu", "rn"),
	spec!("rew", "ind"),
	spec!("ri", "ght"),
	spec!("rightb", "elow"),
	spec!("rsh", "ada"),
	spec!("ru", "ntime"),
	spec!("rub", "y"),
	spec!("rubyd", "o"),
	spec!("rubyf", "ile"),
	spec!("rund", "o"),
	spec!("s", "ubstitute"),
	spec!("sN", "ext"),
	spec!("sa", "rgument"),
	spec!("sal", "l"),
	spec!("san", "dbox"),
	spec!("sav", "eas"),
	spec!("sb", "uffer"),
	spec!("sbN", "ext"),
	spec!("sba", "ll"),
	spec!("sbf", "irst"),
	spec!("sbl", "ast"),
	spec!("sbm", "odified"),
	spec!("sbn", "ext"),
	spec!("sbp", "revious"),
	spec!("sbr", "ewind"),
	spec!("scr", "iptnames"),
	spec!("scripte", "ncoding"),
	spec!("scs", "cope"),
	spec!("se", "t", options::parse_set),
	spec!("setf", "iletype"),
	spec!("setg", "lobal"),
	spec!("setl", "ocal"),
	spec!("sf", "ind"),
	spec!("sfir", "st"),
	spec!("sh", "ell"),
	spec!("sig", "n"),
	spec!("sil", "ent"),
	spec!("sl", "eep"),
	spec!("sla", "st"),
	spec!("sm", "agic"),
	spec!("smap", ""),
	spec!("smapc", "lear"),
	spec!("sme", "nu"),
	spec!("smile", ""),
	spec!("sn", "ext"),
	spec!("sno", "magic"),
	spec!("snor", "emap"),
	spec!("snoreme", "nu"),
	spec!("so", "urce"),
	spec!("sor", "t"),
	spec!("sp", "lit"),
	spec!("spe", "llgood"),
	spec!("spelld", "ump"),
	spec!("spelli", "nfo"),
	spec!("spellr", "epall"),
	spec!("spellra", "re"),
	spec!("spellu", "ndo"),
	spec!("spellw", "rong"),
	spec!("spr", "evious"),
	spec!("sre", "wind"),
	spec!("st", "op"),
	spec!("sta", "g"),
	spec!("star", "tinsert"),
	spec!("startg", "replace"),
	spec!("startr", "eplace"),
	spec!("stj", "ump"),
	spec!("stopi", "nsert"),
	spec!("sts", "elect"),
	spec!("sun", "hide"),
	spec!("sunm", "ap"),
	spec!("sunme", "nu"),
	spec!("sus", "pend"),
	spec!("sv", "iew"),
	spec!("sw", "apname"),
	spec!("sy", "ntax"),
	spec!("sync", "bind"),
	spec!("synti", "me"),
	spec!("t", "", lines::parse_copy),
	spec!("tN", "ext"),
	spec!("ta", "g"),
	spec!("tab", ""),
	spec!("tabN", "ext"),
	spec!("tabc", "lose"),
	spec!("tabdo", ""),
	spec!("tabe", "dit"),
	spec!("tabf", "ind"),
	spec!("tabfir", "st"),
	spec!("tabl", "ast"),
	spec!("tabm", "ove"),
	spec!("tabn", "ext"),
	spec!("tabnew", ""),
	spec!("tabo", "nly"),
	spec!("tabp", "revious"),
	spec!("tabr", "ewind"),
	spec!("tabs", ""),
	spec!("tags", ""),
	spec!("tc", "d"),
	spec!("tch", "dir"),
	spec!("te", "rminal"),
	spec!("tf", "irst"),
	spec!("th", "row"),
	spec!("tj", "ump"),
	spec!("tl", "ast"),
	spec!("tm", "enu"),
	spec!("tma", "p"),
	spec!("tmapc", "lear"),
	spec!("tn", "ext"),
	spec!("tno", "remap"),
	spec!("to", "pleft"),
	spec!("tp", "revious"),
	spec!("tr", "ewind"),
	spec!("try", ""),
	spec!("ts", "elect"),
	spec!("tu", "nmenu"),
	spec!("tunma", "p"),
	spec!("u", "ndo", history::parse_undo),
	spec!("una", "bbreviate"),
	spec!("undoj", "oin"),
	spec!("undol", "ist"),
	spec!("unh", "ide"),
	spec!("unl", "et"),
	spec!("unlo", "ckvar"),
	spec!("unm", "ap"),
	spec!("unme", "nu"),
	spec!("uns", "ilent"),
	spec!("up", "date", file::parse_write),
	spec!("v", "global"),
	spec!("ve", "rsion"),
	spec!("verb", "ose"),
	spec!("vert", "ical"),
	spec!("vi", "sual"),
	spec!("vie", "w"),
	spec!("vim", "grep"),
	spec!("vimgrepa", "dd"),
	spec!("viu", "sage"),
	spec!("vm", "ap"),
	spec!("vmapc", "lear"),
	spec!("vme", "nu"),
	spec!("vn", "oremap"),
	spec!("vne", "w"),
	spec!("vnoreme", "nu"),
	spec!("vs", "plit"),
	spec!("vu", "nmap"),
	spec!("vunme", "nu"),
	spec!("w", "rite", file::parse_write),
	spec!("wN", "ext"),
	spec!("wa", "ll", file::parse_write_all),
	spec!("wh", "ile"),
	spec!("wi", "nsize"),
	spec!("winc", "md"),
	spec!("windo", ""),
	spec!("winp", "os"),
	spec!("wn", "ext"),
	spec!("wp", "revious"),
	spec!("wq", "", file::parse_write_quit),
	spec!("wqa", "ll", file::parse_write_quit_all),
	spec!("wsh", "ada"),
	spec!("wu", "ndo"),
	spec!("x", "it", file::parse_write_quit),
	spec!("xa", "ll", file::parse_write_quit_all),
	spec!("xm", "ap"),
	spec!("xmapc", "lear"),
	spec!("xme", "nu"),
	spec!("xn", "oremap"),
	spec!("xnoreme", "nu"),
	spec!("xu", "nmap"),
	spec!("xunme", "nu"),
	spec!("y", "ank", lines::parse_yank),
	spec!("z", ""),
	spec!("~", ""),
];
