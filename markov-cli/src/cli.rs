use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};

use crate::params::{CliError, Flags};

/// Value-taking flags, in the order they are validated by default.
const VALUE_FLAGS: [FlagId; 3] = [FlagId::Words, FlagId::Prefix, FlagId::PrefixLen];

/// Command-line arguments of `markovchain`.
///
/// Numbers are taken as raw strings so that validation can report the
/// tool's own messages instead of clap's.
#[derive(Parser, Debug)]
#[command(
	name = "markovchain",
	about = "Markov Chain text generator.",
	long_about = "Markov Chain text generator.\n\nReads a text from standard input, learns which words follow each run of \
	              words, and prints a random continuation.",
	disable_version_flag = true
)]
pub struct Cli {
	/// Number of maximum words (default=100) (max=10000)
	#[arg(short = 'w', value_name = "N", allow_hyphen_values = true)]
	words: Option<String>,

	/// Starting prefix (default=start of the text)
	#[arg(short = 'p', value_name = "S", allow_hyphen_values = true)]
	prefix: Option<String>,

	/// Prefix length (default=2) (max=5)
	#[arg(short = 'l', value_name = "N", allow_hyphen_values = true)]
	prefix_len: Option<String>,

	/// Increase log verbosity (-v, -vv, -vvv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	pub verbose: u8,

	/// Unrecognised arguments, in command-line order; reported and ignored
	#[arg(skip)]
	ignored: Vec<String>,

	/// Value-taking flags in the order they appeared
	#[arg(skip)]
	order: Vec<FlagId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagId {
	Words,
	Prefix,
	PrefixLen,
}

impl FlagId {
	/// Argument id clap derives from the field name.
	fn id(self) -> &'static str {
		match self {
			FlagId::Words => "words",
			FlagId::Prefix => "prefix",
			FlagId::PrefixLen => "prefix_len",
		}
	}
}

impl Cli {
	/// Parses `args`, setting aside every argument the command does not know.
	///
	/// Unknown arguments, dashed or not, never abort parsing: they are kept
	/// in `ignored` and reported as a warning later. Known flags keep their
	/// clap handling, including errors for repeated flags or missing values.
	pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString>,
	{
		let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
		let mut command = Self::command();
		command.build();
		let (known, ignored) = split_unknown(&command, &args);

		let matches = command.try_get_matches_from(known)?;
		let mut cli = Self::from_arg_matches(&matches)?;

		let mut order: Vec<(usize, FlagId)> = VALUE_FLAGS
			.into_iter()
			.filter_map(|flag| matches.index_of(flag.id()).map(|index| (index, flag)))
			.collect();
		order.sort_by_key(|(index, _)| *index);

		cli.order = order.into_iter().map(|(_, flag)| flag).collect();
		cli.ignored = ignored;
		Ok(cli)
	}

	/// Validates the raw flag values.
	///
	/// Flags are checked in command-line order, so the first bad flag typed
	/// is the one reported. Only checks what can be checked without the
	/// input text.
	pub fn flags(&self) -> Result<Flags, CliError> {
		let mut order = self.order.clone();
		for flag in VALUE_FLAGS {
			if !order.contains(&flag) {
				order.push(flag);
			}
		}

		let mut flags = Flags {
			ignored: self.ignored.clone(),
			..Flags::default()
		};
		for flag in order {
			match flag {
				FlagId::Words => {
					if let Some(s) = &self.words {
						flags.max_words = Some(parse_positive(s).ok_or(CliError::InvalidWordCount)?);
					}
				}
				FlagId::Prefix => {
					if let Some(s) = &self.prefix {
						let tokens = markov_core::tokenize(s);
						if tokens.is_empty() {
							return Err(CliError::EmptyPrefix);
						}
						flags.prefix = Some(tokens);
					}
				}
				FlagId::PrefixLen => {
					if let Some(s) = &self.prefix_len {
						flags.prefix_len = Some(parse_positive(s).ok_or(CliError::InvalidPrefixLength)?);
					}
				}
			}
		}
		Ok(flags)
	}
}

/// Separates arguments `command` recognises from the rest.
///
/// The program name is kept. A recognised value-taking flag also keeps the
/// argument after it, whatever it looks like, so `-w -x` reaches validation
/// as a bad number rather than as an unknown `-x`.
fn split_unknown(command: &Command, args: &[OsString]) -> (Vec<OsString>, Vec<String>) {
	let mut known = Vec::new();
	let mut ignored = Vec::new();

	let mut args = args.iter();
	if let Some(program) = args.next() {
		known.push(program.clone());
	}
	while let Some(arg) = args.next() {
		let text = arg.to_string_lossy();
		match classify(command, &text) {
			None => ignored.push(text.into_owned()),
			Some(needs_value) => {
				known.push(arg.clone());
				if needs_value {
					if let Some(value) = args.next() {
						known.push(value.clone());
					}
				}
			}
		}
	}
	(known, ignored)
}

/// Looks `arg` up among the flags of `command`.
///
/// Returns `None` for anything that is not a known flag (bare words
/// included), otherwise whether the next argument is the flag's value.
fn classify(command: &Command, arg: &str) -> Option<bool> {
	if let Some(long) = arg.strip_prefix("--") {
		let (name, inline_value) = match long.split_once('=') {
			Some((name, _)) => (name, true),
			None => (long, false),
		};
		let found = command.get_arguments().find(|a| a.get_long() == Some(name))?;
		return Some(takes_value(found) && !inline_value);
	}

	let shorts = arg.strip_prefix('-').filter(|s| !s.is_empty())?;
	let mut chars = shorts.chars();
	while let Some(c) = chars.next() {
		let found = command.get_arguments().find(|a| a.get_short() == Some(c))?;
		if takes_value(found) {
			// `-w5` carries its value inline
			return Some(chars.as_str().is_empty());
		}
	}
	Some(false)
}

fn takes_value(arg: &Arg) -> bool {
	arg.get_action().takes_values()
}

/// Parses a strictly positive decimal integer made of ASCII digits only.
///
/// Signs, spaces and zero are rejected. Values too large for `usize`
/// saturate, since every bound applied later is far below it.
fn parse_positive(s: &str) -> Option<usize> {
	if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	if s.bytes().all(|b| b == b'0') {
		return None;
	}
	Some(s.parse().unwrap_or(usize::MAX))
}
