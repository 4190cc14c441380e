use std::fmt;

use log::info;
use markov_core::{Corpus, MarkovError, Token};
use thiserror::Error;

/// Default number of words printed, prefix included.
pub const DEFAULT_MAX_WORDS: usize = 100;
/// Upper bound on the number of words; larger requests are clamped.
pub const MAX_WORDS: usize = 10_000;
/// Default prefix order.
pub const DEFAULT_PREFIX_LEN: usize = 2;
/// Upper bound on the prefix order; larger requests are clamped.
pub const MAX_PREFIX_LEN: usize = 5;

/// Errors reported to the user before exiting with status 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
	#[error("invalid number is provided for flag -w. The number should be integer, positive and not larger than 10000.")]
	InvalidWordCount,

	#[error("invalid number is provided for flag -l. The number should be integer and positive.")]
	InvalidPrefixLength,

	#[error("empty string is set for -p.")]
	EmptyPrefix,

	#[error("no input text.")]
	NoInput,

	#[error("no words in input.")]
	NoWords,

	#[error("the text does not contain the specified prefix.")]
	PrefixNotFound,

	#[error("prefix length exceeds the number of words in text.")]
	PrefixLengthExceedsText,

	#[error("starting prefix exceeds the maximum number of words.")]
	PrefixExceedsMaxWords,

	#[error("prefix length exceeds the starting prefix - can't generate new words.")]
	PrefixLengthExceedsPrefix,

	#[error("generation failed")]
	Generation(#[from] MarkovError),
}

/// Non-fatal adjustments, shown to the user and then carried on with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
	WordCountClamped,
	PrefixLengthClamped,
	IgnoredArgs(Vec<String>),
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Warning::WordCountClamped => {
				write!(f, "maximum word number is too large; it is now set to {MAX_WORDS}.")
			}
			Warning::PrefixLengthClamped => {
				write!(f, "prefix length is too large; it is now set to {MAX_PREFIX_LEN}.")
			}
			Warning::IgnoredArgs(args) => {
				write!(f, "These args are incorrect and are ignored - {}", args.join(", "))
			}
		}
	}
}

/// Flag values that passed syntactic validation, before defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
	pub max_words: Option<usize>,
	pub prefix: Option<Vec<Token>>,
	pub prefix_len: Option<usize>,
	pub ignored: Vec<String>,
}

/// Fully resolved generation parameters, ready for the engine.
///
/// # Invariants
/// - `1 <= prefix_len <= MAX_PREFIX_LEN` and `prefix_len <= corpus length`
/// - `1 <= max_words <= MAX_WORDS`
/// - `prefix_len <= start_prefix.len() <= max_words`
/// - `start_prefix` occurs contiguously in the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
	pub max_words: usize,
	pub prefix_len: usize,
	pub start_prefix: Vec<Token>,
}

impl Flags {
	/// Applies defaults and bounds against the input text.
	///
	/// Checks run in a fixed order and the first failure wins. Warnings
	/// raised before a failure are still pushed to `warnings`, so callers
	/// can show them alongside the error.
	pub fn resolve(self, corpus: &Corpus, warnings: &mut Vec<Warning>) -> Result<GenerationParams, CliError> {
		if corpus.is_empty() {
			return Err(CliError::NoWords);
		}

		if let Some(prefix) = &self.prefix {
			if !corpus.contains_sequence(prefix.as_slice()) {
				return Err(CliError::PrefixNotFound);
			}
		}

		let max_words = match self.max_words {
			None => DEFAULT_MAX_WORDS,
			Some(n) if n > MAX_WORDS => {
				warnings.push(Warning::WordCountClamped);
				MAX_WORDS
			}
			Some(n) => n,
		};

		let prefix_len = match self.prefix_len {
			None => DEFAULT_PREFIX_LEN,
			Some(n) if n > MAX_PREFIX_LEN => {
				warnings.push(Warning::PrefixLengthClamped);
				MAX_PREFIX_LEN
			}
			Some(n) => n,
		};
		if prefix_len > corpus.len() {
			return Err(CliError::PrefixLengthExceedsText);
		}

		let start_prefix = match self.prefix {
			Some(prefix) => prefix,
			// prefix_len <= corpus.len() was checked above
			None => corpus.head(prefix_len).ok_or(CliError::PrefixLengthExceedsText)?.to_vec(),
		};

		if max_words < start_prefix.len() {
			return Err(CliError::PrefixExceedsMaxWords);
		}
		if prefix_len > start_prefix.len() {
			return Err(CliError::PrefixLengthExceedsPrefix);
		}

		if !self.ignored.is_empty() {
			warnings.push(Warning::IgnoredArgs(self.ignored));
		}

		info!(
			"resolved parameters: max_words={}, prefix_len={}, prefix='{}'",
			max_words,
			prefix_len,
			start_prefix.join(" ")
		);
		Ok(GenerationParams { max_words, prefix_len, start_prefix })
	}
}
