use super::token::{Token, tokenize};

/// Ordered sequence of tokens the chain is learned from.
///
/// A `Corpus` may be empty; the chain builder is the one refusing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
	tokens: Vec<Token>,
}

impl Corpus {
	/// Tokenizes raw text into a corpus.
	pub fn from_text(text: &str) -> Self {
		Self { tokens: tokenize(text) }
	}

	/// Wraps already tokenized input.
	///
	/// Tokens are taken as given; callers feeding hand-made tokens are
	/// responsible for keeping them non-empty and whitespace-free.
	pub fn from_tokens(tokens: Vec<Token>) -> Self {
		Self { tokens }
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the first `k` tokens, or `None` if the corpus is shorter.
	///
	/// This is the default starting prefix when none is supplied.
	pub fn head(&self, k: usize) -> Option<&[Token]> {
		self.tokens.get(..k)
	}

	/// Checks whether `sequence` occurs as a contiguous run of tokens.
	///
	/// The empty sequence is contained in every corpus.
	pub fn contains_sequence<T: AsRef<str>>(&self, sequence: &[T]) -> bool {
		if sequence.is_empty() {
			return true;
		}
		self.tokens.windows(sequence.len()).any(|window| {
			window
				.iter()
				.zip(sequence)
				.all(|(token, wanted)| token.as_str() == wanted.as_ref())
		})
	}
}
