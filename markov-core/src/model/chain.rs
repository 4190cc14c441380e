use std::collections::HashMap;

use log::debug;

use super::corpus::Corpus;
use super::prefix_key::PrefixKey;
use super::state::{State, Successor};
use super::token::Token;
use crate::error::{MarkovError, Result};

/// Represents a word-level Markov chain of fixed order `k`.
///
/// The `MarkovChain` stores one state per distinct k-token window of the
/// corpus and the successors observed after it.
///
/// # Responsibilities
/// - Build the transition table from a corpus in a single pass
/// - Expose read-only lookups for the generator
///
/// # Invariants
/// - `order` is always >= 1
/// - Each state in `states` corresponds to a unique k-token prefix
/// - Every sliding window of the corpus contributed exactly one successor,
///   so the successor counts sum to `len(corpus) - order + 1`
/// - Exactly one successor in the whole table is `EndOfCorpus`
#[derive(Clone, Debug)]
pub struct MarkovChain {
	/// The prefix order (number of tokens in a key)
	order: usize,

	/// Mapping from a k-token prefix to its corresponding state
	states: HashMap<PrefixKey, State>,
}

impl MarkovChain {
	/// Builds the transition table of order `order` from `corpus`.
	///
	/// Every window `corpus[i..i+k)` but the last records the token that
	/// follows it; the last window records `EndOfCorpus`, so any walk that
	/// reaches it can terminate even if that window never recurs.
	///
	/// # Errors
	/// Returns `PreconditionViolation` if the corpus is empty, if
	/// `order == 0`, or if `order` exceeds the corpus length.
	pub fn build(corpus: &Corpus, order: usize) -> Result<Self> {
		if corpus.is_empty() {
			return Err(MarkovError::precondition("corpus is empty"));
		}
		if order == 0 {
			return Err(MarkovError::precondition("prefix order must be >= 1"));
		}
		if order > corpus.len() {
			return Err(MarkovError::precondition(format!(
				"prefix order {} exceeds corpus length {}",
				order,
				corpus.len()
			)));
		}

		let mut chain = Self { order, states: HashMap::new() };
		let tokens = corpus.tokens();

		for (i, window) in tokens.windows(order).enumerate() {
			let successor = match tokens.get(i + order) {
				Some(next) => Successor::Token(next.clone()),
				None => Successor::EndOfCorpus,
			};
			chain.add_transition(window, successor);
		}

		debug!(
			"built chain: order={}, keys={}, transitions={}",
			chain.order,
			chain.key_count(),
			chain.total_transitions()
		);
		Ok(chain)
	}

	/// Records `successor` after `window`, creating the state if needed.
	fn add_transition(&mut self, window: &[Token], successor: Successor) {
		let key = PrefixKey::from_window(window);
		self.states
			.entry(key)
			.or_insert_with(State::new)
			.add_successor(successor);
	}

	/// Returns the prefix order `k`.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the number of distinct prefixes.
	pub fn key_count(&self) -> usize {
		self.states.len()
	}

	/// Returns the sum of all successor multiset sizes.
	pub fn total_transitions(&self) -> usize {
		self.states.values().map(|state| state.successors().len()).sum()
	}

	/// Returns the state recorded for `key`, if any.
	pub fn state(&self, key: &PrefixKey) -> Option<&State> {
		self.states.get(key)
	}

	/// Returns the successor multiset recorded for `key`, if any.
	pub fn successors(&self, key: &PrefixKey) -> Option<&[Successor]> {
		self.state(key).map(State::successors)
	}

	/// Checks whether the trailing `order` tokens of `tokens` form a known key.
	///
	/// This is the condition under which generation can start from `tokens`.
	pub fn contains_window<T: AsRef<str>>(&self, tokens: &[T]) -> bool {
		PrefixKey::tail(tokens, self.order).is_some_and(|key| self.states.contains_key(&key))
	}

	/// Iterates over all known prefixes, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &PrefixKey> {
		self.states.keys()
	}
}
