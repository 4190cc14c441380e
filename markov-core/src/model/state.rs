use rand::Rng;

use super::token::Token;

/// What may follow a prefix: a real token, or the end of the corpus.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Successor {
	Token(Token),
	/// Sentinel recorded after the final window of the corpus.
	EndOfCorpus,
}

/// Represents a state in the word chain.
///
/// A `State` corresponds to one k-token prefix, the key it is stored under
/// in the chain, and holds every successor observed after it, in corpus order.
///
/// Conceptually, this is a node in a Markov chain whose outgoing edges are
/// weighted by repetition: a successor seen three times appears three times.
///
/// ## Responsibilities:
/// - Accumulate successors during learning
/// - Draw the next successor uniformly over the multiset
///
/// ## Invariants
/// - All successors were observed after the same prefix
/// - A state stored in a chain holds at least one successor
#[derive(Clone, Debug, Default)]
pub struct State {
	/// Observed successors, duplicates retained.
	/// Example: [Token("sat"), Token("sat"), EndOfCorpus]
	successors: Vec<Successor>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self { successors: Vec::new() }
	}

	/// Records one more occurrence of `successor`.
	pub fn add_successor(&mut self, successor: Successor) {
		self.successors.push(successor);
	}

	/// Returns the successor multiset.
	pub fn successors(&self) -> &[Successor] {
		&self.successors
	}

	/// Draws one successor.
	///
	/// Every entry of the multiset is equally likely, so a successor's
	/// probability is proportional to how often it was observed.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&Successor> {
		if self.successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.successors.len());
		self.successors.get(index)
	}
}
