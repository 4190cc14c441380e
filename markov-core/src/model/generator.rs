use std::collections::VecDeque;

use log::trace;
use rand::Rng;

use super::chain::MarkovChain;
use super::prefix_key::PrefixKey;
use super::state::Successor;
use super::token::Token;
use crate::error::{MarkovError, Result};

/// Samples bounded continuations from a borrowed chain.
///
/// # Responsibilities
/// - Slide a k-token window over the output produced so far
/// - Draw each next token from the window's successor multiset
/// - Stop on the end-of-corpus sentinel or when the budget is spent
///
/// The chain is only read; many generators may share one chain.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	chain: &'a MarkovChain,
}

impl<'a> Generator<'a> {
	pub fn new(chain: &'a MarkovChain) -> Self {
		Self { chain }
	}

	/// Generates from `start` using the thread-local random generator.
	///
	/// See [`Generator::generate_from`] for the full contract.
	pub fn generate<T: AsRef<str>>(&self, start: &[T], max_tokens: usize) -> Result<Vec<Token>> {
		self.generate_with_rng(start, max_tokens, &mut rand::rng())
	}

	/// Generates from `start`, which is both the initial window and the
	/// beginning of the output.
	pub fn generate_with_rng<T, R>(&self, start: &[T], max_tokens: usize, rng: &mut R) -> Result<Vec<Token>>
	where
		T: AsRef<str>,
		R: Rng,
	{
		let start_output: Vec<Token> = start.iter().map(|t| t.as_ref().to_owned()).collect();
		self.generate_from(start, start_output, max_tokens, rng)
	}

	/// Runs the sampling loop.
	///
	/// # Parameters
	/// - `start_window`: tokens whose trailing `k` form the first lookup key.
	/// - `start_output`: tokens the output begins with.
	/// - `max_tokens`: bound on the total output length, `start_output` included.
	/// - `rng`: uniform random source.
	///
	/// # Returns
	/// `start_output` followed by every emitted token. The sentinel is never
	/// part of the output.
	///
	/// # Errors
	/// - `PreconditionViolation` if `start_window` is shorter than the chain
	///   order or `max_tokens < start_output.len()`.
	/// - `LookupMiss` if a window key is not in the table. This is never
	///   treated as a natural end of generation.
	pub fn generate_from<T, R>(
		&self,
		start_window: &[T],
		start_output: Vec<Token>,
		max_tokens: usize,
		rng: &mut R,
	) -> Result<Vec<Token>>
	where
		T: AsRef<str>,
		R: Rng,
	{
		let order = self.chain.order();
		if start_window.len() < order {
			return Err(MarkovError::precondition(format!(
				"start window has {} tokens, prefix order is {}",
				start_window.len(),
				order
			)));
		}
		if max_tokens < start_output.len() {
			return Err(MarkovError::precondition(format!(
				"starting prefix has {} tokens, budget is {}",
				start_output.len(),
				max_tokens
			)));
		}

		let mut window: VecDeque<Token> = start_window[start_window.len() - order..]
			.iter()
			.map(|t| t.as_ref().to_owned())
			.collect();
		let mut output = start_output;

		while output.len() < max_tokens {
			let key = PrefixKey::from_window(window.make_contiguous());
			let state = self
				.chain
				.state(&key)
				.ok_or_else(|| MarkovError::LookupMiss { key: key.clone() })?;

			// A stored state is never empty, but a miss is still a miss.
			let next = state.predict(rng).ok_or(MarkovError::LookupMiss { key })?;
			match next {
				Successor::EndOfCorpus => {
					trace!("end of corpus reached after {} tokens", output.len());
					return Ok(output);
				}
				Successor::Token(token) => {
					output.push(token.clone());
					window.pop_front();
					window.push_back(token.clone());
				}
			}
		}

		trace!("token budget of {} exhausted", max_tokens);
		Ok(output)
	}
}
