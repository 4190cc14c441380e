use thiserror::Error;

use crate::model::prefix_key::PrefixKey;

/// Convenient result type used throughout the crate.
pub type Result<T, E = MarkovError> = std::result::Result<T, E>;

/// Failures raised by chain construction or generation.
///
/// Both variants mean the caller broke the contract of the engine: nothing
/// here is transient, so nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkovError {
	/// An input constraint was not met (empty corpus, order out of range,
	/// start window shorter than the order, budget below the prefix length).
	#[error("precondition violated: {0}")]
	PreconditionViolation(String),

	/// The current generation window has no entry in the transition table.
	#[error("no transition recorded for prefix '{key}'")]
	LookupMiss {
		/// Key of the window that was looked up.
		key: PrefixKey,
	},
}

impl MarkovError {
	pub(crate) fn precondition(msg: impl Into<String>) -> Self {
		Self::PreconditionViolation(msg.into())
	}
}
