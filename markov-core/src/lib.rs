//! Word-level Markov chain text generation library.
//!
//! This crate provides the engine behind the `markovchain` tool:
//! - Whitespace tokenization of a corpus
//! - A fixed-order transition table built from every sliding window
//! - Frequency-weighted sampling of continuations, bounded in length
//!
//! Argument parsing and user-facing reporting live in the CLI crate;
//! everything here is a pure function of its inputs plus a random source.

/// Error taxonomy shared by the builder and the generator.
pub mod error;

/// Corpus, transition table and generation logic.
pub mod model;

pub use error::{MarkovError, Result};
pub use model::chain::MarkovChain;
pub use model::corpus::Corpus;
pub use model::generator::Generator;
pub use model::prefix_key::PrefixKey;
pub use model::state::Successor;
pub use model::token::{Token, tokenize};
