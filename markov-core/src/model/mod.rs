//! Building blocks of the Markov chain engine.
//!
//! - Tokens and the corpus they form (`token`, `corpus`)
//! - Canonical encoding of a k-token window (`prefix_key`)
//! - Per-prefix successor multisets (`state`)
//! - The transition table (`chain`)
//! - The sampling loop (`generator`)

/// Whitespace tokenization.
pub mod token;

/// Ordered token sequence learned from.
pub mod corpus;

/// Collision-free encoding of a window of tokens.
pub mod prefix_key;

/// A single table entry: one prefix and everything observed after it.
pub mod state;

/// Fixed-order transition table.
///
/// Built once from a corpus, read-only afterwards.
pub mod chain;

/// Bounded, frequency-weighted generation over a borrowed chain.
pub mod generator;
