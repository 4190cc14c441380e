use std::fmt;

/// Separator placed between the tokens of a key.
///
/// Tokens never contain whitespace, so a single space cannot make two
/// different windows collide.
const SEPARATOR: &str = " ";

/// Canonical lookup key for a window of `k` consecutive tokens.
///
/// ## Invariants
/// - Two windows produce the same key iff they are token-wise identical
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixKey(String);

impl PrefixKey {
	/// Builds the key of a whole window.
	pub fn from_window<T: AsRef<str>>(window: &[T]) -> Self {
		let mut key = String::new();
		for (i, token) in window.iter().enumerate() {
			if i > 0 {
				key.push_str(SEPARATOR);
			}
			key.push_str(token.as_ref());
		}
		Self(key)
	}

	/// Builds the key of the trailing `k` tokens of `tokens`.
	///
	/// Returns `None` if fewer than `k` tokens are available.
	pub fn tail<T: AsRef<str>>(tokens: &[T], k: usize) -> Option<Self> {
		let start = tokens.len().checked_sub(k)?;
		Some(Self::from_window(&tokens[start..]))
	}

	/// Returns the encoded key.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PrefixKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_tokens_with_a_space() {
		let key = PrefixKey::from_window(&["the", "cat"]);
		assert_eq!(key.as_str(), "the cat");
		assert_eq!(key.to_string(), "the cat");
	}

	#[test]
	fn distinct_windows_never_collide() {
		// Concatenation without a separator would make these equal.
		let a = PrefixKey::from_window(&["ab", "c"]);
		let b = PrefixKey::from_window(&["a", "bc"]);
		assert_ne!(a, b);
	}

	#[test]
	fn tail_takes_the_last_tokens() {
		let tokens = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
		assert_eq!(PrefixKey::tail(&tokens, 2), Some(PrefixKey::from_window(&["b", "c"])));
		assert_eq!(PrefixKey::tail(&tokens, 3), Some(PrefixKey::from_window(&tokens)));
		assert_eq!(PrefixKey::tail(&tokens, 4), None);
	}
}
