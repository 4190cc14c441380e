/// The atomic unit of text: a run of non-whitespace characters.
///
/// Case and punctuation are kept as they appear in the input.
pub type Token = String;

/// Splits `text` on any Unicode whitespace.
///
/// Consecutive separators never produce empty tokens, so the result holds
/// only non-empty, whitespace-free tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
	text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_mixed_whitespace() {
		let tokens = tokenize("  the\tcat\n\nsat   on\r\nthe mat ");
		assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
	}

	#[test]
	fn keeps_case_and_punctuation() {
		let tokens = tokenize("Hello, World! hello");
		assert_eq!(tokens, vec!["Hello,", "World!", "hello"]);
	}

	#[test]
	fn blank_text_has_no_tokens() {
		assert!(tokenize("").is_empty());
		assert!(tokenize(" \n\t ").is_empty());
	}
}
