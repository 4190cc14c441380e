use std::io::{self, IsTerminal, Read};

/// Reads the whole input into a string.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub(crate) fn read_text<R: Read>(mut reader: R) -> io::Result<String> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Returns `true` if standard input is attached to a terminal.
///
/// In that case nothing was piped in and reading would block on the user.
pub(crate) fn stdin_is_interactive() -> bool {
	io::stdin().is_terminal()
}
