use std::fmt::Display;

use colored::Colorize;

/// Rule printed under every warning.
const WARNING_RULE: &str = "==========================";

/// Prints a warning to stdout, where the generated text also goes.
pub(crate) fn warning(msg: impl Display) {
	println!("{}: {}", "Warning".magenta(), msg);
	println!("{WARNING_RULE}");
}

/// Prints an error and the pointer to the help screen.
pub(crate) fn error(msg: impl Display) {
	println!("{}: {}", "Error".red(), msg);
	println!("Use 'markovchain --help' for more information.");
}

/// Renders generated tokens as one space-separated line.
pub(crate) fn render_line<T: AsRef<str>>(tokens: &[T]) -> String {
	let mut line = String::new();
	for (i, token) in tokens.iter().enumerate() {
		if i > 0 {
			line.push(' ');
		}
		line.push_str(token.as_ref());
	}
	line
}
