use assert_cmd::Command;

const TEXT: &str = "the cat sat on the mat";

fn markovchain() -> Command {
	Command::cargo_bin("markovchain").expect("binary exists")
}

fn stdout_of(args: &[&str], input: &str, expect_success: bool) -> String {
	let mut cmd = markovchain();
	cmd.args(args).write_stdin(input);
	let assert = cmd.assert();
	let assert = if expect_success { assert.success() } else { assert.code(1) };
	String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn single_path_text_is_reproduced() {
	let stdout = stdout_of(&[], TEXT, true);
	assert_eq!(stdout, "the cat sat on the mat\n");
}

#[test]
fn word_budget_truncates() {
	let stdout = stdout_of(&["-w", "3"], TEXT, true);
	assert_eq!(stdout, "the cat sat\n");
}

#[test]
fn custom_prefix_starts_the_output() {
	let stdout = stdout_of(&["-p", "on the", "-w", "10"], TEXT, true);
	assert_eq!(stdout, "on the mat\n");
}

#[test]
fn prefix_length_one_stays_in_vocabulary() {
	let stdout = stdout_of(&["-l", "1", "-w", "50"], "a b a c a b", true);
	let words: Vec<&str> = stdout.split_whitespace().collect();
	assert!(!words.is_empty() && words.len() <= 50);
	assert_eq!(words[0], "a");
	assert!(words.iter().all(|w| ["a", "b", "c"].contains(w)));
}

#[test]
fn multiline_input_is_one_corpus() {
	let stdout = stdout_of(&["-l", "3"], "the cat\nsat on\n\tthe mat\n", true);
	assert_eq!(stdout, "the cat sat on the mat\n");
}

#[test]
fn clamped_word_count_warns_and_continues() {
	let stdout = stdout_of(&["-w", "20000"], TEXT, true);
	assert!(stdout.contains("maximum word number is too large; it is now set to 10000."));
	assert!(stdout.ends_with("the cat sat on the mat\n"));
}

#[test]
fn clamped_prefix_length_warns_and_continues() {
	let stdout = stdout_of(&["-l", "8"], TEXT, true);
	assert!(stdout.contains("prefix length is too large; it is now set to 5."));
	assert!(stdout.ends_with("the cat sat on the mat\n"));
}

#[test]
fn stray_arguments_are_ignored_with_a_warning() {
	let stdout = stdout_of(&["extra", "words"], TEXT, true);
	assert!(stdout.contains("These args are incorrect and are ignored - extra, words"));
	assert!(stdout.ends_with("the cat sat on the mat\n"));
}

#[test]
fn unknown_flags_are_ignored_with_a_warning() {
	let stdout = stdout_of(&["-x", "--foo"], TEXT, true);
	assert!(stdout.contains("These args are incorrect and are ignored - -x, --foo"));
	assert!(stdout.ends_with("the cat sat on the mat\n"));
}

#[test]
fn unknown_flags_do_not_hide_known_ones() {
	let stdout = stdout_of(&["--foo", "-w", "3", "-x"], TEXT, true);
	assert!(stdout.contains("These args are incorrect and are ignored - --foo, -x"));
	assert!(stdout.ends_with("the cat sat\n"));
}

#[test]
fn unknown_prefix_is_an_error() {
	let stdout = stdout_of(&["-p", "the dog"], TEXT, false);
	assert!(stdout.contains("the text does not contain the specified prefix."));
	assert!(stdout.contains("Use 'markovchain --help' for more information."));
}

#[test]
fn invalid_numbers_are_errors() {
	let stdout = stdout_of(&["-w", "0"], TEXT, false);
	assert!(stdout.contains("invalid number is provided for flag -w."));

	let stdout = stdout_of(&["-l", "two"], TEXT, false);
	assert!(stdout.contains("invalid number is provided for flag -l."));
}

#[test]
fn first_invalid_flag_on_the_line_is_reported() {
	let stdout = stdout_of(&["-l", "two", "-w", "zero"], TEXT, false);
	assert!(stdout.contains("invalid number is provided for flag -l."));
	assert!(!stdout.contains("flag -w"));

	let stdout = stdout_of(&["-w", "zero", "-l", "two"], TEXT, false);
	assert!(stdout.contains("invalid number is provided for flag -w."));
	assert!(!stdout.contains("flag -l"));
}

#[test]
fn empty_prefix_is_an_error() {
	let stdout = stdout_of(&["-p", ""], TEXT, false);
	assert!(stdout.contains("empty string is set for -p."));
}

#[test]
fn empty_input_is_an_error() {
	let stdout = stdout_of(&[], " \n\t", false);
	assert!(stdout.contains("no words in input."));
}

#[test]
fn prefix_length_longer_than_text_is_an_error() {
	let stdout = stdout_of(&["-l", "4"], "only three words", false);
	assert!(stdout.contains("prefix length exceeds the number of words in text."));
}

#[test]
fn prefix_longer_than_budget_is_an_error() {
	let stdout = stdout_of(&["-p", "the cat sat", "-w", "2"], TEXT, false);
	assert!(stdout.contains("starting prefix exceeds the maximum number of words."));
}

#[test]
fn prefix_shorter_than_prefix_length_is_an_error() {
	let stdout = stdout_of(&["-p", "mat"], TEXT, false);
	assert!(stdout.contains("prefix length exceeds the starting prefix - can't generate new words."));
}

#[test]
fn repeated_flag_is_rejected() {
	markovchain()
		.args(["-w", "5", "-w", "6"])
		.write_stdin(TEXT)
		.assert()
		.failure();
}

#[test]
fn help_describes_the_flags() {
	let assert = markovchain().arg("--help").assert().success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
	assert!(stdout.contains("Markov Chain text generator."));
	assert!(stdout.contains("-w <N>"));
	assert!(stdout.contains("-p <S>"));
	assert!(stdout.contains("-l <N>"));
}
