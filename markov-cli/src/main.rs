use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use env_logger::Env;
use log::{LevelFilter, debug};

use markov_core::{Corpus, Generator, MarkovChain};

mod cli;
mod input;
mod params;
mod report;

use cli::Cli;
use params::{CliError, Warning};

/// Entry point of `markovchain`.
///
/// Reads a text from standard input, builds a word chain of the requested
/// order and prints one generated line. Validation problems are reported
/// on stdout in the same stream as the text, and exit with status 1.
fn main() -> ExitCode {
	let cli = match Cli::parse_lenient(std::env::args_os()) {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			return match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SUCCESS,
				_ => ExitCode::FAILURE,
			};
		}
	};

	init_logging(cli.verbose);

	match run(&cli) {
		Ok(line) => {
			println!("{line}");
			ExitCode::SUCCESS
		}
		Err(e) => {
			report::error(format!("{e:#}"));
			ExitCode::FAILURE
		}
	}
}

/// Runs one generation and returns the line to print.
fn run(cli: &Cli) -> Result<String> {
	let flags = cli.flags()?;

	if input::stdin_is_interactive() {
		return Err(CliError::NoInput.into());
	}
	let text = input::read_text(io::stdin().lock()).context("failed to read standard input")?;
	let corpus = Corpus::from_text(&text);
	debug!("read {} words from standard input", corpus.len());

	let mut warnings: Vec<Warning> = Vec::new();
	let resolved = flags.resolve(&corpus, &mut warnings);
	for warning in &warnings {
		report::warning(warning);
	}
	let params = resolved?;

	let chain = MarkovChain::build(&corpus, params.prefix_len).map_err(CliError::from)?;
	let output = Generator::new(&chain)
		.generate(params.start_prefix.as_slice(), params.max_words)
		.map_err(CliError::from)?;

	Ok(report::render_line(output.as_slice()))
}

/// Configures `env_logger` on stderr.
///
/// `RUST_LOG` is honoured unless `-v` is given, which overrides it.
fn init_logging(verbose: u8) {
	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
	builder.format_timestamp_millis();
	if verbose > 0 {
		let level = match verbose {
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		};
		builder.filter_level(level);
	}
	let _ = builder.try_init();
}
