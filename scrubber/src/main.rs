use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use excise::{Error, Pattern, Removal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Remove every occurrence of a byte pattern from a file")]
struct Args {
	/// File to rewrite in place
	target: PathBuf,

	#[command(flatten)]
	source: PatternSource,

	/// Log the read, scan, and write steps to stderr
	#[arg(long)]
	verbose: bool,
}

/// Where the pattern bytes come from. Exactly one source must be given.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct PatternSource {
	/// Pattern as literal text; its UTF-8 bytes are removed
	#[arg(long, value_name = "TEXT")]
	pattern: Option<String>,

	/// Pattern as hex digits; whitespace anywhere is ignored
	#[arg(long, value_name = "HEX")]
	hex: Option<String>,

	/// File whose raw contents are the pattern
	#[arg(long, value_name = "FILE")]
	pattern_file: Option<PathBuf>,
}

impl PatternSource {
	fn resolve(&self) -> excise::Result<Pattern> {
		if let Some(text) = &self.pattern {
			Pattern::new(text.as_bytes().to_vec())
		}
		else if let Some(text) = &self.hex {
			Pattern::from_hex(text)
		}
		else if let Some(path) = &self.pattern_file {
			Pattern::from_file(path)
		}
		else {
			unreachable!("clap requires exactly one pattern source")
		}
	}
}

fn main() -> ExitCode {
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(error) => {
			let code = usage_code(&error);
			let _ = error.print();
			return ExitCode::from(code);
		}
	};
	init_logging(args.verbose);

	match run(&args) {
		Ok(removal) => {
			println!(
				"removed {} occurrence(s) from {}, {} bytes remain",
				removal.occurrences,
				args.target.display(),
				removal.len
			);
			ExitCode::SUCCESS
		}
		Err(error) => {
			eprintln!("error: {error}");
			ExitCode::from(exit_code(&error))
		}
	}
}

fn run(args: &Args) -> excise::Result<Removal> {
	let pattern = args.source.resolve()?;
	excise::remove(&args.target, &pattern)
}

/// 1: target unreadable, 2: target not rewritable, 3: bad arguments.
fn exit_code(error: &Error) -> u8 {
	match error {
		Error::Read { .. } => 1,
		Error::Write { .. } => 2,
		Error::EmptyPattern | Error::InvalidHex(_) | Error::PatternFile { .. } => 3,
	}
}

/// Rejected command lines are bad arguments too; help and version
/// requests are informational, not failures.
fn usage_code(error: &clap::Error) -> u8 {
	if error.use_stderr() { 3 } else { 0 }
}

fn init_logging(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
