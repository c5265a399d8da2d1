use std::{
	io::{self, BufWriter, Write},
	path::Path,
	process::ExitCode,
};

use argh::FromArgs;
use env_logger::Env;
use firefly::driver::{
	screen::Terminal,
	session::{write_usage, Session},
	source::{Script, SourceError},
};
use log::{debug, error};
use thiserror::Error;

/// An interpreter for the Firefly language, a handful of instructions that
/// light, gift, fly, hug and dim four fireflies.
#[derive(FromArgs)]
struct Arguments {
	/// the `.tni` script to run,
	/// if not specified an interactive session is started
	#[argh(positional)]
	script: Option<String>,

	/// whether banners, echoed lines and the prompt should be suppressed
	#[argh(switch, short = 'q')]
	quiet: bool,
}

#[derive(Debug, Error)]
enum Failure {
	#[error(transparent)]
	Source(#[from] SourceError),

	#[error("failed to write output: {0}")]
	Output(#[from] io::Error),
}

fn run(arguments: &Arguments) -> Result<(), Failure> {
	let stdout = std::io::stdout().lock();
	let mut session = Session::new(stdout, Terminal).with_quiet(arguments.quiet);

	session.banner()?;

	if let Some(name) = arguments.script.as_deref() {
		let script = Script::open(Path::new(name))?;

		debug!("running script `{name}`");

		session.run_script(&script)?;
	} else {
		debug!("running interactively");

		session.run_interactive(std::io::stdin().lock())?;
	}

	Ok(())
}

fn report_failure(output: &mut dyn Write, failure: &Failure) -> io::Result<()> {
	match failure {
		Failure::Source(SourceError::UnsupportedExtension(_)) => {
			writeln!(output, "Error: {failure}")?;
			write_usage(output)?;
		}
		Failure::Source(SourceError::Io(_)) => writeln!(output, "{failure}")?,
		// Standard output is already broken, so only the log sees this one.
		Failure::Output(_) => error!("{failure}"),
	}

	output.flush()
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

	let arguments = argh::from_env::<Arguments>();

	match run(&arguments) {
		Ok(()) => ExitCode::SUCCESS,
		Err(failure) => {
			let output = &mut BufWriter::new(std::io::stdout().lock());

			if let Err(io) = report_failure(output, &failure) {
				error!("failed to report `{failure}`: {io}");
			}

			ExitCode::FAILURE
		}
	}
}
