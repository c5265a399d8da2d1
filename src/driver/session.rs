use std::{
	borrow::Cow,
	io::{self, BufRead, Write},
};

use log::{debug, trace, warn};
use thiserror::Error;

use crate::{
	engine::{
		machine::{execute, EngineError},
		report::Report,
		state::{Name, Registers, MAX_ENERGY},
	},
	syntax::{
		data::DEFINITIONS,
		parser::{parse, ParseError},
	},
};

use super::{
	screen::Screen,
	source::{classify, Entry, Script, SCRIPT_EXTENSION},
};

/// Failure of a single line. Neither kind stops the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Engine(#[from] EngineError),
}

/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_usage(w: &mut dyn Write) -> io::Result<()> {
	writeln!(w, "Usage:")?;
	writeln!(w, "  1. Run with a .{SCRIPT_EXTENSION} file:")?;
	writeln!(w, "     firefly <filename.{SCRIPT_EXTENSION}>")?;
	writeln!(w, "  2. Run interactively:")?;
	writeln!(w, "     firefly")?;
	writeln!(w, "\nFirefly Language Instructions:")?;

	for definition in DEFINITIONS {
		writeln!(w, "  {}", definition.usage)?;
	}

	writeln!(w, "\nComments start with a semicolon (;)")?;
	writeln!(w, "\nNotes:")?;
	writeln!(
		w,
		"  - <name> must be one of the predefined three-letter names: {}",
		Name::listing()
	)?;
	writeln!(w, "  - Energy levels are stored in registers (0-{MAX_ENERGY})")
}

/// Owns the registers for one run and reports every line to `writer`.
pub struct Session<W, S> {
	registers: Registers,
	writer: W,
	screen: S,
	quiet: bool,
}

impl<W, S> Session<W, S>
where
	W: Write,
	S: Screen,
{
	#[must_use]
	pub fn new(writer: W, screen: S) -> Self {
		Self {
			registers: Registers::new(),
			writer,
			screen,
			quiet: false,
		}
	}

	/// Suppresses banners, echoed lines and the prompt.
	#[must_use]
	pub fn with_quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}

	#[must_use]
	pub const fn registers(&self) -> &Registers {
		&self.registers
	}

	pub fn into_writer(self) -> W {
		self.writer
	}

	/// Parses and executes one line without reporting it.
	///
	/// # Errors
	///
	/// Returns `LineError::Parse` if the line is malformed.
	/// Returns `LineError::Engine` if the instruction is rejected by the registers.
	pub fn step(&mut self, line: &str) -> Result<Option<Report>, LineError> {
		let Some(instruction) = parse(line)? else {
			return Ok(None);
		};

		debug!("executing `{instruction}`");

		let report = execute(&mut self.registers, instruction)?;

		Ok(Some(report))
	}

	/// # Errors
	///
	/// Returns an error if the writer fails.
	pub fn banner(&mut self) -> io::Result<()> {
		if self.quiet {
			return Ok(());
		}

		writeln!(
			self.writer,
			"Firefly Programming Language v{}",
			env!("CARGO_PKG_VERSION")
		)
	}

	/// # Errors
	///
	/// Returns an error if the writer fails.
	pub fn usage(&mut self) -> io::Result<()> {
		write_usage(&mut self.writer)
	}

	fn clear_screen(&mut self) -> io::Result<()> {
		self.writer.flush()?;

		if let Err(error) = self.screen.clear() {
			warn!("screen was not cleared: {error}");

			writeln!(self.writer, "Error: {error}")?;
		}

		Ok(())
	}

	/// Runs one line and writes its report or error. Only writer failures
	/// are returned.
	///
	/// # Errors
	///
	/// Returns an error if the writer fails.
	pub fn run_line(&mut self, line: &str) -> io::Result<()> {
		match self.step(line) {
			Ok(None) => Ok(()),
			Ok(Some(Report::Help)) => self.usage(),
			Ok(Some(Report::Clear)) => self.clear_screen(),
			Ok(Some(report)) => writeln!(self.writer, "{report}"),
			Err(error) => {
				debug!("line `{line}` failed: {error:?}");

				writeln!(self.writer, "Error: {error}")
			}
		}
	}

	/// # Errors
	///
	/// Returns an error if the writer fails.
	pub fn run_script(&mut self, script: &Script) -> io::Result<()> {
		if !self.quiet {
			writeln!(self.writer, "Executing Firefly Language Instructions:")?;
		}

		for line in script.lines() {
			if !self.quiet {
				writeln!(self.writer, "\nExecuting: {line}")?;
			}

			self.run_line(line)?;
		}

		self.writer.flush()
	}

	fn prompt(&mut self) -> io::Result<()> {
		if self.quiet {
			return Ok(());
		}

		write!(self.writer, "> ")?;

		self.writer.flush()
	}

	/// Reads lines from `reader` until `EXIT` or end of input, running each
	/// one before the next is read.
	///
	/// # Errors
	///
	/// Returns an error if reading or writing fails.
	pub fn run_interactive<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
		if !self.quiet {
			writeln!(self.writer, "Enter instructions (one per line).")?;
			writeln!(self.writer, "Type 'HELP' for help, 'EXIT' to finish:")?;
			writeln!(self.writer)?;
		}

		let mut bytes = Vec::new();

		loop {
			self.prompt()?;

			bytes.clear();

			if reader.read_until(b'\n', &mut bytes)? == 0 {
				break;
			}

			// Undecodable bytes become U+FFFD and fail in the parser like any bad line.
			let buffer = String::from_utf8_lossy(&bytes);

			if let Cow::Owned(_) = buffer {
				warn!("line {bytes:?} is not valid UTF-8");
			}

			trace!("read {buffer:?}");

			match classify(&buffer) {
				Entry::Exit => break,
				Entry::Help => self.usage()?,
				Entry::Line(line) => self.run_line(line)?,
				Entry::Skip => {}
			}
		}

		self.writer.flush()
	}
}
