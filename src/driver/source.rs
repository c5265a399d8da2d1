use std::{
	io,
	path::{Path, PathBuf},
};

use thiserror::Error;

pub const SCRIPT_EXTENSION: &str = "tni";

#[derive(Debug, Error)]
pub enum SourceError {
	#[error("File must have .{} extension, got `{}`", SCRIPT_EXTENSION, .0.display())]
	UnsupportedExtension(PathBuf),

	#[error("Error reading instructions: {0}")]
	Io(#[from] io::Error),
}

/// Whether a trimmed line should reach the parser at all.
#[must_use]
pub fn is_instruction(line: &str) -> bool {
	!line.is_empty() && !line.starts_with(';')
}

/// A script file loaded in full before any of it runs.
#[derive(Debug)]
pub struct Script {
	contents: String,
}

impl Script {
	#[must_use]
	pub const fn new(contents: String) -> Self {
		Self { contents }
	}

	/// # Errors
	///
	/// Returns `SourceError::UnsupportedExtension` if the path does not end in `.tni`.
	/// Returns `SourceError::Io` if the file cannot be read.
	pub fn open(path: &Path) -> Result<Self, SourceError> {
		let supported = path
			.extension()
			.is_some_and(|extension| extension == SCRIPT_EXTENSION);

		if !supported {
			return Err(SourceError::UnsupportedExtension(path.to_path_buf()));
		}

		let contents = std::fs::read_to_string(path)?;

		Ok(Self::new(contents))
	}

	pub fn lines(&self) -> impl Iterator<Item = &str> {
		self.contents
			.lines()
			.map(str::trim)
			.filter(|line| is_instruction(line))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
	Line(&'a str),
	Help,
	Exit,
	Skip,
}

/// Sorts a line typed at the prompt. `EXIT` and `HELP` are handled by the
/// session itself and never reach the parser.
#[must_use]
pub fn classify(line: &str) -> Entry<'_> {
	let line = line.trim();

	if line.eq_ignore_ascii_case("EXIT") {
		Entry::Exit
	} else if line.eq_ignore_ascii_case("HELP") {
		Entry::Help
	} else if is_instruction(line) {
		Entry::Line(line)
	} else {
		Entry::Skip
	}
}
