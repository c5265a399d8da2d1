use std::{io, process::Command};

pub trait Screen {
	/// # Errors
	///
	/// Returns an error if the screen could not be cleared.
	fn clear(&mut self) -> io::Result<()>;
}

/// Clears the terminal through the platform's own command.
#[derive(Default)]
pub struct Terminal;

impl Screen for Terminal {
	fn clear(&mut self) -> io::Result<()> {
		let status = if cfg!(windows) {
			Command::new("cmd").args(["/c", "cls"]).status()?
		} else {
			Command::new("clear").status()?
		};

		if status.success() {
			Ok(())
		} else {
			Err(io::Error::other(format!("clearing the terminal failed ({status})")))
		}
	}
}
