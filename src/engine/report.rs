use std::fmt::{Display, Formatter, Result};

use super::state::{Name, MAX_ENERGY};

/// Outcome of a successful instruction, carrying the levels after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
	Lit {
		name: Name,
		energy: u8,
	},

	Gave {
		giver: Name,
		receiver: Name,
		amount: u8,
		giver_energy: u8,
		receiver_energy: u8,
	},

	Flew {
		name: Name,
		amount: u8,
		energy: u8,
	},

	Hugged,

	Shown {
		name: Name,
		energy: u8,
	},

	Dimmed {
		name: Name,
	},

	Help,

	Clear,
}

impl Display for Report {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match *self {
			Self::Lit { name, energy } => {
				write!(f, "{name}'s light initialized with energy {energy}")
			}
			Self::Gave {
				giver,
				receiver,
				amount,
				giver_energy,
				receiver_energy,
			} => {
				writeln!(f, "{giver} gave {amount} energy to {receiver}")?;
				write!(
					f,
					"{giver} now has {giver_energy} energy, {receiver} now has {receiver_energy} energy"
				)
			}
			Self::Flew {
				name,
				amount,
				energy,
			} => write!(
				f,
				"{name} flew and lost {amount} energy. Current energy: {energy}"
			),
			Self::Hugged => write!(
				f,
				"All fireflies hugged and recharged to full energy ({MAX_ENERGY})"
			),
			Self::Shown { name, energy: 0 } => {
				write!(f, "{name}'s light is not initialized (energy level: 0)")
			}
			Self::Shown { name, energy } => write!(f, "{name}'s energy level: {energy}"),
			Self::Dimmed { name } => write!(f, "{name}'s energy has been reset to 0"),
			Self::Help => write!(f, "Usage information requested"),
			Self::Clear => write!(f, "Screen cleared"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gift_reports_both_levels() {
		let report = Report::Gave {
			giver: Name::Tib,
			receiver: Name::Nin,
			amount: 3,
			giver_energy: 2,
			receiver_energy: 3,
		};

		assert_eq!(
			report.to_string(),
			"TIB gave 3 energy to NIN\nTIB now has 2 energy, NIN now has 3 energy"
		);
	}

	#[test]
	fn zero_level_reads_as_uninitialized() {
		let empty = Report::Shown {
			name: Name::Abc,
			energy: 0,
		};
		let lit = Report::Shown {
			name: Name::Abc,
			energy: 7,
		};

		assert_eq!(
			empty.to_string(),
			"ABC's light is not initialized (energy level: 0)"
		);
		assert_eq!(lit.to_string(), "ABC's energy level: 7");
	}
}
