use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
	Light,
	Gift,
	Fly,
	Hug,
	Show,
	Help,
	Clear,
	Dim,
}

pub struct Definition {
	pub mnemonic: Mnemonic,
	pub name: &'static str,
	pub min_operands: usize,
	pub max_operands: usize,
	pub usage: &'static str,
}

impl Definition {
	const fn new(
		mnemonic: Mnemonic,
		name: &'static str,
		operands: usize,
		usage: &'static str,
	) -> Self {
		Self {
			mnemonic,
			name,
			min_operands: operands,
			max_operands: operands,
			usage,
		}
	}

	#[must_use]
	pub const fn accepts(&self, count: usize) -> bool {
		count >= self.min_operands && count <= self.max_operands
	}
}

pub static DEFINITIONS: &[Definition] = &[
	Definition::new(
		Mnemonic::Light,
		"LIGHT",
		2,
		"LIGHT <name> <energy> - Set firefly's energy (0-10)",
	),
	Definition::new(
		Mnemonic::Gift,
		"GIFT",
		3,
		"GIFT <giver> <receiver> <amount> - Transfer energy between fireflies",
	),
	Definition::new(
		Mnemonic::Fly,
		"FLY",
		2,
		"FLY <name> <amount> - Reduce firefly's energy by flying",
	),
	Definition::new(
		Mnemonic::Hug,
		"HUG",
		0,
		"HUG - Recharge all fireflies to full energy",
	),
	Definition::new(
		Mnemonic::Show,
		"SHOW",
		2,
		"SHOW LIGHT <name> - Display firefly's current energy",
	),
	Definition::new(Mnemonic::Help, "HELP", 0, "HELP - Display usage information"),
	Definition::new(Mnemonic::Clear, "CLEAR", 0, "CLEAR - Clear the terminal"),
	Definition::new(
		Mnemonic::Dim,
		"DIM",
		1,
		"DIM <name> - Reset firefly's energy to 0",
	),
];

/// Finds the definition of an already upper-cased mnemonic.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Definition> {
	DEFINITIONS.iter().find(|definition| definition.name == name)
}

/// A validated line. Names are upper-cased but not yet checked against the
/// register set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	Set {
		name: String,
		energy: i64,
	},

	Transfer {
		giver: String,
		receiver: String,
		amount: i64,
	},

	Decrement {
		name: String,
		amount: i64,
	},

	RechargeAll,

	Query {
		name: String,
	},

	Help,

	ClearScreen,

	Reset {
		name: String,
	},
}

impl Display for Instruction {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match self {
			Self::Set { name, energy } => write!(f, "LIGHT {name} {energy}"),
			Self::Transfer {
				giver,
				receiver,
				amount,
			} => write!(f, "GIFT {giver} {receiver} {amount}"),
			Self::Decrement { name, amount } => write!(f, "FLY {name} {amount}"),
			Self::RechargeAll => write!(f, "HUG"),
			Self::Query { name } => write!(f, "SHOW LIGHT {name}"),
			Self::Help => write!(f, "HELP"),
			Self::ClearScreen => write!(f, "CLEAR"),
			Self::Reset { name } => write!(f, "DIM {name}"),
		}
	}
}
