use std::{
	fmt::{Display, Formatter, Result},
	ops::{Index, IndexMut},
};

pub const MAX_ENERGY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Name {
	Tib,
	Nin,
	Abc,
	Xyz,
}

impl Name {
	pub const ALL: [Self; 4] = [Self::Tib, Self::Nin, Self::Abc, Self::Xyz];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Tib => "TIB",
			Self::Nin => "NIN",
			Self::Abc => "ABC",
			Self::Xyz => "XYZ",
		}
	}

	/// Resolves an upper-cased name against the fixed register set.
	#[must_use]
	pub fn lookup(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|known| known.as_str() == name)
	}

	#[must_use]
	pub fn listing() -> String {
		Self::ALL.map(Self::as_str).join(", ")
	}

	const fn index(self) -> usize {
		self as usize
	}
}

impl Display for Name {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.write_str(self.as_str())
	}
}

/// Energy levels of every firefly, always one entry per `Name`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
	levels: [u8; Name::ALL.len()],
}

impl Registers {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Name, u8)> + '_ {
		Name::ALL.into_iter().map(|name| (name, self[name]))
	}

	pub fn fill(&mut self, energy: u8) {
		self.levels.fill(energy);
	}
}

impl Index<Name> for Registers {
	type Output = u8;

	fn index(&self, name: Name) -> &Self::Output {
		&self.levels[name.index()]
	}
}

impl IndexMut<Name> for Registers {
	fn index_mut(&mut self, name: Name) -> &mut Self::Output {
		&mut self.levels[name.index()]
	}
}
