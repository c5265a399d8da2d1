use std::{fmt::Write, ops::Deref};

use arbitrary::{Arbitrary, Result, Unstructured};

static NAMES: &[&str] = &["TIB", "NIN", "ABC", "XYZ", "tib", "BOB"];

#[derive(Arbitrary)]
enum Line {
	Light { name: u8, energy: i8 },
	Gift { giver: u8, receiver: u8, amount: i8 },
	Fly { name: u8, amount: i8 },
	Hug,
	Show { name: u8 },
	Dim { name: u8 },
	Comment,
}

fn name(index: u8) -> &'static str {
	NAMES[usize::from(index) % NAMES.len()]
}

impl Line {
	fn write_to(&self, buffer: &mut String) -> std::fmt::Result {
		match *self {
			Self::Light { name: n, energy } => writeln!(buffer, "LIGHT {} {energy}", name(n)),
			Self::Gift {
				giver,
				receiver,
				amount,
			} => writeln!(buffer, "GIFT {}, {}, {amount}", name(giver), name(receiver)),
			Self::Fly { name: n, amount } => writeln!(buffer, "FLY {} {amount}", name(n)),
			Self::Hug => writeln!(buffer, "HUG"),
			Self::Show { name: n } => writeln!(buffer, "SHOW LIGHT {}", name(n)),
			Self::Dim { name: n } => writeln!(buffer, "DIM {} ; dim", name(n)),
			Self::Comment => writeln!(buffer, "; nothing here"),
		}
	}
}

#[derive(Debug)]
pub struct StructuredString {
	content: String,
}

impl Arbitrary<'_> for StructuredString {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let len = u.arbitrary_len::<Line>()?;
		let mut content = String::new();

		for _ in 0..len {
			let line = Line::arbitrary(u)?;

			line.write_to(&mut content)
				.expect("writing to a string cannot fail");
		}

		Ok(Self { content })
	}
}

impl Deref for StructuredString {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
