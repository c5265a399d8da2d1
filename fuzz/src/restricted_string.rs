use std::ops::Deref;

use arbitrary::{Arbitrary, Result, Unstructured};

#[derive(Arbitrary)]
enum Symbol {
	Light,
	Gift,
	Fly,
	Hug,
	Show,
	Dim,
	Tib,
	Nin,
	Digit(u8),
	Minus,
	Space,
	Comma,
	Semicolon,
	Backslash,
	Letter(u8),
}

impl Symbol {
	fn push_to(self, buffer: &mut String) {
		match self {
			Self::Light => buffer.push_str("LIGHT"),
			Self::Gift => buffer.push_str("gift"),
			Self::Fly => buffer.push_str("Fly"),
			Self::Hug => buffer.push_str("HUG"),
			Self::Show => buffer.push_str("SHOW"),
			Self::Dim => buffer.push_str("dim"),
			Self::Tib => buffer.push_str("TIB"),
			Self::Nin => buffer.push_str("nin"),
			Self::Digit(value) => buffer.push(char::from(b'0' + value % 10)),
			Self::Minus => buffer.push('-'),
			Self::Space => buffer.push(' '),
			Self::Comma => buffer.push(','),
			Self::Semicolon => buffer.push(';'),
			Self::Backslash => buffer.push('\\'),
			Self::Letter(value) => buffer.push(char::from(b'A' + value % 26)),
		}
	}
}

#[derive(Debug)]
pub struct RestrictedString {
	content: String,
}

impl Arbitrary<'_> for RestrictedString {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let len = u.arbitrary_len::<Symbol>()?;
		let mut content = String::with_capacity(len);

		for _ in 0..len {
			Symbol::arbitrary(u)?.push_to(&mut content);
		}

		Ok(Self { content })
	}
}

impl Deref for RestrictedString {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
