use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
};

use thiserror::Error;

use super::data::{lookup, Definition, Instruction, Mnemonic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	Missing,
	Extra,
}

impl Display for Arity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Missing => write!(f, "incomplete"),
			Self::Extra => write!(f, "too many arguments for"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unknown instruction: {0}")]
	UnknownInstruction(String),

	#[error("{arity} {mnemonic} instruction. Usage: {usage}")]
	ArityMismatch {
		arity: Arity,
		mnemonic: &'static str,
		usage: &'static str,
	},

	#[error("invalid {operand} '{token}'. Use {expected}")]
	InvalidOperand {
		operand: &'static str,
		token: String,
		expected: &'static str,
	},
}

/// Drops everything from the first `;` onwards. A `;` preceded by a
/// backslash is kept as a literal `;`.
#[must_use]
pub fn strip_comment(line: &str) -> Cow<'_, str> {
	if !line.contains('\\') {
		let code = line.split(';').next().unwrap_or_default();

		return Cow::Borrowed(code);
	}

	let mut code = String::with_capacity(line.len());
	let mut chars = line.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'\\' if chars.peek() == Some(&';') => {
				chars.next();
				code.push(';');
			}
			';' => break,
			_ => code.push(c),
		}
	}

	Cow::Owned(code)
}

fn check_arity(definition: &Definition, count: usize) -> Result<(), ParseError> {
	if definition.accepts(count) {
		return Ok(());
	}

	let arity = if count < definition.min_operands {
		Arity::Missing
	} else {
		Arity::Extra
	};

	Err(ParseError::ArityMismatch {
		arity,
		mnemonic: definition.name,
		usage: definition.usage,
	})
}

fn name(token: &str) -> String {
	token.to_uppercase()
}

fn integer(token: &str, operand: &'static str, expected: &'static str) -> Result<i64, ParseError> {
	token.parse().map_err(|_| ParseError::InvalidOperand {
		operand,
		token: token.to_string(),
		expected,
	})
}

fn light_keyword(token: &str) -> Result<(), ParseError> {
	if token.to_uppercase() == "LIGHT" {
		Ok(())
	} else {
		Err(ParseError::InvalidOperand {
			operand: "SHOW syntax",
			token: token.to_string(),
			expected: "SHOW LIGHT <name>",
		})
	}
}

fn build(mnemonic: Mnemonic, operands: &[&str]) -> Result<Instruction, ParseError> {
	let instruction = match (mnemonic, operands) {
		(Mnemonic::Light, &[target, energy]) => Instruction::Set {
			name: name(target),
			energy: integer(energy, "energy value", "a number between 0 and 10")?,
		},
		(Mnemonic::Gift, &[giver, receiver, amount]) => Instruction::Transfer {
			giver: name(giver),
			receiver: name(receiver),
			amount: integer(amount, "gift amount", "a whole number")?,
		},
		(Mnemonic::Fly, &[target, amount]) => Instruction::Decrement {
			name: name(target),
			amount: integer(amount, "fly amount", "a whole number")?,
		},
		(Mnemonic::Show, &[light, target]) => {
			light_keyword(light)?;

			Instruction::Query { name: name(target) }
		}
		(Mnemonic::Dim, &[target]) => Instruction::Reset { name: name(target) },
		(Mnemonic::Hug, _) => Instruction::RechargeAll,
		(Mnemonic::Help, _) => Instruction::Help,
		(Mnemonic::Clear, _) => Instruction::ClearScreen,
		(mnemonic, operands) => {
			unreachable!("arity of {mnemonic:?} checked before build, got {operands:?}")
		}
	};

	Ok(instruction)
}

/// Parses one line of source. Blank and comment-only lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns `ParseError::UnknownInstruction` if the mnemonic is not defined.
/// Returns `ParseError::ArityMismatch` if the operand count is not accepted.
/// Returns `ParseError::InvalidOperand` if an integer or keyword is malformed.
pub fn parse(line: &str) -> Result<Option<Instruction>, ParseError> {
	let code = strip_comment(line);
	let mut tokens = code.split_whitespace();

	let Some(first) = tokens.next() else {
		return Ok(None);
	};

	let mnemonic = first.to_uppercase();
	let definition = lookup(&mnemonic).ok_or(ParseError::UnknownInstruction(mnemonic))?;
	let operands: Vec<&str> = tokens.map(|token| token.trim_end_matches(',')).collect();

	check_arity(definition, operands.len())?;

	build(definition.mnemonic, &operands).map(Some)
}
