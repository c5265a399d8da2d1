use thiserror::Error;

use crate::syntax::data::Instruction;

use super::{
	report::Report,
	state::{Name, Registers, MAX_ENERGY},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
	#[error("unknown firefly name '{}'. Use one of: {}", .0, Name::listing())]
	UnknownName(String),

	#[error("energy must be between 0 and {}, got {}", MAX_ENERGY, .0)]
	OutOfRange(i64),

	#[error("{name}'s light is already initialized with energy {energy}")]
	AlreadyInitialized { name: Name, energy: u8 },

	#[error("invalid {action} amount: {amount}")]
	InvalidAmount { action: &'static str, amount: i64 },

	#[error("{0}'s energy is already at 0")]
	AlreadyZero(Name),
}

fn resolve(name: &str) -> Result<Name, EngineError> {
	Name::lookup(name).ok_or_else(|| EngineError::UnknownName(name.to_string()))
}

/// Checks `amount` against what `available` can spend.
fn spendable(action: &'static str, amount: i64, available: u8) -> Result<u8, EngineError> {
	u8::try_from(amount)
		.ok()
		.filter(|&amount| amount <= available)
		.ok_or(EngineError::InvalidAmount { action, amount })
}

fn set(registers: &mut Registers, name: &str, energy: i64) -> Result<Report, EngineError> {
	let name = resolve(name)?;
	let energy = u8::try_from(energy)
		.ok()
		.filter(|&energy| energy <= MAX_ENERGY)
		.ok_or(EngineError::OutOfRange(energy))?;

	match registers[name] {
		0 => {
			registers[name] = energy;

			Ok(Report::Lit { name, energy })
		}
		current => Err(EngineError::AlreadyInitialized {
			name,
			energy: current,
		}),
	}
}

fn transfer(
	registers: &mut Registers,
	giver: &str,
	receiver: &str,
	amount: i64,
) -> Result<Report, EngineError> {
	let giver = resolve(giver)?;
	let receiver = resolve(receiver)?;
	let amount = spendable("gift", amount, registers[giver])?;

	// Energy above the cap is lost, it does not go back to the giver.
	registers[giver] -= amount;
	registers[receiver] = registers[receiver].saturating_add(amount).min(MAX_ENERGY);

	Ok(Report::Gave {
		giver,
		receiver,
		amount,
		giver_energy: registers[giver],
		receiver_energy: registers[receiver],
	})
}

fn decrement(registers: &mut Registers, name: &str, amount: i64) -> Result<Report, EngineError> {
	let name = resolve(name)?;
	let amount = spendable("fly", amount, registers[name])?;

	registers[name] -= amount;

	Ok(Report::Flew {
		name,
		amount,
		energy: registers[name],
	})
}

fn reset(registers: &mut Registers, name: &str) -> Result<Report, EngineError> {
	let name = resolve(name)?;

	if registers[name] == 0 {
		return Err(EngineError::AlreadyZero(name));
	}

	registers[name] = 0;

	Ok(Report::Dimmed { name })
}

/// Applies one instruction. On error the registers are left untouched.
///
/// # Errors
///
/// Returns `EngineError::UnknownName` if a name is not one of the fixed registers.
/// Returns `EngineError::OutOfRange` if a set energy is outside `0..=MAX_ENERGY`.
/// Returns `EngineError::AlreadyInitialized` if a set targets a non-zero register.
/// Returns `EngineError::InvalidAmount` if an amount is negative or exceeds the source level.
/// Returns `EngineError::AlreadyZero` if a reset targets a zero register.
pub fn execute(registers: &mut Registers, instruction: Instruction) -> Result<Report, EngineError> {
	match instruction {
		Instruction::Set { name, energy } => set(registers, &name, energy),
		Instruction::Transfer {
			giver,
			receiver,
			amount,
		} => transfer(registers, &giver, &receiver, amount),
		Instruction::Decrement { name, amount } => decrement(registers, &name, amount),
		Instruction::RechargeAll => {
			registers.fill(MAX_ENERGY);

			Ok(Report::Hugged)
		}
		Instruction::Query { name } => {
			let name = resolve(&name)?;

			Ok(Report::Shown {
				name,
				energy: registers[name],
			})
		}
		Instruction::Reset { name } => reset(registers, &name),
		Instruction::Help => Ok(Report::Help),
		Instruction::ClearScreen => Ok(Report::Clear),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set_instruction(name: &str, energy: i64) -> Instruction {
		Instruction::Set {
			name: name.into(),
			energy,
		}
	}

	fn gift(giver: &str, receiver: &str, amount: i64) -> Instruction {
		Instruction::Transfer {
			giver: giver.into(),
			receiver: receiver.into(),
			amount,
		}
	}

	fn fly(name: &str, amount: i64) -> Instruction {
		Instruction::Decrement {
			name: name.into(),
			amount,
		}
	}

	fn dim(name: &str) -> Instruction {
		Instruction::Reset { name: name.into() }
	}

	fn query(name: &str) -> Instruction {
		Instruction::Query { name: name.into() }
	}

	fn assert_in_range(registers: &Registers) {
		assert_eq!(registers.iter().count(), Name::ALL.len());
		assert!(registers.iter().all(|(_, energy)| energy <= MAX_ENERGY));
	}

	#[test]
	fn set_succeeds_once_from_zero() {
		let mut registers = Registers::new();

		assert_eq!(
			execute(&mut registers, set_instruction("TIB", 7)),
			Ok(Report::Lit {
				name: Name::Tib,
				energy: 7
			})
		);
		assert_eq!(
			execute(&mut registers, set_instruction("TIB", 3)),
			Err(EngineError::AlreadyInitialized {
				name: Name::Tib,
				energy: 7
			})
		);
		assert_eq!(registers[Name::Tib], 7);

		execute(&mut registers, dim("TIB")).unwrap();

		assert!(execute(&mut registers, set_instruction("TIB", 3)).is_ok());
		assert_eq!(registers[Name::Tib], 3);
	}

	#[test]
	fn set_to_zero_leaves_register_settable() {
		let mut registers = Registers::new();

		execute(&mut registers, set_instruction("NIN", 0)).unwrap();

		assert!(execute(&mut registers, set_instruction("NIN", 4)).is_ok());
	}

	#[test]
	fn set_rejects_out_of_range_energy() {
		let mut registers = Registers::new();

		for energy in [-1, 11, i64::MAX] {
			assert_eq!(
				execute(&mut registers, set_instruction("ABC", energy)),
				Err(EngineError::OutOfRange(energy))
			);
		}

		assert_eq!(registers, Registers::new());
	}

	#[test]
	fn unknown_names_are_rejected_for_every_instruction() {
		let mut registers = Registers::new();

		registers.fill(5);

		let before = registers.clone();

		for instruction in [
			set_instruction("BOB", 1),
			gift("BOB", "TIB", 1),
			gift("TIB", "BOB", 1),
			fly("BOB", 1),
			query("BOB"),
			dim("BOB"),
		] {
			assert_eq!(
				execute(&mut registers, instruction),
				Err(EngineError::UnknownName("BOB".into()))
			);
		}

		assert_eq!(registers, before);
	}

	#[test]
	fn transfer_moves_energy() {
		let mut registers = Registers::new();

		execute(&mut registers, set_instruction("TIB", 5)).unwrap();

		let report = execute(&mut registers, gift("TIB", "NIN", 3)).unwrap();

		assert_eq!(
			report,
			Report::Gave {
				giver: Name::Tib,
				receiver: Name::Nin,
				amount: 3,
				giver_energy: 2,
				receiver_energy: 3,
			}
		);
	}

	#[test]
	fn transfer_discards_energy_above_cap() {
		for (giver, receiver, amount) in [(10, 10, 10), (6, 7, 5), (4, 9, 0), (3, 2, 3)] {
			let mut registers = Registers::new();

			registers[Name::Abc] = giver;
			registers[Name::Xyz] = receiver;

			execute(&mut registers, gift("ABC", "XYZ", i64::from(amount))).unwrap();

			let lost = (receiver + amount).saturating_sub(MAX_ENERGY);

			assert_eq!(registers[Name::Abc], giver - amount);
			assert_eq!(registers[Name::Xyz], (receiver + amount).min(MAX_ENERGY));
			assert_eq!(
				registers[Name::Abc] + registers[Name::Xyz],
				giver + receiver - lost
			);
		}
	}

	#[test]
	fn transfer_to_self_is_capped() {
		let mut registers = Registers::new();

		registers[Name::Tib] = 8;

		execute(&mut registers, gift("TIB", "TIB", 8)).unwrap();

		assert_eq!(registers[Name::Tib], 8);
	}

	#[test]
	fn transfer_rejects_invalid_amounts() {
		let mut registers = Registers::new();

		registers[Name::Tib] = 2;

		for amount in [-1, 3, 300] {
			assert_eq!(
				execute(&mut registers, gift("TIB", "NIN", amount)),
				Err(EngineError::InvalidAmount {
					action: "gift",
					amount
				})
			);
		}

		assert_eq!(registers[Name::Tib], 2);
		assert_eq!(registers[Name::Nin], 0);
	}

	#[test]
	fn decrement_spends_energy() {
		let mut registers = Registers::new();

		registers[Name::Nin] = 6;

		assert_eq!(
			execute(&mut registers, fly("NIN", 6)),
			Ok(Report::Flew {
				name: Name::Nin,
				amount: 6,
				energy: 0
			})
		);
		assert_eq!(
			execute(&mut registers, fly("NIN", 1)),
			Err(EngineError::InvalidAmount {
				action: "fly",
				amount: 1
			})
		);
		assert_eq!(
			execute(&mut registers, fly("NIN", -2)).unwrap_err().to_string(),
			"invalid fly amount: -2"
		);
	}

	#[test]
	fn recharge_fills_every_register() {
		let mut registers = Registers::new();

		registers[Name::Abc] = 3;

		assert_eq!(execute(&mut registers, Instruction::RechargeAll), Ok(Report::Hugged));
		assert!(registers.iter().all(|(_, energy)| energy == MAX_ENERGY));
	}

	#[test]
	fn query_round_trips() {
		let mut registers = Registers::new();

		execute(&mut registers, set_instruction("XYZ", 7)).unwrap();

		assert_eq!(
			execute(&mut registers, query("XYZ")),
			Ok(Report::Shown {
				name: Name::Xyz,
				energy: 7
			})
		);

		execute(&mut registers, dim("XYZ")).unwrap();

		assert_eq!(
			execute(&mut registers, query("XYZ")),
			Ok(Report::Shown {
				name: Name::Xyz,
				energy: 0
			})
		);
	}

	#[test]
	fn reset_requires_nonzero_level() {
		let mut registers = Registers::new();

		assert_eq!(
			execute(&mut registers, dim("NIN")),
			Err(EngineError::AlreadyZero(Name::Nin))
		);

		registers[Name::Nin] = 1;

		assert_eq!(
			execute(&mut registers, dim("NIN")),
			Ok(Report::Dimmed { name: Name::Nin })
		);
		assert_eq!(registers[Name::Nin], 0);
	}

	#[test]
	fn help_and_clear_leave_state_alone() {
		let mut registers = Registers::new();

		registers[Name::Tib] = 4;

		let before = registers.clone();

		assert_eq!(execute(&mut registers, Instruction::Help), Ok(Report::Help));
		assert_eq!(execute(&mut registers, Instruction::ClearScreen), Ok(Report::Clear));
		assert_eq!(registers, before);
	}

	#[test]
	fn levels_stay_in_range_across_a_mixed_run() {
		let mut registers = Registers::new();
		let program = [
			set_instruction("TIB", 10),
			gift("TIB", "NIN", 10),
			gift("NIN", "NIN", 10),
			set_instruction("ABC", 11),
			fly("TIB", 1),
			Instruction::RechargeAll,
			gift("XYZ", "ABC", 10),
			dim("ABC"),
			dim("ABC"),
			fly("XYZ", 11),
		];

		for instruction in program {
			let _ = execute(&mut registers, instruction);

			assert_in_range(&registers);
		}
	}

	#[test]
	fn unknown_name_lists_the_registers() {
		assert_eq!(
			EngineError::UnknownName("BOB".into()).to_string(),
			"unknown firefly name 'BOB'. Use one of: TIB, NIN, ABC, XYZ"
		);
	}
}
