#![no_main]

use firefly::engine::{
	machine::execute,
	state::{Registers, MAX_ENERGY},
};
use firefly::syntax::parser::parse;
use firefly_fuzz::structured_string::StructuredString;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: StructuredString| {
	let mut registers = Registers::new();

	for line in source.lines() {
		let Ok(Some(instruction)) = parse(line) else {
			continue;
		};

		let before = registers.clone();

		if execute(&mut registers, instruction).is_err() {
			assert_eq!(registers, before);
		}

		assert!(registers.iter().all(|(_, energy)| energy <= MAX_ENERGY));
	}
});
