#![no_main]

use firefly::syntax::parser::parse;
use firefly_fuzz::restricted_string::RestrictedString;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: RestrictedString| {
	let _ = parse(&source);
});
