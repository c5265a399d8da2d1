pub mod syntax {
	pub mod data;
	pub mod parser;
}

pub mod engine {
	pub mod machine;
	pub mod report;
	pub mod state;
}

pub mod driver {
	pub mod screen;
	pub mod session;
	pub mod source;
}
