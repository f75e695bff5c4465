//! Number printer: the compact-notation value parsers wired into `clap`.
//!
//! ```text
//! sequence-args --age 42 --ints 1,5-7,20-30/5 --days 0-21/3.5
//! ```

use clap::{Arg, Command};
use numseq::{Number, NumberSequence, NumericKind, Value};

fn main() {
	let matches = Command::new("sequence-args")
		.about("Number printer")
		.arg(
			Arg::new("age")
				.long("age")
				.help("An age, from 0 to 130")
				.value_parser(Number::with_limits(
					NumericKind::Integer,
					Some(Value::Int(0)),
					Some(Value::Int(130)),
				)),
		)
		.arg(
			Arg::new("ints")
				.long("ints")
				.help("Non-negative integers, e.g. 1,5-7,20-30/5")
				.value_parser(NumberSequence::with_limits(
					NumericKind::Integer,
					Some(Value::Int(0)),
					None,
				)),
		)
		.arg(
			Arg::new("days")
				.long("days")
				.help("Day numbers, from 0 to 365.25")
				.value_parser(NumberSequence::with_limits(
					NumericKind::Float,
					Some(Value::Float(0.0)),
					Some(Value::Float(365.25)),
				)),
		)
		.get_matches();

	if let Some(age) = matches.get_one::<Value>("age") {
		println!("age: {age}");
	}
	for name in ["ints", "days"] {
		if let Some(values) = matches.get_one::<Vec<Value>>(name) {
			let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
			println!("{name}: ({})", rendered.join(", "));
		}
	}
}
