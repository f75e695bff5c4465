//! Integration with the `clap` argument framework: both parser types act as
//! value parsers, so a sequence-valued or limit-checked scalar option needs
//! no glue code. Failures surface through `clap`'s own error reporting with
//! the diagnostic summary and message.

use std::ffi::OsStr;

use clap::{
	builder::TypedValueParser,
	error::{Error as ClapError, ErrorKind},
	Arg, Command,
};

use crate::{Number, NumberSequence};

fn utf8(cmd: &Command, raw: &OsStr) -> Result<String, ClapError> {
	raw.to_str()
		.map(str::to_owned)
		.ok_or_else(|| ClapError::new(ErrorKind::InvalidUtf8).with_cmd(cmd))
}

impl TypedValueParser for NumberSequence {
	type Value = Vec<crate::Value>;

	fn parse_ref(
		&self,
		cmd: &Command,
		_arg: Option<&Arg>,
		raw: &OsStr,
	) -> Result<Self::Value, ClapError> {
		let text = utf8(cmd, raw)?;
		self.parse(&text).map_err(|err| {
			ClapError::raw(
				ErrorKind::ValueValidation,
				format!("{}: {err}", self.diagnostic(Some(&err))),
			)
			.with_cmd(cmd)
		})
	}
}

impl TypedValueParser for Number {
	type Value = crate::Value;

	fn parse_ref(
		&self,
		cmd: &Command,
		_arg: Option<&Arg>,
		raw: &OsStr,
	) -> Result<Self::Value, ClapError> {
		let text = utf8(cmd, raw)?;
		self.validate(&text).map_err(|err| {
			ClapError::raw(
				ErrorKind::ValueValidation,
				format!("{}: {err}", self.diagnostic(Some(&err))),
			)
			.with_cmd(cmd)
		})
	}
}
