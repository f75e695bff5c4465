//! Parsing, generation, containment and canonical encoding of compact
//! numeric sequence notation.
//!
//! A token is a comma-separated list of clauses, each a scalar, a range, or
//! a stepped range:
//!
//! ```text
//! SEQUENCE := SUBSEQ (',' SUBSEQ)*
//! SUBSEQ   := LOWER [ SEP UPPER_OR_OFFSET ] [ '/' STEP ]
//! SEP      := '-' | '+'
//! ```
//!
//! `"1,5-7,20-30/5"` describes `1, 5, 6, 7, 20, 25, 30`. With the `+`
//! separator the right-hand side is a span above `LOWER`, so `"20+10/5"`
//! describes `20, 25, 30` as well. A [`NumberSequence`] is configured once
//! with a numeric kind and optional inclusive limits, then parses tokens,
//! streams their values lazily, answers membership queries without
//! expansion, and reconstructs canonical notation from values. A [`Number`]
//! validates single scalars against the same kind and limits.
//!
//! ```
//! use numseq::{NumberSequence, NumericKind, Value};
//!
//! let seq = NumberSequence::new(NumericKind::Integer);
//! let values = seq.parse("1,5-7,20-30/5")?;
//! assert_eq!(
//! 	values,
//! 	[1, 5, 6, 7, 20, 25, 30].map(Value::Int).to_vec()
//! );
//! assert!(seq.contains("10-100000000/5", 99999995)?);
//! assert_eq!(seq.encode(values), "1,5-7,20-30/5");
//! # Ok::<(), numseq::Error>(())
//! ```
//!
//! With the default `clap` feature both types plug into
//! [`clap`](https://docs.rs/clap) as value parsers, the ecosystem
//! counterpart of the argument-framework hook the notation was designed
//! for.
//!
//! All operations are pure functions of the token and the immutable
//! configuration: nothing is retained across calls, so one configured
//! parser can be shared freely between threads.

use std::fmt::{self, Display};

#[cfg(feature = "clap")]
mod cli;
mod domain;
mod encode;
mod error;
mod generate;
mod parser;

pub use crate::{
	domain::{Domain, NumericKind, Value},
	encode::encode,
	error::Error,
	generate::SequenceIter,
};

/// A configured parser for compact sequence notation.
///
/// Immutable after construction; every operation takes the token text and
/// returns a fresh result, so instances can be shared and re-used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberSequence {
	domain: Domain,
}

impl NumberSequence {
	/// A sequence parser over the given kind, without limits.
	pub fn new(kind: NumericKind) -> Self {
		NumberSequence {
			domain: Domain::new(kind),
		}
	}

	/// A sequence parser with optional inclusive limits; either bound may
	/// be omitted independently.
	pub fn with_limits(kind: NumericKind, lowest: Option<Value>, highest: Option<Value>) -> Self {
		NumberSequence {
			domain: Domain::with_limits(kind, lowest, highest),
		}
	}

	/// A sequence parser over a pre-built domain.
	pub fn from_domain(domain: Domain) -> Self {
		NumberSequence { domain }
	}

	/// The domain this parser validates against.
	pub fn domain(&self) -> &Domain {
		&self.domain
	}

	/// Parses a token and materializes every value it describes, in clause
	/// order. Duplicates from overlapping clauses are preserved.
	///
	/// # Examples
	///
	/// ```
	/// # use numseq::{NumberSequence, NumericKind, Value};
	/// let seq = NumberSequence::new(NumericKind::Integer);
	/// assert_eq!(
	/// 	seq.parse("1-8/3,7-9")?,
	/// 	[1, 4, 7, 7, 8, 9].map(Value::Int).to_vec()
	/// );
	/// # Ok::<(), numseq::Error>(())
	/// ```
	pub fn parse(&self, text: &str) -> Result<Vec<Value>, Error> {
		Ok(self.generate(text)?.collect())
	}

	/// Parses a token and returns a lazy iterator over its values. The
	/// whole token is validated up front; iteration itself cannot fail.
	/// Each call returns an independent, restartable stream.
	pub fn generate(&self, text: &str) -> Result<SequenceIter, Error> {
		Ok(SequenceIter::new(parser::parse_sequence(
			&self.domain,
			text,
		)?))
	}

	/// Decides whether `candidate` is among the values `text` describes,
	/// without expanding them. Membership in any one clause suffices.
	///
	/// # Examples
	///
	/// ```
	/// # use numseq::{NumberSequence, NumericKind};
	/// let seq = NumberSequence::new(NumericKind::Integer);
	/// assert!(seq.contains("10-100000/5", 99995)?);
	/// assert!(!seq.contains("10-100000/5", 99999)?);
	/// # Ok::<(), numseq::Error>(())
	/// ```
	pub fn contains(&self, text: &str, candidate: impl Into<Value>) -> Result<bool, Error> {
		let candidate = candidate.into();
		let subsequences = parser::parse_sequence(&self.domain, text)?;
		Ok(subsequences.iter().any(|s| s.contains(candidate)))
	}

	/// The vectorized form of [`contains`](Self::contains): one parse of
	/// `text`, answers in input order.
	pub fn contains_many(&self, text: &str, candidates: &[Value]) -> Result<Vec<bool>, Error> {
		let subsequences = parser::parse_sequence(&self.domain, text)?;
		Ok(candidates
			.iter()
			.map(|&c| subsequences.iter().any(|s| s.contains(c)))
			.collect())
	}

	/// Encodes values back into canonical compact notation; the structural
	/// inverse of [`parse`](Self::parse). See [`encode`].
	pub fn encode<I>(&self, values: I) -> String
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		encode::encode(values)
	}

	/// The configuration summary plus, if a prior failure is passed, its
	/// tag. Intended for help text and debugging.
	pub fn diagnostic(&self, error: Option<&Error>) -> String {
		match error {
			Some(error) => format!("{}, ERROR: \"{}\"", self, error.tag()),
			None => self.to_string(),
		}
	}
}

impl Default for NumberSequence {
	fn default() -> Self {
		NumberSequence::new(NumericKind::Integer)
	}
}

impl Display for NumberSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.domain.kind {
			NumericKind::Integer => f.write_str("IntSequence")?,
			NumericKind::Float => f.write_str("FloatSequence")?,
		}
		self.domain.fmt_limits(f)
	}
}

/// A validator for single numeric literals against a kind and limits.
///
/// The scalar counterpart of [`NumberSequence`]: no grammar and no
/// generation, just literal parsing, the finiteness check and the limit
/// checks.
///
/// # Examples
///
/// ```
/// # use numseq::{Number, NumericKind, Value};
/// let age = Number::with_limits(
/// 	NumericKind::Integer,
/// 	Some(Value::Int(0)),
/// 	Some(Value::Int(130)),
/// );
/// assert_eq!(age.validate("42")?, Value::Int(42));
/// assert!(age.validate("150").is_err());
/// # Ok::<(), numseq::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
	domain: Domain,
}

impl Number {
	/// A scalar validator over the given kind, without limits.
	pub fn new(kind: NumericKind) -> Self {
		Number {
			domain: Domain::new(kind),
		}
	}

	/// A scalar validator with optional inclusive limits.
	pub fn with_limits(kind: NumericKind, lowest: Option<Value>, highest: Option<Value>) -> Self {
		Number {
			domain: Domain::with_limits(kind, lowest, highest),
		}
	}

	/// A scalar validator over a pre-built domain.
	pub fn from_domain(domain: Domain) -> Self {
		Number { domain }
	}

	/// The domain this validator checks against.
	pub fn domain(&self) -> &Domain {
		&self.domain
	}

	/// Parses one literal of the domain's kind and enforces finiteness and
	/// the limits.
	pub fn validate(&self, text: &str) -> Result<Value, Error> {
		let value = self
			.domain
			.kind
			.parse_literal(text)
			.ok_or_else(|| Error::ParseError {
				kind: self.domain.kind,
				text: text.to_owned(),
			})?;
		if value.is_infinite() {
			return Err(Error::InfiniteValue {
				clause: text.to_owned(),
			});
		}
		if let Some(lowest) = self.domain.lowest {
			if value < lowest {
				return Err(Error::TooLow { value, lowest });
			}
		}
		if let Some(highest) = self.domain.highest {
			if value > highest {
				return Err(Error::TooHigh { value, highest });
			}
		}
		Ok(value)
	}

	/// The configuration summary plus, if a prior failure is passed, its
	/// tag. Intended for help text and debugging.
	pub fn diagnostic(&self, error: Option<&Error>) -> String {
		match error {
			Some(error) => format!("{}, ERROR: \"{}\"", self, error.tag()),
			None => self.to_string(),
		}
	}
}

impl Default for Number {
	fn default() -> Self {
		Number::new(NumericKind::Integer)
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.domain.kind.name())?;
		self.domain.fmt_limits(f)
	}
}
