//! The numeric domain shared by every operation: a closed set of two native
//! numeric kinds, the values they produce, and optional inclusive limits.

use std::{
	cmp::Ordering,
	fmt::{self, Display},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The numeric kind of a domain, fixing parsing and comparison semantics for
/// all operations on one configured parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
	/// Native signed integers (`i64`).
	Integer,
	/// Native double-precision floats (`f64`).
	Float,
}

impl NumericKind {
	/// The kind name used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			NumericKind::Integer => "Integer",
			NumericKind::Float => "Float",
		}
	}

	/// Parse one numeric literal of this kind.
	pub(crate) fn parse_literal(self, text: &str) -> Option<Value> {
		match self {
			NumericKind::Integer => text.parse().ok().map(Value::Int),
			NumericKind::Float => text.parse().ok().map(Value::Float),
		}
	}

	/// The multiplicative unit of this kind, used as the default step.
	pub(crate) fn one(self) -> Value {
		match self {
			NumericKind::Integer => Value::Int(1),
			NumericKind::Float => Value::Float(1.0),
		}
	}
}

impl Display for NumericKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for NumericKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"int" | "integer" => Ok(NumericKind::Integer),
			"float" => Ok(NumericKind::Float),
			other => Err(Error::InvalidNumericType(other.to_owned())),
		}
	}
}

/// A single number produced or consumed by the engine, tagged with its kind.
///
/// Values of different kinds never compare equal or ordered; a domain only
/// ever produces values of its own kind.
///
/// # Examples
///
/// ```
/// # use numseq::Value;
/// assert_eq!(Value::Int(5).to_string(), "5");
/// assert_eq!(Value::Float(2.5).to_string(), "2.5");
/// assert!(Value::Int(3) < Value::Int(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// An integer-domain value.
	Int(i64),
	/// A float-domain value.
	Float(f64),
}

impl Value {
	/// Returns `true` for an infinite float; integers are always finite.
	pub fn is_infinite(self) -> bool {
		match self {
			Value::Int(_) => false,
			Value::Float(f) => f.is_infinite(),
		}
	}

	/// Returns `true` if the value is strictly greater than zero. A NaN
	/// float is not positive.
	pub(crate) fn is_positive(self) -> bool {
		match self {
			Value::Int(i) => i > 0,
			Value::Float(f) => f > 0.0,
		}
	}

	/// Returns `true` if the value is the unit of its kind.
	pub(crate) fn is_one(self) -> bool {
		match self {
			Value::Int(i) => i == 1,
			Value::Float(f) => f == 1.0,
		}
	}

	/// The value as an exact integer, coercing an integral float.
	pub(crate) fn as_int(self) -> Option<i64> {
		match self {
			Value::Int(i) => Some(i),
			Value::Float(f) => {
				if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
					Some(f as i64)
				} else {
					None
				}
			}
		}
	}

	/// The value widened to a float.
	pub(crate) fn as_f64(self) -> f64 {
		match self {
			Value::Int(i) => i as f64,
			Value::Float(f) => f,
		}
	}

	/// Per-kind addition. Integer overflow yields `None`; float addition is
	/// total (an infinite sum is rejected later by the finiteness check).
	pub(crate) fn checked_add(self, other: Value) -> Option<Value> {
		match (self, other) {
			(Value::Int(a), Value::Int(b)) => a.checked_add(b).map(Value::Int),
			(Value::Float(a), Value::Float(b)) => Some(Value::Float(a + b)),
			_ => None,
		}
	}

	/// Per-kind addition that pins an overflowing integer sum to the end of
	/// the `i64` range. Used to resolve `LOWER+OFFSET` bounds; mixed kinds
	/// widen to float.
	pub(crate) fn saturating_add(self, other: Value) -> Value {
		match (self, other) {
			(Value::Int(a), Value::Int(b)) => Value::Int(a.saturating_add(b)),
			(Value::Float(a), Value::Float(b)) => Value::Float(a + b),
			(Value::Int(a), Value::Float(b)) => Value::Float(a as f64 + b),
			(Value::Float(a), Value::Int(b)) => Value::Float(a + b as f64),
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
			(Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Int(i) => Display::fmt(i, f),
			Value::Float(x) => Display::fmt(x, f),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

/// A numeric kind plus optional inclusive limits. Immutable after
/// construction; consumed by parsing, generation, containment and the
/// scalar validator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
	/// The numeric kind of every literal this domain parses.
	pub kind: NumericKind,
	/// Inclusive lower limit on every parsed value, if set.
	#[serde(default)]
	pub lowest: Option<Value>,
	/// Inclusive upper limit on every parsed value, if set.
	#[serde(default)]
	pub highest: Option<Value>,
}

impl Domain {
	/// A domain without limits.
	pub fn new(kind: NumericKind) -> Self {
		Domain {
			kind,
			lowest: None,
			highest: None,
		}
	}

	/// A domain with optional inclusive limits; either bound may be omitted
	/// independently.
	pub fn with_limits(kind: NumericKind, lowest: Option<Value>, highest: Option<Value>) -> Self {
		Domain {
			kind,
			lowest,
			highest,
		}
	}

	/// Writes the limit summary used by the diagnostic representation.
	pub(crate) fn fmt_limits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.lowest, self.highest) {
			(Some(lo), Some(hi)) => write!(f, " (from {} to {})", lo, hi),
			(Some(lo), None) => write!(f, " (at least {})", lo),
			(None, Some(hi)) => write!(f, " (not over {})", hi),
			(None, None) => Ok(()),
		}
	}
}
