//! Validation failures. Every failure is local, synchronous and
//! non-retryable: the current parse or validate call aborts and the caller
//! receives the structured error, never a partial result.

use thiserror::Error;

use crate::domain::{NumericKind, Value};

/// A parse or validation failure.
///
/// Each variant carries enough context to format a message naming the
/// offending clause and values; [`Error::tag`] yields the short label used
/// in diagnostic summaries.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
	/// A numeric kind name outside the supported closed set.
	#[error("invalid numeric type: {0:?}")]
	InvalidNumericType(String),
	/// An empty clause between commas.
	#[error("subsequence #{0} is empty")]
	EmptySubsequence(usize),
	/// A `/STEP` suffix on a clause without a range separator.
	#[error("subsequence {clause:?}: STEP given without an UPPER bound")]
	MissingUpper {
		/// The offending clause text.
		clause: String,
	},
	/// A step literal that does not parse in the domain's kind.
	#[error("subsequence {clause:?}: invalid STEP {step:?}")]
	InvalidStep {
		/// The offending clause text.
		clause: String,
		/// The step literal as written.
		step: String,
	},
	/// A step that is zero or negative.
	#[error("subsequence {clause:?}: STEP must be positive, got {step}")]
	StepNotPositive {
		/// The offending clause text.
		clause: String,
		/// The parsed step value.
		step: Value,
	},
	/// A lower bound (or bare scalar clause) that does not parse.
	#[error("subsequence {clause:?}: invalid LOWER {lower:?}")]
	InvalidLower {
		/// The offending clause text.
		clause: String,
		/// The lower literal as written.
		lower: String,
	},
	/// An upper bound or offset that does not parse.
	#[error("subsequence {clause:?}: invalid UPPER {upper:?}")]
	InvalidUpper {
		/// The offending clause text.
		clause: String,
		/// The upper literal as written.
		upper: String,
	},
	/// A range whose upper bound is below its lower bound.
	#[error("subsequence {clause:?}: UPPER {upper} is less than LOWER {lower}")]
	UpperLessThanLower {
		/// The offending clause text.
		clause: String,
		/// The parsed lower bound.
		lower: Value,
		/// The parsed upper bound.
		upper: Value,
	},
	/// A bound, step or scalar that is infinite.
	#[error("numeric values cannot be infinite ({clause})")]
	InfiniteValue {
		/// The offending clause or literal text.
		clause: String,
	},
	/// A lower bound below the domain's lowest limit.
	#[error("subsequence {clause:?}: LOWER {lower} cannot be less than {lowest}")]
	LowerTooSmall {
		/// The offending clause text.
		clause: String,
		/// The parsed lower bound.
		lower: Value,
		/// The domain limit it violates.
		lowest: Value,
	},
	/// An upper bound above the domain's highest limit.
	#[error("subsequence {clause:?}: UPPER {upper} cannot be greater than {highest}")]
	UpperTooLarge {
		/// The offending clause text.
		clause: String,
		/// The parsed upper bound.
		upper: Value,
		/// The domain limit it violates.
		highest: Value,
	},
	/// A scalar literal that does not parse (scalar validator only).
	#[error("invalid {} value: {text:?}", .kind.name())]
	ParseError {
		/// The expected numeric kind.
		kind: NumericKind,
		/// The literal as written.
		text: String,
	},
	/// A scalar below the domain's lowest limit (scalar validator only).
	#[error("value ({value}) must not be less than {lowest}")]
	TooLow {
		/// The parsed value.
		value: Value,
		/// The domain limit it violates.
		lowest: Value,
	},
	/// A scalar above the domain's highest limit (scalar validator only).
	#[error("value ({value}) must not be higher than {highest}")]
	TooHigh {
		/// The parsed value.
		value: Value,
		/// The domain limit it violates.
		highest: Value,
	},
}

impl Error {
	/// The short tag naming the failure, as embedded in diagnostic
	/// representations.
	pub fn tag(&self) -> &'static str {
		match self {
			Error::InvalidNumericType(_) => "Invalid numeric type",
			Error::EmptySubsequence(_) => "Empty subsequence",
			Error::MissingUpper { .. } => "Missing UPPER",
			Error::InvalidStep { .. } => "Invalid STEP",
			Error::StepNotPositive { .. } => "STEP must be positive",
			Error::InvalidLower { .. } => "Invalid LOWER",
			Error::InvalidUpper { .. } => "Invalid UPPER",
			Error::UpperLessThanLower { .. } => "UPPER<LOWER",
			Error::InfiniteValue { .. } => "Infinite Value",
			Error::LowerTooSmall { .. } => "LOWER too small",
			Error::UpperTooLarge { .. } => "UPPER too large",
			Error::ParseError { .. } => "Parse Error",
			Error::TooLow { .. } => "Too Low",
			Error::TooHigh { .. } => "Too High",
		}
	}
}
