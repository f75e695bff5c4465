//! The range grammar: tokenizing comma-separated clauses into validated
//! subsequences, and deciding membership without expansion.
//!
//! Grammar, per domain kind:
//!
//! ```text
//! SEQUENCE := SUBSEQ (',' SUBSEQ)*
//! SUBSEQ   := LOWER [ SEP UPPER_OR_OFFSET ] [ '/' STEP ]
//! SEP      := '-' | '+'
//! ```
//!
//! With `-` the right-hand side is the upper bound itself; with `+` it is an
//! offset added to `LOWER`. The separator search starts at byte index 1 of
//! the bounds text so a leading sign is never mistaken for a separator
//! (`-4--2` is the range from -4 to -2).

use crate::{
	domain::{Domain, Value},
	error::Error,
};

/// Absolute tolerance on the fractional step-quotient deviation accepted by
/// float containment. A deviation of exactly this much is not a match.
const STEP_TOLERANCE: f64 = 1e-5;

/// One validated clause: the inclusive bounds and the positive step.
///
/// Invariants: `lower <= upper`, `step > 0`, all three finite and inside the
/// domain limits. Built per comma-delimited clause and consumed by
/// generation or containment within the same call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Subsequence {
	pub(crate) lower: Value,
	pub(crate) upper: Value,
	pub(crate) step: Value,
}

impl Subsequence {
	/// Whether `candidate` is one of the values this clause expands to,
	/// decided arithmetically. A candidate of the other numeric kind is
	/// coerced when exact and rejected otherwise.
	pub(crate) fn contains(&self, candidate: Value) -> bool {
		match self.step {
			Value::Int(step) => {
				let (Some(c), Some(lower), Some(upper)) =
					(candidate.as_int(), self.lower.as_int(), self.upper.as_int())
				else {
					return false;
				};
				// Widen so the span cannot overflow.
				c >= lower && c <= upper && (c as i128 - lower as i128) % step as i128 == 0
			}
			Value::Float(step) => {
				let c = candidate.as_f64();
				let lower = self.lower.as_f64();
				if c < lower || c > self.upper.as_f64() {
					return false;
				}
				let q = (c - lower) / step;
				(q - q.round()).abs() < STEP_TOLERANCE
			}
		}
	}
}

/// The separator flavor found in a clause's bounds text.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Sep {
	/// `-`: the right-hand side is the upper bound.
	Upper,
	/// `+`: the right-hand side is an offset above the lower bound.
	Offset,
}

/// Finds the first `-` or `+` at byte index 1 or later, so a sign on the
/// leading literal is never taken as the separator.
fn find_separator(bounds: &str) -> Option<(usize, Sep)> {
	bounds.char_indices().skip(1).find_map(|(at, c)| match c {
		'-' => Some((at, Sep::Upper)),
		'+' => Some((at, Sep::Offset)),
		_ => None,
	})
}

/// Parses a whole token into its clause list, stopping at the first invalid
/// clause. The empty token is the empty sequence.
pub(crate) fn parse_sequence(domain: &Domain, text: &str) -> Result<Vec<Subsequence>, Error> {
	if text.is_empty() {
		return Ok(Vec::new());
	}
	text.split(',')
		.enumerate()
		.map(|(index, clause)| parse_clause(domain, index, clause))
		.collect()
}

/// Validates one comma-delimited clause, first failure winning.
fn parse_clause(domain: &Domain, index: usize, clause: &str) -> Result<Subsequence, Error> {
	if clause.is_empty() {
		return Err(Error::EmptySubsequence(index));
	}

	let (bounds, step_text) = match clause.split_once('/') {
		Some((bounds, step)) => (bounds, Some(step)),
		None => (clause, None),
	};
	let sep = find_separator(bounds);

	let step = match step_text {
		Some(text) => {
			if sep.is_none() {
				return Err(Error::MissingUpper {
					clause: clause.to_owned(),
				});
			}
			let step = domain
				.kind
				.parse_literal(text)
				.ok_or_else(|| Error::InvalidStep {
					clause: clause.to_owned(),
					step: text.to_owned(),
				})?;
			if !step.is_positive() {
				return Err(Error::StepNotPositive {
					clause: clause.to_owned(),
					step,
				});
			}
			step
		}
		None => domain.kind.one(),
	};

	let (lower, upper) = match sep {
		Some((at, sep)) => {
			let lower_text = &bounds[..at];
			let upper_text = &bounds[at + 1..];
			let lower =
				domain
					.kind
					.parse_literal(lower_text)
					.ok_or_else(|| Error::InvalidLower {
						clause: clause.to_owned(),
						lower: lower_text.to_owned(),
					})?;
			let rhs = domain
				.kind
				.parse_literal(upper_text)
				.ok_or_else(|| Error::InvalidUpper {
					clause: clause.to_owned(),
					upper: upper_text.to_owned(),
				})?;
			let upper = match sep {
				Sep::Upper => rhs,
				Sep::Offset => lower.saturating_add(rhs),
			};
			(lower, upper)
		}
		None => {
			let value = domain
				.kind
				.parse_literal(bounds)
				.ok_or_else(|| Error::InvalidLower {
					clause: clause.to_owned(),
					lower: bounds.to_owned(),
				})?;
			(value, value)
		}
	};

	if upper < lower {
		return Err(Error::UpperLessThanLower {
			clause: clause.to_owned(),
			lower,
			upper,
		});
	}
	if lower.is_infinite() || upper.is_infinite() || step.is_infinite() {
		return Err(Error::InfiniteValue {
			clause: clause.to_owned(),
		});
	}
	if let Some(lowest) = domain.lowest {
		if lower < lowest {
			return Err(Error::LowerTooSmall {
				clause: clause.to_owned(),
				lower,
				lowest,
			});
		}
	}
	if let Some(highest) = domain.highest {
		if upper > highest {
			return Err(Error::UpperTooLarge {
				clause: clause.to_owned(),
				upper,
				highest,
			});
		}
	}

	Ok(Subsequence { lower, upper, step })
}

#[cfg(test)]
mod tests {
	use expect_test::expect;

	use super::*;
	use crate::domain::NumericKind;

	fn int_domain() -> Domain {
		Domain::new(NumericKind::Integer)
	}

	fn parse(domain: &Domain, text: &str) -> Result<Vec<(Value, Value, Value)>, Error> {
		Ok(parse_sequence(domain, text)?
			.into_iter()
			.map(|s| (s.lower, s.upper, s.step))
			.collect())
	}

	#[test]
	fn test_scalar_clauses() {
		use Value::Int;
		let d = int_domain();
		assert_eq!(parse(&d, "1234"), Ok(vec![(Int(1234), Int(1234), Int(1))]));
		assert_eq!(parse(&d, "-123"), Ok(vec![(Int(-123), Int(-123), Int(1))]));
		assert_eq!(parse(&d, "+123"), Ok(vec![(Int(123), Int(123), Int(1))]));
		assert_eq!(parse(&d, ""), Ok(vec![]));
	}

	#[test]
	fn test_range_clauses() {
		use Value::Int;
		let d = int_domain();
		assert_eq!(parse(&d, "12-20"), Ok(vec![(Int(12), Int(20), Int(1))]));
		assert_eq!(parse(&d, "12-20/4"), Ok(vec![(Int(12), Int(20), Int(4))]));
		assert_eq!(parse(&d, "-2-2"), Ok(vec![(Int(-2), Int(2), Int(1))]));
		assert_eq!(parse(&d, "-4--2"), Ok(vec![(Int(-4), Int(-2), Int(1))]));
		assert_eq!(
			parse(&d, "1-3,7-9"),
			Ok(vec![(Int(1), Int(3), Int(1)), (Int(7), Int(9), Int(1))])
		);
	}

	#[test]
	fn test_offset_clauses() {
		use Value::Int;
		let d = int_domain();
		// `+` makes the right-hand side a span above LOWER.
		assert_eq!(parse(&d, "10+5"), Ok(vec![(Int(10), Int(15), Int(1))]));
		assert_eq!(parse(&d, "-4+2"), Ok(vec![(Int(-4), Int(-2), Int(1))]));
		assert_eq!(parse(&d, "10+20/5"), Ok(vec![(Int(10), Int(30), Int(5))]));
		// A leading sign is skipped by the separator scan no matter which
		// character it is.
		assert_eq!(parse(&d, "+8-+12"), Ok(vec![(Int(8), Int(12), Int(1))]));
		assert_eq!(parse(&d, "+8+4"), Ok(vec![(Int(8), Int(12), Int(1))]));
		// A negative offset lands below LOWER.
		assert_eq!(
			parse(&d, "5+-2"),
			Err(Error::UpperLessThanLower {
				clause: "5+-2".to_owned(),
				lower: Int(5),
				upper: Int(3),
			})
		);
	}

	#[test]
	fn test_float_clauses() {
		use Value::Float;
		let d = Domain::new(NumericKind::Float);
		assert_eq!(
			parse(&d, "0-21/3.5"),
			Ok(vec![(Float(0.0), Float(21.0), Float(3.5))])
		);
		assert_eq!(
			parse(&d, "3e2-3.1e2/5"),
			Ok(vec![(Float(300.0), Float(310.0), Float(5.0))])
		);
	}

	#[test]
	fn test_grammar_errors() {
		let d = int_domain();
		let err = |text: &str| parse(&d, text).unwrap_err();

		assert_eq!(err("1-2,,8-9"), Error::EmptySubsequence(1));
		assert!(matches!(err("1/8"), Error::MissingUpper { .. }));
		assert!(matches!(err("1/-8"), Error::MissingUpper { .. }));
		assert!(matches!(err("-123--5/zz"), Error::InvalidStep { .. }));
		assert!(matches!(err("1-8/0"), Error::StepNotPositive { .. }));
		assert!(matches!(err("1-8/-8"), Error::StepNotPositive { .. }));
		assert!(matches!(err("zz-5"), Error::InvalidLower { .. }));
		assert!(matches!(err("junk"), Error::InvalidLower { .. }));
		assert!(matches!(err("5-zz"), Error::InvalidUpper { .. }));
		assert!(matches!(err("8-1"), Error::UpperLessThanLower { .. }));

		expect![[r#"subsequence "8-1": UPPER 1 is less than LOWER 8"#]]
			.assert_eq(&err("8-1").to_string());
		expect![[r#"subsequence "1/8": STEP given without an UPPER bound"#]]
			.assert_eq(&err("1/8").to_string());
		expect![[r#"subsequence "1-8/0": STEP must be positive, got 0"#]]
			.assert_eq(&err("1-8/0").to_string());
		expect!["subsequence #1 is empty"].assert_eq(&err("1-2,,8-9").to_string());
	}

	#[test]
	fn test_infinite_values() {
		let d = Domain::new(NumericKind::Float);
		assert_eq!(
			parse(&d, "1e999"),
			Err(Error::InfiniteValue {
				clause: "1e999".to_owned()
			})
		);
		assert!(matches!(
			parse(&d, "0-1/inf").unwrap_err(),
			Error::InfiniteValue { .. }
		));
	}

	#[test]
	fn test_limits() {
		use Value::Int;
		let d = Domain::with_limits(NumericKind::Integer, Some(Int(4)), Some(Int(8)));
		assert_eq!(
			parse(&d, "1-8"),
			Err(Error::LowerTooSmall {
				clause: "1-8".to_owned(),
				lower: Int(1),
				lowest: Int(4),
			})
		);
		assert_eq!(
			parse(&d, "5-9"),
			Err(Error::UpperTooLarge {
				clause: "5-9".to_owned(),
				upper: Int(9),
				highest: Int(8),
			})
		);
		assert!(parse(&d, "4-8").is_ok());

		let at_least = Domain::with_limits(NumericKind::Integer, Some(Int(0)), None);
		assert!(parse(&at_least, "0-100000").is_ok());
		assert!(parse(&at_least, "-1-5").is_err());
	}

	#[test]
	fn test_validation_order() {
		// The step checks run before the bounds are even looked at.
		let d = int_domain();
		assert!(matches!(
			parse(&d, "zz-5/0").unwrap_err(),
			Error::StepNotPositive { .. }
		));
		assert!(matches!(
			parse(&d, "zz-5/aa").unwrap_err(),
			Error::InvalidStep { .. }
		));
		// UPPER<LOWER is reported before the limit checks.
		let limited = Domain::with_limits(NumericKind::Integer, Some(Value::Int(4)), None);
		assert!(matches!(
			parse(&limited, "3-1").unwrap_err(),
			Error::UpperLessThanLower { .. }
		));
	}

	#[test]
	fn test_integer_containment() {
		let d = int_domain();
		let seq = parse_sequence(&d, "10-100000/5").unwrap();
		assert!(seq.iter().any(|s| s.contains(Value::Int(99995))));
		assert!(!seq.iter().any(|s| s.contains(Value::Int(99999))));

		// Far too wide to ever materialize.
		let wide = parse_sequence(&d, "10-100000000/5").unwrap();
		assert!(wide.iter().any(|s| s.contains(Value::Int(99999995))));
		assert!(!wide.iter().any(|s| s.contains(Value::Int(99999996))));
		assert!(!wide.iter().any(|s| s.contains(Value::Int(5))));

		// An integral float coerces; a fractional one cannot be a member.
		assert!(seq.iter().any(|s| s.contains(Value::Float(99995.0))));
		assert!(!seq.iter().any(|s| s.contains(Value::Float(99995.5))));
	}

	#[test]
	fn test_float_containment_tolerance() {
		let d = Domain::new(NumericKind::Float);
		let seq = parse_sequence(&d, "0-13.0/0.13").unwrap();
		let hit = |c: f64| seq.iter().any(|s| s.contains(Value::Float(c)));

		assert!(hit(6.5));
		assert!(hit(0.0));
		assert!(hit(13.0));
		assert!(!hit(13.1));
		assert!(!hit(-0.13));
		// Fractional deviation of 5e-6 steps is inside the tolerance,
		// 5e-5 steps is outside.
		assert!(hit(6.5 + 0.13 * 5e-6));
		assert!(!hit(6.5 + 0.13 * 5e-5));
	}

	#[test]
	fn test_tolerance_boundary_is_exclusive() {
		let unit = Subsequence {
			lower: Value::Float(0.0),
			upper: Value::Float(10.0),
			step: Value::Float(1.0),
		};
		// With a unit step the quotient deviation is the fractional part
		// itself, so the threshold can be probed directly.
		assert!(unit.contains(Value::Float(3.0 + 9e-6)));
		assert!(!unit.contains(Value::Float(3.0 + 1e-5)));
		assert!(!unit.contains(Value::Float(3.0 + 2e-5)));
	}
}
