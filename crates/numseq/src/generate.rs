//! Lazy expansion of a validated clause list into an ordered value stream.

use std::iter::FusedIterator;

use crate::{domain::Value, parser::Subsequence};

/// A lazy, finite iterator over the values a token describes.
///
/// Clauses are expanded in source order and concatenated; values from
/// different clauses are never merged, deduplicated or sorted. Each call to
/// [`NumberSequence::generate`](crate::NumberSequence::generate) builds an
/// independent instance, so a configured parser can be re-used and streams
/// never share cursor state.
#[derive(Clone, Debug)]
pub struct SequenceIter {
	subsequences: std::vec::IntoIter<Subsequence>,
	current: Option<Cursor>,
}

/// Expansion state of the clause currently being emitted.
#[derive(Clone, Copy, Debug)]
struct Cursor {
	next: Value,
	upper: Value,
	step: Value,
}

impl SequenceIter {
	pub(crate) fn new(subsequences: Vec<Subsequence>) -> Self {
		SequenceIter {
			subsequences: subsequences.into_iter(),
			current: None,
		}
	}
}

impl Iterator for SequenceIter {
	type Item = Value;

	fn next(&mut self) -> Option<Value> {
		loop {
			if let Some(mut cursor) = self.current.take() {
				if cursor.next <= cursor.upper {
					let value = cursor.next;
					if let Some(n) = value.checked_add(cursor.step) {
						// A step below the cursor's resolution would stall;
						// treat it like running off the end.
						if n != value {
							cursor.next = n;
							self.current = Some(cursor);
						}
					}
					return Some(value);
				}
			}
			let sub = self.subsequences.next()?;
			self.current = Some(Cursor {
				next: sub.lower,
				upper: sub.upper,
				step: sub.step,
			});
		}
	}
}

impl FusedIterator for SequenceIter {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::domain::Value::{Float, Int};

	fn subseq(lower: Value, upper: Value, step: Value) -> Subsequence {
		Subsequence { lower, upper, step }
	}

	#[test]
	fn test_single_clause() {
		let values: Vec<_> = SequenceIter::new(vec![subseq(Int(1), Int(5), Int(1))]).collect();
		assert_eq!(values, vec![Int(1), Int(2), Int(3), Int(4), Int(5)]);
	}

	#[test]
	fn test_unreachable_upper_is_skipped() {
		// 12, 16, 20 — the bound itself is reachable; 12-19/4 stops at 16.
		let values: Vec<_> = SequenceIter::new(vec![subseq(Int(12), Int(19), Int(4))]).collect();
		assert_eq!(values, vec![Int(12), Int(16)]);
	}

	#[test]
	fn test_clause_order_preserved() {
		let values: Vec<_> = SequenceIter::new(vec![
			subseq(Int(7), Int(9), Int(1)),
			subseq(Int(5), Int(6), Int(1)),
		])
		.collect();
		assert_eq!(values, vec![Int(7), Int(8), Int(9), Int(5), Int(6)]);
	}

	#[test]
	fn test_float_accumulation() {
		let values: Vec<_> =
			SequenceIter::new(vec![subseq(Float(0.0), Float(21.0), Float(3.5))]).collect();
		assert_eq!(
			values,
			vec![
				Float(0.0),
				Float(3.5),
				Float(7.0),
				Float(10.5),
				Float(14.0),
				Float(17.5),
				Float(21.0)
			]
		);
	}

	#[test]
	fn test_integer_overflow_terminates() {
		let values: Vec<_> =
			SequenceIter::new(vec![subseq(Int(i64::MAX - 3), Int(i64::MAX), Int(2))]).collect();
		assert_eq!(values, vec![Int(i64::MAX - 3), Int(i64::MAX - 1)]);
	}

	#[test]
	fn test_stalled_float_step_terminates() {
		// 1e16 + 0.5 rounds back to 1e16; the stream must stay finite.
		let mut it = SequenceIter::new(vec![subseq(Float(1e16), Float(2e16), Float(0.5))]);
		assert_eq!(it.next(), Some(Float(1e16)));
		assert_eq!(it.next(), None);
	}

	#[test]
	fn test_nan_bounds_yield_nothing() {
		let values: Vec<_> =
			SequenceIter::new(vec![subseq(Float(f64::NAN), Float(f64::NAN), Float(1.0))]).collect();
		assert!(values.is_empty());
	}
}
