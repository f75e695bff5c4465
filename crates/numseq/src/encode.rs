//! Canonical reconstruction of compact notation from a value sequence.

use itertools::Itertools;

use crate::domain::Value;

/// Encodes an ordered value sequence as the canonical compact notation that
/// re-expands to exactly that sequence.
///
/// A greedy left-to-right pass: a run of at least three values with a
/// constant positive delta becomes a `LOWER-UPPER` clause (with `/STEP`
/// unless the step is 1); everything else is emitted as scalar clauses.
/// Two equal-delta values never collapse into a range, since that text
/// would be no shorter and the pair is ambiguous with two scalars.
/// Duplicates and unsorted input are legal and survive the round trip; the
/// empty sequence encodes to the empty string.
///
/// # Examples
///
/// ```
/// # use numseq::encode;
/// assert_eq!(encode([1i64, 5, 8]), "1,5,8");
/// assert_eq!(encode([1i64, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12]), "1-8,10-12");
/// assert_eq!(encode([1.25f64, 3.75, 6.25, 8.75, 11.25]), "1.25-11.25/2.5");
/// assert_eq!(encode::<[i64; 0]>([]), "");
/// ```
pub fn encode<I>(values: I) -> String
where
	I: IntoIterator,
	I::Item: Into<Value>,
{
	let values: Vec<Value> = values.into_iter().map(Into::into).collect();
	let mut clauses: Vec<String> = Vec::new();
	let mut at = 0;
	while at < values.len() {
		match run_at(&values, at) {
			Some((len, step)) => {
				let lower = values[at];
				let upper = values[at + len - 1];
				if step.is_one() {
					clauses.push(format!("{}-{}", lower, upper));
				} else {
					clauses.push(format!("{}-{}/{}", lower, upper, step));
				}
				at += len;
			}
			// Too short for a range; re-seed the run search at the next
			// element so `1,3,4,…,8` still discovers `3-8`.
			None => {
				clauses.push(values[at].to_string());
				at += 1;
			}
		}
	}
	clauses.iter().join(",")
}

/// The longest constant-delta run starting at `at`, if it can be committed
/// as a range clause: at least three values and a positive step.
fn run_at(values: &[Value], at: usize) -> Option<(usize, Value)> {
	let step = delta(values[at], *values.get(at + 1)?)?;
	if !step.is_positive() {
		return None;
	}
	let mut len = 2;
	while at + len < values.len() && delta(values[at + len - 1], values[at + len]) == Some(step) {
		len += 1;
	}
	(len >= 3).then_some((len, step))
}

/// The exact delta between two values of the same kind. `None` for mixed
/// kinds or an integer span that overflows.
fn delta(a: Value, b: Value) -> Option<Value> {
	match (a, b) {
		(Value::Int(a), Value::Int(b)) => b.checked_sub(a).map(Value::Int),
		(Value::Float(a), Value::Float(b)) => Some(Value::Float(b - a)),
		_ => None,
	}
}
