//! Closed-form counts of the arrangements each `for_each_*` function visits,
//! for `d1` selected elements and `d2` unselected ones. Every product is
//! checked, so a count too large for `U` is an `Error::Overflow` rather than
//! a wrapped value.

use num_traits::{PrimInt, Unsigned};
use crate::error::{Error, Result};

fn gcd<U: PrimInt>(mut a: U, mut b: U) -> U {
	while b != U::zero() {
		let r = a % b;
		a = b;
		b = r;
	}
	a
}

fn two<U: PrimInt>() -> U {
	U::one() + U::one()
}

fn add<U: PrimInt>(a: U, b: U, op: &'static str) -> Result<U> {
	a.checked_add(&b).ok_or_else(|| overflow(op))
}
fn mul<U: PrimInt>(a: U, b: U, op: &'static str) -> Result<U> {
	a.checked_mul(&b).ok_or_else(|| overflow(op))
}

fn overflow(op: &'static str) -> Error {
	debug_log!("{}: count does not fit the result type", op);
	Error::Overflow(op)
}

// r * (n)(n - 1)...(stop + 1)
fn falling<U: PrimInt>(mut r: U, mut n: U, stop: U, op: &'static str) -> Result<U> {
	while n > stop {
		r = mul(r, n, op)?;
		n = n - U::one();
	}
	Ok(r)
}

/// `(d1 + d2)! / (d1! * d2!)`
pub fn count_each_combination<U: PrimInt + Unsigned>(d1: U, d2: U) -> Result<U> {
	const OP: &str = "count_each_combination";
	let (d1, d2) = if d2 < d1 { (d2, d1) } else { (d1, d2) };
	if d1 == U::zero() { return Ok(U::one()) }

	let mut n = add(d1, d2, OP)?;
	let mut r = n;
	n = n - U::one();
	let mut k = two();
	while k <= d1 {
		// r * n / k is a whole number; dividing out gcd(r, k) first keeps
		// the intermediate product as small as the result
		let g = gcd(r, k);
		r = r / g;
		r = mul(r, n / (k / g), OP)?;
		if k == d1 { break }
		k = k + U::one();
		n = n - U::one();
	}
	Ok(r)
}

/// `(d1 + d2)! / d2!`
pub fn count_each_permutation<U: PrimInt + Unsigned>(d1: U, d2: U) -> Result<U> {
	const OP: &str = "count_each_permutation";
	let n = add(d1, d2, OP)?;
	falling(U::one(), n, d2, OP)
}

/// `(d1 + d2)! / (d1 * d2!)`, or 1 when `d1 == 0`
pub fn count_each_circular_permutation<U: PrimInt + Unsigned>(d1: U, d2: U) -> Result<U> {
	const OP: &str = "count_each_circular_permutation";
	if d1 == U::zero() { return Ok(U::one()) }

	if d1 <= d2 {
		// C(d1 + d2, d1) * (d1 - 1)!
		let r = count_each_combination(d1, d2).map_err(|_| Error::Overflow(OP))?;
		falling(r, d1 - U::one(), U::one(), OP)
	}
	else {
		// (d1 + d2)...(d1 + 1) * (d1 - 1)...(d2 + 1), where d1 - 1 >= d2
		let n = add(d1, d2, OP)?;
		let r = falling(U::one(), n, d1, OP)?;
		falling(r, d1 - U::one(), d2, OP)
	}
}

/// `(d1 + d2)! / (2 * d2!)` when `d1 > 1`, otherwise `(d1 + d2)! / d2!`
pub fn count_each_reversible_permutation<U: PrimInt + Unsigned>(d1: U, d2: U) -> Result<U> {
	const OP: &str = "count_each_reversible_permutation";
	let mut n = add(d1, d2, OP)?;
	let mut r = U::one();
	if d1 > U::one() {
		// n * (n - 1) is even: halve whichever factor is
		let (mut high, mut low) = (n, n - U::one());
		if high % two() == U::zero() { high = high / two() }
		else { low = low / two() }
		r = mul(high, low, OP)?;
		n = n - two();
	}
	falling(r, n, d2, OP)
}

/// `(d1 + d2)! / (d1 * d2!)` when `d1 <= 2`, `(d1 + d2)! / (2 * d1 * d2!)`
/// when `d1 > 2`, and 1 when `d1 == 0`
pub fn count_each_reversible_circular_permutation<U: PrimInt + Unsigned>(d1: U, d2: U) -> Result<U> {
	const OP: &str = "count_each_reversible_circular_permutation";
	let r = count_each_combination(d1, d2).map_err(|_| Error::Overflow(OP))?;
	// (d1 - 1)! / 2 = 3 * 4 * ... * (d1 - 1)
	if d1 > two() { falling(r, d1 - U::one(), two(), OP) }
	else { Ok(r) }
}

/// The Bell number of `n`: how many ways a set of `n` elements splits into
/// non-empty subsets.
pub fn count_each_partition<U: PrimInt + Unsigned>(n: usize) -> Result<U> {
	const OP: &str = "count_each_partition";
	if n == 0 { return Ok(U::one()) }

	// Bell triangle; the last entry of row i is Bell(i + 1)
	let mut row = vec![U::one()];
	for _ in 1..n {
		let mut next = Vec::with_capacity(row.len() + 1);
		let mut entry = row[row.len() - 1];
		next.push(entry);
		for &above in &row {
			entry = add(entry, above, OP)?;
			next.push(entry);
		}
		row = next;
	}
	Ok(row[row.len() - 1])
}

/// `2^n`, or `2^n - 1` without the empty set
pub fn count_each_subset<U: PrimInt + Unsigned>(n: usize, include_empty: bool) -> Result<U> {
	const OP: &str = "count_each_subset";
	let bits = U::zero().count_zeros() as usize;
	if n < bits {
		let all = U::one() << n;
		Ok(if include_empty { all } else { all - U::one() })
	}
	else if n == bits && !include_empty { Ok(U::max_value()) }
	else { Err(overflow(OP)) }
}
