//! Subsets of `n` elements, stepped as an `n`-bit binary counter. Bit `i`
//! set means element `i` is in the subset.

use bit_vector::BitVector;
use crate::error::{check_len, Error, Result};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LexicographicSubset {
	bits: BitVector,
	ones: usize,
	include_empty: bool,
}

impl LexicographicSubset {
	/// Starts at the empty set if `include_empty`, otherwise at `{0}`.
	pub fn new(n: usize, include_empty: bool) -> Result<Self> {
		if n == 0 { return Err(Error::InvalidArgument("a subset counter needs at least one element")) }

		let mut bits = BitVector::zeros(n);
		let mut ones = 0;
		if !include_empty {
			bits.set(0, true);
			ones = 1;
		}
		Ok(LexicographicSubset { bits, ones, include_empty })
	}

	pub fn len(&self) -> usize {
		self.bits.len()
	}
	/// How many elements the current subset holds.
	pub fn size(&self) -> usize {
		self.ones
	}
	pub fn include_empty(&self) -> bool {
		self.include_empty
	}
	pub fn contains(&self, element: usize) -> bool {
		self.bits.get(element).unwrap_or(false)
	}
	pub fn bits(&self) -> &BitVector {
		&self.bits
	}

	pub fn has_next(&self) -> bool {
		self.ones < self.len()
	}
	pub fn has_prev(&self) -> bool {
		if self.include_empty { self.ones > 0 }
		else { self.ones > 1 || !self.contains(0) }
	}

	/// Steps to the next subset. Fails with `Overflow` at the full set,
	/// leaving it unchanged.
	pub fn increment(&mut self) -> Result<()> {
		if !self.has_next() {
			warn_log!(n = self.len(), "subset incremented past the full set");
			return Err(Error::Overflow("LexicographicSubset::increment"))
		}

		self.bits.increment();
		self.ones = self.bits.count_ones();
		trace_log!(size = self.ones, "subset incremented");
		Ok(())
	}

	/// Steps to the previous subset. Fails with `Underflow` at the first
	/// subset, leaving it unchanged.
	pub fn decrement(&mut self) -> Result<()> {
		if !self.has_prev() {
			warn_log!(n = self.len(), "subset decremented past the first one");
			return Err(Error::Underflow("LexicographicSubset::decrement"))
		}

		self.bits.decrement();
		self.ones = self.bits.count_ones();
		trace_log!(size = self.ones, "subset decremented");
		Ok(())
	}

	/// The elements of the subset, in increasing order. Iterate from the back
	/// for decreasing order.
	pub fn positions(&self) -> Positions<'_> {
		Positions {
			bits: &self.bits,
			front: self.bits.find_first(),
			back: self.bits.find_last(),
		}
	}
}

/// A cursor over the set bits of a subset that moves in either direction.
pub struct Positions<'a> {
	bits: &'a BitVector,
	front: Option<usize>,
	back: Option<usize>,
}

impl<'a> Positions<'a> {
	fn finish(&mut self) {
		self.front = None;
		self.back = None;
	}
}

impl<'a> Iterator for Positions<'a> {
	type Item = usize;

	fn next(&mut self) -> Option<usize> {
		let (front, back) = (self.front?, self.back?);
		if front == back { self.finish() }
		else { self.front = self.bits.find_next(front) }
		Some(front)
	}
}

impl<'a> DoubleEndedIterator for Positions<'a> {
	fn next_back(&mut self) -> Option<usize> {
		let (front, back) = (self.front?, self.back?);
		if front == back { self.finish() }
		else { self.back = self.bits.find_prev(back) }
		Some(back)
	}
}

/// The values picked out by `subset`, in their original order.
pub fn materialize<T: Clone>(subset: &LexicographicSubset, values: &[T]) -> Result<Vec<T>> {
	check_len(subset.len(), values.len())?;
	Ok(subset.positions().map(|i| values[i].clone()).collect())
}
