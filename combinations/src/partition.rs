//! Set partitions of `n` elements, stepped in lexicographic order of their
//! restricted growth strings.
//!
//! A partition is stored as `kappa`, where `kappa[i]` is the index of the
//! subset holding element `i`. Subsets are numbered in order of their first
//! element, so `kappa[0] == 0` and `kappa[i] <= max(kappa[..i]) + 1`.
//! The first partition puts every element in one subset (`0 0 ... 0`); the
//! last puts each in its own (`0 1 ... n-1`). See M. Orlov, "Efficient
//! generation of set partitions" (2002).

use crate::error::{check_len, Error, Result};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LexicographicPartition {
	kappa: Vec<usize>,
	// max[i] == max(kappa[..=i])
	max: Vec<usize>,
}

impl LexicographicPartition {
	/// Starts at the partition with a single subset.
	pub fn new(n: usize) -> Result<Self> {
		Self::with_start(n, false)
	}
	/// Starts at the partition of singletons if `start_at_singletons`,
	/// otherwise at the single subset.
	pub fn with_start(n: usize, start_at_singletons: bool) -> Result<Self> {
		if n == 0 { return Err(Error::InvalidArgument("a partition needs at least one element")) }

		let kappa: Vec<usize> =
			if start_at_singletons { (0..n).collect() }
			else { vec![0; n] };
		let max = kappa.clone();
		Ok(LexicographicPartition { kappa, max })
	}

	pub fn len(&self) -> usize {
		self.kappa.len()
	}
	pub fn kappa(&self) -> &[usize] {
		&self.kappa
	}
	pub fn subset_of(&self, element: usize) -> Option<usize> {
		self.kappa.get(element).copied()
	}
	pub fn num_subsets(&self) -> usize {
		self.max[self.len() - 1] + 1
	}

	pub fn has_next(&self) -> bool {
		self.num_subsets() < self.len()
	}
	pub fn has_prev(&self) -> bool {
		self.num_subsets() > 1
	}

	/// Steps to the next partition. Fails with `Overflow` at the partition
	/// of singletons, leaving it unchanged.
	pub fn increment(&mut self) -> Result<()> {
		// the rightmost element that can join a later subset
		let position = (1..self.len()).rev()
			.find(|&i| self.kappa[i] <= self.max[i - 1]);
		let i = match position {
			Some(i) => i,
			None => {
				warn_log!(n = self.len(), "partition incremented past the last one");
				return Err(Error::Overflow("LexicographicPartition::increment"))
			},
		};

		self.kappa[i] += 1;
		self.max[i] = self.max[i].max(self.kappa[i]);
		let top = self.max[i];
		for j in i + 1..self.len() {
			self.kappa[j] = 0;
			self.max[j] = top;
		}
		trace_log!(kappa = ?self.kappa, "partition incremented");
		Ok(())
	}

	/// Steps to the previous partition. Fails with `Underflow` at the
	/// single-subset partition, leaving it unchanged.
	pub fn decrement(&mut self) -> Result<()> {
		let position = (1..self.len()).rev().find(|&i| self.kappa[i] > 0);
		let i = match position {
			Some(i) => i,
			None => {
				warn_log!(n = self.len(), "partition decremented past the first one");
				return Err(Error::Underflow("LexicographicPartition::decrement"))
			},
		};

		self.kappa[i] -= 1;
		self.max[i] = self.max[i - 1].max(self.kappa[i]);
		// the largest tail: each later element opens a new subset
		for j in i + 1..self.len() {
			self.kappa[j] = self.max[j - 1] + 1;
			self.max[j] = self.kappa[j];
		}
		trace_log!(kappa = ?self.kappa, "partition decremented");
		Ok(())
	}
}

/// Groups `values` into the subsets of `partition`, keeping the order of
/// `values` within each subset.
pub fn materialize<T: Clone>(partition: &LexicographicPartition, values: &[T]) -> Result<Vec<Vec<T>>> {
	check_len(partition.len(), values.len())?;
	let mut subsets = vec![Vec::new(); partition.num_subsets()];
	for (&subset, value) in partition.kappa.iter().zip(values) {
		subsets[subset].push(value.clone());
	}
	Ok(subsets)
}
