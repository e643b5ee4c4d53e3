//! Successor and predecessor functions that step a sequence through its
//! arrangements in lexicographic order. Each returns `false` when it wraps
//! around from the last arrangement to the first (or, for the `prev_`
//! functions, from the first to the last).

use std::cmp::Ordering;
use num_traits::PrimInt;

/// Steps `[0, mid)` to the next `mid`-subset of `seq` in lexicographic order.
/// Both `[0, mid)` and `[mid, len)` must be sorted, and stay sorted.
///
/// Panics if `mid > seq.len()`.
pub fn next_combination<T: Ord>(seq: &mut [T], mid: usize) -> bool {
	next_combination_by(seq, mid, T::cmp)
}
pub fn next_combination_by<T, F>(seq: &mut [T], mid: usize, mut compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	let (selected, rest) = seq.split_at_mut(mid);
	step_combination(selected, rest, |a, b| compare(a, b) == Ordering::Less)
}

/// Steps `[0, mid)` to the previous `mid`-subset. Panics if
/// `mid > seq.len()`.
pub fn prev_combination<T: Ord>(seq: &mut [T], mid: usize) -> bool {
	prev_combination_by(seq, mid, T::cmp)
}
pub fn prev_combination_by<T, F>(seq: &mut [T], mid: usize, mut compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	let (selected, rest) = seq.split_at_mut(mid);
	// the previous selection is the next one of the unselected elements
	step_combination(rest, selected, |a, b| compare(a, b) == Ordering::Less)
}

// Swaps the next larger element of `outside` into `inside`, then restores
// both to sorted order with a swap sweep and four reversals.
fn step_combination<T, F>(inside: &mut [T], outside: &mut [T], mut less: F) -> bool
	where F: FnMut(&T, &T) -> bool
{
	if inside.is_empty() || outside.is_empty() { return false }

	let (len1, len2) = (inside.len(), outside.len());
	let mut m1 = len1 - 1;
	let m2 = len2 - 1;
	while m1 != 0 && !less(&inside[m1], &outside[m2]) { m1 -= 1 }
	let last = m1 == 0 && !less(&inside[0], &outside[m2]);
	let (mut first1, mut first2) = (0, 0);
	if !last {
		while first2 != m2 && !less(&inside[m1], &outside[first2]) { first2 += 1 }
		std::mem::swap(&mut inside[m1], &mut outside[first2]);
		first1 = m1 + 1;
		first2 += 1;
	}
	if first1 != len1 && first2 != len2 {
		let (mut end1, mut i2) = (len1, first2);
		while end1 != first1 && i2 != len2 {
			end1 -= 1;
			std::mem::swap(&mut inside[end1], &mut outside[i2]);
			i2 += 1;
		}
		inside[first1..end1].reverse();
		inside[first1..].reverse();
		outside[i2..].reverse();
		outside[first2..].reverse();
	}
	!last
}

pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
	next_permutation_by(seq, T::cmp)
}
pub fn next_permutation_by<T, F>(seq: &mut [T], mut compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	step_permutation(seq, |a, b| compare(a, b) == Ordering::Less)
}

pub fn prev_permutation<T: Ord>(seq: &mut [T]) -> bool {
	prev_permutation_by(seq, T::cmp)
}
pub fn prev_permutation_by<T, F>(seq: &mut [T], mut compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	step_permutation(seq, |a, b| compare(a, b) == Ordering::Greater)
}

// `before` is the order permutations are stepped towards
fn step_permutation<T, F>(seq: &mut [T], mut before: F) -> bool
	where F: FnMut(&T, &T) -> bool
{
	if seq.len() < 2 { return false }

	let mut i = seq.len() - 1;
	while i > 0 && !before(&seq[i - 1], &seq[i]) { i -= 1 }
	if i == 0 {
		seq.reverse();
		return false
	}

	let mut j = seq.len() - 1;
	while !before(&seq[i - 1], &seq[j]) { j -= 1 }
	seq.swap(i - 1, j);
	seq[i..].reverse();
	true
}

/// Steps `[0, mid)` to the next ordered selection of `mid` elements, keeping
/// `[mid, len)` sorted. Panics if `mid > seq.len()`.
pub fn next_partial_permutation<T: Ord>(seq: &mut [T], mid: usize) -> bool {
	next_partial_permutation_by(seq, mid, T::cmp)
}
pub fn next_partial_permutation_by<T, F>(seq: &mut [T], mid: usize, compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	seq[mid..].reverse();
	next_permutation_by(seq, compare)
}

/// Panics if `mid > seq.len()`.
pub fn prev_partial_permutation<T: Ord>(seq: &mut [T], mid: usize) -> bool {
	prev_partial_permutation_by(seq, mid, T::cmp)
}
pub fn prev_partial_permutation_by<T, F>(seq: &mut [T], mid: usize, compare: F) -> bool
	where F: FnMut(&T, &T) -> Ordering
{
	let result = prev_permutation_by(seq, compare);
	seq[mid..].reverse();
	result
}

/// Advances `seq` like an odometer whose digits run over
/// `[first_value, last_value)`, stepped by `increment`.
pub fn next_mapping_by<T, I>(seq: &mut [T], first_value: &T, last_value: &T, mut increment: I) -> bool
	where T: Clone + PartialEq, I: FnMut(&mut T)
{
	for digit in seq.iter_mut().rev() {
		increment(digit);
		if digit != last_value { return true }

		*digit = first_value.clone();
	}
	false
}

pub fn prev_mapping_by<T, D>(seq: &mut [T], first_value: &T, last_value: &T, mut decrement: D) -> bool
	where T: Clone + PartialEq, D: FnMut(&mut T)
{
	let mut top = last_value.clone();
	decrement(&mut top);
	for digit in seq.iter_mut().rev() {
		if digit != first_value {
			decrement(digit);
			return true
		}

		*digit = top.clone();
	}
	false
}

pub fn next_mapping<T: PrimInt>(seq: &mut [T], first_value: T, last_value: T) -> bool {
	next_mapping_by(seq, &first_value, &last_value, |digit| *digit = *digit + T::one())
}
pub fn prev_mapping<T: PrimInt>(seq: &mut [T], first_value: T, last_value: T) -> bool {
	prev_mapping_by(seq, &first_value, &last_value, |digit| *digit = *digit - T::one())
}

/// Steps a combination with repetition, given as the number of times each
/// symbol is chosen, to the next one in lexicographic order of the sorted
/// symbol sequences. The counts' sum stays the same.
pub fn next_repeat_combination_counts<T: PrimInt>(counts: &mut [T]) -> bool {
	let last = match counts.len() {
		0 => return false,
		len => len - 1,
	};
	let carried = counts[last];
	match counts[..last].iter().rposition(|&count| count > T::zero()) {
		None => {
			counts[last] = T::zero();
			counts[0] = carried;
			false
		},
		Some(i) => {
			counts[last] = T::zero();
			counts[i] = counts[i] - T::one();
			counts[i + 1] = counts[i + 1] + carried + T::one();
			true
		},
	}
}

pub fn prev_repeat_combination_counts<T: PrimInt>(counts: &mut [T]) -> bool {
	let top = match counts.iter().rposition(|&count| count > T::zero()) {
		None => return false,
		Some(top) => top,
	};
	let last = counts.len() - 1;
	if top == 0 {
		let all = counts[0];
		counts[0] = T::zero();
		counts[last] = all;
		return false
	}

	let spill = counts[top] - T::one();
	counts[top] = T::zero();
	counts[top - 1] = counts[top - 1] + T::one();
	counts[last] = counts[last] + spill;
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_combinations_in_order() {
		let mut seq = [1, 2, 3, 4, 5];
		let mut seen = vec![seq[..3].to_vec()];
		while next_combination(&mut seq, 3) { seen.push(seq[..3].to_vec()) }
		assert_eq!(seen, vec![
			vec![1, 2, 3], vec![1, 2, 4], vec![1, 2, 5], vec![1, 3, 4], vec![1, 3, 5],
			vec![1, 4, 5], vec![2, 3, 4], vec![2, 3, 5], vec![2, 4, 5], vec![3, 4, 5],
		]);
		assert_eq!(seq, [1, 2, 3, 4, 5]);

		let mut seq = [3, 4, 5, 1, 2];
		let mut back = vec![seq[..3].to_vec()];
		while prev_combination(&mut seq, 3) { back.push(seq[..3].to_vec()) }
		back.reverse();
		assert_eq!(back, seen);
		assert_eq!(seq, [3, 4, 5, 1, 2]);
	}

	#[test]
	fn test_combination_edges() {
		let mut seq = [1, 2];
		assert!(!next_combination(&mut seq, 0));
		assert!(!next_combination(&mut seq, 2));
		assert!(!prev_combination(&mut seq, 2));
		assert_eq!(seq, [1, 2]);

		let mut descending = [5, 4, 3, 2, 1];
		assert!(next_combination_by(&mut descending, 2, |a, b| b.cmp(a)));
		assert_eq!(descending, [5, 3, 4, 2, 1]);
	}

	#[test]
	#[should_panic]
	fn test_combination_mid_past_end() {
		next_combination(&mut [1, 2], 3);
	}

	#[test]
	#[should_panic]
	fn test_partial_permutation_mid_past_end() {
		prev_partial_permutation(&mut [1, 2], 3);
	}

	#[test]
	fn test_permutations() {
		let mut seq = [1, 2, 3];
		let mut count = 1;
		while next_permutation(&mut seq) { count += 1 }
		assert_eq!(count, 6);
		assert_eq!(seq, [1, 2, 3]);
		assert!(!prev_permutation(&mut seq));
		assert_eq!(seq, [3, 2, 1]);
		assert!(prev_permutation(&mut seq));
		assert_eq!(seq, [3, 1, 2]);
		let mut repeated = [1, 1, 2];
		let mut count = 1;
		while next_permutation(&mut repeated) { count += 1 }
		assert_eq!(count, 3);
	}

	#[test]
	fn test_partial_permutations() {
		let mut seq = [1, 2, 3, 4];
		let mut seen = vec![seq[..2].to_vec()];
		while next_partial_permutation(&mut seq, 2) {
			assert!(seq[2] < seq[3]);
			seen.push(seq[..2].to_vec());
		}
		assert_eq!(seen.len(), 12);
		let mut sorted = seen.clone();
		sorted.sort();
		assert_eq!(seen, sorted);
		assert_eq!(seq, [1, 2, 3, 4]);

		assert!(!prev_partial_permutation(&mut seq, 2));
		assert_eq!(seq, [4, 3, 1, 2]);
		assert!(prev_partial_permutation(&mut seq, 2));
		assert_eq!(seq, [4, 2, 1, 3]);
	}

	#[test]
	fn test_mapping() {
		let mut digits = [0u8; 3];
		let mut count = 1;
		while next_mapping(&mut digits, 0, 3) { count += 1 }
		assert_eq!(count, 27);
		assert_eq!(digits, [0, 0, 0]);
		assert!(!prev_mapping(&mut digits, 0, 3));
		assert_eq!(digits, [2, 2, 2]);
		assert!(prev_mapping(&mut digits, 0, 3));
		assert_eq!(digits, [2, 2, 1]);

		let mut letters = ['a', 'z'];
		assert!(next_mapping_by(&mut letters, &'a', &'{', |c| *c = (*c as u8 + 1) as char));
		assert_eq!(letters, ['b', 'a']);
		assert!(!next_mapping_by(&mut [], &0, &1, |d: &mut i32| *d += 1));
	}

	#[test]
	fn test_repeat_counts() {
		// multisets of size 2 over {0, 1, 2}
		let mut counts = [2u32, 0, 0];
		let mut seen = vec![counts];
		while next_repeat_combination_counts(&mut counts) { seen.push(counts) }
		assert_eq!(seen, [[2, 0, 0], [1, 1, 0], [1, 0, 1], [0, 2, 0], [0, 1, 1], [0, 0, 2]]);
		assert_eq!(counts, [2, 0, 0]);

		let mut counts = [0u32, 0, 2];
		let mut back = vec![counts];
		while prev_repeat_combination_counts(&mut counts) { back.push(counts) }
		back.reverse();
		assert_eq!(back, seen);
		assert_eq!(counts, [0, 0, 2]);

		assert!(!next_repeat_combination_counts::<u8>(&mut []));
		assert!(!prev_repeat_combination_counts(&mut [0u8, 0]));
	}
}
