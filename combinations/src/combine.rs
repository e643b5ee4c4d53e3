use crate::rotate::{rotate_discontinuous, rotate_discontinuous3};
use crate::span::Span;

/// Called once per arrangement by the enumeration engines, with the whole
/// sequence being rearranged. Returning `true` stops the traversal.
pub trait Visit<T> {
	fn visit(&mut self, seq: &mut [T]) -> bool;
}

impl<T, F: FnMut(&mut [T]) -> bool> Visit<T> for F {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		self(seq)
	}
}

/// Calls `f` once for each way of choosing `a.len()` elements out of `a` and
/// `b` combined, with the chosen elements swapped into `a`.
///
/// If `f` never stops, it is called exactly `C(a.len() + b.len(), a.len())`
/// times and both spans are left as they were. If `f` returns `true`, this
/// returns `true` immediately and the spans hold some intermediate
/// arrangement.
pub fn combine_discontinuous<T, V: Visit<T>>(seq: &mut [T], a: Span, b: Span, f: &mut V) -> bool {
	combine(seq, a, b, f, false)
}

fn combine<T, V: Visit<T>>(seq: &mut [T], a: Span, b: Span, f: &mut V, nested: bool) -> bool {
	if a.is_empty() || b.is_empty() { return f.visit(seq) }

	if a.len() == 1 {
		for i2 in b.indices() {
			if f.visit(seq) { return true }

			seq.swap(a.start, i2);
		}
	}
	else {
		let rest = a.skip(1);
		for i2 in b.indices() {
			if combine(seq, rest, Span::new(i2, b.end), f, true) { return true }

			seq.swap(a.start, i2);
		}
	}
	if f.visit(seq) { return true }

	// A nested call only owns b[1..]; b[0] belongs to the caller's swap
	if nested { rotate_discontinuous(seq, a, b.skip(1)) }
	else { rotate_discontinuous(seq, a, b) }
	false
}

/// Like `combine_discontinuous`, but the elements not in `a` are spread over
/// two spans `b` and `c`. Calls `f` `C(a.len() + b.len() + c.len(), a.len())`
/// times and restores all three spans unless stopped.
pub fn combine_discontinuous3<T, V: Visit<T>>(seq: &mut [T], a: Span, b: Span, c: Span, f: &mut V) -> bool {
	if b.is_empty() { return combine_discontinuous(seq, a, c, f) }
	if c.is_empty() { return combine_discontinuous(seq, a, b, f) }
	if a.is_empty() { return f.visit(seq) }

	combine3(seq, a, b, c, f, false)
}

fn combine3<T, V: Visit<T>>(seq: &mut [T], a: Span, b: Span, c: Span, f: &mut V, nested: bool) -> bool {
	if a.len() == 1 {
		for i2 in b.indices() {
			if f.visit(seq) { return true }

			seq.swap(a.start, i2);
		}
		if f.visit(seq) { return true }

		// hop the gap between b and c
		seq.swap(a.start, b.end - 1);
		seq.swap(a.start, c.start);
		for i3 in c.skip(1).indices() {
			if f.visit(seq) { return true }

			seq.swap(a.start, i3);
		}
	}
	else {
		let rest = a.skip(1);
		for i2 in b.indices() {
			if combine3(seq, rest, Span::new(i2, b.end), c, f, true) { return true }

			seq.swap(a.start, i2);
		}
		for i3 in c.indices() {
			if combine(seq, rest, Span::new(i3, c.end), f, true) { return true }

			seq.swap(a.start, i3);
		}
	}
	if f.visit(seq) { return true }

	if a.len() == 1 { seq.swap(b.end - 1, c.start) }
	if !nested { rotate_discontinuous3(seq, a, b, c) }
	else if b.len() > 1 { rotate_discontinuous3(seq, a, b.skip(1), c) }
	else { rotate_discontinuous(seq, a, c) }
	false
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeSet;

	fn binomial(n: usize, k: usize) -> usize {
		(0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
	}

	fn chosen(seq: &[usize], a: Span) -> Vec<usize> {
		let mut result = seq[a.start..a.end].to_vec();
		result.sort_unstable();
		result
	}

	#[test]
	fn test_zero_and_full() {
		let mut seq = vec![1, 2, 3];
		let mut calls = 0;
		combine_discontinuous(&mut seq, Span::new(0, 0), Span::new(0, 3), &mut |_: &mut [i32]| {
			calls += 1;
			false
		});
		assert_eq!(calls, 1);
		combine_discontinuous(&mut seq, Span::new(0, 3), Span::new(3, 3), &mut |_: &mut [i32]| {
			calls += 1;
			false
		});
		assert_eq!(calls, 2);
		assert_eq!(seq, [1, 2, 3]);
	}

	#[test]
	fn test_every_split() {
		for n in 0..9 {
			for r in 0..=n {
				let mut seq: Vec<usize> = (0..n).collect();
				let a = Span::new(0, r);
				let mut seen = vec![];
				combine_discontinuous(&mut seq, a, Span::new(r, n), &mut |s: &mut [usize]| {
					seen.push(chosen(s, a));
					false
				});
				assert_eq!(seq, (0..n).collect::<Vec<_>>());
				assert_eq!(seen.len(), binomial(n, r));
				let distinct: BTreeSet<_> = seen.into_iter().collect();
				assert_eq!(distinct.len(), binomial(n, r));
			}
		}
	}

	#[test]
	fn test_swap_sequence() {
		let mut seq = vec![1, 2, 3, 4];
		let mut states = vec![];
		combine_discontinuous(&mut seq, Span::new(0, 2), Span::new(2, 4), &mut |s: &mut [i32]| {
			states.push(s.to_vec());
			false
		});
		assert_eq!(states, [
			[1, 2, 3, 4],
			[1, 3, 2, 4],
			[1, 4, 2, 3],
			[2, 3, 1, 4],
			[2, 4, 1, 3],
			[3, 4, 1, 2],
		]);
		assert_eq!(seq, [1, 2, 3, 4]);
	}

	#[test]
	fn test_stop_early() {
		let mut seq: Vec<usize> = (0..6).collect();
		let mut calls = 0;
		let stopped = combine_discontinuous(&mut seq, Span::new(0, 3), Span::new(3, 6), &mut |_: &mut [usize]| {
			calls += 1;
			calls == 7
		});
		assert!(stopped);
		assert_eq!(calls, 7);
		let mut sorted = seq.clone();
		sorted.sort_unstable();
		assert_eq!(sorted, (0..6).collect::<Vec<_>>());
	}

	#[test]
	fn test_middle_between_ends() {
		// the layout the reversible permutations use: b, then a, then c
		for d1 in 0..6 {
			let b = Span::new(0, 1);
			let a = Span::new(1, 1 + d1);
			let c = Span::new(a.end, a.end + 1);
			let original: Vec<usize> = (0..c.end).collect();
			let mut seq = original.clone();
			let mut seen = BTreeSet::new();
			combine_discontinuous3(&mut seq, a, b, c, &mut |s: &mut [usize]| {
				assert!(seen.insert((s[0], s[c.start])));
				false
			});
			assert_eq!(seen.len(), binomial(d1 + 2, 2));
			assert_eq!(seq, original);
		}
	}

	#[test]
	fn test_three_spans() {
		for d1 in 0..4 {
			for d2 in 0..4 {
				for d3 in 0..4 {
					// gaps at d1 and between b and c hold sentinels
					let a = Span::new(0, d1);
					let b = Span::new(d1 + 1, d1 + 1 + d2);
					let c = Span::new(b.end + 1, b.end + 1 + d3);
					let original: Vec<usize> = (0..c.end).collect();
					let mut seq = original.clone();
					let mut seen = vec![];
					combine_discontinuous3(&mut seq, a, b, c, &mut |s: &mut [usize]| {
						assert_eq!(s[d1], d1);
						assert_eq!(s[b.end], b.end);
						seen.push(chosen(s, a));
						false
					});
					assert_eq!(seq, original);
					let total = binomial(d1 + d2 + d3, d1);
					assert_eq!(seen.len(), total);
					assert_eq!(seen.into_iter().collect::<BTreeSet<_>>().len(), total);
				}
			}
		}
	}
}
