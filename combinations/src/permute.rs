use crate::combine::Visit;
use crate::span::Span;

/// Calls `f` once for each of the `n!` orderings of `span`, rearranging it in
/// place, then puts `span` back in its original order.
/// Returns `true` as soon as `f` does, without restoring anything.
pub fn permute<T, V: Visit<T>>(seq: &mut [T], span: Span, f: &mut V) -> bool {
	if permute_(seq, span, f) { return true }

	seq[span.start..span.end].reverse();
	false
}

// Same enumeration as `permute`, but a completed run leaves `span` reversed.
// Callers in the middle of a recursion undo that themselves.
fn permute_<T, V: Visit<T>>(seq: &mut [T], span: Span, f: &mut V) -> bool {
	let first = span.start;
	match span.len() {
		0 | 1 => f.visit(seq),
		2 => {
			if f.visit(seq) { return true }

			seq.swap(first, first + 1);
			f.visit(seq)
		},
		3 => {
			let (second, third) = (first + 1, first + 2);
			if f.visit(seq) { return true }

			seq.swap(second, third);
			if f.visit(seq) { return true }

			seq.swap(first, third);
			seq.swap(second, third);
			if f.visit(seq) { return true }

			seq.swap(second, third);
			if f.visit(seq) { return true }

			seq.swap(first, second);
			seq.swap(second, third);
			if f.visit(seq) { return true }

			seq.swap(second, third);
			f.visit(seq)
		},
		_ => {
			let rest = span.skip(1);
			for p in rest.indices() {
				if permute_(seq, rest, f) { return true }

				seq[rest.start..rest.end].reverse();
				seq.swap(first, p);
			}
			permute_(seq, rest, f)
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn factorial(n: usize) -> usize {
		if n < 2 { 1 } else { n * factorial(n - 1) }
	}

	#[test]
	fn test_small() {
		let mut seq = vec![1, 2, 3];
		let mut seen = vec![];
		permute(&mut seq, Span::new(0, 3), &mut |s: &mut [i32]| {
			seen.push(s.to_vec());
			false
		});
		assert_eq!(seen, vec![
			vec![1, 2, 3],
			vec![1, 3, 2],
			vec![2, 1, 3],
			vec![2, 3, 1],
			vec![3, 1, 2],
			vec![3, 2, 1],
		]);
		assert_eq!(seq, [1, 2, 3]);
	}

	#[test]
	fn test_unfinished_run_reversed() {
		for len in 0..8 {
			let mut seq: Vec<usize> = (0..len).collect();
			permute_(&mut seq, Span::new(0, len), &mut |_: &mut [usize]| false);
			assert_eq!(seq, (0..len).rev().collect::<Vec<_>>());
		}
	}

	#[test]
	fn test_all_orderings() {
		for len in 0..8 {
			// fenced on both sides to check nothing outside the span moves
			let mut seq: Vec<usize> = (0..len + 2).collect();
			let span = Span::new(1, len + 1);
			let mut seen = HashSet::new();
			let mut calls = 0;
			permute(&mut seq, span, &mut |s: &mut [usize]| {
				assert_eq!((s[0], s[len + 1]), (0, len + 1));
				seen.insert(s[span.start..span.end].to_vec());
				calls += 1;
				false
			});
			assert_eq!(calls, factorial(len));
			assert_eq!(seen.len(), factorial(len));
			assert_eq!(seq, (0..len + 2).collect::<Vec<_>>());
		}
	}

	#[test]
	fn test_stop() {
		let mut seq: Vec<usize> = (0..5).collect();
		let mut calls = 0;
		assert!(permute(&mut seq, Span::new(0, 5), &mut |_: &mut [usize]| {
			calls += 1;
			calls == 30
		}));
		assert_eq!(calls, 30);
	}
}
