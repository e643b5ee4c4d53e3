//! Entry points that visit every arrangement of `r = mid` elements chosen out
//! of a slice, for each symmetry class.
//!
//! Each entry point splits `seq` into the selected part `[0, mid)` and the
//! rest `[mid, len)`, and calls `f(&mut seq[..mid])` once per arrangement.
//! Returning `true` from `f` ends the traversal early and leaves `seq` in
//! some unspecified order. Otherwise `seq` is back in its original order
//! when the call returns. `f` is handed back so that any state it
//! accumulated can be read.
//!
//! Panics if `mid > seq.len()`.

use crate::combine::{combine_discontinuous, combine_discontinuous3, Visit};
use crate::permute::permute;
use crate::span::Span;

pub fn for_each_combination<T, F>(seq: &mut [T], mid: usize, mut f: F) -> F
	where F: FnMut(&mut [T]) -> bool
{
	let (selected, rest) = split(seq, mid, "for_each_combination");
	let mut visit = Bound::new(&mut f, selected);
	let stopped = combine_discontinuous(seq, selected, rest, &mut visit);
	log_stop(stopped, "for_each_combination");
	f
}

pub fn for_each_permutation<T, F>(seq: &mut [T], mid: usize, mut f: F) -> F
	where F: FnMut(&mut [T]) -> bool
{
	let (selected, rest) = split(seq, mid, "for_each_permutation");
	let mut bound = Bound::new(&mut f, selected);
	let mut visit = Permutations { inner: &mut bound, span: selected };
	let stopped = combine_discontinuous(seq, selected, rest, &mut visit);
	log_stop(stopped, "for_each_permutation");
	f
}

/// Visits the permutations that are distinct up to rotation: the first
/// selected element stays put while the others are permuted.
pub fn for_each_circular_permutation<T, F>(seq: &mut [T], mid: usize, mut f: F) -> F
	where F: FnMut(&mut [T]) -> bool
{
	let (selected, rest) = split(seq, mid, "for_each_circular_permutation");
	let mut bound = Bound::new(&mut f, selected);
	let mut visit = Circular { inner: &mut bound, span: selected };
	let stopped = combine_discontinuous(seq, selected, rest, &mut visit);
	log_stop(stopped, "for_each_circular_permutation");
	f
}

/// Visits the permutations that are distinct up to reversal.
pub fn for_each_reversible_permutation<T, F>(seq: &mut [T], mid: usize, mut f: F) -> F
	where F: FnMut(&mut [T]) -> bool
{
	let (selected, rest) = split(seq, mid, "for_each_reversible_permutation");
	let mut bound = Bound::new(&mut f, selected);
	let mut visit = Reversible { inner: &mut bound, span: selected };
	let stopped = combine_discontinuous(seq, selected, rest, &mut visit);
	log_stop(stopped, "for_each_reversible_permutation");
	f
}

/// Visits the permutations that are distinct up to both rotation and
/// reversal, e.g. necklaces that can be flipped over.
pub fn for_each_reversible_circular_permutation<T, F>(seq: &mut [T], mid: usize, mut f: F) -> F
	where F: FnMut(&mut [T]) -> bool
{
	let (selected, rest) = split(seq, mid, "for_each_reversible_circular_permutation");
	let mut bound = Bound::new(&mut f, selected);
	let mut visit = ReversibleCircular { inner: &mut bound, span: selected };
	let stopped = combine_discontinuous(seq, selected, rest, &mut visit);
	log_stop(stopped, "for_each_reversible_circular_permutation");
	f
}

fn split<T>(seq: &[T], mid: usize, op: &'static str) -> (Span, Span) {
	assert!(mid <= seq.len(), "{}: mid ({}) is past the end ({})", op, mid, seq.len());
	debug_log!(len = seq.len(), selected = mid, "{}", op);
	(Span::new(0, mid), Span::new(mid, seq.len()))
}

#[allow(unused_variables)]
fn log_stop(stopped: bool, op: &'static str) {
	if stopped { debug_log!("{}: stopped by callback", op); }
}

// Hands the caller's function the selected part only
struct Bound<'a, F> {
	f: &'a mut F,
	span: Span,
}

impl<'a, F> Bound<'a, F> {
	fn new(f: &'a mut F, span: Span) -> Self {
		Bound { f, span }
	}
}

impl<'a, T, F: FnMut(&mut [T]) -> bool> Visit<T> for Bound<'a, F> {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		(self.f)(&mut seq[self.span.start..self.span.end])
	}
}

struct Permutations<'a, V> {
	inner: &'a mut V,
	span: Span,
}

impl<'a, T, V: Visit<T>> Visit<T> for Permutations<'a, V> {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		permute(seq, self.span, self.inner)
	}
}

struct Circular<'a, V> {
	inner: &'a mut V,
	span: Span,
}

impl<'a, T, V: Visit<T>> Visit<T> for Circular<'a, V> {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		if self.span.len() <= 1 { return self.inner.visit(seq) }

		permute(seq, self.span.skip(1), self.inner)
	}
}

struct Reversible<'a, V> {
	inner: &'a mut V,
	span: Span,
}

impl<'a, T, V: Visit<T>> Visit<T> for Reversible<'a, V> {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		reversible(seq, self.span, self.inner)
	}
}

struct ReversibleCircular<'a, V> {
	inner: &'a mut V,
	span: Span,
}

impl<'a, T, V: Visit<T>> Visit<T> for ReversibleCircular<'a, V> {
	fn visit(&mut self, seq: &mut [T]) -> bool {
		if self.span.len() <= 1 { return self.inner.visit(seq) }

		reversible(seq, self.span.skip(1), self.inner)
	}
}

// Visits one ordering of `span` out of each pair {p, reverse(p)}.
//
// p and its reverse have the same two elements at their ends, in opposite
// order. Each way of picking the elements in between is visited once, which
// leaves the other two at the ends in a single orientation, and the elements
// in between are then put in every order.
fn reversible<T, V: Visit<T>>(seq: &mut [T], span: Span, f: &mut V) -> bool {
	if span.len() < 3 { return f.visit(seq) }

	let front = Span::new(span.start, span.start + 1);
	let back = Span::new(span.end - 1, span.end);
	let middle = Span::new(front.end, back.start);
	let mut inside = Permutations { inner: f, span: middle };
	combine_discontinuous3(seq, middle, front, back, &mut inside)
}
