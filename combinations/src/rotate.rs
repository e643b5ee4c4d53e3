use crate::span::Span;

/// Moves the contents of `b` in front of the contents of `a`, as if the two
/// spans were one contiguous range. Whatever lies between them is untouched.
/// Costs `min(a.len(), b.len())` swaps plus one rotation of the remainder.
pub fn rotate_discontinuous<T>(seq: &mut [T], a: Span, b: Span) {
	let (d1, d2) = (a.len(), b.len());
	if d1 <= d2 {
		for offset in 0..d1 { seq.swap(a.start + offset, b.start + offset) }
		seq[b.start..b.end].rotate_left(d1);
	}
	else {
		let mut i1 = a.end;
		for i2 in b.indices().rev() {
			i1 -= 1;
			seq.swap(i1, i2);
		}
		seq[a.start..a.end].rotate_left(i1 - a.start);
	}
}

/// Like `rotate_discontinuous`, with the second range split across `b` and `c`.
pub fn rotate_discontinuous3<T>(seq: &mut [T], a: Span, b: Span, c: Span) {
	let (d1, d2) = (a.len(), b.len());
	rotate_discontinuous(seq, a, b);
	if d1 <= d2 {
		rotate_discontinuous(seq, b.skip(d2 - d1), c);
	}
	else {
		rotate_discontinuous(seq, a.skip(d2), c);
		rotate_discontinuous(seq, b, c);
	}
}
