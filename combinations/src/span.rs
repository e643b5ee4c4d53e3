use std::ops::Range;

/// A half-open range of positions `[start, end)` inside the slice being
/// enumerated. Two spans passed to the same call must not overlap, but they
/// need not be adjacent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl Span {
	pub fn new(start: usize, end: usize) -> Self {
		debug_assert!(start <= end);
		Span { start, end }
	}

	pub fn len(self) -> usize {
		self.end - self.start
	}
	pub fn is_empty(self) -> bool {
		self.start == self.end
	}
	/// The same span without its first `count` positions.
	pub fn skip(self, count: usize) -> Self {
		Span::new(self.start + count, self.end)
	}
	pub fn indices(self) -> Range<usize> {
		self.start..self.end
	}
}

impl From<Range<usize>> for Span {
	fn from(range: Range<usize>) -> Self {
		Span::new(range.start, range.end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_span() {
		let span = Span::from(2..7);
		assert_eq!(span.len(), 5);
		assert!(!span.is_empty());
		assert_eq!(span.skip(5), Span::new(7, 7));
		assert!(span.skip(5).is_empty());
		assert_eq!(span.indices().collect::<Vec<_>>(), [2, 3, 4, 5, 6]);
	}
}
