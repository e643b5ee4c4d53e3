//! A packed, fixed-length bit vector that can also be stepped as an unsigned
//! binary counter. Bit `i` has weight `2^i`.

use std::iter::FromIterator;
use std::mem;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitVector {
	len: usize,
	words: Vec<usize>,
}

const WORD_BITS: usize = mem::size_of::<usize>() * 8;
const LOG_WORD_BITS: u8 = WORD_BITS.trailing_zeros() as u8;

impl BitVector {
	pub fn new() -> Self {
		BitVector { len: 0, words: Vec::new() }
	}
	pub fn zeros(len: usize) -> Self {
		BitVector { len, words: vec![0; Self::to_words_ceil(len)] }
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
	pub fn len(&self) -> usize {
		self.len
	}
	pub fn get(&self, index: usize) -> Option<bool> {
		if index >= self.len { return None }

		let word = self.words[Self::to_word_index(index)];
		Some(word >> Self::to_word_offset(index) & 1 > 0)
	}
	pub fn set(&mut self, index: usize, value: bool) -> Option<()> {
		if index >= self.len { return None }

		let word = &mut self.words[Self::to_word_index(index)];
		let set_bit = 1 << Self::to_word_offset(index);
		*word = *word & !set_bit | Self::fill_word(value) & set_bit;
		Some(())
	}
	pub fn push(&mut self, value: bool) {
		if Self::to_word_offset(self.len) == 0 { self.words.push(0) }
		self.len += 1;
		self.set(self.len - 1, value);
	}

	pub fn count_ones(&self) -> usize {
		self.words.iter().map(|word| word.count_ones() as usize).sum()
	}
	pub fn is_zero(&self) -> bool {
		self.words.iter().all(|&word| word == 0)
	}
	pub fn is_all_ones(&self) -> bool {
		self.words.iter().enumerate()
			.all(|(index, &word)| word == self.word_mask(index))
	}

	/// Adds one, treating the vector as a `len`-bit unsigned integer.
	/// Returns `false` if the counter wrapped from all ones back to zero.
	pub fn increment(&mut self) -> bool {
		for index in 0..self.words.len() {
			let mask = self.word_mask(index);
			let word = &mut self.words[index];
			if *word == mask {
				*word = 0; // carry into the next word
				continue
			}

			*word += 1;
			return true
		}
		false
	}
	/// Subtracts one. Returns `false` if the counter wrapped from zero to
	/// all ones.
	pub fn decrement(&mut self) -> bool {
		for index in 0..self.words.len() {
			let mask = self.word_mask(index);
			let word = &mut self.words[index];
			if *word == 0 {
				*word = mask;
				continue
			}

			*word -= 1;
			return true
		}
		false
	}

	pub fn find_first(&self) -> Option<usize> {
		self.scan_forward(0)
	}
	/// The lowest set bit strictly above `index`.
	pub fn find_next(&self, index: usize) -> Option<usize> {
		self.scan_forward(index + 1)
	}
	pub fn find_last(&self) -> Option<usize> {
		self.scan_backward(self.len)
	}
	/// The highest set bit strictly below `index`.
	pub fn find_prev(&self, index: usize) -> Option<usize> {
		self.scan_backward(index.min(self.len))
	}

	pub fn iter(&self) -> Iter<'_> {
		Iter { bits: self, index: 0 }
	}

	// First set bit at or above `start`
	fn scan_forward(&self, start: usize) -> Option<usize> {
		if start >= self.len { return None }

		let mut word_index = Self::to_word_index(start);
		let mut word = self.words[word_index] >> Self::to_word_offset(start) << Self::to_word_offset(start);
		loop {
			if word != 0 {
				return Some(Self::from_word_index(word_index) + word.trailing_zeros() as usize)
			}
			word_index += 1;
			word = *self.words.get(word_index)?;
		}
	}
	// Last set bit strictly below `end`
	fn scan_backward(&self, end: usize) -> Option<usize> {
		if end == 0 { return None }

		let last = end - 1;
		let mut word_index = Self::to_word_index(last);
		let unused = WORD_BITS - 1 - Self::to_word_offset(last) as usize;
		let mut word = self.words[word_index] << unused >> unused;
		loop {
			if word != 0 {
				let top = WORD_BITS - 1 - word.leading_zeros() as usize;
				return Some(Self::from_word_index(word_index) + top)
			}
			if word_index == 0 { return None }

			word_index -= 1;
			word = self.words[word_index];
		}
	}
	// Bits of `words[index]` that lie below `len`
	fn word_mask(&self, index: usize) -> usize {
		let offset = Self::to_word_offset(self.len);
		if index + 1 < self.words.len() || offset == 0 { !0 }
		else { (1 << offset) - 1 }
	}

	fn to_word_index(bit_index: usize) -> usize {
		bit_index >> LOG_WORD_BITS
	}
	fn to_word_offset(bit_index: usize) -> u8 {
		(bit_index & (WORD_BITS - 1)) as u8
	}
	fn to_words_ceil(bits: usize) -> usize {
		Self::to_word_index(bits) + (Self::to_word_offset(bits) > 0) as usize
	}
	fn from_word_index(word_index: usize) -> usize {
		word_index << LOG_WORD_BITS
	}
	fn fill_word(value: bool) -> usize {
		-(value as isize) as usize
	}
}

impl Extend<bool> for BitVector {
	fn extend<I: IntoIterator<Item=bool>>(&mut self, values: I) {
		let iter = values.into_iter();
		let (additional, _) = iter.size_hint();
		self.words.reserve(Self::to_words_ceil(additional));
		for value in iter { self.push(value) }
	}
}

impl FromIterator<bool> for BitVector {
	fn from_iter<I: IntoIterator<Item=bool>>(iter: I) -> Self {
		let mut result = BitVector::new();
		result.extend(iter);
		result
	}
}

pub struct Iter<'a> {
	bits: &'a BitVector,
	index: usize,
}

impl<'a> Iterator for Iter<'a> {
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		let result = self.bits.get(self.index);
		self.index += 1;
		result
	}
}

impl<'a> IntoIterator for &'a BitVector {
	type Item = bool;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Iter<'a> {
		self.iter()
	}
}
