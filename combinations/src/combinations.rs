//! Enumeration of combinations, permutations, and related arrangements.
//!
//! The `for_each_*` functions visit every arrangement of `r` elements chosen
//! out of a slice by rearranging the slice in place and calling back once per
//! arrangement, then put it back the way it was. They are built on
//! `combine_discontinuous`, which works over two spans that need not be
//! adjacent.
//!
//! The `next_*`/`prev_*` functions step a slice to its lexicographic
//! successor or predecessor one call at a time, and
//! `LexicographicPartition` and `LexicographicSubset` do the same for set
//! partitions and subsets. The `count_each_*` functions give the number of
//! arrangements each enumeration visits, failing rather than overflowing.
//!
//! ```
//! use combinations::for_each_combination;
//!
//! let mut seq = [1, 2, 3, 4];
//! let mut pairs = vec![];
//! for_each_combination(&mut seq, 2, |pair| {
//! 	pairs.push(pair.to_vec());
//! 	false
//! });
//! assert_eq!(pairs.len(), 6);
//! assert_eq!(seq, [1, 2, 3, 4]);
//! ```

#[macro_use]
mod trace;

mod combine;
mod count;
mod error;
mod for_each;
mod lexicographic;
pub mod partition;
mod permute;
mod rotate;
mod span;
pub mod subset;

pub use combine::{combine_discontinuous, combine_discontinuous3, Visit};
pub use count::{
	count_each_circular_permutation,
	count_each_combination,
	count_each_partition,
	count_each_permutation,
	count_each_reversible_circular_permutation,
	count_each_reversible_permutation,
	count_each_subset,
};
pub use error::{Error, Result};
pub use for_each::{
	for_each_circular_permutation,
	for_each_combination,
	for_each_permutation,
	for_each_reversible_circular_permutation,
	for_each_reversible_permutation,
};
pub use lexicographic::{
	next_combination,
	next_combination_by,
	next_mapping,
	next_mapping_by,
	next_partial_permutation,
	next_partial_permutation_by,
	next_permutation,
	next_permutation_by,
	next_repeat_combination_counts,
	prev_combination,
	prev_combination_by,
	prev_mapping,
	prev_mapping_by,
	prev_partial_permutation,
	prev_partial_permutation_by,
	prev_permutation,
	prev_permutation_by,
	prev_repeat_combination_counts,
};
pub use partition::LexicographicPartition;
pub use permute::permute;
pub use rotate::{rotate_discontinuous, rotate_discontinuous3};
pub use span::Span;
pub use subset::{LexicographicSubset, Positions};
