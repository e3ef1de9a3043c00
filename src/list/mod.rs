//! List functions.
//!
//! Every function takes its data argument last, borrows it, and returns a
//! fresh owned result. The positional functions ([`take`], [`slice`],
//! [`nth`], ...) accept strings as well as slices through the [`Sequence`]
//! trait.
//!
//! Equality-based functions ([`includes`], [`uniq`], [`difference`], ...)
//! use the element type's `PartialEq`; for [`Value`](crate::value::Value)
//! elements that is deep equality with `NaN` equal to itself.
//!
//! # Sequences
//!
//! ```rust
//! use rambars::list::{drop, split_every, take};
//!
//! assert_eq!(take(3, "rambars"), "ram");
//! assert_eq!(drop(3, &[1, 2, 3, 4]), vec![4]);
//! assert_eq!(split_every(2, &[1, 2, 3]), vec![vec![1, 2], vec![3]]);
//! ```
//!
//! # Transformations
//!
//! ```rust
//! use rambars::list::{filter, map, reduce};
//!
//! let numbers = [1, 2, 3, 4];
//! let doubled = map(|x: &i32| x * 2, &numbers);
//! let large = filter(|x: &i32| *x > 4, &doubled);
//!
//! assert_eq!(large, vec![6, 8]);
//! assert_eq!(reduce(|total, x: &i32| total + x, 0, &large), 14);
//! ```

mod search;
mod sequence;
mod set_ops;
mod transform;

pub use search::{
    all, any, find, find_index, find_last, find_last_index, group_with, includes, index_of,
    last_index_of, none, partition, split_when,
};
pub use sequence::{
    Sequence, concat, drop, drop_last, drop_last_while, drop_while, ends_with, head, init, last,
    length, nth, reverse, slice, split_at, split_every, starts_with, tail, take, take_last,
    take_last_while, take_while,
};
pub use set_ops::{
    difference, drop_repeats, drop_repeats_with, intersection, symmetric_difference, union, uniq,
    uniq_with, without,
};
pub use transform::{
    adjust, append, chain, evolve_array, filter, filter_indexed, flatten, for_each, intersperse,
    map, map_indexed, move_item, of, prepend, reduce, reject, repeat, sort, sort_by, transpose,
    update, zip, zip_with,
};
