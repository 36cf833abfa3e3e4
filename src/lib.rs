//! A compact, fixed-capacity bit set packed into 64-bit words.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitSet`] tracks membership of small integer keys ("has index `i` been
//! seen?") with one bit per key, giving better density and cache behavior than
//! a flag per byte.
//!
//! # Examples
//! ```
//! use word_bitset::BitSet;
//!
//! let mut seen = BitSet::new(200);
//! assert_eq!(seen.count(), 0);
//! seen.set(199);
//! seen.set(3);
//! assert!(seen.get(3));
//! assert_eq!(seen.count(), 2);
//! assert_eq!(seen.iter_ones().collect::<Vec<_>>(), vec![3, 199]);
//! ```
//!
//! # Index range
//!
//! A bit set created with capacity `C` accepts every index in `0..=C`, so it
//! has `C + 1` addressable positions and `C / 64 + 1` storage words. Filling
//! with a pattern (e.g. [`BitSet::with_all_set`]) only covers `0..C`.
//!
//! # Errors
//!
//! Out-of-range indices and a zero capacity are programming errors: the plain
//! API panics on them. The `try_*` variants report a [`BitSetError`] instead.
//! Indices are never truncated or wrapped.
//!
//! # Features
//!
//! - `#![no_std]` compatible (requires `alloc`)
//! - O(1) `get` / `set` / `unset`
//! - `count` and `iter_ones` built on two word primitives,
//!   [`population_count`] and [`lowest_set_bit_index`]
//! - Deep copy via `Clone`, O(1) `take` and `swap`
//! - `soft-bits` cargo feature: portable software word primitives

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bits;
mod bitset;
mod error;

pub use bits::{lowest_set_bit_index, population_count};
pub use bitset::{BitSet, IterOnes, WORD_BITS, word_count};
pub use error::BitSetError;
