use crate::bits::{lowest_set_bit_index, population_count};
use crate::error::BitSetError;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::mem;

/// Number of bits held by one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of `u64` words allocated for a bit set of
/// `capacity`.
///
/// This is always one word more than `capacity` bits strictly need when
/// `capacity` is a multiple of [`WORD_BITS`], because index `capacity` itself
/// is addressable.
///
/// # Examples
/// ```
/// use word_bitset::word_count;
///
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(63), 1);
/// assert_eq!(word_count(64), 2);
/// assert_eq!(word_count(200), 4);
/// ```
pub const fn word_count(capacity: usize) -> usize {
    capacity / WORD_BITS + 1
}

/// A fixed-capacity set of small integers, stored as bits packed into `u64`
/// words.
///
/// Valid indices are the inclusive range `0..=capacity`: a bit set built with
/// capacity `C` has `C + 1` addressable positions. Constructors that fill the
/// words with a pattern only keep positions `0..C` of that pattern, so an
/// all-ones bit set reports `count() == C`; position `C` can still be set
/// explicitly.
///
/// Cloning produces an independent copy. Moving is a plain Rust move; use
/// [`take`] to move out of a `&mut BitSet` and [`swap`] to exchange two bit
/// sets without copying words. A moved-out bit set is left as
/// [`BitSet::default()`], an empty placeholder with capacity 0 that rejects
/// every index.
///
/// [`take`]: BitSet::take
/// [`swap`]: BitSet::swap
#[derive(Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    capacity: usize,
    words: Vec<u64>,
}

impl BitSet {
    /// Creates a bit set with every position unset.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::new(100);
    /// assert_eq!(bits.capacity(), 100);
    /// assert_eq!(bits.count(), 0);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_pattern(capacity, 0)
    }

    /// Creates a bit set with positions `0..capacity` set.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::with_all_set(70);
    /// assert_eq!(bits.count(), 70);
    /// assert!(bits.get(69));
    /// assert!(!bits.get(70));
    /// ```
    #[inline]
    pub fn with_all_set(capacity: usize) -> Self {
        Self::with_pattern(capacity, !0)
    }

    /// Creates a bit set whose words are all initialized to `pattern`.
    ///
    /// Bits of the last word at offsets `capacity % 64` and above are
    /// cleared afterwards, so padding never shows up in [`count`] or
    /// [`iter_ones`].
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::with_pattern(10, 0b0101);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    ///
    /// [`count`]: BitSet::count
    /// [`iter_ones`]: BitSet::iter_ones
    pub fn with_pattern(capacity: usize, pattern: u64) -> Self {
        assert_ne!(capacity, 0, "capacity must be greater than zero.");
        let words = vec![pattern; word_count(capacity)];
        tracing::trace!(capacity, words = words.len(), "allocated bit set");
        let mut bits = Self { capacity, words };
        bits.clean_unused_bits();
        bits
    }

    /// Fallible version of [`new`](BitSet::new).
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidCapacity`] if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// assert_eq!(BitSet::try_new(0), Err(BitSetError::InvalidCapacity));
    /// assert!(BitSet::try_new(1).is_ok());
    /// ```
    #[inline]
    pub fn try_new(capacity: usize) -> Result<Self, BitSetError> {
        Self::try_with_pattern(capacity, 0)
    }

    /// Fallible version of [`with_pattern`](BitSet::with_pattern).
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidCapacity`] if `capacity == 0`.
    pub fn try_with_pattern(capacity: usize, pattern: u64) -> Result<Self, BitSetError> {
        if capacity == 0 {
            return Err(BitSetError::InvalidCapacity);
        }
        Ok(Self::with_pattern(capacity, pattern))
    }

    /// Creates a bit set with only the given positions set.
    ///
    /// # Panics
    /// Panics if `capacity == 0` or any index is greater than `capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::from_ones_iter(8, [1, 8, 3]);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![1, 3, 8]);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(capacity: usize, iter: I) -> Self {
        let mut bits = Self::new(capacity);
        for idx in iter {
            bits.set(idx);
        }
        bits
    }

    /// Returns the capacity the bit set was created with.
    ///
    /// The highest addressable index is equal to the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of storage words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the storage words, least significant position first.
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx > capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut bits = BitSet::new(64);
    /// bits.set(64);
    /// assert!(bits.get(64));
    /// assert!(!bits.get(0));
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        let (word_idx, bit_idx) = self.idxs(idx);
        self.words[word_idx] & 1 << bit_idx != 0
    }

    /// Fallible version of [`get`](BitSet::get).
    ///
    /// # Errors
    /// Returns [`BitSetError::IndexOutOfRange`] if `idx > capacity`.
    #[inline]
    pub fn try_get(&self, idx: usize) -> Result<bool, BitSetError> {
        let (word_idx, bit_idx) = self.locate(idx)?;
        Ok(self.words[word_idx] & 1 << bit_idx != 0)
    }

    /// Sets the bit at the given index. Setting an already set bit has no
    /// effect.
    ///
    /// # Panics
    /// Panics if `idx > capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut bits = BitSet::new(8);
    /// bits.set(3);
    /// bits.set(3);
    /// assert_eq!(bits.count(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) {
        let (word_idx, bit_idx) = self.idxs(idx);
        self.words[word_idx] |= 1 << bit_idx;
    }

    /// Fallible version of [`set`](BitSet::set).
    ///
    /// # Errors
    /// Returns [`BitSetError::IndexOutOfRange`] if `idx > capacity`; the bit
    /// set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// let mut bits = BitSet::new(8);
    /// assert_eq!(bits.try_set(8), Ok(()));
    /// assert_eq!(
    ///     bits.try_set(9),
    ///     Err(BitSetError::IndexOutOfRange { index: 9, capacity: 8 })
    /// );
    /// ```
    #[inline]
    pub fn try_set(&mut self, idx: usize) -> Result<(), BitSetError> {
        let (word_idx, bit_idx) = self.locate(idx)?;
        self.words[word_idx] |= 1 << bit_idx;
        Ok(())
    }

    /// Unsets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `idx > capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut bits = BitSet::with_all_set(8);
    /// bits.unset(3);
    /// assert!(!bits.get(3));
    /// assert_eq!(bits.count(), 7);
    /// ```
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        let (word_idx, bit_idx) = self.idxs(idx);
        self.words[word_idx] &= !(1 << bit_idx);
    }

    /// Unsets every bit. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut bits = BitSet::with_all_set(300);
    /// bits.clear();
    /// assert_eq!(bits.count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.words.fill(0);
        tracing::trace!(capacity = self.capacity, "cleared bit set");
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::from_ones_iter(200, [0, 64, 200]);
    /// assert_eq!(bits.count(), 3);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| population_count(*w) as usize).sum()
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns the index of the lowest set bit or `None` if all bits are
    /// unset.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut bits = BitSet::new(130);
    /// assert_eq!(bits.first_set_bit(), None);
    /// bits.set(129);
    /// bits.set(70);
    /// assert_eq!(bits.first_set_bit(), Some(70));
    /// ```
    pub fn first_set_bit(&self) -> Option<usize> {
        self.iter_ones().next()
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// The iterator borrows the bit set and never modifies it, so it can be
    /// created any number of times. Iterating to the end runs in
    /// O(max(k, w)) where k is the number of set bits and w the word count.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bits = BitSet::from_ones_iter(200, [65, 0, 199, 64]);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 64, 65, 199]);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Moves the contents out, leaving the empty placeholder behind.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut source = BitSet::from_ones_iter(10, [4]);
    /// let moved = source.take();
    /// assert!(moved.get(4));
    /// assert_eq!(source.capacity(), 0);
    /// assert_eq!(source.word_count(), 0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges capacity and storage with `other` without copying any words.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut a = BitSet::from_ones_iter(10, [1]);
    /// let mut b = BitSet::from_ones_iter(500, [400]);
    /// a.swap(&mut b);
    /// assert_eq!(a.capacity(), 500);
    /// assert!(a.get(400));
    /// assert!(b.get(1));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline]
    fn idxs(&self, idx: usize) -> (usize, usize) {
        match self.locate(idx) {
            Ok(idxs) => idxs,
            Err(_) => panic!("Bit index {idx} out of bounds"),
        }
    }

    #[inline]
    fn locate(&self, idx: usize) -> Result<(usize, usize), BitSetError> {
        // the placeholder has capacity 0 but no words, so 0 is rejected too
        if idx > self.capacity || self.words.is_empty() {
            return Err(BitSetError::IndexOutOfRange {
                index: idx,
                capacity: self.capacity,
            });
        }
        Ok((idx / WORD_BITS, idx % WORD_BITS))
    }

    #[inline]
    fn clean_unused_bits(&mut self) {
        let mask = (1u64 << (self.capacity % WORD_BITS)) - 1;
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }
}

impl Clone for BitSet {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            words: self.words.clone(),
        }
    }

    /// Copy-assignment: reuses the existing allocation when it is large
    /// enough.
    fn clone_from(&mut self, source: &Self) {
        self.words.clone_from(&source.words);
        self.capacity = source.capacity;
    }
}

impl<'bitset> IntoIterator for &'bitset BitSet {
    type Item = usize;
    type IntoIter = IterOnes<'bitset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let addressable = if self.words.is_empty() {
            0
        } else {
            self.capacity + 1
        };
        write!(f, "BitSet({}) LSB -> ", self.capacity)?;
        for i in 0..addressable {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
            if i % 8 == 7 && i < addressable - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Iterator over the indices of set bits in a [`BitSet`].
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`BitSet::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitset> {
    words: &'bitset [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if let Some(offset) = lowest_set_bit_index(self.current) {
                self.current &= self.current - 1; // unset LSB
                return Some(self.word_idx * WORD_BITS + offset as usize);
            }

            self.word_idx += 1;
            self.current = self.words.get(self.word_idx).copied().unwrap_or(0);
        }
        None
    }
}

impl FusedIterator for IterOnes<'_> {}
