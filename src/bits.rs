//! Word-level primitives shared by [`BitSet`](crate::BitSet) and its
//! iterators.
//!
//! Both functions have one contract regardless of backend. The default build
//! uses the hardware-backed [`u64::count_ones`] and [`u64::trailing_zeros`];
//! the `soft-bits` feature switches to portable SWAR and de Bruijn versions.

/// Returns the number of set bits in `word`.
///
/// # Examples
/// ```
/// use word_bitset::population_count;
///
/// assert_eq!(population_count(0), 0);
/// assert_eq!(population_count(0b1011), 3);
/// assert_eq!(population_count(u64::MAX), 64);
/// ```
#[inline]
pub fn population_count(word: u64) -> u32 {
    #[cfg(not(feature = "soft-bits"))]
    {
        word.count_ones()
    }
    #[cfg(feature = "soft-bits")]
    {
        soft::population_count(word)
    }
}

/// Returns the offset of the least significant set bit in `word`, or `None`
/// if `word` is zero.
///
/// # Examples
/// ```
/// use word_bitset::lowest_set_bit_index;
///
/// assert_eq!(lowest_set_bit_index(0), None);
/// assert_eq!(lowest_set_bit_index(0b1000), Some(3));
/// assert_eq!(lowest_set_bit_index(1 << 63), Some(63));
/// ```
#[inline]
pub fn lowest_set_bit_index(word: u64) -> Option<u32> {
    if word == 0 {
        return None;
    }
    #[cfg(not(feature = "soft-bits"))]
    {
        Some(word.trailing_zeros())
    }
    #[cfg(feature = "soft-bits")]
    {
        Some(soft::lowest_set_bit_index(word))
    }
}

#[cfg(any(test, feature = "soft-bits"))]
pub(crate) mod soft {
    const M1: u64 = 0x5555_5555_5555_5555;
    const M2: u64 = 0x3333_3333_3333_3333;
    const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
    const H01: u64 = 0x0101_0101_0101_0101;

    const DE_BRUIJN: u64 = 0x03f7_9d71_b4cb_0a89;
    const DE_BRUIJN_INDEX: [u8; 64] = de_bruijn_index();

    const fn de_bruijn_index() -> [u8; 64] {
        let mut table = [0u8; 64];
        let mut bit = 0;
        while bit < 64 {
            let slot = ((1u64 << bit).wrapping_mul(DE_BRUIJN) >> 58) as usize;
            table[slot] = bit as u8;
            bit += 1;
        }
        table
    }

    /// SWAR popcount: pairs, nibbles, bytes, then a horizontal byte sum.
    pub(crate) const fn population_count(word: u64) -> u32 {
        let x = word - ((word >> 1) & M1);
        let x = (x & M2) + ((x >> 2) & M2);
        let x = (x + (x >> 4)) & M4;
        (x.wrapping_mul(H01) >> 56) as u32
    }

    /// `word` must be non-zero.
    pub(crate) const fn lowest_set_bit_index(word: u64) -> u32 {
        let isolated = word & word.wrapping_neg();
        DE_BRUIJN_INDEX[(isolated.wrapping_mul(DE_BRUIJN) >> 58) as usize] as u32
    }
}
