//! Big unsigned integers with fixed, caller-owned storage.

pub(crate) mod div_word;

use crate::Word;
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Big unsigned integer with a fixed storage capacity.
///
/// Generic over the number of `LIMBS` words of storage. The represented
/// value is the little-endian word sequence `words[0..len]`; storage at
/// indices `>= len` does not participate in the value.
///
/// Both fields are public: this type is plain storage with no construction
/// invariant of its own, mirroring callers that embed the words in a larger
/// struct or fill them over FFI. The arithmetic entry points validate what
/// they need and tolerate a non-normalized `len` (trailing zero words
/// inside the declared length are accepted).
#[derive(Copy, Clone)]
pub struct BigNum<const LIMBS: usize> {
    /// Word storage, least significant word first.
    pub words: [Word; LIMBS],
    /// Number of words, counted from index 0, that make up the value.
    ///
    /// Expected to satisfy `len <= LIMBS`, with `words[len - 1]` nonzero
    /// when `len > 0`. An oversized `len` is reported as an error by the
    /// division core rather than assumed away.
    pub len: usize,
}

impl<const LIMBS: usize> BigNum<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self {
        words: [0; LIMBS],
        len: 0,
    };

    /// The number of words this type can store.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly constructor from raw parts. The declared `len` is
    /// stored as given, not validated or trimmed.
    pub const fn new(words: [Word; LIMBS], len: usize) -> Self {
        Self { words, len }
    }

    /// Create a [`BigNum`] from a single [`Word`].
    ///
    /// With zero capacity a nonzero word has nowhere to go; the result then
    /// carries a declared length of 1 that the arithmetic entry points
    /// report as an invalid length rather than assume away.
    pub const fn from_word(word: Word) -> Self {
        let mut words = [0; LIMBS];
        if LIMBS > 0 {
            words[0] = word;
        }
        Self {
            words,
            len: if word == 0 { 0 } else { 1 },
        }
    }

    /// Create a [`BigNum`] from a full array of [`Word`]s, setting the
    /// length to the number of significant words.
    pub const fn from_words(words: [Word; LIMBS]) -> Self {
        let mut ret = Self { words, len: LIMBS };
        ret.len = ret.trimmed_len();
        ret
    }

    /// Borrow the word storage.
    pub const fn as_words(&self) -> &[Word; LIMBS] {
        &self.words
    }

    /// Borrow the word storage mutably.
    pub const fn as_words_mut(&mut self) -> &mut [Word; LIMBS] {
        &mut self.words
    }

    /// The smallest `k` such that every word at index `>= k` inside the
    /// declared length is zero, i.e. the declared length with leading zero
    /// words dropped. An oversized declared length is clamped to `LIMBS`
    /// first.
    ///
    /// Runs in time dependent on the number of leading zero words.
    pub const fn trimmed_len(&self) -> usize {
        let mut k = if self.len < LIMBS { self.len } else { LIMBS };
        while k > 0 && self.words[k - 1] == 0 {
            k -= 1;
        }
        k
    }

    /// Is the represented value zero?
    ///
    /// Unlike comparison against [`BigNum::ZERO`], this accepts any
    /// non-normalized encoding of zero (a nonzero `len` covering only zero
    /// words).
    pub const fn is_zero_vartime(&self) -> bool {
        self.trimmed_len() == 0
    }
}

impl<const LIMBS: usize> ConstantTimeEq for BigNum<LIMBS> {
    /// Representational equality: compares the full word storage and the
    /// length field, so two encodings of the same value with different
    /// lengths compare unequal.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words.as_ref().ct_eq(other.words.as_ref())
            & (self.len as u64).ct_eq(&(other.len as u64))
    }
}

impl<const LIMBS: usize> ConditionallySelectable for BigNum<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            words[i] = Word::conditional_select(&a.words[i], &b.words[i], choice);
            i += 1;
        }
        // `usize` has no `ConditionallySelectable` impl; go through `u64`.
        let len = u64::conditional_select(&(a.len as u64), &(b.len as u64), choice) as usize;
        Self { words, len }
    }
}

impl<const LIMBS: usize> PartialEq for BigNum<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for BigNum<LIMBS> {}

impl<const LIMBS: usize> Default for BigNum<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> fmt::Debug for BigNum<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x{self:X}, len: {})", self.len)
    }
}

impl<const LIMBS: usize> fmt::UpperHex for BigNum<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for word in self.words.iter().rev() {
            write!(f, "{word:016X}")?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::LowerHex for BigNum<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for word in self.words.iter().rev() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::DefaultIsZeroes for BigNum<LIMBS> {}
