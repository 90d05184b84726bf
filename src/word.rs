//! `Word` represents the 64-bit unsigned unit out of which big integers are
//! built.

/// Unsigned integer type of a single big-integer word.
pub type Word = u64;

/// Unsigned wide integer type: double the width of [`Word`].
pub type WideWord = u128;

/// Divides the double-width value `(hi, lo)` by `divisor`, returning the
/// quotient and the remainder.
///
/// The caller must guarantee `hi < divisor`, which bounds the full value
/// below `divisor * 2^64` so the quotient fits in a single [`Word`].
#[inline(always)]
pub(crate) const fn div_wide(hi: Word, lo: Word, divisor: Word) -> (Word, Word) {
    debug_assert!(hi < divisor);
    let step = ((hi as WideWord) << Word::BITS) | (lo as WideWord);
    let divisor = divisor as WideWord;
    ((step / divisor) as Word, (step % divisor) as Word)
}
