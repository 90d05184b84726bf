//! Division of a [`BigNum`] by a single [`Word`].
//!
//! Schoolbook long division in base 2^64, most significant word first. Each
//! step divides the double-width value `(carry, word)` by the divisor,
//! emitting one quotient word; the step remainder becomes the carry of the
//! next step and the final carry is the remainder of the whole division.
//! The carry is always below the divisor, so every step stays within one
//! 128-bit intermediate.

use crate::{BigNum, Word, word::div_wide};
use core::{fmt, mem, ptr};

/// The failure result of dividing a [`BigNum`] by a [`Word`].
///
/// On failure the quotient and remainder outputs are unspecified and must
/// not be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DivWordError {
    /// A required pointer argument was null. Only reportable by
    /// [`div_word_raw`]; the safe entry points cannot express it.
    NullArgument,
    /// The divisor was zero.
    DivisionByZero,
    /// The quotient and dividend storage regions overlap. Only reportable
    /// by [`div_word_raw`]; the borrow checker rules it out for the safe
    /// entry points.
    BufferOverlap,
    /// The dividend's declared length exceeds its storage capacity.
    InvalidLength,
}

impl DivWordError {
    /// Diagnostic name of this failure kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullArgument => "null argument",
            Self::DivisionByZero => "division by zero",
            Self::BufferOverlap => "quotient and dividend buffers overlap",
            Self::InvalidLength => "dividend length exceeds capacity",
        }
    }
}

impl fmt::Display for DivWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for DivWordError {}

/// The long-division loop plus the final length trim.
///
/// The caller has already validated `divisor != 0` and
/// `dividend.len <= LIMBS`. Words of the dividend at indices
/// `>= dividend.len` are never read.
const fn div_word_unchecked<const LIMBS: usize>(
    dividend: &BigNum<LIMBS>,
    divisor: Word,
) -> (BigNum<LIMBS>, Word) {
    let mut quotient = BigNum::ZERO;
    let mut carry = 0;

    let mut i = dividend.len;
    while i > 0 {
        i -= 1;
        // carry < divisor on entry, so the quotient digit fits in one word
        // and the new carry is again below the divisor.
        let (q, r) = div_wide(carry, dividend.words[i], divisor);
        quotient.words[i] = q;
        carry = r;
    }

    let mut k = dividend.len;
    while k > 0 && quotient.words[k - 1] == 0 {
        k -= 1;
    }
    quotient.len = k;

    (quotient, carry)
}

/// Divides `dividend` by `divisor`, writing the quotient into `quotient`
/// and the remainder into `remainder`.
///
/// On success the outputs satisfy `dividend = quotient * divisor +
/// remainder` with `remainder < divisor`. `quotient.len` is trimmed so its
/// high word is nonzero (a zero quotient has length 0), and quotient words
/// at indices `>= dividend.len` are zero. A dividend with zero words inside
/// its declared length is accepted; pre-trimming is not required.
///
/// The borrow checker makes null and aliased arguments unconstructible
/// here, so only [`DivWordError::DivisionByZero`] and
/// [`DivWordError::InvalidLength`] can be reported, checked in that order.
/// Callers holding raw pointers get the full runtime validation from
/// [`div_word_raw`].
///
/// Runs in time dependent on `dividend.len` and on the number of leading
/// zero quotient words, both public values.
pub const fn div_word<const LIMBS: usize>(
    quotient: &mut BigNum<LIMBS>,
    dividend: &BigNum<LIMBS>,
    divisor: Word,
    remainder: &mut Word,
) -> Result<(), DivWordError> {
    if divisor == 0 {
        return Err(DivWordError::DivisionByZero);
    }
    if dividend.len > LIMBS {
        return Err(DivWordError::InvalidLength);
    }

    let (q, r) = div_word_unchecked(dividend, divisor);
    *quotient = q;
    *remainder = r;
    Ok(())
}

/// Raw-pointer form of [`div_word`] for callers that cannot prove their
/// arguments are non-null and distinct, such as FFI shims.
///
/// Performs the full runtime validation, in this order (the first failing
/// check determines the reported kind): null pointers, zero divisor,
/// overlap between the quotient and dividend storage regions, dividend
/// length above capacity. Regions that are merely adjacent are not an
/// overlap. Nothing is written on any failing path.
///
/// # Safety
///
/// Each non-null pointer must be properly aligned and valid for reads
/// (`dividend`) or writes (`quotient`, `remainder`) of its pointee type.
/// No references are formed from the pointers, so `remainder` may point
/// anywhere writable, including into the other arguments' storage.
#[allow(unsafe_code)]
pub unsafe fn div_word_raw<const LIMBS: usize>(
    quotient: *mut BigNum<LIMBS>,
    dividend: *const BigNum<LIMBS>,
    divisor: Word,
    remainder: *mut Word,
) -> Result<(), DivWordError> {
    if quotient.is_null() || dividend.is_null() || remainder.is_null() {
        return Err(DivWordError::NullArgument);
    }
    if divisor == 0 {
        return Err(DivWordError::DivisionByZero);
    }

    let size = mem::size_of::<BigNum<LIMBS>>();
    let q_addr = quotient as usize;
    let n_addr = dividend as usize;
    if q_addr < n_addr + size && n_addr < q_addr + size {
        return Err(DivWordError::BufferOverlap);
    }

    // SAFETY: `dividend` is non-null, and the caller guarantees it is
    // aligned and valid for reads. The copy keeps the computation free of
    // any reference that could alias the output pointers.
    let dividend = unsafe { ptr::read(dividend) };
    if dividend.len > LIMBS {
        return Err(DivWordError::InvalidLength);
    }

    let (q, r) = div_word_unchecked(&dividend, divisor);
    // SAFETY: both pointers are non-null, and the caller guarantees they
    // are aligned and valid for writes.
    unsafe {
        ptr::write(quotient, q);
        ptr::write(remainder, r);
    }
    Ok(())
}

impl<const LIMBS: usize> BigNum<LIMBS> {
    /// Computes `self / divisor`, returning the quotient and the remainder.
    ///
    /// Method form of [`div_word`]; see there for the output guarantees and
    /// the timing caveat.
    pub const fn div_rem_word_vartime(&self, divisor: Word) -> Result<(Self, Word), DivWordError> {
        if divisor == 0 {
            return Err(DivWordError::DivisionByZero);
        }
        if self.len > LIMBS {
            return Err(DivWordError::InvalidLength);
        }
        Ok(div_word_unchecked(self, divisor))
    }
}
