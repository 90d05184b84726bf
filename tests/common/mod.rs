//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use bigdiv::BigNum;
use num_bigint::BigUint;

/// `BigNum` value to `num_bigint::BigUint`.
///
/// Only the words inside the declared length participate, matching the
/// value the division core operates on.
pub fn to_biguint<const LIMBS: usize>(x: &BigNum<LIMBS>) -> BigUint {
    let len = x.len.min(LIMBS);
    let mut bytes = Vec::with_capacity(len * 8);

    for word in &x.as_words()[..len] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}
