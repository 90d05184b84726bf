//! Pure Rust implementation of fixed-capacity big unsigned integer division
//! by a single 64-bit word.
//!
//! # About
//! This library provides the word-by-word long-division core for big
//! unsigned integers stored as a fixed array of 64-bit words plus an
//! explicit significant length. It is `no_std`-friendly and performs no
//! heap allocation: all storage is caller-owned.
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Stateless, reentrant entry points that are safe to call from any
//!   number of threads on disjoint data.
//! - Support `const fn` as much as possible, so quotients can be computed
//!   at compile time.
//! - Tolerate non-normalized inputs: a dividend whose declared length
//!   covers trailing zero words is processed correctly, never rejected.
//!
//! # Entry points
//! The primary API is [`div_word`] (free function with explicit output
//! parameters) and [`BigNum::div_rem_word_vartime`] (method form). Callers
//! holding raw pointers, such as FFI shims, can use [`div_word_raw`], which
//! keeps the runtime null and buffer-overlap validation that the borrow
//! checker makes unnecessary for the safe entry points.

#![no_std]
#![deny(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod bignum;
mod word;

pub use crate::{
    bignum::{
        BigNum,
        div_word::{DivWordError, div_word, div_word_raw},
    },
    word::{WideWord, Word},
};
pub use subtle;
