// Copyright 2025 Irreducible Inc.

//! Conversion between digit strings in an arbitrary radix and big-integer binary.
//!
//! A [`NumberSystem`] pins down a signed radix `b` with `2 <= |b| <= 128` and an ordered
//! alphabet of `|b|` distinct symbol bytes; it validates the whole contract once at
//! construction so the conversion routines can assume well-formed input. [`parse_operands`]
//! lifts two digit strings into binary in a single pass, [`to_text_pos`] projects binary
//! back into a positive radix with a generalized Double-Dabble sweep, and [`to_text_neg`]
//! projects into a negative radix by repeated Euclidean division.

mod alphabet;
mod parse;
mod project;

pub use alphabet::{Alphabet, MAX_RADIX, NumberSystem, NumberSystemError, OperandError, SIGN_PREFIX};
pub use parse::parse_operands;
pub use project::{to_text_neg, to_text_pos};
