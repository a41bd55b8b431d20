// Copyright 2025 Irreducible Inc.

//! Exact arithmetic on arbitrarily long integers in any radix.
//!
//! [`compute`] is the top-level entry: it parses two digit strings over a validated
//! [`NumberSystem`], runs the requested operation on arbitrary-precision binary and
//! projects the result back into the radix. The whole pipeline exists twice over the
//! kernel flag — byte-at-a-time or wide-lane — with bit-identical output.
//!
//! [`naive`] holds an independent core that computes directly on the digit strings
//! without ever leaving the radix. It serves as the cross-validation oracle for the
//! binary-conversion pipeline and as a selectable backend in its own right.

pub mod naive;

use std::fmt;

use anybase_bigint::{BigInt, arith, sizing};
use anybase_codec::{NumberSystem, parse_operands, to_text_neg, to_text_pos};
use thiserror::Error;

/// The supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Add,
	Sub,
	Mul,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid operator {0:?}, expected one of '+', '-', '*'")]
pub struct InvalidOperator(pub char);

impl TryFrom<char> for Op {
	type Error = InvalidOperator;

	fn try_from(symbol: char) -> Result<Self, InvalidOperator> {
		match symbol {
			'+' => Ok(Self::Add),
			'-' => Ok(Self::Sub),
			'*' => Ok(Self::Mul),
			other => Err(InvalidOperator(other)),
		}
	}
}

impl Op {
	pub fn symbol(self) -> char {
		match self {
			Self::Add => '+',
			Self::Sub => '-',
			Self::Mul => '*',
		}
	}
}

impl fmt::Display for Op {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// Computes `z1 op z2` over the given number system and returns the result digits.
///
/// The operands are digit strings over the system's alphabet, optionally prefixed with
/// `'-'` when the radix is positive; they must have been validated with
/// [`NumberSystem::validate_operand`]. Both operands are lifted into binary, the
/// operation runs in binary, and the result is projected back — with Double-Dabble for a
/// positive radix, by repeated Euclidean division for a negative one. A zero result is
/// always rendered with a positive sign.
///
/// `simd` selects the wide-lane kernels; the output does not depend on it.
pub fn compute(system: &NumberSystem, z1: &[u8], z2: &[u8], op: Op, simd: bool) -> Vec<u8> {
	let base = system.base();
	let z1_negative = system.has_sign_prefix(z1);
	let z2_negative = system.has_sign_prefix(z2);

	// a sign prefix counts as a digit position: it parses as digit zero and only
	// widens the buffers by one position
	let z1_size = sizing::min_bytes_for_digits(base, z1.len());
	let z2_size = sizing::min_bytes_for_digits(base, z2.len());

	let mut z2_bin = BigInt::new(z2_size, false);
	let mut z1_bin = match op {
		// addition and subtraction run in place in z1, which therefore needs room
		// for the result
		Op::Add | Op::Sub => BigInt::new(z1_size.max(z2_size) + 1, false),
		Op::Mul => BigInt::new(z1_size, false),
	};

	parse_operands(system, z1, z2, &mut z1_bin, &mut z2_bin, simd);
	if z1_negative {
		z1_bin.set_sign(true);
	}
	if z2_negative {
		z2_bin.set_sign(true);
	}

	let max_len = z1.len().max(z2.len());
	let (mut res, width) = match op {
		Op::Add => {
			arith::add(&mut z1_bin, &z2_bin, simd);
			// one digit of growth, the sign cell, and one extra carry digit in a
			// negative radix
			(z1_bin, max_len + 2 + usize::from(base < 0))
		}
		Op::Sub => {
			arith::sub(&mut z1_bin, &z2_bin, simd);
			(z1_bin, max_len + 3)
		}
		Op::Mul => {
			let mut product = BigInt::new(z1_bin.len() + z2_bin.len(), false);
			arith::mul(&z1_bin, &z2_bin, &mut product, simd);
			(product, max_len * 2 + 1)
		}
	};

	// canonicalize a negative zero before projecting
	if res.is_zero(simd) {
		res.set_sign(false);
	}

	if base > 0 {
		to_text_pos(&res, system, width, simd)
	} else {
		to_text_neg(&mut res, system, width, simd)
	}
}

/// [`compute`] over `&str` operands. Requires an ASCII alphabet, which makes the
/// projected digits valid UTF-8.
pub fn compute_str(system: &NumberSystem, z1: &str, z2: &str, op: Op, simd: bool) -> String {
	debug_assert!(system.alphabet().is_ascii(), "string output needs an ASCII alphabet");
	String::from_utf8(compute(system, z1.as_bytes(), z2.as_bytes(), op, simd))
		.expect("an ASCII alphabet projects to ASCII digits")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decimal() -> NumberSystem {
		NumberSystem::new(10, b"0123456789").unwrap()
	}

	#[test]
	fn operator_parsing() {
		assert_eq!(Op::try_from('+'), Ok(Op::Add));
		assert_eq!(Op::try_from('-'), Ok(Op::Sub));
		assert_eq!(Op::try_from('*'), Ok(Op::Mul));
		assert_eq!(Op::try_from('/'), Err(InvalidOperator('/')));
		assert_eq!(Op::Mul.to_string(), "*");
	}

	#[test]
	fn adds_in_decimal() {
		let system = decimal();
		for simd in [false, true] {
			assert_eq!(compute_str(&system, "100", "50", Op::Add, simd), "150");
			assert_eq!(compute_str(&system, "-100", "50", Op::Add, simd), "-50");
			assert_eq!(compute_str(&system, "999", "1", Op::Add, simd), "1000");
		}
	}

	#[test]
	fn zero_results_lose_their_sign() {
		let system = decimal();
		for simd in [false, true] {
			assert_eq!(compute_str(&system, "123", "123", Op::Sub, simd), "0");
			assert_eq!(compute_str(&system, "-17", "17", Op::Add, simd), "0");
			assert_eq!(compute_str(&system, "0", "-5", Op::Mul, simd), "0");
		}
	}

	#[test]
	fn multiplies_signed_operands() {
		let system = decimal();
		for simd in [false, true] {
			assert_eq!(compute_str(&system, "-12", "12", Op::Mul, simd), "-144");
			assert_eq!(compute_str(&system, "-12", "-12", Op::Mul, simd), "144");
		}
	}

	#[test]
	fn negative_radix_round_trip() {
		let system = NumberSystem::new(-2, b"01").unwrap();
		for simd in [false, true] {
			// 1 + 1 = 2, which is 110 in base -2
			assert_eq!(compute_str(&system, "1", "1", Op::Add, simd), "110");
			// -1 * -1 = 1
			assert_eq!(compute_str(&system, "11", "11", Op::Mul, simd), "1");
		}
	}
}
