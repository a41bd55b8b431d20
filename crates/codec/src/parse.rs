// Copyright 2025 Irreducible Inc.

use anybase_bigint::{BigInt, arith, sizing};

use crate::NumberSystem;

/// Parses two digit strings into binary, accumulating `digit * base^position` for each
/// position of each operand.
///
/// The operands share one running weight so both strings are folded in a single pass over
/// `max(|z1|, |z2|)` positions. Sign prefixes are not interpreted here: a leading `'-'`
/// maps to digit 0 through the lookup table and contributes nothing, and the caller
/// applies the detected sign to the parsed value afterwards. The destination buffers must
/// be sized for the operand values (see [`sizing::min_bytes_for_digits`]).
pub fn parse_operands(
	system: &NumberSystem,
	z1: &[u8],
	z2: &[u8],
	z1_bin: &mut BigInt,
	z2_bin: &mut BigInt,
	simd: bool,
) {
	let alphabet = system.alphabet();
	let max_len = z1.len().max(z2.len());

	// scratch for the per-digit products
	let mut z1_temp = BigInt::new(z1_bin.len(), false);
	let mut z2_temp = BigInt::new(z2_bin.len(), false);

	// base^i, sized for the weight of the most significant position
	let mut weight = BigInt::new(sizing::min_bytes_for_power(system.base(), max_len), false);
	let mut temp = BigInt::new(weight.len(), false);
	let mut temp2 = BigInt::new(weight.len(), false);
	weight.set_byte(0, 1);

	for i in 0..max_len {
		// digit strings store the most significant symbol first
		if i < z1.len() {
			let digit = alphabet.digit(z1[z1.len() - 1 - i]);
			arith::mul_u8(&weight, digit, &mut z1_temp, &mut temp2, simd);
			arith::add(z1_bin, &z1_temp, simd);
		}
		if i < z2.len() {
			let digit = alphabet.digit(z2[z2.len() - 1 - i]);
			arith::mul_u8(&weight, digit, &mut z2_temp, &mut temp2, simd);
			arith::add(z2_bin, &z2_temp, simd);
		}

		// advance to the weight of the next position
		arith::mul_small(&weight, system.base(), &mut temp, &mut temp2, simd);
		std::mem::swap(&mut weight, &mut temp);
	}
}
