// Copyright 2025 Irreducible Inc.

use anybase_bigint::{BigInt, arith};
use tracing::warn;

use crate::NumberSystem;

/// Projects a binary value into a positive radix, returning the digit bytes.
///
/// Generalized Double-Dabble with one digit cell per byte: the binary value is shifted
/// MSB-first into a parallel buffer of digit cells, and after each shift every cell that
/// reached the radix is bumped by `256 - radix` (one-byte wraparound) with a carry into
/// the next cell. After the last bit each cell holds one digit in `[0, radix)`.
///
/// `width` is the maximum output length the caller sized for (including the sign cell);
/// digits beyond it are dropped with a warning. The caller has already normalized a zero
/// result to a positive sign.
pub fn to_text_pos(value: &BigInt, system: &NumberSystem, width: usize, simd: bool) -> Vec<u8> {
	debug_assert!(system.base() > 0);
	let trigger = system.radix();
	let carry_add = (256 - u16::from(trigger)) as u8;

	let mut cells = BigInt::new(width, false);
	let mut src = value.clone();

	for _ in 0..value.len() * 8 {
		// double: make room for the incoming bit and feed it in
		arith::shl_bits(&mut cells, 1, simd);
		cells.set_byte(0, cells.byte(0) | u8::from(src.most_significant_bit()));
		arith::shl_bits(&mut src, 1, simd);

		// dabble: cells that reached the radix wrap around and carry
		for j in 0..cells.len() {
			let cell = cells.byte(j);
			if cell >= trigger {
				cells.set_byte(j, cell.wrapping_add(carry_add));
				cells.set_byte(j + 1, cells.byte(j + 1).wrapping_add(1));
			}
		}
	}

	// the highest nonzero cell starts the output; a zero value emits its zero cell
	let top = (0..cells.len()).rev().find(|&i| cells.byte(i) != 0).unwrap_or(0);

	let mut out = Vec::with_capacity(width);
	if value.sign() {
		out.push(crate::alphabet::SIGN_PREFIX);
	}
	for i in (0..=top).rev() {
		if out.len() >= width {
			warn!("projected digits exceed the sized result width {width}; output truncated");
			break;
		}
		out.push(system.alphabet().symbol(cells.byte(i)));
	}
	out
}

/// Projects a binary value into a negative radix by repeated Euclidean division.
///
/// Each round divides the value by the radix; a negative raw remainder is lifted into
/// `[0, |radix|)` by adding the radix magnitude and incrementing the quotient, keeping
/// `value = quotient * radix + remainder`. Digits fall out least significant first and
/// are reversed at the end. The value is consumed down to zero.
pub fn to_text_neg(value: &mut BigInt, system: &NumberSystem, width: usize, simd: bool) -> Vec<u8> {
	debug_assert!(system.base() < 0);
	let radix = i16::from(system.radix());

	if value.is_zero(simd) {
		return vec![system.zero_symbol()];
	}

	let mut quotient = BigInt::new(value.len(), false);
	let mut remainder = BigInt::new(value.len().max(2), false);
	let mut out = Vec::with_capacity(width);

	while !value.is_zero(simd) {
		let mut rem = arith::div_small(value, system.base(), &mut quotient, &mut remainder, simd);
		if rem < 0 {
			rem += radix;
			arith::incr(value);
		}
		assert!(
			(0..radix).contains(&rem),
			"remainder {rem} escaped the digit range of radix {radix}"
		);
		out.push(system.alphabet().symbol(rem as u8));
	}

	if out.len() > width {
		warn!("projected digits exceed the sized result width {width}");
	}
	out.reverse();
	out
}
