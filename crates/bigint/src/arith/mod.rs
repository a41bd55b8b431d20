// Copyright 2025 Irreducible Inc.

//! In-place arithmetic on [`BigInt`] buffers.
//!
//! Every operation writes its result into the first operand (multiplication takes an
//! explicit destination) and assumes the caller sized that buffer for the result; carries
//! or borrows that fall off the top byte are reported with a warning and otherwise lost.
//!
//! Addition, subtraction, the small left shift and the zero test each have two kernels:
//! the byte-at-a-time loops in [`scalar`] and the chunked loops in [`lanes`], which walk
//! 15 bytes (two 64-bit halves of a 128-bit lane) and then 7 bytes (one 64-bit lane) per
//! step before falling back to single bytes. The `simd` flag picks the kernel per call;
//! both produce bit-identical buffers. Higher operations (multiplication, division,
//! comparison) are built from these primitives and pass the flag through.

mod lanes;
mod scalar;

use crate::BigInt;

/// Adds `b` into `a` in place.
///
/// Signs reduce to magnitude operations: equal signs add magnitudes and keep `a`'s sign,
/// mixed signs route through subtraction. `a` must be sized for the sum.
pub fn add(a: &mut BigInt, b: &BigInt, simd: bool) {
	match (a.sign(), b.sign()) {
		(true, false) => {
			// -a + b = -(a - b)
			a.set_sign(false);
			sub_nonneg(a, b, simd);
			a.negate();
		}
		(false, true) => {
			// a + -b = a - |b|
			sub_nonneg(a, b, simd);
		}
		_ => {
			// equal signs: add magnitudes, the sign of a stays
			if simd {
				lanes::add_magnitude(a, b);
			} else {
				scalar::add_magnitude(a, b);
			}
		}
	}
}

/// Subtracts `b` from `a` in place. `a` must be sized for the difference.
pub fn sub(a: &mut BigInt, b: &BigInt, simd: bool) {
	match (a.sign(), b.sign()) {
		(false, true) => {
			// a - -b = a + |b|
			if simd {
				lanes::add_magnitude(a, b);
			} else {
				scalar::add_magnitude(a, b);
			}
		}
		(true, false) => {
			// -a - b = -(a + b)
			a.set_sign(false);
			add(a, b, simd);
			a.negate();
		}
		(true, true) => {
			// -a - -b = |b| - |a|, computed in a working copy of b wide enough
			// to take a's magnitude
			let extra = a.len().saturating_sub(b.len());
			let mut b_work = b.clone_with_extra(extra);
			b_work.set_sign(false);
			a.set_sign(false);
			sub_nonneg(&mut b_work, a, simd);
			b_work.copy_into(a);
		}
		(false, false) => sub_nonneg(a, b, simd),
	}
}

/// `a - |b|` for non-negative `a`, ignoring the sign of `b`.
fn sub_nonneg(a: &mut BigInt, b: &BigInt, simd: bool) {
	if mag_gt(b, a, simd) {
		// a < b: a - b = -(b - a)
		let mut b_work = b.clone();
		b_work.set_sign(false);
		sub_nonneg(&mut b_work, a, simd);
		b_work.negate();
		b_work.copy_into(a);
		return;
	}
	if simd {
		lanes::sub_magnitude(a, b);
	} else {
		scalar::sub_magnitude(a, b);
	}
}

/// Increments the value by one.
///
/// For a negative value this decrements the magnitude, which must be at least one.
/// No overflow check; the caller leaves headroom.
pub fn incr(a: &mut BigInt) {
	if !a.sign() {
		for i in 0..a.len() {
			let inc = u16::from(a.byte(i)) + 1;
			a.set_byte(i, inc as u8);
			if inc >> 8 == 0 {
				break;
			}
		}
	} else {
		debug_assert!(!a.is_zero(false), "cannot decrement a zero magnitude");
		for i in 0..a.len() {
			let byte = a.byte(i);
			a.set_byte(i, byte.wrapping_sub(1));
			if byte != 0 {
				break;
			}
		}
	}
}

/// Shifts the magnitude left by `count` bits, `count` in `[0, 7]`, in place.
///
/// Bits shifted past the highest byte are lost.
pub fn shl_bits(a: &mut BigInt, count: u8, simd: bool) {
	debug_assert!(count < 8, "bit shift limited to [0, 7], got {count}");
	if simd {
		lanes::shl_bits(a, count);
	} else {
		scalar::shl_bits(a, count);
	}
}

/// Shifts the magnitude left by whole bytes within the fixed buffer.
///
/// The low `count` bytes become zero; bytes shifted off the top are lost.
pub fn shl_bytes(a: &mut BigInt, count: usize) {
	for i in (0..a.len().saturating_sub(count)).rev() {
		a.set_byte(i + count, a.byte(i));
	}
	for i in 0..count.min(a.len()) {
		a.set_byte(i, 0);
	}
}

/// `dst := a * mul` by shift-and-add over the bits of `mul`.
///
/// `tmp` is caller-provided scratch and needs at least one byte of headroom over `a`'s
/// magnitude, since the running partial is shifted up to seven bits between additions.
/// `dst` is cleared first; the partial keeps `a`'s sign, so the accumulated product is
/// signed (zero when `mul` is zero, regardless of `a`'s sign).
pub fn mul_u8(a: &BigInt, mul: u8, dst: &mut BigInt, tmp: &mut BigInt, simd: bool) {
	dst.set_zero();
	a.copy_into(tmp);

	// defer shifts across runs of zero bits so each shift stays within [1, 7]
	let mut pending = 0u8;
	for i in 0..8 {
		if (mul >> i) & 0x1 == 1 {
			if i != 0 {
				shl_bits(tmp, 1 + pending, simd);
				pending = 0;
			}
			add(dst, tmp, simd);
		} else if i != 0 {
			pending += 1;
		}
	}
}

/// `dst := a * mul` for a small signed multiplier in `[-256, 256]`.
///
/// A magnitude of 256 is truncated by the byte cast exactly like the radix cap it mirrors;
/// callers stay within `[-128, 128]`.
pub fn mul_small(a: &BigInt, mul: i16, dst: &mut BigInt, tmp: &mut BigInt, simd: bool) {
	debug_assert!((-256..=256).contains(&mul), "small multiplier out of range: {mul}");
	mul_u8(a, mul.unsigned_abs() as u8, dst, tmp, simd);
	dst.set_sign((a.sign() && mul > 0) || (!a.sign() && mul < 0));
}

/// Schoolbook multiplication, `res := a * b`.
///
/// `res` must span at least `a.len() + b.len()` bytes; it is cleared here. Partial
/// products are formed per multiplier byte, shifted into position and accumulated.
pub fn mul(a: &BigInt, b: &BigInt, res: &mut BigInt, simd: bool) {
	res.set_zero();
	let mut pp = BigInt::new(res.len(), false);
	let mut tmp = BigInt::new(a.len() + 1, false);

	for i in 0..b.len() {
		let byte = b.byte(i);
		if byte == 0 {
			continue;
		}
		mul_u8(a, byte, &mut pp, &mut tmp, simd);
		shl_bytes(&mut pp, i);
		add(res, &pp, simd);
	}

	res.set_sign((a.sign() && !b.sign()) || (b.sign() && !a.sign()));
}

/// Restoring binary long division of `a` by a small divisor, in place.
///
/// `divisor` must be nonzero with magnitude at most 256. `quotient` and `remainder` are
/// caller-provided scratch at least as long as `a`; `a` receives the quotient with sign
/// `a.sign XOR (divisor < 0)`. The returned 16-bit value is the magnitude remainder,
/// negated when `a` was negative, so adding `|divisor|` to a negative return restores the
/// Euclidean remainder.
///
/// # Panics
/// Panics on a zero divisor.
pub fn div_small(
	a: &mut BigInt,
	divisor: i16,
	quotient: &mut BigInt,
	remainder: &mut BigInt,
	simd: bool,
) -> i16 {
	assert!(divisor != 0, "division by zero");
	debug_assert!((-256..=256).contains(&divisor), "small divisor out of range: {divisor}");

	let div_mag = divisor.unsigned_abs();
	let a_sign = a.sign();
	a.set_sign(false);

	quotient.set_zero();
	remainder.set_zero();

	let mut divisor_big = BigInt::new(2, false);
	divisor_big.set_byte(0, div_mag as u8);
	divisor_big.set_byte(1, (div_mag >> 8) as u8);

	// walk the dividend MSB first, pulling one bit at a time into the remainder
	for i in (0..a.len()).rev() {
		for j in (0..8).rev() {
			shl_bits(remainder, 1, simd);
			let bit = (a.byte(i) >> j) & 0x1;
			remainder.set_byte(0, remainder.byte(0) | bit);

			if ge_small(remainder, div_mag as i16, simd) {
				sub(remainder, &divisor_big, simd);
				quotient.set_bit(i * 8 + j, true);
			}
		}
	}

	quotient.copy_into(a);
	let mut rem = i16::from(remainder.byte(0));

	if (a_sign && divisor > 0) || (!a_sign && divisor < 0) {
		a.set_sign(true);
	}
	if a_sign {
		// the magnitude remainder follows the dividend's sign
		rem = -rem;
	}
	rem
}

/// Strict magnitude greater-than for non-negative operands.
///
/// # Panics
/// Panics if either operand is negative.
pub fn abs_gt(a: &BigInt, b: &BigInt, simd: bool) -> bool {
	assert!(!a.sign() && !b.sign(), "abs_gt is only defined on non-negative values");
	mag_gt(a, b, simd)
}

/// `|a| > |b|`, scanning from the highest byte down and treating missing bytes as zero.
fn mag_gt(a: &BigInt, b: &BigInt, simd: bool) -> bool {
	if a.is_zero(simd) {
		return false;
	}
	for i in (0..a.len().max(b.len())).rev() {
		let a_byte = if i < a.len() { a.byte(i) } else { 0 };
		let b_byte = if i < b.len() { b.byte(i) } else { 0 };
		if a_byte != b_byte {
			return a_byte > b_byte;
		}
	}
	false
}

/// `a >= b` for a small signed `b` in `[-256, 256]`.
pub fn ge_small(a: &BigInt, b: i16, simd: bool) -> bool {
	debug_assert!((-256..=256).contains(&b), "small comparand out of range: {b}");

	if a.is_zero(simd) {
		return b <= 0;
	}
	if a.sign() && b >= 0 {
		return false;
	}
	if !a.sign() && b <= 0 {
		return true;
	}

	// signs agree and neither side is zero: compare the low byte, then let any set
	// higher byte decide
	let first = i16::from(a.byte(0));
	if !a.sign() {
		if first >= b {
			return true;
		}
		(1..a.len()).any(|i| a.byte(i) != 0)
	} else {
		// both negative: a >= b exactly when |a| <= |b|
		if first > -b {
			return false;
		}
		(1..a.len()).all(|i| a.byte(i) == 0)
	}
}
