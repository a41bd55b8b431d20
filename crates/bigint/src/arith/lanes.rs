// Copyright 2025 Irreducible Inc.

//! Chunked kernels over 15-byte and 7-byte lanes.
//!
//! A 15-byte chunk is read zero-extended into a `u128` and processed as two 64-bit
//! halves, since there is no full 128-bit add with carry across the halves; the cross
//! carry is detected with the unsigned-comparison trick and patched into the high half.
//! The spare top byte of the lane makes the chunk carry/borrow visible as a plain bit.
//! A 7-byte chunk rides in one `u64` with its carry at bit 56. Tails run on the shared
//! byte loops from [`super::scalar`].

use tracing::warn;

use super::scalar;
use crate::BigInt;

const LOW_56_MASK: u64 = 0x00FF_FFFF_FFFF_FFFF;

pub(super) fn add_magnitude(a: &mut BigInt, b: &BigInt) {
	let (a_len, b_len) = (a.len(), b.len());
	let mut carry: u64 = 0;
	let mut i = 0;

	// 15 bytes per step
	while i + 14 < a_len && i + 14 < b_len {
		let av = a.word15(i);
		let bv = b.word15(i);
		let (a_lo, a_hi) = (av as u64, (av >> 64) as u64);
		let (b_lo, b_hi) = (bv as u64, (bv >> 64) as u64);

		let sum_lo = a_lo.wrapping_add(b_lo).wrapping_add(carry);
		// a wrapped low half is smaller than either addend; the comparison cannot see
		// the case where both halves are all ones and the carry lands exactly on wrap
		let lane_carry = sum_lo < a_lo
			|| sum_lo < b_lo
			|| (a_lo == u64::MAX && b_lo == u64::MAX && carry == 1);
		let sum_hi = a_hi.wrapping_add(b_hi).wrapping_add(u64::from(lane_carry));

		// bit 120 of the lane is the carry out of byte 14
		carry = (sum_hi >> 56) & 0x1;
		a.set_word15(i, (u128::from(sum_hi) << 64) | u128::from(sum_lo));
		i += 15;
	}

	// 7 bytes per step
	while i + 6 < a_len && i + 6 < b_len {
		let sum = a.word7(i) + b.word7(i) + carry;
		carry = (sum >> 56) & 0x1;
		a.set_word7(i, sum);
		i += 7;
	}

	if scalar::add_bytes(a, b, i, carry as u16) == 1 {
		warn!("carry out of the top byte while adding; the destination was sized too small");
	}
}

pub(super) fn sub_magnitude(a: &mut BigInt, b: &BigInt) {
	let (a_len, b_len) = (a.len(), b.len());
	let mut borrow: u64 = 0;
	let mut i = 0;

	// 15 bytes per step
	while i + 14 < a_len && i + 14 < b_len {
		let av = a.word15(i);
		let bv = b.word15(i);
		let (a_lo, a_hi) = (av as u64, (av >> 64) as u64);
		let (b_lo, b_hi) = (bv as u64, (bv >> 64) as u64);

		let diff_lo = a_lo.wrapping_sub(b_lo).wrapping_sub(borrow);
		// a wrapped low half exceeds the minuend; an all-ones subtrahend with an
		// incoming borrow wraps back exactly onto the minuend and needs the extra check
		let lane_borrow = diff_lo > a_lo || (b_lo == u64::MAX && borrow == 1);
		let diff_hi = a_hi.wrapping_sub(b_hi).wrapping_sub(u64::from(lane_borrow));

		// on underflow the wrap fills the lane top, so bit 127 is the borrow out
		borrow = (diff_hi >> 63) & 0x1;
		a.set_word15(i, (u128::from(diff_hi) << 64) | u128::from(diff_lo));
		i += 15;
	}

	// 7 bytes per step
	while i + 6 < a_len && i + 6 < b_len {
		let diff = a.word7(i).wrapping_sub(b.word7(i)).wrapping_sub(borrow);
		borrow = (diff >> 56) & 0x1;
		a.set_word7(i, diff);
		i += 7;
	}

	if scalar::sub_bytes(a, b, i, borrow as u16) == 1 {
		warn!("borrow out of the top byte while subtracting; the minuend was sized too small");
	}
}

pub(super) fn shl_bits(a: &mut BigInt, count: u8) {
	let len = a.len();
	let mut carry: u64 = 0;
	let mut i = 0;

	// 7 bytes in an 8-byte lane leave exactly the headroom a shift of up to 7 bits needs
	while i + 6 < len {
		let shifted = (a.word7(i) << count) | carry;
		a.set_word7(i, shifted & LOW_56_MASK);
		carry = shifted >> 56;
		i += 7;
	}

	scalar::shl_bits_from(a, i, count, carry as u8);
}
