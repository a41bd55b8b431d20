// Copyright 2025 Irreducible Inc.

//! Cross-validation of the binary-conversion pipeline: both kernel flavors against each
//! other, against the digit-wise core, and against independent oracles.

use anybase_codec::NumberSystem;
use anybase_engine::{Op, compute, compute_str, naive};
use num_bigint::BigInt as NumBigInt;
use proptest::prelude::*;

/// Every printable ASCII symbol except the sign prefix, enough for radices up to 94.
fn printable_symbols() -> Vec<u8> {
	(0x20u8..0x7F).filter(|&b| b != b'-').collect()
}

/// A number system for the given base; radices beyond the printable pool fall back to
/// raw byte alphabets, which the byte-level interface handles just as well.
fn system_for(base: i16) -> NumberSystem {
	let radix = base.unsigned_abs() as usize;
	let symbols: Vec<u8> = if radix <= 94 {
		printable_symbols()[..radix].to_vec()
	} else if base > 0 {
		(0u8..=radix as u8).filter(|&b| b != b'-').collect()
	} else {
		(0u8..radix as u8).collect()
	};
	NumberSystem::new(base, &symbols).unwrap()
}

fn all_cores(system: &NumberSystem, z1: &[u8], z2: &[u8], op: Op) -> Vec<u8> {
	let scalar = compute(system, z1, z2, op, false);
	let lanes = compute(system, z1, z2, op, true);
	let oracle = naive::compute(system, z1, z2, op);
	assert_eq!(scalar, lanes, "kernels disagree on {z1:?} {op} {z2:?}");
	assert_eq!(scalar, oracle, "cores disagree on {z1:?} {op} {z2:?}");
	scalar
}

#[test]
fn decimal_addition() {
	let system = NumberSystem::new(10, b"0123456789").unwrap();
	assert_eq!(all_cores(&system, b"100", b"50", Op::Add), b"150");
}

#[test]
fn base_five_multiplication() {
	// 24 and 10 in base 5 are 14 and 5; 14 * 5 = 70 = 240 in base 5
	let system = NumberSystem::new(5, b"01234").unwrap();
	assert_eq!(all_cores(&system, b"24", b"10", Op::Mul), b"240");
}

#[test]
fn negabinary_scenarios() {
	let system = NumberSystem::new(-2, b"01").unwrap();
	// 1 + 1 = 2 = 110 in base -2
	assert_eq!(all_cores(&system, b"1", b"1", Op::Add), b"110");
	// 11 is -1; -1 * -1 = 1
	assert_eq!(all_cores(&system, b"11", b"11", Op::Mul), b"1");
}

#[test]
fn lettered_base_seven_subtraction() {
	// digits a..g name 0..6: "abc" is 9, "dfg" is 188, and -9 - 188 = -197 = -(4 0 1)
	let system = NumberSystem::new(7, b"abcdefg").unwrap();
	assert_eq!(all_cores(&system, b"-abc", b"dfg", Op::Sub), b"-eab");
}

#[test]
fn huge_decimal_multiplication_matches_num_bigint() {
	let z1 = "23452348752893456792834657926230957238945728394578293457892374589237485";
	let z2 = "23845762734856723846572384576234785623489576";
	let system = NumberSystem::new(10, b"0123456789").unwrap();

	let expected =
		(z1.parse::<NumBigInt>().unwrap() * z2.parse::<NumBigInt>().unwrap()).to_string();
	assert_eq!(all_cores(&system, z1.as_bytes(), z2.as_bytes(), Op::Mul), expected.as_bytes());
}

#[test]
fn lane_tier_boundary_magnitudes() {
	// operands sized exactly at the lane tiers: 1, 7 and 15 bytes, plus a multiple of 15
	let system = NumberSystem::new(10, b"0123456789").unwrap();
	for bits in [8u32, 56, 120, 240] {
		let full = ((NumBigInt::from(1u32) << bits) - 1u32).to_string();
		for (z2, op) in [("1", Op::Add), ("1", Op::Sub), (full.as_str(), Op::Mul)] {
			let result = all_cores(&system, full.as_bytes(), z2.as_bytes(), op);
			let expected = match op {
				Op::Add => z2.parse::<NumBigInt>().unwrap() + full.parse::<NumBigInt>().unwrap(),
				Op::Sub => full.parse::<NumBigInt>().unwrap() - z2.parse::<NumBigInt>().unwrap(),
				Op::Mul => full.parse::<NumBigInt>().unwrap() * z2.parse::<NumBigInt>().unwrap(),
			};
			assert_eq!(result, expected.to_string().as_bytes(), "2^{bits}-1 {op} {z2}");
		}
	}
}

#[test]
fn small_value_sweep_against_machine_integers() {
	// every operand pair in [-limit, limit], rendered in the classic radices
	let limit = 12i64;
	let render = |x: i64, base: i16| -> String {
		let mag = x.unsigned_abs();
		let digits = match base {
			8 => format!("{mag:o}"),
			10 => format!("{mag}"),
			16 => format!("{mag:x}"),
			_ => unreachable!(),
		};
		if x < 0 { format!("-{digits}") } else { digits }
	};

	for (base, symbols) in
		[(8i16, &b"01234567"[..]), (10, &b"0123456789"[..]), (16, &b"0123456789abcdef"[..])]
	{
		let system = NumberSystem::new(base, symbols).unwrap();
		for z1 in -limit..=limit {
			for z2 in -limit..=limit {
				for (op, expected) in
					[(Op::Add, z1 + z2), (Op::Sub, z1 - z2), (Op::Mul, z1 * z2)]
				{
					let z1_text = render(z1, base);
					let z2_text = render(z2, base);
					let result =
						all_cores(&system, z1_text.as_bytes(), z2_text.as_bytes(), op);
					assert_eq!(
						result,
						render(expected, base).as_bytes(),
						"{z1} {op} {z2} in base {base}"
					);
				}
			}
		}
	}
}

#[test]
fn associativity_on_small_samples() {
	let system = NumberSystem::new(10, b"0123456789").unwrap();
	let triples = [("12", "345", "6789"), ("999", "1", "999"), ("0", "77", "-77")];
	for (a, b, c) in triples {
		for op in [Op::Add, Op::Mul] {
			let ab = compute_str(&system, a, b, op, false);
			let bc = compute_str(&system, b, c, op, false);
			assert_eq!(
				compute_str(&system, &ab, c, op, false),
				compute_str(&system, a, &bc, op, false),
				"({a} {op} {b}) {op} {c}"
			);
		}
	}
}

const BASES: &[i16] = &[-2, -3, 2, 3, 8, 10, 16, 75, 128, -128];

fn operand_digits() -> impl Strategy<Value = (Vec<u8>, bool)> {
	(proptest::collection::vec(any::<u8>(), 1..28), any::<bool>())
}

fn render_operand(system: &NumberSystem, digits: &[u8], negative: bool) -> Vec<u8> {
	let radix = system.radix();
	let mut z = Vec::with_capacity(digits.len() + 1);
	if negative && system.base() > 0 {
		z.push(b'-');
	}
	z.extend(digits.iter().map(|&d| system.alphabet().symbol(d % radix)));
	z
}

proptest! {
	#[test]
	fn cores_agree_across_radices(
		base_idx in 0..BASES.len(),
		z1 in operand_digits(),
		z2 in operand_digits(),
		op_idx in 0usize..3,
	) {
		let system = system_for(BASES[base_idx]);
		let z1 = render_operand(&system, &z1.0, z1.1);
		let z2 = render_operand(&system, &z2.0, z2.1);
		let op = [Op::Add, Op::Sub, Op::Mul][op_idx];

		let scalar = compute(&system, &z1, &z2, op, false);
		let lanes = compute(&system, &z1, &z2, op, true);
		let oracle = naive::compute(&system, &z1, &z2, op);
		prop_assert_eq!(&scalar, &lanes);
		prop_assert_eq!(&scalar, &oracle);
	}

	#[test]
	fn commutativity(z1 in operand_digits(), z2 in operand_digits(), base_idx in 0..BASES.len()) {
		let system = system_for(BASES[base_idx]);
		let z1 = render_operand(&system, &z1.0, z1.1);
		let z2 = render_operand(&system, &z2.0, z2.1);
		for op in [Op::Add, Op::Mul] {
			prop_assert_eq!(
				compute(&system, &z1, &z2, op, false),
				compute(&system, &z2, &z1, op, true)
			);
		}
	}

	#[test]
	fn decimal_identities(digits in operand_digits()) {
		let system = NumberSystem::new(10, b"0123456789").unwrap();
		let z = render_operand(&system, &digits.0, digits.1);
		let z_text = String::from_utf8(z).unwrap();
		let canonical = z_text.parse::<NumBigInt>().unwrap();

		for simd in [false, true] {
			// a - a = 0, a + 0 = a, a * 1 = a, a * 0 = 0, a * -1 = -a
			prop_assert_eq!(compute_str(&system, &z_text, &z_text, Op::Sub, simd), "0");
			prop_assert_eq!(
				compute_str(&system, &z_text, "0", Op::Add, simd),
				canonical.to_string()
			);
			prop_assert_eq!(
				compute_str(&system, &z_text, "1", Op::Mul, simd),
				canonical.to_string()
			);
			prop_assert_eq!(compute_str(&system, &z_text, "0", Op::Mul, simd), "0");
			prop_assert_eq!(
				compute_str(&system, &z_text, "-1", Op::Mul, simd),
				(-&canonical).to_string()
			);
		}
	}
}
