// Copyright 2025 Irreducible Inc.

//! Command-line calculator for exact integer arithmetic in any radix.
//!
//! Validates base, alphabet and operands before handing the well-formed inputs to one of
//! the computational backends.

use std::time::Instant;

use anyhow::{Context, Result, ensure};
use anybase_codec::NumberSystem;
use anybase_engine::{Op, compute, naive};
use clap::{ArgAction, Parser, ValueEnum};

const DEFAULT_SYMBOLS: &str = "0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
	/// Binary-conversion core with byte-at-a-time kernels
	Binary,
	/// Binary-conversion core with wide-lane kernels
	BinarySimd,
	/// Digit-wise core computing directly in the radix
	Naive,
}

impl Backend {
	fn describe(self) -> &'static str {
		match self {
			Self::Binary => {
				"converts the operands to binary, computes there and converts back \
				 (byte-at-a-time kernels)"
			}
			Self::BinarySimd => {
				"converts the operands to binary, computes there and converts back \
				 (15- and 7-byte lane kernels)"
			}
			Self::Naive => "schoolbook arithmetic directly on the digit strings",
		}
	}

	fn run(self, system: &NumberSystem, z1: &[u8], z2: &[u8], op: Op) -> Vec<u8> {
		match self {
			Self::Binary => compute(system, z1, z2, op, false),
			Self::BinarySimd => compute(system, z1, z2, op, true),
			Self::Naive => naive::compute(system, z1, z2, op),
		}
	}
}

#[derive(Parser, Debug)]
#[command(
	version,
	disable_version_flag = true,
	about = "Calculates the exact sum, difference or product of two arbitrarily long \
	         integers written in any radix",
	after_help = "Examples:\n  anybase 100 50\n  anybase -V binary-simd -o '*' -b 5 24 10\n  \
	              anybase -a abcdefg -b 7 -o - -- -abc dfg\n  anybase -B10 -o '*' 123456 654321"
)]
struct Args {
	/// First operand (augend, minuend or multiplicand). A leading '-' marks a negative
	/// operand when the base is positive; separate such operands from the options
	/// with `--`.
	#[arg(required_unless_present = "list")]
	z1: Option<String>,

	/// Second operand (addend, subtrahend or multiplier)
	#[arg(required_unless_present = "list")]
	z2: Option<String>,

	/// The operator
	#[arg(short, long, default_value = "+")]
	op: String,

	/// The base; 2 <= |base| <= 128, negative bases welcome
	#[arg(short, long, default_value_t = 10)]
	base: i16,

	/// The digit alphabet, one printable character per digit value, length |base|.
	/// Defaults to a prefix of "0123456789" and is therefore mandatory when |base| > 10
	#[arg(short, long)]
	alphabet: Option<String>,

	/// The computational backend
	#[arg(short = 'V', long, value_enum, default_value = "binary")]
	backend: Backend,

	/// Measure the runtime, repeating the calculation the given number of times
	#[arg(
		short = 'B',
		long = "bench",
		value_name = "REPETITIONS",
		num_args = 0..=1,
		default_missing_value = "3"
	)]
	bench: Option<u32>,

	/// List the available backends and exit
	#[arg(short, long)]
	list: bool,

	/// Print version
	#[arg(long = "version", action = ArgAction::Version)]
	version: (),
}

fn list_backends() {
	println!("Available backends:");
	for backend in [Backend::Binary, Backend::BinarySimd, Backend::Naive] {
		let name = backend.to_possible_value().expect("no skipped variants");
		let default = if backend == Backend::Binary { " (default)" } else { "" };
		println!("  {}{default}: {}", name.get_name(), backend.describe());
	}
}

fn resolve_alphabet(args: &Args) -> Result<String> {
	match &args.alphabet {
		Some(alphabet) => Ok(alphabet.clone()),
		None => {
			let radix = usize::from(args.base.unsigned_abs() as u8);
			ensure!(
				radix <= DEFAULT_SYMBOLS.len(),
				"no alphabet given and the default \"{DEFAULT_SYMBOLS}\" only covers |base| <= 10"
			);
			Ok(DEFAULT_SYMBOLS[..radix].to_string())
		}
	}
}

fn main() -> Result<()> {
	tracing_subscriber::fmt().with_writer(std::io::stderr).init();
	let args = Args::parse();

	if args.list {
		list_backends();
		return Ok(());
	}

	let mut op_chars = args.op.chars();
	let op = match (op_chars.next(), op_chars.next()) {
		(Some(symbol), None) => Op::try_from(symbol)?,
		_ => anyhow::bail!("invalid operator {:?}, expected one of '+', '-', '*'", args.op),
	};

	ensure!(
		(2..=128).contains(&args.base.unsigned_abs()),
		"invalid base {}: |base| must be between 2 and 128",
		args.base
	);

	let alphabet = resolve_alphabet(&args)?;
	ensure!(
		alphabet.bytes().all(|b| b.is_ascii() && !b.is_ascii_control()),
		"the alphabet must consist of printable ASCII characters"
	);
	let system = NumberSystem::new(args.base, alphabet.as_bytes())?;

	let z1 = args.z1.expect("required by clap");
	let z2 = args.z2.expect("required by clap");
	system
		.validate_operand(z1.as_bytes())
		.with_context(|| format!("invalid first operand {z1:?}"))?;
	system
		.validate_operand(z2.as_bytes())
		.with_context(|| format!("invalid second operand {z2:?}"))?;

	let result = args.backend.run(&system, z1.as_bytes(), z2.as_bytes(), op);

	if let Some(repetitions) = args.bench {
		let start = Instant::now();
		for _ in 0..repetitions {
			args.backend.run(&system, z1.as_bytes(), z2.as_bytes(), op);
		}
		let elapsed = start.elapsed();
		eprintln!(
			"{repetitions} repetitions in {elapsed:?} ({:?} per calculation)",
			elapsed / repetitions.max(1)
		);
	}

	// the alphabet is printable ASCII, so the digits are valid UTF-8
	println!("{}", String::from_utf8(result).expect("ASCII digits"));
	Ok(())
}
