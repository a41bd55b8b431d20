// Copyright 2025 Irreducible Inc.

//! Fixed-width sign-magnitude big integers.
//!
//! A [`BigInt`] owns a byte buffer of a length fixed at construction time and never
//! reallocates; callers size buffers up front using the helpers in [`sizing`]. All
//! arithmetic in [`arith`] works in place on these buffers and comes in two kernels:
//! a byte-at-a-time scalar kernel and a wide-lane kernel that walks the buffer in
//! 15-byte and 7-byte chunks. The two kernels are interchangeable and must produce
//! bit-identical results; callers pick one per call with a boolean flag.

pub mod arith;
mod big_int;
pub mod sizing;

pub use big_int::BigInt;
