//! Encoder Layer: Decimal Digit Encoding
//!
//! Prinsip desain:
//! - Fixed offsets: Digit berakhir di posisi yang sudah ditentukan
//! - No allocation: Encode langsung ke `OutputBuffer`
//! - Single write: Satu kali emit per encode

mod digits;

pub use digits::{DigitEncoder, EmitLength, Emitted, Layout};
