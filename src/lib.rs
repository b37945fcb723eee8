//! numprint - Fixed-Buffer Decimal Printer
//!
//! Arsitektur:
//! - No-Allocation: Satu buffer 34 bytes
//! - Back-to-front: Digit ditulis mundur dari offset tetap
//! - Single syscall: Satu `write(2)` ke stdout

pub mod config;
pub mod core;
pub mod encoder;
pub mod logging;
pub mod sink;

pub use config::PrintConfig;
pub use encoder::{DigitEncoder, EmitLength, Emitted, Layout};
pub use sink::{ByteSink, RawStdout};

/// Encode `config.number` dan emit sekali ke `sink`
pub fn print_with<S: ByteSink + ?Sized>(
    config: &PrintConfig,
    sink: &mut S,
) -> std::io::Result<Emitted> {
    let mut encoder = DigitEncoder::new(config.layout);
    encoder.encode(config.number);
    encoder.emit(sink, config.emit)
}
