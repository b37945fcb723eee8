//! Sink Layer: Tujuan dari satu kali write
//!
//! Pada unix, `RawStdout` memanggil `write(2)` langsung ke fd 1,
//! tanpa buffering dari `std::io::Stdout`.

mod stdout;

pub use stdout::RawStdout;

use std::io;

/// Destination untuk bytes yang sudah di-encode
pub trait ByteSink {
    /// Satu kali write, returns jumlah bytes yang diterima
    ///
    /// Partial write tidak di-retry.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize>;
}

impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}
