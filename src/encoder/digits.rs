//! Zero-Allocation Digit Encoder
//!
//! Encode integer ke decimal ASCII langsung ke `OutputBuffer`.
//! Digit dihasilkan dari least-significant dan ditulis mundur,
//! sehingga hasilnya terbaca most-significant-first.

use std::io;

use tracing::{debug, warn};

use crate::core::{OutputBuffer, DIGIT_END, NEWLINE_POS};
use crate::sink::ByteSink;

/// Posisi digit terhadap newline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Digit berakhir di index 30, index 31 dibiarkan kosong.
    /// Loop `while num > 0`: nilai 0 tidak menghasilkan digit.
    #[default]
    Gapped,
    /// Digit berakhir tepat sebelum newline (index 31).
    /// Loop do-while: nilai 0 menghasilkan `"0"`.
    Packed,
}

impl Layout {
    /// Index digit terakhir untuk layout ini
    #[inline(always)]
    pub const fn digit_end(self) -> usize {
        match self {
            Layout::Gapped => DIGIT_END,
            Layout::Packed => NEWLINE_POS - 1,
        }
    }
}

/// Berapa bytes yang dikirim ke sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitLength {
    /// Panjang write tidak pernah di-assign.
    ///
    /// BUG (historical): versi asli membaca variabel panjang yang tidak
    /// pernah diberi nilai. Mode ini tidak menebak panjangnya, tidak
    /// menulis apa pun, dan mencatat warning.
    Unassigned,
    /// Seluruh 34 bytes dari base buffer
    Buffer,
    /// Dari digit pertama sampai newline (inklusif)
    #[default]
    Run,
}

/// Hasil dari satu kali emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    /// Tidak ada write karena panjang tidak diketahui
    Skipped,
    /// Write dipanggil sekali
    Written { requested: usize, written: usize },
}

impl Emitted {
    /// True jika sink menerima lebih sedikit dari yang diminta
    pub fn is_short(&self) -> bool {
        matches!(self, Emitted::Written { requested, written } if written < requested)
    }
}

/// Digit encoder dengan buffer tetap
pub struct DigitEncoder {
    buffer: OutputBuffer,
    layout: Layout,
    run_start: usize,
    digit_count: usize,
}

impl Default for DigitEncoder {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl DigitEncoder {
    pub fn new(layout: Layout) -> Self {
        let run_start = layout.digit_end() + 1;
        Self {
            buffer: OutputBuffer::new(),
            layout,
            run_start,
            digit_count: 0,
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Encode `value` ke buffer, returns jumlah digit yang ditulis
    ///
    /// Buffer di-clear dulu, jadi encoder bisa dipakai ulang.
    /// `u64` maksimal 20 digit, selalu muat di slot 0..=30.
    pub fn encode(&mut self, value: u64) -> usize {
        self.buffer.clear();

        let end = self.layout.digit_end();
        let mut num = value;
        let mut i = 0usize;

        match self.layout {
            Layout::Gapped => {
                while num > 0 {
                    self.write_digit(end - i, (num % 10) as u8);
                    i += 1;
                    num /= 10;
                }
            }
            Layout::Packed => loop {
                self.write_digit(end - i, (num % 10) as u8);
                i += 1;
                num /= 10;
                if num == 0 {
                    break;
                }
            },
        }

        self.buffer.terminate();
        self.digit_count = i;
        self.run_start = end + 1 - i;

        debug!(
            value,
            digits = i,
            run_start = self.run_start,
            layout = ?self.layout,
            "encoded value"
        );

        i
    }

    #[inline(always)]
    fn write_digit(&mut self, pos: usize, digit: u8) {
        let ok = self.buffer.put_digit(pos, digit);
        debug_assert!(ok, "digit slot {} out of range", pos);
    }

    /// Jumlah digit dari encode terakhir
    #[inline(always)]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Index digit pertama (most-significant)
    #[inline(always)]
    pub fn run_start(&self) -> usize {
        self.run_start
    }

    /// Digit run saja, tanpa newline
    #[inline(always)]
    pub fn digits(&self) -> &[u8] {
        self.buffer
            .slice(self.run_start, self.digit_count)
            .unwrap_or(&[])
    }

    /// Seluruh buffer, untuk inspeksi
    #[inline(always)]
    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Bytes yang akan dikirim untuk mode `emit`
    ///
    /// Run: gapped = `digit_count + 2` (termasuk byte 31),
    /// packed = `digit_count + 1`.
    pub fn frame(&self, emit: EmitLength) -> Option<&[u8]> {
        match emit {
            EmitLength::Unassigned => None,
            EmitLength::Buffer => Some(self.buffer.as_bytes()),
            EmitLength::Run => self
                .buffer
                .slice(self.run_start, NEWLINE_POS + 1 - self.run_start),
        }
    }

    /// Satu kali write ke sink
    ///
    /// Tidak ada retry untuk partial write.
    pub fn emit<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        emit: EmitLength,
    ) -> io::Result<Emitted> {
        let Some(bytes) = self.frame(emit) else {
            warn!("emit length was never assigned, nothing written");
            return Ok(Emitted::Skipped);
        };

        let requested = bytes.len();
        let written = sink.write_bytes(bytes)?;
        debug!(requested, written, "emitted");

        Ok(Emitted::Written { requested, written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BUFFER_SIZE, TERMINATOR_POS};
    use proptest::prelude::*;

    #[test]
    fn test_encode_69420_gapped_layout() {
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        assert_eq!(encoder.encode(69420), 5);

        let bytes = encoder.buffer().as_bytes();
        assert_eq!(&bytes[26..=30], b"69420");
        assert_eq!(bytes[31], 0);
        assert_eq!(bytes[NEWLINE_POS], b'\n');
        assert_eq!(bytes[TERMINATOR_POS], 0);
        assert_eq!(encoder.run_start(), 26);
        assert_eq!(encoder.digits(), b"69420");
    }

    #[test]
    fn test_buffer_frame_is_whole_region() {
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        encoder.encode(69420);

        let frame = encoder.frame(EmitLength::Buffer).unwrap();
        assert_eq!(frame.len(), BUFFER_SIZE);
        assert_eq!(&frame[32..], b"\n\0");
    }

    #[test]
    fn test_run_frame_gapped_includes_gap_byte() {
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        encoder.encode(69420);

        let frame = encoder.frame(EmitLength::Run).unwrap();
        assert_eq!(frame.len(), 5 + 2);
        assert_eq!(frame, b"69420\0\n");
    }

    #[test]
    fn test_run_frame_packed() {
        let mut encoder = DigitEncoder::new(Layout::Packed);
        encoder.encode(69420);

        assert_eq!(encoder.frame(EmitLength::Run).unwrap(), b"69420\n");
    }

    #[test]
    fn test_zero_gapped_writes_no_digits() {
        // Known limitation: guard `num > 0` excludes zero.
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        assert_eq!(encoder.encode(0), 0);
        assert!(encoder.digits().is_empty());
        assert_eq!(encoder.frame(EmitLength::Run).unwrap(), b"\0\n");
    }

    #[test]
    fn test_zero_packed_writes_single_digit() {
        let mut encoder = DigitEncoder::new(Layout::Packed);
        assert_eq!(encoder.encode(0), 1);
        assert_eq!(encoder.frame(EmitLength::Run).unwrap(), b"0\n");
    }

    #[test]
    fn test_unassigned_has_no_frame() {
        let mut encoder = DigitEncoder::default();
        encoder.encode(69420);
        assert!(encoder.frame(EmitLength::Unassigned).is_none());
    }

    #[test]
    fn test_u64_max_fits() {
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        assert_eq!(encoder.encode(u64::MAX), 20);
        assert_eq!(encoder.digits(), u64::MAX.to_string().as_bytes());
        assert_eq!(encoder.run_start(), 11);
    }

    #[test]
    fn test_encoder_reuse_clears_previous_digits() {
        let mut encoder = DigitEncoder::new(Layout::Gapped);
        encoder.encode(123_456_789);
        encoder.encode(7);

        let bytes = encoder.buffer().as_bytes();
        assert!(bytes[..30].iter().all(|&b| b == 0));
        assert_eq!(encoder.digits(), b"7");
    }

    #[test]
    fn test_emit_unassigned_skips_write() {
        let mut encoder = DigitEncoder::default();
        encoder.encode(69420);

        let mut sink: Vec<u8> = Vec::new();
        let result = encoder.emit(&mut sink, EmitLength::Unassigned).unwrap();
        assert_eq!(result, Emitted::Skipped);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_emit_run_to_vec() {
        let mut encoder = DigitEncoder::new(Layout::Packed);
        encoder.encode(69420);

        let mut sink: Vec<u8> = Vec::new();
        let result = encoder.emit(&mut sink, EmitLength::Run).unwrap();
        assert_eq!(
            result,
            Emitted::Written {
                requested: 6,
                written: 6
            }
        );
        assert!(!result.is_short());
        assert_eq!(sink, b"69420\n");
    }

    struct ShortSink;

    impl ByteSink for ShortSink {
        fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
            Ok(bytes.len() / 2)
        }
    }

    #[test]
    fn test_emit_reports_short_write() {
        let mut encoder = DigitEncoder::default();
        encoder.encode(69420);

        let result = encoder.emit(&mut ShortSink, EmitLength::Buffer).unwrap();
        assert_eq!(
            result,
            Emitted::Written {
                requested: 34,
                written: 17
            }
        );
        assert!(result.is_short());
    }

    proptest! {
        #[test]
        fn prop_digits_match_decimal_string(value in 1u64..=u64::MAX) {
            for layout in [Layout::Gapped, Layout::Packed] {
                let mut encoder = DigitEncoder::new(layout);
                let count = encoder.encode(value);
                let expected = value.to_string();
                prop_assert_eq!(count, expected.len());
                prop_assert_eq!(encoder.digits(), expected.as_bytes());
                prop_assert_eq!(encoder.run_start(), layout.digit_end() + 1 - count);
            }
        }
    }
}
