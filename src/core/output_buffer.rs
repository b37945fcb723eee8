//! Fixed 34-byte Output Buffer
//!
//! Region staging tetap, tidak pernah di-resize:
//! ┌──────────────────────────────┬────┬────┬────┐
//! │ 0 ..= 30  digit (dari kanan) │ 31 │ 32 │ 33 │
//! │                              │ -- │ \n │ \0 │
//! └──────────────────────────────┴────┴────┴────┘
//!
//! Digit ditulis mundur dari `DIGIT_END`. Byte 31 tidak disentuh pada
//! layout gapped.

/// Kapasitas buffer dalam bytes
pub const BUFFER_SIZE: usize = 34;
/// Index digit terakhir (least-significant) pada layout gapped
pub const DIGIT_END: usize = 30;
/// Index newline, tetap
pub const NEWLINE_POS: usize = 32;
/// Index terminator NUL, tetap
pub const TERMINATOR_POS: usize = 33;

/// Pre-allocated output buffer
///
/// Zero-initialized, jadi byte yang tidak ditulis selalu `0`.
#[derive(Clone)]
pub struct OutputBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Tulis satu ASCII digit di posisi `pos`
    ///
    /// Returns false jika `pos` di luar buffer atau bukan digit 0-9.
    #[inline(always)]
    pub fn put_digit(&mut self, pos: usize, digit: u8) -> bool {
        if pos >= BUFFER_SIZE || digit > 9 {
            return false;
        }
        self.bytes[pos] = b'0' + digit;
        true
    }

    /// Pasang newline dan terminator di offset tetap
    #[inline(always)]
    pub fn terminate(&mut self) {
        self.bytes[NEWLINE_POS] = b'\n';
        self.bytes[TERMINATOR_POS] = 0;
    }

    /// Reset ke kondisi zero untuk reuse
    #[inline(always)]
    pub fn clear(&mut self) {
        self.bytes = [0u8; BUFFER_SIZE];
    }

    /// Seluruh 34 bytes mulai dari base
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Sub-slice `[start, start + len)`, None jika melewati batas
    #[inline(always)]
    pub fn slice(&self, start: usize, len: usize) -> Option<&[u8]> {
        let end = start.checked_add(len)?;
        self.bytes.get(start..end)
    }
}
