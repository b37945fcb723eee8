//! Print configuration
//!
//! Semua nilai ditentukan saat compile, tidak ada input dari luar.

use crate::encoder::{EmitLength, Layout};

/// Angka yang dicetak oleh binary
pub const DEFAULT_NUMBER: u64 = 69420;

/// Print configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    pub number: u64,
    pub layout: Layout,
    pub emit: EmitLength,
    /// Log level debug ke stderr jika true, warn jika false
    pub verbose: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            number: DEFAULT_NUMBER,
            layout: Layout::Gapped,
            emit: EmitLength::Run,
            verbose: false,
        }
    }
}
