//! Core module: Fixed-size Output Buffer
//!
//! Prinsip desain:
//! - No-Allocation: Buffer 34 bytes di-stack, tidak ada resize
//! - Fixed offsets: Newline dan terminator selalu di posisi yang sama

mod output_buffer;

pub use output_buffer::{
    OutputBuffer, BUFFER_SIZE, DIGIT_END, NEWLINE_POS, TERMINATOR_POS,
};
