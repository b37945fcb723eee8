//! Logging ke stderr
//!
//! stdout hanya untuk output angka, semua diagnostic lewat stderr.

use tracing::Level;

/// Install global fmt subscriber
///
/// Aman dipanggil lebih dari sekali, panggilan berikutnya diabaikan.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
