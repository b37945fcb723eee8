//! numprint binary
//!
//! Tidak ada argument. Mencetak `DEFAULT_NUMBER` ke stdout dan
//! selalu exit 0, walaupun write gagal.

use numprint::{logging, print_with, PrintConfig, RawStdout};
use tracing::warn;

fn main() {
    let config = PrintConfig::default();
    logging::init(config.verbose);

    let mut stdout = RawStdout::new();
    match print_with(&config, &mut stdout) {
        Ok(emitted) if emitted.is_short() => warn!(?emitted, "short write to stdout"),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "write to stdout failed"),
    }
}
