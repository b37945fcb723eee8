//! Raw stdout sink

use std::io;

use super::ByteSink;

/// Unbuffered standard output (fd 1)
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdout;

impl RawStdout {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl ByteSink for RawStdout {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // SAFETY: pointer dan len berasal dari slice yang valid
        let ret = unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                bytes.as_ptr() as *const libc::c_void,
                bytes.len(),
            )
        };

        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ret as usize)
    }
}

#[cfg(not(unix))]
impl ByteSink for RawStdout {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        use std::io::Write;

        let mut stdout = io::stdout().lock();
        let written = stdout.write(bytes)?;
        stdout.flush()?;
        Ok(written)
    }
}
