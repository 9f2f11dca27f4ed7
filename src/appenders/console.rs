//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes lines to the process's standard error stream.
///
/// This is the direct-mode output. Each line is a single `write_all` on the
/// locked stderr handle, but nothing orders writes across callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }

    /// Write a line without requiring exclusive access
    pub fn emit(&self, line: &str) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.emit(line)
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
