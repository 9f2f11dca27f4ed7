//! Appender trait for log output destinations

use super::error::Result;

/// A sink that accepts complete, already formatted lines.
///
/// In persistent mode the appender is moved into the writer thread and is
/// never touched by logging callers.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<A: Appender + ?Sized> Appender for Box<A> {
    fn append(&mut self, line: &str) -> Result<()> {
        (**self).append(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
