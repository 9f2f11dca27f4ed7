//! Appender over any `io::Write`

use crate::core::{Appender, Result};
use std::io::Write;

/// Adapts an arbitrary byte writer (socket, pipe, buffer) into an appender
pub struct WriterAppender<W> {
    inner: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        self.inner.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_bytes_verbatim() {
        let mut appender = WriterAppender::new(Vec::new()).with_name("buffer");
        appender.append("[INFO] one\n").unwrap();
        appender.append("[WARN] two\n").unwrap();

        assert_eq!(appender.name(), "buffer");
        assert_eq!(appender.get_ref().as_slice(), b"[INFO] one\n[WARN] two\n");
    }
}
