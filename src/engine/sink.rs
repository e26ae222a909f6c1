//! Emission sinks — where filtered traversals send the payloads they select.

use std::fmt::Display;
use std::io::{self, Write};

use crate::types::{WalkError, WalkResult};

/// Destination for emitted values. The engine makes one call per qualifying
/// vertex, in visitation order, and never observes failures.
pub trait Sink<T: ?Sized> {
    /// Emit one value.
    fn emit(&mut self, value: &T);
}

impl<T: Clone> Sink<T> for Vec<T> {
    fn emit(&mut self, value: &T) {
        self.push(value.clone());
    }
}

impl Sink<str> for Vec<String> {
    fn emit(&mut self, value: &str) {
        self.push(value.to_owned());
    }
}

impl<T: ?Sized, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    fn emit(&mut self, value: &T) {
        (**self).emit(value);
    }
}

/// Writes each emitted value on its own line.
///
/// The first write error is logged and kept; later emissions are dropped.
/// Call [`finish`](Self::finish) to flush and surface it.
pub struct LineSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> LineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            written: 0,
        }
    }

    /// Number of lines written successfully.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the writer, or the first error encountered.
    pub fn finish(mut self) -> WalkResult<W> {
        if let Some(e) = self.error.take() {
            return Err(WalkError::Io(e));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl LineSink<io::Stdout> {
    /// Line sink on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<T: Display + ?Sized, W: Write> Sink<T> for LineSink<W> {
    fn emit(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.writer, "{}", value) {
            Ok(()) => self.written += 1,
            Err(e) => {
                log::warn!("line sink write failed after {} lines: {}", self.written, e);
                self.error = Some(e);
            }
        }
    }
}
