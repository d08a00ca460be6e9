//! `MakeWriter` that routes formatted events to the browser console.
//!
//! Each event is buffered and emitted as one console call on drop, using the
//! console method matching the event level so devtools filtering works.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is reported through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.debug`
    Debug,
    /// `console.log`
    Log,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl ConsoleMethod {
    /// Method for events at `level`.
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Log,
            _ => Self::Debug,
        }
    }
}

/// Factory handed to the `fmt` layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Buffer for one formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    /// Empty writer reporting through `method`.
    #[must_use]
    pub const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    /// Method this writer reports through.
    #[must_use]
    pub const fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Buffered text without the trailing newline, if anything was written.
    #[must_use]
    pub fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end_matches(['\n', '\r']);
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use gloo::console;

    match method {
        ConsoleMethod::Debug => console::debug!(line),
        ConsoleMethod::Log => console::log!(line),
        ConsoleMethod::Warn => console::warn!(line),
        ConsoleMethod::Error => console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    use std::io::Write;

    let _ = writeln!(io::stderr().lock(), "{line}");
}
