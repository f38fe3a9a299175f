//! `tracing` output to the browser console
//!
//! Each event is formatted by `tracing-subscriber`'s fmt layer into a buffer
//! and handed to the `console` method matching its level when the writer is
//! dropped.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
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
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        let message = wasm_bindgen::JsValue::from_str(text);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Build the filter from the configured directives, e.g. `warn` or
/// `gallery_ui=debug,info`. Blank or invalid input falls back to `info`.
pub fn level_filter(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    if directives.is_empty() {
        return EnvFilter::new("info");
    }
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn configure_logging(directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(level_filter(directives))
        .with_ansi(false)
        .without_time()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}
