// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console logging.
//!
//! [`init`] installs a `tracing-subscriber` formatter whose writer forwards
//! each formatted event to `console.error`/`warn`/`info`/`debug` by level,
//! plus `console_error_panic_hook` so panics reach `console.error` with a
//! stack trace. Timestamps are off
//! (wasm has no system clock; the console stamps lines itself) and so are
//! ANSI colours.

use std::io;
use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

static INIT: Once = Once::new();

/// Installs the console subscriber and panic hook.
///
/// Only the first call has any effect.
pub fn init(max_level: LevelFilter) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let installed = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .without_time()
            .with_max_level(max_level)
            .try_init();
        if let Err(err) = installed {
            web_sys::console::warn_1(&format!("tracing subscriber not installed: {err}").into());
        }
    });
}

/// Creates a [`ConsoleWriter`] per event, picking the console method from
/// the event's level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        (!text.is_empty()).then(|| text.to_owned())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.line() else {
            return;
        };
        let line = JsValue::from(line);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&line);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&line);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&line);
        } else {
            web_sys::console::debug_1(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn writer_trims_the_trailing_newline() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b" INFO playhead: mounted\n").unwrap();
        assert_eq!(writer.line().as_deref(), Some(" INFO playhead: mounted"));
        // Skip the console call in `Drop`; there is no JS host in unit tests.
        writer.buf.clear();
    }

    #[test]
    fn blank_output_emits_nothing() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.line(), None);
    }
}
