//! Captures `log` records emitted on the calling thread.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push((thread::current().id(), record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

/// Runs `f` and returns the `(level, message)` records it logged on this thread.
pub(crate) fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed in unit tests");
        log::set_max_level(LevelFilter::Trace);
    });
    let id = thread::current().id();
    take(id);
    f();
    take(id)
}

fn take(id: ThreadId) -> Vec<(Level, String)> {
    let mut records = LOGGER.records.lock().unwrap_or_else(|e| e.into_inner());
    let (mine, rest): (Vec<_>, Vec<_>) = records.drain(..).partition(|(t, _, _)| *t == id);
    *records = rest;
    mine.into_iter()
        .map(|(_, level, message)| (level, message))
        .collect()
}
