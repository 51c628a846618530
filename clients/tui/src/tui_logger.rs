use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

const MAX_BUFFERED: usize = 100;

/// Captures `log` records so the app can show them in its log pane.
pub struct TuiLogger {
    level: LevelFilter,
    log_buffer: Arc<Mutex<Vec<String>>>,
}

impl TuiLogger {
    pub fn new(level: LevelFilter) -> (Self, Arc<Mutex<Vec<String>>>) {
        let log_buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                level,
                log_buffer: log_buffer.clone(),
            },
            log_buffer,
        )
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format!("[{}] {}", record.level(), record.args());
            if let Ok(mut buffer) = self.log_buffer.lock() {
                buffer.push(msg);
                if buffer.len() > MAX_BUFFERED {
                    buffer.remove(0);
                }
            }
        }
    }

    fn flush(&self) {}
}
