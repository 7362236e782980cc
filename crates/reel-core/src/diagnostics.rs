//! Injectable sink for the diagnostic messages emitted by the
//! validator/accessor helpers.

use std::cell::RefCell;

/// Receives observational diagnostic messages.
///
/// Implementations must not influence control flow; the caller has already
/// chosen its fallback value by the time a message is reported.
pub trait Diagnostics {
    fn report(&self, message: &str);
}

/// Log target used by [`LogDiagnostics`].
pub const LOG_TARGET: &str = "reel_core::validate";

/// Forwards diagnostics to the `log` facade at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{}", message);
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: RefCell<Vec<String>>,
}

impl MemoryDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message reported so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages.borrow().iter().any(|m| m == message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::MISSING_TITLE;
    use log::{Level, LevelFilter, Log, Metadata};
    use std::sync::Mutex;

    #[test]
    fn test_memory_diagnostics_records_in_order() {
        let sink = MemoryDiagnostics::new();
        assert!(sink.is_empty());

        sink.report("first");
        sink.report("second");

        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert!(sink.contains("second"));
        assert!(!sink.contains("third"));
    }

    /// Records every log call made on [`LOG_TARGET`].
    struct CaptureLogger {
        records: Mutex<Vec<(Level, String, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if record.target() == LOG_TARGET {
                if let Ok(mut records) = self.records.lock() {
                    records.push((
                        record.level(),
                        record.target().to_string(),
                        record.args().to_string(),
                    ));
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn test_log_diagnostics_logs_at_info_on_validate_target() {
        log::set_logger(&CAPTURE).ok();
        log::set_max_level(LevelFilter::Trace);

        LogDiagnostics.report(MISSING_TITLE);

        let records = CAPTURE.records.lock().unwrap();
        let (level, target, message) = records
            .iter()
            .find(|(_, _, message)| message == MISSING_TITLE)
            .unwrap();
        assert_eq!(*level, Level::Info);
        assert_eq!(target, "reel_core::validate");
        assert_eq!(message, MISSING_TITLE);
    }
}
