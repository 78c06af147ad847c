use std::io::Write;
use std::sync::{Arc, Mutex};

use foodharmony_core::domain::meal_analysis::{
    ports::Notifier,
    value_objects::{FAILURE_TITLE, SUCCESS_TITLE},
};

/// Prints notifications as one-line status messages on stderr, keeping
/// stdout for the analysis itself.
#[derive(Clone)]
pub struct TerminalNotifier {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl TerminalNotifier {
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }

    fn write_line(&self, title: &str, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{}: {}", title, message) {
            tracing::warn!("Failed to write notification: {}", e);
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        self.write_line(SUCCESS_TITLE, message);
    }

    fn notify_error(&self, message: &str) {
        self.write_line(FAILURE_TITLE, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_notifications_carry_titles() {
        let buffer = SharedBuffer::default();
        let notifier = TerminalNotifier::new(Box::new(buffer.clone()));

        notifier.notify_success("Your meal has been analyzed successfully");
        notifier.notify_error("network down");

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            written,
            "Analysis Complete: Your meal has been analyzed successfully\n\
             Analysis Failed: network down\n"
        );
    }
}
