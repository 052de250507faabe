//! Log output of the default sink, the subject and the dispatcher.

use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use vigil::{
    Dispatcher, Subject, Tool,
    testing::{FailingObserver, RecordingObserver},
};

/// Formatted log output shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a plain-text `fmt` subscriber and return everything it logged.
fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

fn line_containing<'a>(output: &'a str, needle: &str) -> &'a str {
    output
        .lines()
        .find(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("no log line contains {needle:?} in:\n{output}"))
}

#[test]
fn test_default_sink_logs_diagnostics_at_info() {
    let output = capture(|| {
        let mut cursor = Dispatcher::new(Tool::Selection);
        cursor.primary_action();
        cursor.set_behavior(Tool::Eraser);
    });

    let action = line_containing(&output, "Selection Tool: Mouse down - Selecting area.");
    assert!(action.contains("INFO"), "{action}");
    assert!(action.contains("vigil::diagnostics:"), "{action}");

    let switch = line_containing(&output, "Tool switched to EraserTool");
    assert!(switch.contains("INFO"), "{switch}");
    assert!(switch.contains("vigil::diagnostics:"), "{switch}");
}

#[test]
fn test_subject_logs_add_and_remove() {
    let output = capture(|| {
        let subject = Subject::new();
        let handle = subject.subscribe(RecordingObserver::<u32>::new());
        assert_eq!(subject.remove(&handle), 1);
    });

    let added = line_containing(&output, "subscriber added");
    assert!(added.contains("DEBUG"), "{added}");
    assert!(added.contains("vigil_std::subject"), "{added}");

    let removed = line_containing(&output, "subscriber removed");
    assert!(removed.contains("DEBUG"), "{removed}");
    assert!(removed.contains("removed=1"), "{removed}");
}

#[test]
fn test_failed_notify_logs_warning() {
    let output = capture(|| {
        let subject = Subject::new();
        subject.subscribe(FailingObserver::new("disk full"));
        assert!(subject.notify(&1u32).is_err());
    });

    let warning = line_containing(&output, "subscriber failed, stopping broadcast");
    assert!(warning.contains("WARN"), "{warning}");
    assert!(warning.contains("error=disk full"), "{warning}");
}
