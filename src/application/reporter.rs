//! # Outcome Reporter
//!
//! Routes every terminal outcome of a staging flow to both output channels:
//! the per-operation command console and the transient notification banner.
//! Both channels always receive the same logical message.

use std::sync::Arc;

use crate::domain::traits::{CommandConsole, ConsoleFactory, ConsolePanel, Notifier};
use crate::domain::types::{DisplayMode, Severity};

/// Factory-side half of the reporter: owns the sink collaborators and
/// opens one [`OperationReport`] per flow invocation.
pub struct OutcomeReporter {
    consoles: Arc<dyn ConsoleFactory>,
    panel: Arc<dyn ConsolePanel>,
    notifier: Arc<dyn Notifier>,
}

impl OutcomeReporter {
    pub fn new(
        consoles: Arc<dyn ConsoleFactory>,
        panel: Arc<dyn ConsolePanel>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            consoles,
            panel,
            notifier,
        }
    }

    /// Creates a fresh console under `label` for one invocation. The
    /// console is only registered with the panel once something is
    /// reported, so an invocation that ends in a confirmation prompt
    /// leaves no empty console behind.
    pub fn begin(&self, label: &str) -> OperationReport {
        OperationReport {
            console: self.consoles.create(label),
            panel: self.panel.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

/// Reporting handle bound to one console instance.
pub struct OperationReport {
    console: Arc<dyn CommandConsole>,
    panel: Arc<dyn ConsolePanel>,
    notifier: Arc<dyn Notifier>,
}

impl OperationReport {
    /// Success and nothing-to-do outcomes: default severity and placement.
    pub async fn info(&self, message: &str) {
        self.console.print(message);
        self.panel.add_command_output(self.console.clone());
        let _ = self
            .notifier
            .notify(message, Severity::Info, DisplayMode::Default)
            .await;
    }

    /// Failure outcomes: fail severity, floating banner.
    pub async fn failure(&self, message: &str) {
        self.console.print_error(message);
        self.panel.add_command_output(self.console.clone());
        let _ = self
            .notifier
            .notify(message, Severity::Fail, DisplayMode::Float)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingConsole {
        lines: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl CommandConsole for RecordingConsole {
        fn print(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }

        fn print_error(&self, line: &str) {
            self.errors.lock().unwrap().push(line.to_string());
        }

        fn label(&self) -> String {
            "test".to_string()
        }
    }

    struct SharedConsoleFactory(Arc<RecordingConsole>);

    impl ConsoleFactory for SharedConsoleFactory {
        fn create(&self, _label: &str) -> Arc<dyn CommandConsole> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingPanel {
        registered: Mutex<usize>,
    }

    impl ConsolePanel for RecordingPanel {
        fn add_command_output(&self, _console: Arc<dyn CommandConsole>) {
            *self.registered.lock().unwrap() += 1;
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(String, Severity, DisplayMode)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, message: &str, severity: Severity, mode: DisplayMode) -> Result<()> {
            self.notices
                .lock()
                .unwrap()
                .push((message.to_string(), severity, mode));
            Ok(())
        }
    }

    fn reporter() -> (
        OutcomeReporter,
        Arc<RecordingConsole>,
        Arc<RecordingPanel>,
        Arc<RecordingNotifier>,
    ) {
        let console = Arc::new(RecordingConsole::default());
        let panel = Arc::new(RecordingPanel::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let reporter = OutcomeReporter::new(
            Arc::new(SharedConsoleFactory(console.clone())),
            panel.clone(),
            notifier.clone(),
        );
        (reporter, console, panel, notifier)
    }

    #[tokio::test]
    async fn test_info_reaches_both_channels_with_same_message() {
        let (reporter, console, panel, notifier) = reporter();

        reporter.begin("op").info("all good").await;

        assert_eq!(console.lines.lock().unwrap().as_slice(), ["all good"]);
        assert_eq!(*panel.registered.lock().unwrap(), 1);
        let notices = notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(
                "all good".to_string(),
                Severity::Info,
                DisplayMode::Default
            )]
        );
    }

    #[tokio::test]
    async fn test_failure_is_marked_and_floating() {
        let (reporter, console, panel, notifier) = reporter();

        reporter.begin("op").failure("broke").await;

        assert_eq!(console.errors.lock().unwrap().as_slice(), ["broke"]);
        assert!(console.lines.lock().unwrap().is_empty());
        assert_eq!(*panel.registered.lock().unwrap(), 1);
        let notices = notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [("broke".to_string(), Severity::Fail, DisplayMode::Float)]
        );
    }

    #[tokio::test]
    async fn test_unreported_invocation_registers_nothing() {
        let (reporter, console, panel, notifier) = reporter();

        let _report = reporter.begin("op");

        assert!(console.lines.lock().unwrap().is_empty());
        assert_eq!(*panel.registered.lock().unwrap(), 0);
        assert!(notifier.notices.lock().unwrap().is_empty());
    }
}
