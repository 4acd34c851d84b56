//! # Consoles and Notifications
//!
//! In-process implementations of the reporting sinks: a buffered command
//! console, the session's console panel, and a terminal banner notifier.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use crate::domain::traits::{CommandConsole, ConsoleFactory, ConsolePanel, Notifier};
use crate::domain::types::{DisplayMode, Severity};

/// Command console that buffers its timestamped lines in memory.
pub struct BufferedConsole {
    label: String,
    lines: Mutex<Vec<String>>,
}

impl BufferedConsole {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl CommandConsole for BufferedConsole {
    fn print(&self, line: &str) {
        debug!("[{}] {}", self.label, line);
        let stamped = format!("[{}] {}", Local::now().format("%H:%M:%S"), line);
        self.lines.lock().unwrap().push(stamped);
    }

    fn print_error(&self, line: &str) {
        debug!("[{}] ERROR {}", self.label, line);
        let stamped = format!("[{}] ERROR {}", Local::now().format("%H:%M:%S"), line);
        self.lines.lock().unwrap().push(stamped);
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

pub struct BufferedConsoleFactory;

impl ConsoleFactory for BufferedConsoleFactory {
    fn create(&self, label: &str) -> Arc<dyn CommandConsole> {
        Arc::new(BufferedConsole::new(label))
    }
}

/// Session-wide registry of command consoles, in registration order.
#[derive(Default)]
pub struct ProcessPanel {
    consoles: Mutex<Vec<Arc<dyn CommandConsole>>>,
}

impl ProcessPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console_count(&self) -> usize {
        self.consoles.lock().unwrap().len()
    }
}

impl ConsolePanel for ProcessPanel {
    fn add_command_output(&self, console: Arc<dyn CommandConsole>) {
        debug!("registering console `{}`", console.label());
        self.consoles.lock().unwrap().push(console);
    }
}

/// Notifier that renders banners on the terminal. Floating failures go to
/// stderr so they surface even when stdout is redirected.
pub struct TerminalNotifier;

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, message: &str, severity: Severity, mode: DisplayMode) -> Result<()> {
        let banner = match severity {
            Severity::Fail => format!("🚫 {message}"),
            Severity::Info => message.to_string(),
        };
        match mode {
            DisplayMode::Float => eprintln!("{banner}"),
            DisplayMode::Default => println!("{banner}"),
        }
        Ok(())
    }
}
