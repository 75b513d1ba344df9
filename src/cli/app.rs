//! Command runner wiring adapters to the entry use case

use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::{Clipboard, Injector};
use crate::application::{EntryError, Outcome, TextEntryUseCase};
use crate::infrastructure::{
    create_injector, ArboardClipboard, FixedGeometry, MemoryClipboard, NoOpInjector,
    SharedProcessMonitor,
};

use super::args::{Command, EntryOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
/// The target application was not ready, or another operation was running.
pub const EXIT_UNAVAILABLE: u8 = 3;

/// Run one field operation with the configured adapters
pub async fn run_command(command: Command, options: EntryOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Grace period for the operator to put focus on the target window.
    if options.delay > 0 {
        presenter.start_spinner(&format!(
            "Injecting in {}s - focus the target window",
            options.delay
        ));
        tokio::time::sleep(Duration::from_secs(options.delay)).await;
        presenter.stop_spinner();
    }

    // The CLI is a manual driver: the operator owns process and focus state,
    // so the monitor reports ready. Embedding hosts wire their own tracking
    // through the ProcessMonitor port instead.
    let monitor = SharedProcessMonitor::assume_ready();
    let geometry = FixedGeometry::new(options.window_width);

    let clipboard: Box<dyn Clipboard> = if options.dry_run {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(ArboardClipboard::new())
    };
    let injector: Box<dyn Injector> = if options.dry_run {
        Box::new(NoOpInjector::new())
    } else {
        create_injector(options.backend)
    };

    let use_case = TextEntryUseCase::new(clipboard, injector, monitor, geometry);

    match command {
        Command::Send { text } => finish(use_case.send(&text).await, "Sent", &presenter),
        Command::Paste { text } => finish(use_case.paste(&text).await, "Pasted", &presenter),
        Command::Clear => finish(use_case.clear().await, "Cleared input field", &presenter),
        Command::Read => match use_case.read().await {
            Ok(text) => {
                presenter.output(&text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}

fn finish(result: Result<Outcome, EntryError>, done: &str, presenter: &Presenter) -> ExitCode {
    match result {
        Ok(Outcome::Completed) => {
            presenter.success(done);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(Outcome::NotReady) => {
            presenter.warn("Target application is not ready");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
        Ok(Outcome::Busy) => {
            presenter.warn("Another operation is in flight");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
        Ok(Outcome::InvalidText) => {
            presenter.error("Text does not fit the input field's 200-character limit");
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
