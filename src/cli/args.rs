//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::infrastructure::InjectorBackend;

/// Ghostwrite - clipboard-swap text entry for non-scriptable applications
#[derive(Parser, Debug)]
#[command(name = "ghostwrite")]
#[command(version)]
#[command(about = "Types into a foreign application's input field by swapping the clipboard and synthesizing input")]
#[command(long_about = None)]
pub struct Cli {
    /// Client-area width of the target window in pixels (sets the focus click point)
    #[arg(short = 'w', long, value_name = "PX", default_value_t = 1920)]
    pub window_width: u32,

    /// Injection backend (enigo, noop)
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Seconds to wait before injecting, to move focus to the target window
    #[arg(short = 'd', long, value_name = "SECS", default_value_t = 0)]
    pub delay: u64,

    /// Log gestures instead of injecting, against an in-memory clipboard
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations on the foreign input field
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Put text in the input field and submit it
    Send {
        /// Text to send (under 200 characters)
        text: String,
    },
    /// Append text to the input field without submitting
    Paste {
        /// Text to append
        text: String,
    },
    /// Print the input field's current text
    Read,
    /// Empty the input field
    Clear,
}

/// Parsed runtime options shared by every command
#[derive(Debug, Clone)]
pub struct EntryOptions {
    pub window_width: u32,
    pub backend: InjectorBackend,
    pub delay: u64,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["ghostwrite", "read"]);
        assert_eq!(cli.window_width, 1920);
        assert!(cli.backend.is_none());
        assert_eq!(cli.delay, 0);
        assert!(!cli.dry_run);
        assert!(matches!(cli.command, Command::Read));
    }

    #[test]
    fn cli_parses_send() {
        let cli = Cli::parse_from(["ghostwrite", "send", "hello there"]);
        match cli.command {
            Command::Send { text } => assert_eq!(text, "hello there"),
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_paste() {
        let cli = Cli::parse_from(["ghostwrite", "paste", "more"]);
        assert!(matches!(cli.command, Command::Paste { .. }));
    }

    #[test]
    fn cli_parses_window_width() {
        let cli = Cli::parse_from(["ghostwrite", "-w", "2560", "clear"]);
        assert_eq!(cli.window_width, 2560);
    }

    #[test]
    fn cli_parses_backend_and_delay() {
        let cli = Cli::parse_from(["ghostwrite", "-b", "noop", "-d", "3", "send", "x"]);
        assert_eq!(cli.backend, Some("noop".to_string()));
        assert_eq!(cli.delay, 3);
    }

    #[test]
    fn cli_parses_dry_run() {
        let cli = Cli::parse_from(["ghostwrite", "--dry-run", "clear"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
