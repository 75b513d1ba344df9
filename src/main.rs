//! Ghostwrite CLI entry point

use std::process::ExitCode;

use clap::Parser;

use ghostwrite::cli::{
    app::{run_command, EXIT_USAGE_ERROR},
    args::{Cli, EntryOptions},
    presenter::Presenter,
};
use ghostwrite::infrastructure::InjectorBackend;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ghostwrite=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let backend = match cli.backend.as_deref() {
        Some(value) => match value.parse::<InjectorBackend>() {
            Ok(backend) => backend,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => InjectorBackend::default(),
    };

    let options = EntryOptions {
        window_width: cli.window_width,
        backend,
        delay: cli.delay,
        dry_run: cli.dry_run,
    };

    run_command(cli.command, options).await
}
