mod cli;

use cli::Args;
use cve_info_fetcher::adapters::outbound::console::StderrProgressReporter;
use cve_info_fetcher::adapters::outbound::filesystem::{CsvInputReader, CsvResultSink};
use cve_info_fetcher::adapters::outbound::network::CirclClient;
use cve_info_fetcher::application::dto::EnrichmentRequest;
use cve_info_fetcher::application::use_cases::EnrichCvesUseCase;
use cve_info_fetcher::application::{CancellationToken, EnrichmentRunner, RunEvent, RunStatus};
use cve_info_fetcher::config::{discover_config, load_config_from_path, RunSettings};
use cve_info_fetcher::ports::inbound::EnrichmentPort;
use cve_info_fetcher::ports::outbound::ProgressReporter;
use cve_info_fetcher::shared::error::ExitCode;
use cve_info_fetcher::shared::Result;
use std::path::Path;
use std::process;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostic logging to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "cve_info_fetcher=debug,warn"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Load configuration (explicit path, or auto-discovered in the working directory)
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = RunSettings::resolve(&args.overrides(), config.as_ref())?;
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let input_reader = CsvInputReader::new();
    let cve_repository = CirclClient::with_settings(settings.client)?;
    let result_sink = CsvResultSink::new(settings.output_dir);

    let use_case = EnrichCvesUseCase::new(input_reader, cve_repository, result_sink);
    let runner = EnrichmentRunner::new(use_case);

    let request = EnrichmentRequest::new(args.input).with_pacing(settings.pacing);
    let handle = runner.start_run(request)?;
    install_ctrl_c_handler(handle.cancellation());

    let reporter = StderrProgressReporter::new();
    let terminal = handle.wait_with(|event| present_event(&reporter, event));

    exit_code_for(terminal)
}

/// Renders a run event on the console
fn present_event<PR: ProgressReporter + ?Sized>(reporter: &PR, event: &RunEvent) {
    match event {
        RunEvent::Started { total, .. } => reporter.report_started(*total),
        RunEvent::Message(message) => reporter.report(message),
        RunEvent::Warning(message) => reporter.report_error(message),
        RunEvent::Progress(progress) => reporter.report_progress(progress),
        RunEvent::Completion(message) => reporter.report_completion(message),
        RunEvent::Finished { .. } | RunEvent::Failed { .. } => {}
    }
}

/// Maps the terminal event of a run to the process exit code
fn exit_code_for(terminal: RunEvent) -> Result<ExitCode> {
    match (terminal.terminal_status(), terminal) {
        (Some(RunStatus::Cancelled), _) => Ok(ExitCode::Cancelled),
        (Some(RunStatus::Completed), _) => Ok(ExitCode::Success),
        (_, RunEvent::Failed { message }) => Err(anyhow::anyhow!(message)),
        (_, other) => Err(anyhow::anyhow!("Unexpected final run event: {:?}", other)),
    }
}

/// First Ctrl-C requests cooperative cancellation, a second one exits immediately
///
/// The lookup client is blocking, so the signal is awaited on its own thread
/// with a private single-threaded runtime.
fn install_ctrl_c_handler(cancellation: CancellationToken) {
    let spawned = thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!(error = %e, "Ctrl-C handling unavailable");
                    return;
                }
            };

            runtime.block_on(async move {
                if tokio::signal::ctrl_c().await.is_err() {
                    return;
                }
                eprintln!("\n⏹️  Cancelling after the current lookup (press Ctrl-C again to abort)...");
                cancellation.cancel();

                if tokio::signal::ctrl_c().await.is_ok() {
                    process::exit(ExitCode::Cancelled.as_i32());
                }
            });
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "Ctrl-C handling unavailable");
    }
}
