use npm_release_audit::adapters::outbound::console::StderrProgressReporter;
use npm_release_audit::adapters::outbound::filesystem::{
    FileSystemReader, JsonResultWriter, RunLogReporter,
};
use npm_release_audit::adapters::outbound::network::NpmRegistryClient;
use npm_release_audit::adapters::outbound::tee::TeeProgressReporter;
use npm_release_audit::adapters::outbound::timing::FixedIntervalPacer;
use npm_release_audit::application::dto::AuditRequest;
use npm_release_audit::application::use_cases::AuditReleaseDatesUseCase;
use npm_release_audit::cli::Args;
use npm_release_audit::config::{self, ConfigFile, Settings};
use npm_release_audit::shared::error::ExitCode;
use npm_release_audit::shared::Result;
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RUN_LOG_FILENAME: &str = "result.txt";

#[tokio::main]
async fn main() {
    // Parse command-line arguments (usage errors exit with code 2)
    let args = Args::parse_args();

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Resolve configuration before touching the network or the output directory
    let config_file = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args.registry, args.output_dir, config_file);
    debug!(
        registry = %settings.registry_url,
        output_dir = %settings.output_dir.display(),
        "effective settings"
    );

    // Create adapters (Dependency Injection)
    let lockfile_reader = FileSystemReader::new();
    let registry = NpmRegistryClient::new(&settings.registry_url)?;
    let request_pacer = FixedIntervalPacer::new();
    let progress_reporter = TeeProgressReporter::new(
        StderrProgressReporter::new(),
        RunLogReporter::new(settings.output_dir.join(RUN_LOG_FILENAME)),
    );
    let result_sink = JsonResultWriter::new(settings.output_dir.clone());

    // Create use case with injected dependencies
    let use_case = AuditReleaseDatesUseCase::new(
        lockfile_reader,
        registry,
        request_pacer,
        progress_reporter,
        result_sink,
    );

    // Execute use case
    let request = AuditRequest::new(args.lockfile, args.cutoff);
    use_case.execute(request).await?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}
