use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use tracing::Level;

use hdrcheck::application::dto::CheckOptions;
use hdrcheck::application::{CancellationToken, CheckDirectoryUseCase, CheckEvent, spawn_check};
use hdrcheck::domain::services::{
    CFB_CONTAINER, DisambiguationResolver, FallbackPolicy, FormatDetector, SignatureRegistry,
    SortDirection, ZIP_CONTAINER,
};
use hdrcheck::infrastructure::file_systems::LocalDirectory;
use hdrcheck::infrastructure::persistence::LocalFileMover;
use hdrcheck::presentation::cli::{
    Cli, Commands, ProgressReporter, print_records, print_signatures, print_summary,
};

const REPORT_FILE_NAME: &str = "check_results.txt";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    match cli.command {
        Commands::Check {
            dir,
            report,
            signatures,
            dry_run,
            keep_going,
            zip_fallback,
            cfb_fallback,
            no_fallback,
            sort,
        } => {
            let policy = if no_fallback {
                FallbackPolicy::none()
            } else {
                FallbackPolicy::default()
                    .with_target(ZIP_CONTAINER, &zip_fallback)
                    .with_target(CFB_CONTAINER, &cfb_fallback)
            };
            let detector = build_detector(signatures.as_deref(), policy)?;

            let mut options = CheckOptions::new(match report {
                Some(path) => path,
                None => default_report_path(),
            });
            if dry_run {
                options = options.dry_run();
            }
            if keep_going {
                options = options.keep_going();
            }

            run_check(detector, dir, options, sort.into())
        }
        Commands::ListSignatures { signatures } => {
            let detector = build_detector(signatures.as_deref(), FallbackPolicy::default())?;
            print_signatures(&detector);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_detector(signatures: Option<&Path>, policy: FallbackPolicy) -> Result<FormatDetector> {
    let mut registry = SignatureRegistry::with_defaults();
    if let Some(path) = signatures {
        registry
            .extend_from_file(path)
            .context("Failed to load custom signatures")?;
    }
    Ok(FormatDetector::new(registry, DisambiguationResolver::new(policy)))
}

/// Report location when none is given: next to the executable
fn default_report_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(REPORT_FILE_NAME)
}

fn run_check(
    detector: FormatDetector,
    dir: PathBuf,
    options: CheckOptions,
    direction: SortDirection,
) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Failed to set Ctrl+C handler")?;

    println!(
        "{} {}{}",
        style("Checking").cyan().bold(),
        dir.display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let use_case = CheckDirectoryUseCase::new(detector, LocalDirectory, LocalFileMover);
    let handle = spawn_check(use_case, dir, options, cancel);

    let progress = ProgressReporter::for_check();
    let outcome = handle.wait_with(|event| match event {
        CheckEvent::Progress(percent) => progress.update(*percent),
        CheckEvent::FileChecked(record) => progress.set_current(&record.file_name()),
        CheckEvent::Finished(_) => progress.finish("Check complete"),
        CheckEvent::Failed(message) => progress.abandon(&format!("Error: {}", message)),
    });

    let summary = outcome.context("Check did not complete")?;

    println!();
    print_records(&summary.records, direction);
    print_summary(&summary);

    Ok(())
}
