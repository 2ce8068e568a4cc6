mod cli;
mod config;

use catalog_views::adapters::outbound::console::StderrProgressReporter;
use catalog_views::adapters::outbound::display_names::StaticDisplayNames;
use catalog_views::adapters::outbound::filesystem::FileSystemReader;
use catalog_views::application::dto::{ViewRequest, ViewResponse};
use catalog_views::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use catalog_views::application::read_models::CatalogViewReadModelBuilder;
use catalog_views::application::use_cases::BuildCatalogViewUseCase;
use catalog_views::ports::inbound::CatalogViewPort;
use catalog_views::shared::error::ExitCode;
use catalog_views::shared::Result;
use cli::Args;
use config::{discover_config, load_config_from_path, merge, ConfigFile};
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    // Resolve configuration: CLI > config file > defaults
    let config = load_config(&args)?;
    let settings = merge(&args, config);

    let mut builder = ViewRequest::builder()
        .snapshot_path(args.snapshot.clone())
        .view(settings.view)
        .require_attested(settings.require_attested);
    if let Some(kind) = settings.attested_entity_kind.as_deref() {
        builder = builder.attested_entity_kind(kind);
    }
    let request = builder.build()?;
    let attested_entity_kind = request.attested_entity_kind.clone();
    let require_attested = request.require_attested;

    // Create adapters (Dependency Injection)
    let catalog_reader = FileSystemReader::new();
    let display_names = StaticDisplayNames::with_defaults().merged_with(&settings.display_names);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = BuildCatalogViewUseCase::new(catalog_reader, display_names, progress_reporter);
    let response = use_case.build_view(request)?;

    // Render and present
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = CatalogViewReadModelBuilder::build(&response, &attested_entity_kind);
    let formatted = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted)?;

    Ok(attestation_gate(&response, require_attested))
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None if args.snapshot.is_dir() => discover_config(&args.snapshot),
        None => Ok(None),
    }
}

/// Exit code for `--require-attested`
fn attestation_gate(response: &ViewResponse, require_attested: bool) -> ExitCode {
    if require_attested && response.has_unattested() {
        eprintln!(
            "\n{} {} application(s) have never been attested.",
            "⚠️  Attestation check failed:".yellow().bold(),
            response.unattested_count()
        );
        return ExitCode::UnattestedEntitiesDetected;
    }
    ExitCode::Success
}
