//! CLI entrypoint for alliance-draw
//!
//! Wires the layers together: config loading, roster source, the draw use
//! case, console output and export.

use anyhow::{bail, Context, Result};
use clap::Parser;
use draw_application::{ResultExporter, RunDrawInput, RunDrawUseCase};
use draw_infrastructure::{ConfigLoader, CsvExporter, DelimitedRosterSource, JsonExporter};
use draw_presentation::{
    Cli, ConsoleFormatter, ConsoleNotifier, DisplayOptions, ExportFormat, OutputFormat,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    if cli.quiet || !config.output.color {
        colored::control::set_override(false);
    }

    let roster_path = match cli.roster {
        Some(ref path) => path.clone(),
        None => bail!("Roster file is required. See --help for usage."),
    };

    info!("Starting draw over {}", roster_path.display());

    // === Dependency Injection ===
    let source = Arc::new(DelimitedRosterSource::new(
        roster_path,
        config.roster.clone(),
    ));
    let use_case = RunDrawUseCase::new(source);
    let input = RunDrawInput::new(config.quotas.to_quota_set());

    // Seeded rng reproduces a draw exactly; otherwise draw from system entropy.
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = if cli.quiet {
        use_case.execute(input, &mut rng)?
    } else {
        use_case.execute_with_notifier(input, &mut rng, &ConsoleNotifier)?
    };

    let formatter = ConsoleFormatter::new(DisplayOptions {
        group1_name: config.output.group1_name.clone(),
        group2_name: config.output.group2_name.clone(),
    });
    let text = match cli.output {
        OutputFormat::Full => formatter.format(&outcome),
        OutputFormat::Summary => formatter.format_summary_only(&outcome),
        OutputFormat::Json => formatter.format_json(&outcome),
    };
    println!("{text}");

    if cli.export != ExportFormat::None {
        let directory = cli
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));
        let exporter: Box<dyn ResultExporter> = match cli.export {
            ExportFormat::Csv => Box::new(CsvExporter::new(&directory)),
            ExportFormat::Json => Box::new(JsonExporter::new(&directory)),
            ExportFormat::None => unreachable!(),
        };
        let paths = exporter.export(&outcome).context("failed to export draw")?;
        if !cli.quiet {
            for path in paths {
                println!("Exported: {}", path.display());
            }
        }
    }

    Ok(())
}
