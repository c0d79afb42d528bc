//! Run command implementation: the load -> resolve -> execute -> report
//! pipeline behind the bare `gatecheck` invocation.

use std::path::Path;

use gatecheck::checks::CheckContext;
use gatecheck::cli::{Cli, OutputFormat};
use gatecheck::color::resolve_color;
use gatecheck::error::ExitCode;
use gatecheck::output::github::COMMENT_FILE_NAME;
use gatecheck::output::text::TextFormatter;
use gatecheck::output::{csv, github, junit, sarif, tap};
use gatecheck::report::Report;
use gatecheck::{artifacts, config, resolver, runner};

/// Run the configured checks and render the report.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut config = config::load(&cli.config_file)?;
    if let Some(dir) = &cli.artifacts_dir {
        config.dbt_artifacts_dir = dir.clone();
    }
    tracing::debug!(
        "loaded {} checks from `{}`",
        config.total_checks(),
        cli.config_file.display()
    );

    // The artifacts dir is relative to the config file, as dbt projects
    // keep both at the project root.
    let base = cli.config_file.parent().unwrap_or_else(|| Path::new("."));
    let artifacts_dir = base.join(&config.dbt_artifacts_dir);
    let artifacts = artifacts::load(
        &artifacts_dir,
        config.needs_catalog(),
        config.needs_run_results(),
    )?;

    let ctx = CheckContext {
        manifest: &artifacts.manifest,
        catalog: artifacts.catalog.as_ref(),
        run_results: artifacts.run_results.as_ref(),
    };

    let instances = resolver::resolve(&config, &ctx);
    tracing::info!("assembled {} check instances, running...", instances.len());

    let outcomes = runner::run_checks(instances, &ctx);
    let report = Report::new(chrono::Utc::now().to_rfc3339(), outcomes);
    tracing::info!(
        "done: SUCCESS={} WARN={} ERROR={}",
        report.summary.passed,
        report.summary.failed_warn,
        report.summary.failed_error + report.summary.errored
    );

    match cli.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::new(resolve_color());
            formatter.write_report(&report)?;
        }
        OutputFormat::Csv => print!("{}", csv::render(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Junit => print!("{}", junit::render(&report)),
        OutputFormat::Sarif => println!("{}", sarif::render(&report)?),
        OutputFormat::Tap => print!("{}", tap::render(&report)),
    }

    if let Some(path) = &cli.output_file {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        tracing::info!("saved results to `{}`", path.display());
    }

    if cli.create_pr_comment_file {
        github::write_comment_file(&report, Path::new(COMMENT_FILE_NAME))?;
    }

    Ok(if report.success {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
