//! `upstream-licenses` — turn dependency license metadata into an attribution document.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and merge flags over it ([`config::Settings`]).
//! 3. Read the `cargo license --json` manifest ([`manifest`]).
//! 4. Optionally fill missing licenses from crates.io (`--online`, [`registry`]).
//! 5. Select a license per dependency and group them ([`attribution`], [`license`]).
//! 6. Render `UPSTREAM-LICENSES.md` or JSON ([`report`]).
//! 7. Exit `0`, or `1` when a chosen license has no text file.

mod attribution;
mod cli;
mod config;
mod error;
mod license;
mod manifest;
mod models;
mod registry;
mod report;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use attribution::attribute;
use cli::{Cli, OutputFormat};
use config::{load_config, Settings};
use manifest::load_manifest;
use models::{Dependency, LicenseSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(Path::new("."), cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config)?;

    let mut deps = load_manifest(cli.input.as_deref())?;
    info!(count = deps.len(), "manifest loaded");

    if cli.online {
        enrich_online(&mut deps, cli.quiet).await?;
    }

    let attribution = attribute(&deps, &settings.preferences);

    for name in &attribution.unlicensed {
        eprintln!(
            "{} {} crate did not specify its license",
            "warning:".yellow().bold(),
            name
        );
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&attribution)?);
        }
        OutputFormat::Markdown => {
            let doc = match report::markdown::render(
                &attribution,
                &settings.license_dir,
                &settings.link_base,
            ) {
                Ok(doc) => doc,
                Err(err) => {
                    eprintln!("{} {}", "error:".red().bold(), err);
                    std::process::exit(1);
                }
            };

            report::markdown::write(&settings.output, &doc)?;
            report::terminal::render(&attribution, &deps, cli.verbose, cli.quiet);

            if !cli.quiet {
                println!(
                    " {} {} generated successfully!",
                    "✓".green(),
                    settings.output.display()
                );
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        concat!(env!("CARGO_CRATE_NAME"), "=debug")
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Ask crates.io for the license of every dependency the manifest left blank.
async fn enrich_online(deps: &mut [Dependency], quiet: bool) -> Result<()> {
    use futures::future::join_all;

    const BATCH_SIZE: usize = 75;

    let mut missing: Vec<&mut Dependency> = deps
        .iter_mut()
        .filter(|d| d.license_expression().is_none() && !d.version.is_empty())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    info!(count = missing.len(), "looking up missing licenses on crates.io");

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let pb = if !quiet {
        let pb = ProgressBar::new(missing.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for batch in missing.chunks_mut(BATCH_SIZE) {
        let futures: Vec<_> = batch
            .iter()
            .map(|dep| {
                let client = client.clone();
                let name = dep.name.clone();
                let version = dep.version.clone();
                async move { registry::crates_io::fetch_license(&client, &name, &version).await }
            })
            .collect();

        let results = join_all(futures).await;

        for (dep, result) in batch.iter_mut().zip(results) {
            match result {
                Ok(Some(license)) => {
                    info!(dependency = %dep.name, license = %license, "license found on crates.io");
                    dep.license = Some(license);
                    dep.source = LicenseSource::Registry;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(dependency = %dep.name, error = %err, "crates.io lookup failed");
                }
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    Ok(())
}
