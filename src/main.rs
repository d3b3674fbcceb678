//! MEP-Equalize.
//!
//! Richtet parallele TGA-Elemente (Rohre, Kanäle, Leerrohre) im
//! gleichmäßigen Abstand zur Referenz aus. Standalone-Host über
//! JSON-Dokumente; eine CAD-Anbindung implementiert dieselbe
//! `HostDocument`-Schnittstelle.

use anyhow::Context;
use clap::Parser;
use mep_equalize::app;
use mep_equalize::core::ElementId;
use mep_equalize::host::JsonDocument;
use mep_equalize::shared::units::meters_to_internal;
use mep_equalize::shared::EqualizeOptions;
use std::path::PathBuf;

/// Kommandozeilen-Argumente.
#[derive(Debug, Parser)]
#[command(
    name = "mep-equalize",
    version,
    about = "Parallele TGA-Elemente gleichmäßig zur Referenz ausrichten"
)]
struct Args {
    /// JSON-Dokument mit linearen Elementen
    document: PathBuf,

    /// Abstand zwischen den Elementen in Metern (Standard: aus Optionen)
    #[arg(short, long)]
    distance: Option<String>,

    /// Selektion als Komma-Liste von Element-IDs (Standard: Dokument-Reihenfolge,
    /// erstes Element ist die Referenz)
    #[arg(long, value_delimiter = ',')]
    ids: Option<Vec<u64>>,

    /// Zieldatei (Standard: Eingabedatei überschreiben)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("MEP-Equalize v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EqualizeOptions::load_from_file(&EqualizeOptions::config_path());

    let mut document = JsonDocument::load_from_file(&args.document).with_context(|| {
        format!(
            "Dokument konnte nicht geladen werden: {}",
            args.document.display()
        )
    })?;

    let selection: Vec<ElementId> = match &args.ids {
        Some(ids) => ids.iter().copied().map(ElementId).collect(),
        None => document.element_ids(),
    };

    let distance_m = match &args.distance {
        Some(input) => app::parse_distance(input)?,
        None => options.default_distance_m,
    };
    let distance_internal = meters_to_internal(distance_m);

    let summary = app::equalize(
        &mut document,
        &selection,
        distance_internal,
        options.parallel_tolerance,
    )?;

    let output = args.output.as_ref().unwrap_or(&args.document);
    document.save_to_file(output)?;

    log::info!(
        "Abstände ausgeglichen: {} Elemente bei {:.2} m Basis-Abstand",
        summary.moved,
        distance_m
    );

    Ok(())
}
