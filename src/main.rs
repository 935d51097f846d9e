use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};

use igv_tracks::genotype::individual_rows;
use igv_tracks::input::{Snapshot, load_snapshot};
use igv_tracks::logging::init_tracing;
use igv_tracks::model::pedigree::Individual;
use igv_tracks::model::sample::TrackType;
use igv_tracks::model::variant::Variant;
use igv_tracks::panel::buttons::read_buttons;
use igv_tracks::panel::options::is_dna_request;
use igv_tracks::panel::{PanelController, PanelState, Selection, Toggle};
use igv_tracks::report::json::{render_catalog_json, render_tracks_json};
use igv_tracks::report::text::render_genotype_report;
use igv_tracks::report::write_output;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = parse_args(&args)?;
    init_tracing(config.verbose);

    match &config.command {
        Command::Tracks(args) => run_tracks(args),
        Command::Genotypes(args) => run_genotypes(args),
        Command::Catalog(args) => {
            let json = render_catalog_json().map_err(|e| e.to_string())?;
            write_output(args.out.as_deref(), &json).map_err(|e| e.to_string())
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "igv-tracks",
    version,
    about = "Genome-browser track configuration for family variant review"
)]
struct RunConfig {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Open the reads panel for a family and print the viewer configuration
    Tracks(TracksArgs),
    /// Print the per-individual genotype report of a variant
    Genotypes(GenotypesArgs),
    /// Print the selectable GTEx and mappability reference tracks
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Args)]
struct TracksArgs {
    /// Backend snapshot (.json or .json.gz)
    #[arg(long)]
    snapshot: PathBuf,
    #[arg(long)]
    family: String,
    /// Track types to open with (alignment, wig, spliceJunctions, gcnv)
    #[arg(long, value_delimiter = ',', value_parser = parse_track_type, required = true)]
    types: Vec<TrackType>,
    /// Extra track types toggled on after opening
    #[arg(long = "add-type", value_parser = parse_track_type)]
    add_types: Vec<TrackType>,
    #[arg(long)]
    gtex: Vec<String>,
    #[arg(long)]
    mappability: Vec<String>,
    /// Center the viewer on this variant
    #[arg(long)]
    variant: Option<String>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct GenotypesArgs {
    #[arg(long)]
    snapshot: PathBuf,
    #[arg(long)]
    variant: String,
    /// Restrict the report to one family
    #[arg(long)]
    family: Option<String>,
    /// Treat the variant as part of a compound-heterozygous pair
    #[arg(long)]
    compound_het: bool,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct CatalogArgs {
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_track_type(value: &str) -> Result<TrackType, String> {
    TrackType::from_key(value).ok_or_else(|| {
        format!("invalid track type {value} (use alignment|wig|spliceJunctions|gcnv)")
    })
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let argv = std::iter::once("igv-tracks").chain(args.iter().map(String::as_str));
    RunConfig::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => e.to_string(),
    })
}

fn run_tracks(args: &TracksArgs) -> Result<(), String> {
    let snapshot = load_snapshot(&args.snapshot).map_err(|e| e.to_string())?;
    let variant = args
        .variant
        .as_deref()
        .map(|id| snapshot.variant(id))
        .transpose()
        .map_err(|e| e.to_string())?;

    let family_guids = match variant {
        Some(v) if !v.family_guids.is_empty() => v.family_guids.clone(),
        _ => vec![args.family.clone()],
    };
    let buttons = read_buttons(&snapshot, &family_guids);

    let mut controller = PanelController::new();
    controller.show_reads(&args.family, &args.types);
    if !args.add_types.is_empty() {
        apply_added_types(&mut controller, &args.add_types);
    }
    if !args.gtex.is_empty() {
        controller.update_selection(Selection::GtexRefs(args.gtex.clone()));
    }
    if !args.mappability.is_empty() {
        controller.update_selection(Selection::MappabilityRefs(args.mappability.clone()));
    }

    let view = controller.render(&snapshot, variant).map_err(|e| e.to_string())?;
    if view.is_none() {
        tracing::warn!(family_guid = args.family.as_str(), "nothing to show for family");
    }
    let json = render_tracks_json(&buttons, view.as_ref()).map_err(|e| e.to_string())?;
    write_output(args.out.as_deref(), &json).map_err(|e| e.to_string())
}

fn apply_added_types(controller: &mut PanelController, add_types: &[TrackType]) {
    let PanelState::Open(open) = controller.state() else {
        return;
    };
    let mut toggles: Vec<Toggle> = Vec::new();
    for track_type in add_types {
        if open.sample_types().contains(track_type) {
            continue;
        }
        let toggle = if is_dna_request(&[*track_type]) {
            Toggle::DnaType(*track_type)
        } else {
            Toggle::RnaType(*track_type)
        };
        if !toggles.contains(&toggle) {
            toggles.push(toggle);
        }
    }
    for toggle in toggles {
        controller.toggle(toggle);
    }
}

fn report_members<'a>(
    snapshot: &'a Snapshot,
    variant: &Variant,
    family: Option<&str>,
) -> Result<Vec<&'a Individual>, String> {
    if let Some(family_guid) = family {
        let family = snapshot.family(family_guid).map_err(|e| e.to_string())?;
        return Ok(snapshot.family_members(family));
    }
    let mut members = Vec::new();
    for family_guid in &variant.family_guids {
        match snapshot.family(family_guid) {
            Ok(family) => members.extend(snapshot.family_members(family)),
            Err(err) => tracing::warn!("{err}; skipping family"),
        }
    }
    if members.is_empty() {
        members = snapshot
            .individuals_by_guid
            .values()
            .filter(|ind| variant.genotypes.contains_key(&ind.individual_guid))
            .collect();
    }
    Ok(members)
}

fn run_genotypes(args: &GenotypesArgs) -> Result<(), String> {
    let snapshot = load_snapshot(&args.snapshot).map_err(|e| e.to_string())?;
    let variant = snapshot.variant(&args.variant).map_err(|e| e.to_string())?;
    let members = report_members(&snapshot, variant, args.family.as_deref())?;
    let rows = individual_rows(variant, &members, &snapshot.individuals_by_guid, args.compound_het);
    let text = render_genotype_report(variant, &rows);
    write_output(args.out.as_deref(), &text).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
