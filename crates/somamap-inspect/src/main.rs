//! somamap-inspect: CLI tool for authoring and checking the region tables.
//!
//! Exercises the same core functions the selector components call, without
//! a browser:
//!
//! - List a view's regions with their boxes and shape overrides
//! - Hit-test a point the way a click on the rendered overlay would
//! - Dump the symptom mapping table
//! - Validate the static tables (non-zero exit on any problem)
//! - Render an SVG snapshot of a selection
//!
//! # Usage
//!
//! ```text
//! cargo run --bin somamap-inspect -- [OPTIONS] <COMMAND>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use somamap_core::{
    HitTestMode, Point, SelectorConfig, SizeKey, ViewBox, ViewId, active_regions, build_overlay,
    has_custom_shape, hit_test, symptom_mapping, unscale_point,
};
use somamap_export::{SelectionReport, SnapshotMetadata, to_svg};

/// Inspect and validate somamap body-region tables.
///
/// Global options configure the selector the same way the web
/// components are configured; subcommands that draw or hit-test honour
/// them.
#[derive(Parser)]
#[command(name = "somamap-inspect", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Rendered size.
    #[arg(long, global = true, value_enum, default_value_t = CLI_DEFAULT_SIZE)]
    size: Size,

    /// Click matching strategy.
    #[arg(long, global = true, value_enum, default_value_t = CLI_DEFAULT_HIT_TEST)]
    hit_test: HitTest,

    /// Do not draw labels next to selected regions.
    #[arg(long, global = true)]
    no_labels: bool,

    /// Output JSON instead of a human-readable report.
    #[arg(long, global = true)]
    json: bool,

    /// Full selector config as a JSON string.
    ///
    /// When provided, `--size`, `--hit-test` and `--no-labels` are
    /// ignored. Missing fields take their defaults.
    #[arg(long, global = true)]
    config_json: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List the regions of a view, optionally narrowed by a symptom.
    Regions {
        #[arg(long, value_enum, default_value_t = View::Front)]
        view: View,

        /// Symptom id whose filter to apply.
        #[arg(long)]
        symptom: Option<String>,
    },

    /// Hit-test a point given in rendered view box units.
    ///
    /// The point is divided by the size multiplier before matching, so
    /// `--size large` with (140, 28) tests design point (100, 20).
    Hit {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        #[arg(long, value_enum, default_value_t = View::Front)]
        view: View,

        /// Symptom id whose filter to apply.
        #[arg(long)]
        symptom: Option<String>,
    },

    /// Print the symptom mapping table.
    Symptoms,

    /// Check the built-in tables for consistency.
    Validate,

    /// Render an SVG snapshot.
    Render {
        #[arg(long, value_enum, default_value_t = View::Front)]
        view: View,

        /// Symptom id whose filter to apply.
        #[arg(long)]
        symptom: Option<String>,

        /// Region ids to mark selected, comma separated.
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,

        /// Write the SVG here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Body orientation selection.
#[derive(Clone, Copy, ValueEnum)]
enum View {
    Front,
    Back,
}

impl From<View> for ViewId {
    fn from(view: View) -> Self {
        match view {
            View::Front => Self::Front,
            View::Back => Self::Back,
        }
    }
}

/// Rendered size selection.
#[derive(Clone, Copy, ValueEnum)]
enum Size {
    /// 0.7x.
    Small,
    /// 1.0x.
    Medium,
    /// 1.4x.
    Large,
}

/// Hit-test strategy selection.
#[derive(Clone, Copy, ValueEnum)]
enum HitTest {
    /// Rectangular region boxes only.
    Box,
    /// Drawn ellipse and path geometry where a region has one.
    Shape,
}

const fn size_from_core(size: SizeKey) -> Size {
    match size {
        SizeKey::Small => Size::Small,
        SizeKey::Medium => Size::Medium,
        SizeKey::Large => Size::Large,
    }
}

const fn hit_test_from_core(mode: HitTestMode) -> HitTest {
    match mode {
        HitTestMode::BoundingBox => HitTest::Box,
        HitTestMode::Shape => HitTest::Shape,
    }
}

/// CLI defaults, derived from the [`SelectorConfig`] constants so the two
/// cannot silently diverge.
const CLI_DEFAULT_SIZE: Size = size_from_core(SelectorConfig::DEFAULT_SIZE);
const CLI_DEFAULT_HIT_TEST: HitTest = hit_test_from_core(SelectorConfig::DEFAULT_HIT_TEST);

/// Build a [`SelectorConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<SelectorConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(SelectorConfig {
        size: match cli.size {
            Size::Small => SizeKey::Small,
            Size::Medium => SizeKey::Medium,
            Size::Large => SizeKey::Large,
        },
        hit_test: match cli.hit_test {
            HitTest::Box => HitTestMode::BoundingBox,
            HitTest::Shape => HitTestMode::Shape,
        },
        show_labels: !cli.no_labels,
        ..SelectorConfig::default()
    })
}

/// Reject symptom ids that are not in the mapping table.
///
/// The selector treats an unknown symptom as "not applicable"; on the
/// command line it is almost always a typo.
fn check_symptom(symptom: Option<&str>) -> Result<(), String> {
    match symptom {
        Some(id) if symptom_mapping(id).is_none() => Err(format!("Unknown symptom: {id}")),
        _ => Ok(()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}

fn run_regions(cli: &Cli, view: ViewId, symptom: Option<&str>) -> Result<(), String> {
    check_symptom(symptom)?;
    let regions = active_regions(view, symptom);

    if cli.json {
        return print_json(&regions);
    }

    println!("{} view: {} regions", view.label(), regions.len());
    println!(
        "{:<20} {:<20} {:>24} {:>6}",
        "Id", "Name", "Box (x, y, w, h)", "Shape"
    );
    println!("{}", "-".repeat(74));
    for region in &regions {
        let b = region.coordinates;
        let bounds = format!("{}, {}, {}, {}", b.x, b.y, b.width, b.height);
        let shape = if has_custom_shape(region.id) { "yes" } else { "" };
        println!("{:<20} {:<20} {bounds:>24} {shape:>6}", region.id, region.name);
    }
    Ok(())
}

fn run_hit(
    cli: &Cli,
    config: &SelectorConfig,
    rendered: Point,
    view: ViewId,
    symptom: Option<&str>,
) -> Result<(), String> {
    check_symptom(symptom)?;
    let regions = active_regions(view, symptom);
    let design = unscale_point(rendered, config.size);
    let hit = hit_test(design, &regions, config.hit_test);

    if cli.json {
        return print_json(&serde_json::json!({
            "view": view,
            "size": config.size,
            "hit_test": config.hit_test,
            "rendered": rendered,
            "design": design,
            "region": hit,
        }));
    }

    println!(
        "View box ({}, {}) at {} -> design ({:.2}, {:.2})",
        rendered.x, rendered.y, config.size, design.x, design.y,
    );
    match hit {
        Some(region) => println!("Hit: {} ({})", region.id, region.name),
        None => println!("Miss"),
    }
    Ok(())
}

fn run_symptoms(cli: &Cli) -> Result<(), String> {
    if cli.json {
        return print_json(somamap_core::symptom::SYMPTOM_MAPPINGS);
    }

    for mapping in somamap_core::symptom::SYMPTOM_MAPPINGS {
        println!("{} ({})", mapping.display_name, mapping.symptom_id);
        if mapping.supported_views.is_empty() {
            println!("  not applicable to the body map");
        }
        for view in mapping.supported_views.iter().copied() {
            let ids: Vec<&str> = mapping.regions(view).iter().map(|r| r.id).collect();
            let scope = if mapping.filter(view).is_some() {
                "filtered"
            } else {
                "all"
            };
            println!("  {:<6} [{scope}] {}", view.as_str(), ids.join(", "));
        }
    }
    Ok(())
}

/// Returns `Ok(false)` when validation found problems.
fn run_validate(cli: &Cli) -> Result<bool, String> {
    let errors = somamap_core::validate_tables();

    if cli.json {
        print_json(&errors)?;
    } else if errors.is_empty() {
        println!("Tables OK");
    } else {
        for error in &errors {
            println!("error: {error}");
        }
        println!("{} problem(s) found", errors.len());
    }
    Ok(errors.is_empty())
}

fn run_render(
    config: &SelectorConfig,
    view: ViewId,
    symptom: Option<&str>,
    selection: &[String],
    out: Option<&PathBuf>,
) -> Result<(), String> {
    check_symptom(symptom)?;
    let regions = active_regions(view, symptom);
    let model = build_overlay(&regions, selection, config.size, config.show_labels);

    let report = SelectionReport::from_selection(selection, view, symptom);
    let report_json = report
        .to_json()
        .map_err(|e| format!("Error serializing report: {e}"))?;
    let title = symptom.and_then(symptom_mapping).map_or_else(
        || format!("{} view", view.label()),
        |mapping| mapping.display_name.to_owned(),
    );
    let svg = to_svg(
        &model,
        view,
        &SnapshotMetadata {
            title: Some(&title),
            description: None,
            report_json: Some(&report_json),
        },
    );

    match out {
        Some(path) => {
            std::fs::write(path, &svg)
                .map_err(|e| format!("Error writing SVG to {}: {e}", path.display()))?;
            let vb = ViewBox::for_size(config.size);
            eprintln!(
                "SVG written to {} ({} bytes, viewBox {vb}, {} selected)",
                path.display(),
                svg.len(),
                report.entries.len(),
            );
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Command::Regions { view, symptom } => run_regions(&cli, (*view).into(), symptom.as_deref()),
        Command::Hit {
            x,
            y,
            view,
            symptom,
        } => run_hit(
            &cli,
            &config,
            Point::new(*x, *y),
            (*view).into(),
            symptom.as_deref(),
        ),
        Command::Symptoms => run_symptoms(&cli),
        Command::Validate => match run_validate(&cli) {
            Ok(true) => Ok(()),
            Ok(false) => return ExitCode::FAILURE,
            Err(e) => Err(e),
        },
        Command::Render {
            view,
            symptom,
            select,
            out,
        } => run_render(
            &config,
            (*view).into(),
            symptom.as_deref(),
            select,
            out.as_ref(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
