use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showcase_core::{AppConfig, InputEvent, NavKey, ProjectCatalog, ShowcaseStage};
use tracing_subscriber::EnvFilter;

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> showcase_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { width, catalog } => run_demo(width, catalog.as_deref()),
        Commands::Catalog { input } => inspect_catalog(input.as_deref()),
    }
}

/// Drives a scripted navigation session and logs each settled frame,
/// exercising every input path end to end.
fn run_demo(width: f32, catalog: Option<&std::path::Path>) -> showcase_core::Result<()> {
    let catalog = load_catalog(catalog)?;
    tracing::info!(panels = catalog.len(), width, "starting showcase demo");

    let mut stage = ShowcaseStage::new(catalog, AppConfig::default(), width)?;

    stage.handle(InputEvent::Visibility(1.0));
    stage.handle(InputEvent::HeroScroll(0.9));

    let script = [
        InputEvent::Next,
        InputEvent::KeyDown(NavKey::ArrowRight),
        InputEvent::IndicatorTap(0),
        InputEvent::Next,
    ];

    for event in script {
        stage.handle(event);
        let frame = settle(&mut stage);
        tracing::info!(
            counter = %frame.counter,
            offset = frame.offset,
            can_advance = frame.can_advance,
            can_retreat = frame.can_retreat,
            ?event,
            "settled"
        );
    }

    Ok(())
}

/// Loads and validates a catalog, then prints a one-line summary per record.
fn inspect_catalog(input: Option<&std::path::Path>) -> showcase_core::Result<()> {
    let catalog = load_catalog(input)?;

    for record in catalog.records() {
        tracing::info!(
            id = record.id,
            title = %record.title,
            year = %record.year,
            category = %record.category,
            tech = ?record.tech,
            live = record.live.is_some(),
            github = record.github.is_some(),
            "project"
        );
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> showcase_core::Result<ProjectCatalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            ProjectCatalog::from_json(&json)
        }
        None => Ok(ProjectCatalog::builtin()),
    }
}

fn settle(stage: &mut ShowcaseStage) -> showcase_core::StripFrame {
    let mut frame = stage.frame(FRAME_DT);
    while stage.is_animating() {
        frame = stage.frame(FRAME_DT);
    }
    frame
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Horizontal project showcase driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scripted navigation session against a simulated frame loop.
    Demo {
        /// Initial viewport width in pixels.
        #[arg(short, long, default_value_t = 1024.0)]
        width: f32,
        /// Optional JSON catalog to load instead of the built-in projects.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a project catalog and print its contents.
    Catalog {
        /// Path to a JSON catalog file; defaults to the built-in projects.
        input: Option<PathBuf>,
    },
}
