use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "isocontrib", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the 3D contribution calendar as SVG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Calendar JSON (`{"contributionCalendar": [...]}`).
    #[arg(long)]
    calendar: PathBuf,

    /// Settings JSON holding one settings object or an array of them.
    /// Without it, the Solarized light and dark themes are rendered with animation.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Layout JSON overriding grid and animation constants (missing fields keep defaults).
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Output directory.
    #[arg(long, env = "OUTPUT_DIR", default_value = isocontrib::DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Animate even when the settings do not ask for it.
    #[arg(long)]
    force_animation: bool,

    /// Also write a PNG preview next to each SVG.
    #[arg(long)]
    png: bool,

    /// Print the assembled scene as JSON to stdout.
    #[arg(long)]
    dump_scene: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let calendar = isocontrib::Calendar::from_path(&args.calendar)
        .with_context(|| format!("load calendar '{}'", args.calendar.display()))?;

    let config = match &args.layout {
        Some(path) => isocontrib::LayoutConfig::from_path(path)
            .with_context(|| format!("load layout '{}'", path.display()))?,
        None => isocontrib::LayoutConfig::default(),
    };

    let (all_settings, force) = match &args.settings {
        Some(path) => {
            let file = isocontrib::SettingsFile::from_path(path)
                .with_context(|| format!("load settings '{}'", path.display()))?;
            (file.into_vec(), args.force_animation)
        }
        None => (Vec::from(isocontrib::presets::builtin()), true),
    };

    for settings in &all_settings {
        if args.dump_scene {
            dump_scene(&calendar, settings, force, &config)?;
        }

        let svg = isocontrib::render_document(&calendar, settings, force, &config)
            .with_context(|| format!("render '{}'", settings.file_name()))?
            .to_markup();
        let path = isocontrib::write_output(&args.out_dir, settings.file_name(), &svg)?;
        eprintln!("wrote {}", path.display());

        if args.png {
            let png = path.with_extension("png");
            isocontrib::rasterize_png(&svg, &png)?;
            eprintln!("wrote {}", png.display());
        }
    }
    Ok(())
}

fn dump_scene(
    calendar: &isocontrib::Calendar,
    settings: &isocontrib::Settings,
    force: bool,
    config: &isocontrib::LayoutConfig,
) -> anyhow::Result<()> {
    let canvas = isocontrib::Canvas::new(isocontrib::SVG_WIDTH, isocontrib::SVG_HEIGHT)?;
    let scene = isocontrib::render_contrib(calendar.entries(), settings, force, canvas, config)?;
    let json = serde_json::to_string_pretty(&scene).with_context(|| "serialize scene")?;
    println!("{json}");
    Ok(())
}
