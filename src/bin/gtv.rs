use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gtv_rs::format::format_count;
use gtv_rs::palette::parse_palette;
use gtv_rs::{Client, Dataset, HeatMapConfig, HeatMapRenderer};
use gtv_rs::{stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gtv",
    version,
    about = "Render monthly global temperature variance as a calendar heat map"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dataset once and render it (optionally export cells and print stats).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset URL (defaults to the freeCodeCamp global temperature dataset).
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,
    /// Read the dataset from a local JSON file instead of the network.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Write the chart to the given path (.svg, .png or .html).
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Plot width in pixels, excluding margins (default 710).
    #[arg(long, default_value_t = 710.0)]
    width: f64,
    /// Plot height in pixels, excluding margins (default 360).
    #[arg(long, default_value_t = 360.0)]
    height: f64,
    /// Legend bar width in pixels (default 300).
    #[arg(long, default_value_t = 300.0)]
    legend_width: f64,
    /// Cold-to-hot colors separated by comma or semicolon (e.g. "#62A1DB,#B01111").
    #[arg(long)]
    colors: Option<String>,
    /// Locale for temperature labels (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Export computed cells (format from extension: .csv or .json).
    #[arg(long)]
    cells: Option<PathBuf>,
    /// Save the loaded dataset as JSON (reusable with --input).
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print per-year statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn load(args: &RenderArgs) -> Result<Dataset> {
    if let Some(path) = args.input.as_ref() {
        return storage::load_dataset(path);
    }
    let client = match args.url.as_deref() {
        Some(url) => Client::with_url(url),
        None => Client::default(),
    };
    // Reported once, by `main`.
    Ok(client.fetch_dataset()?)
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut config = HeatMapConfig::default()
        .with_plot_size(args.width, args.height)
        .with_legend_width(args.legend_width)
        .with_locale(&args.locale);
    if let Some(colors) = args.colors.as_deref() {
        config = config.with_colors(parse_palette(colors)?);
    }

    let dataset = load(&args)?;
    let layout = HeatMapRenderer::new(&config)
        .render(&dataset)
        .context("render heat map")?;

    println!("{}", layout.description);

    if let Some(path) = args.save.as_ref() {
        storage::save_dataset_json(&dataset, path)
            .with_context(|| format!("save dataset to {}", path.display()))?;
        eprintln!("Saved dataset to {}", path.display());
    }

    if let Some(path) = args.out.as_ref() {
        viz::render_to_file(&layout, path)?;
        eprintln!(
            "Wrote {} cells to {}",
            format_count(layout.cells.len(), &args.locale),
            path.display()
        );
    }

    if let Some(path) = args.cells.as_ref() {
        let fmt = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_cells_csv(&layout.cells, path)?,
            "json" => storage::save_cells_json(&layout.cells, path)?,
            other => anyhow::bail!("unsupported cell export format: {}", other),
        }
        eprintln!("Saved {} cells to {}", layout.cells.len(), path.display());
    }

    if args.stats {
        for s in stats::yearly_summary(&dataset) {
            println!(
                "{}  count={}  min={:.2} max={:.2} mean={:.2} median={:.2}",
                s.year, s.count, s.min, s.max, s.mean, s.median
            );
        }
    }

    Ok(())
}
