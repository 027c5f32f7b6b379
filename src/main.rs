//! plotkit CLI - compile SVG line-art to plotter G-code and send it
//! to the machine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use plotkit::{
    compile, init_logging, strokes_from_svg, CompilationResult, IngestOptions, MachineClient,
    PlotConfig, WorkArea,
};

#[derive(Parser)]
#[command(name = "plotkit")]
#[command(version = plotkit::VERSION)]
#[command(about = "SVG to pen-plotter G-code compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an SVG file to a G-code program
    Compile {
        /// Input SVG file
        input: PathBuf,
        /// Output G-code file (default: input with .gcode extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Compile an SVG file and upload it to the machine
    Send {
        /// Input SVG file
        input: PathBuf,
        /// Machine hostname or IP (default: from settings)
        #[arg(long)]
        host: Option<String>,
        /// Name to store the program under (default: input stem)
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Compile an SVG file and print telemetry as JSON
    Stats {
        /// Input SVG file
        input: PathBuf,
        #[command(flatten)]
        plot: PlotArgs,
    },
}

/// Plot parameter overrides; anything omitted falls back to the
/// persisted settings file.
#[derive(Args)]
struct PlotArgs {
    /// Work area width in mm
    #[arg(long)]
    width: Option<f64>,
    /// Work area height in mm
    #[arg(long)]
    height: Option<f64>,
    /// Pen-up Z height in machine units
    #[arg(long)]
    lift: Option<f64>,
    /// Feed rate in machine units per minute
    #[arg(long)]
    feed_rate: Option<u32>,
    /// Curve flattening tolerance
    #[arg(long)]
    tolerance: Option<f64>,
    /// Mirror the drawing top-to-bottom
    #[arg(long)]
    flip_vertical: bool,
    /// Mirror the drawing left-to-right
    #[arg(long)]
    flip_horizontal: bool,
    /// Reorder strokes to shorten pen-up travel
    #[arg(long)]
    optimize: bool,
}

impl PlotArgs {
    fn resolve(&self, defaults: &plotkit::Config) -> PlotConfig {
        let base = defaults.plot_config();
        PlotConfig {
            work_area: WorkArea::new(
                self.width.unwrap_or(base.work_area.width),
                self.height.unwrap_or(base.work_area.height),
            ),
            lift_height: self.lift.unwrap_or(base.lift_height),
            feed_rate: self.feed_rate.unwrap_or(base.feed_rate),
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            flip_vertical: self.flip_vertical || base.flip_vertical,
            flip_horizontal: self.flip_horizontal || base.flip_horizontal,
            optimize: self.optimize || base.optimize,
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let settings = plotkit_settings::load().context("loading settings")?;

    match cli.command {
        Commands::Compile {
            input,
            output,
            plot,
        } => {
            let config = plot.resolve(&settings);
            let result = compile_svg(&input, &config)?;
            let output = output.unwrap_or_else(|| input.with_extension("gcode"));
            fs::write(&output, result.program.to_text())
                .with_context(|| format!("writing {}", output.display()))?;
            info!(output = %output.display(), "program written");
        }
        Commands::Send {
            input,
            host,
            name,
            plot,
        } => {
            let config = plot.resolve(&settings);
            let result = compile_svg(&input, &config)?;

            let host = host.unwrap_or_else(|| settings.machine.host.clone());
            let base_name = name.unwrap_or_else(|| {
                input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "plot".to_string())
            });

            let timeout = Duration::from_secs(settings.machine.timeout_secs);
            let mut client = MachineClient::new(host, timeout)?;
            let stored_as = client.send_program(&base_name, &result.program.to_text())?;
            info!(name = %stored_as, "program sent to machine");
            println!("stored as {stored_as}.gcode");
        }
        Commands::Stats { input, plot } => {
            let config = plot.resolve(&settings);
            let result = compile_svg(&input, &config)?;
            let summary = serde_json::json!({
                "strokes": result.drawing_segments.len(),
                "travel_hops": result.travel_segments.len(),
                "drawing_length_mm": result.drawing_length(),
                "travel_length_mm": result.travel_length(),
                "total_length_mm": result.total_length,
                "instructions": result.program.len(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn compile_svg(input: &Path, config: &PlotConfig) -> Result<CompilationResult> {
    let svg = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let options = IngestOptions {
        target_width: config.work_area.width,
        target_height: config.work_area.height,
        tolerance: config.tolerance,
        flip_vertical: config.flip_vertical,
        flip_horizontal: config.flip_horizontal,
    };
    let strokes = strokes_from_svg(&svg, &options)
        .with_context(|| format!("parsing {}", input.display()))?;

    let result = compile(&strokes, config)?;
    info!(
        strokes = result.drawing_segments.len(),
        drawing_mm = result.drawing_length(),
        travel_mm = result.travel_length(),
        "compiled"
    );
    Ok(result)
}
