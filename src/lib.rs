//! # Plotkit
//!
//! SVG line-art to pen-plotter G-code, end to end:
//!
//! 1. **plotkit-svg** flattens SVG paths into plain 2D strokes,
//!    scaled to the work area with the machine's y orientation.
//! 2. **plotkit-compiler** clips strokes to the work area, optionally
//!    reorders them to shorten pen-up travel, and emits the motion
//!    program plus drawing/travel telemetry.
//! 3. **plotkit-uploader** negotiates a session with the machine's
//!    HTTP interface and stores the program under a collision-free
//!    name.
//!
//! The root crate is the integration surface: a CLI wiring the three
//! stages together with persisted defaults from **plotkit-settings**.

pub use plotkit_compiler::{
    clip_stroke, compile, order_strokes, CompilationResult, CompileError, MotionCompiler,
    MotionProgram, TravelSegment,
};
pub use plotkit_core::{format_coord, PlotConfig, Point, Stroke, WorkArea};
pub use plotkit_settings::Config;
pub use plotkit_svg::{strokes_from_svg, IngestOptions, SvgError};
pub use plotkit_uploader::{MachineClient, UploadError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration.
///
/// Structured console logging with `RUST_LOG` support; defaults to
/// `info` when the environment says nothing. Logs go to stderr so a
/// program printed to stdout stays clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
