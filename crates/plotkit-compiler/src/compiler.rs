//! Motion program emission.
//!
//! Consumes clipped (and optionally reordered) strokes and emits the
//! linear instruction sequence for the machine, recording drawing and
//! travel telemetry as it goes.

use plotkit_core::{format_coord, PlotConfig, Point, Stroke};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clipper::clip_stroke;
use crate::error::CompileResult;
use crate::orderer::order_strokes;
use crate::program::{MotionProgram, TravelSegment};

/// Everything a compilation run produces.
///
/// Owned solely by the caller; the compiler keeps no residual state
/// between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationResult {
    /// The ordered instruction sequence.
    pub program: MotionProgram,
    /// Clipped strokes that actually produced drawing moves.
    pub drawing_segments: Vec<Stroke>,
    /// Pen-up repositioning hops between strokes.
    pub travel_segments: Vec<TravelSegment>,
    /// Sum of drawing and travel distances, in millimeters.
    pub total_length: f64,
}

impl CompilationResult {
    /// Total length of all drawing moves.
    pub fn drawing_length(&self) -> f64 {
        self.drawing_segments.iter().map(Stroke::length).sum()
    }

    /// Total length of all pen-up travel moves.
    pub fn travel_length(&self) -> f64 {
        self.travel_segments.iter().map(TravelSegment::length).sum()
    }
}

/// Compile strokes into a motion program using a validated config.
///
/// Convenience wrapper over [`MotionCompiler`].
pub fn compile(strokes: &[Stroke], config: &PlotConfig) -> CompileResult<CompilationResult> {
    MotionCompiler::new(*config)?.compile(strokes)
}

/// The path-to-motion compiler.
///
/// Stateless apart from the immutable configuration it was built
/// with; `compile` may be called any number of times and concurrent
/// instances never interfere.
#[derive(Debug, Clone, Copy)]
pub struct MotionCompiler {
    config: PlotConfig,
}

impl MotionCompiler {
    /// Validate the configuration and build a compiler.
    pub fn new(config: PlotConfig) -> CompileResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Compile strokes into a motion program.
    ///
    /// Strokes are clipped to the work area first, preserving the
    /// relative order of surviving runs, then optionally reordered by
    /// the nearest-neighbor heuristic before emission.
    pub fn compile(&self, strokes: &[Stroke]) -> CompileResult<CompilationResult> {
        let mut clipped: Vec<Stroke> = strokes
            .iter()
            .flat_map(|s| clip_stroke(s, &self.config.work_area))
            .collect();

        if self.config.optimize {
            clipped = order_strokes(clipped);
        }

        debug!(
            input = strokes.len(),
            surviving = clipped.len(),
            optimize = self.config.optimize,
            "compiling strokes"
        );

        let lift = format_coord(self.config.lift_height);

        let mut program = MotionProgram::new();
        program.push("G21".to_string());
        program.push(format!("G1 F{}", self.config.feed_rate));

        // Prime the machine cursor at the first stroke's start before
        // any lift/drop logic.
        if let Some(start) = clipped.first().and_then(Stroke::first) {
            program.push(rapid_move(start));
        }

        let mut drawing_segments = Vec::with_capacity(clipped.len());
        let mut travel_segments = Vec::new();
        let mut total_length = 0.0;
        let mut cursor: Option<Point> = None;

        for stroke in clipped {
            // Infallible: the clipper never yields a stroke shorter
            // than two points.
            let Some(start) = stroke.first() else { continue };

            program.push(format!("G1 Z{lift}"));
            program.push(rapid_move(start));

            if let Some(previous) = cursor {
                let hop = TravelSegment::new(previous, start);
                total_length += hop.length();
                travel_segments.push(hop);
            }

            // The first point is emitted redundantly: it is both the
            // rapid target and the first pen-down move, so the pen
            // drops in place before drawing.
            for &point in stroke.points() {
                program.push(drawing_move(point));
            }
            total_length += stroke.length();

            cursor = stroke.last();
            drawing_segments.push(stroke);
        }

        program.push(format!("G1 Z{lift}"));

        debug!(
            instructions = program.len(),
            total_length, "compilation finished"
        );

        Ok(CompilationResult {
            program,
            drawing_segments,
            travel_segments,
            total_length,
        })
    }
}

fn rapid_move(point: Point) -> String {
    format!("G0 X{} Y{}", format_coord(point.x), format_coord(point.y))
}

fn drawing_move(point: Point) -> String {
    format!("G1 X{} Y{} Z0", format_coord(point.x), format_coord(point.y))
}
