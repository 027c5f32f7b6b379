//! # Plotkit Compiler
//!
//! Turns clipped 2D strokes into a linear pen-plotter motion program
//! while tracking drawing/travel telemetry.
//!
//! The pipeline is: raw strokes → bounds clipper → (optional)
//! nearest-neighbor orderer → motion compiler. The whole stage is a
//! pure function of its inputs; nothing survives a call and
//! concurrent compilations are fully independent.

pub mod clipper;
pub mod compiler;
pub mod error;
pub mod orderer;
pub mod program;

pub use clipper::clip_stroke;
pub use compiler::{compile, CompilationResult, MotionCompiler};
pub use error::{CompileError, CompileResult};
pub use orderer::order_strokes;
pub use program::{MotionProgram, TravelSegment};
