//! The emitted motion program and its telemetry companions.

use plotkit_core::Point;
use serde::{Deserialize, Serialize};

/// An ordered sequence of textual motion instructions.
///
/// Append-only while the compiler runs; callers receive it as an
/// immutable value. The wire form is the newline-joined text, opaque
/// to everything upstream of the machine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MotionProgram {
    lines: Vec<String>,
}

impl MotionProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The byte-for-byte program text sent to the machine.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A non-drawing repositioning move between two drawing strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelSegment {
    pub from: Point,
    pub to: Point,
}

impl TravelSegment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_text_joins_lines() {
        let mut program = MotionProgram::new();
        program.push("G21".to_string());
        program.push("G1 F10000".to_string());
        assert_eq!(program.to_text(), "G21\nG1 F10000");
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_travel_segment_length() {
        let segment = TravelSegment::new(Point::new(10.0, 0.0), Point::new(20.0, 0.0));
        assert_eq!(segment.length(), 10.0);
    }
}
