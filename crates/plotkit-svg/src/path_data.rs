//! SVG path `d` attribute parsing.
//!
//! Builds a lyon [`Path`] from path data. The commonly plotted
//! commands (move, line, horizontal/vertical, cubic, quadratic,
//! close) are honored exactly, with implicit command repetition.
//! Smooth/arc commands (S, T, A) are degraded to straight lines to
//! their endpoints; pen plots of hand-authored files rarely contain
//! them and a line keeps the stroke connected.

use lyon::math::point;
use lyon::path::Path;

use crate::error::{SvgError, SvgResult};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// Split path data into command letters and numbers.
///
/// Separators are whitespace and commas; a `-` also starts a new
/// number unless it follows an exponent marker.
fn tokenize(data: &str) -> SvgResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String, tokens: &mut Vec<Token>| -> SvgResult<()> {
        if !current.is_empty() {
            let value: f64 = current
                .parse()
                .map_err(|_| SvgError::MalformedPathData(current.clone()))?;
            tokens.push(Token::Number(value));
            current.clear();
        }
        Ok(())
    };

    for ch in data.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' => {
                flush(&mut current, &mut tokens)?;
                tokens.push(Token::Command(ch));
            }
            ' ' | ',' | '\n' | '\r' | '\t' => flush(&mut current, &mut tokens)?,
            '-' if !current.is_empty() && !current.ends_with(['e', 'E']) => {
                flush(&mut current, &mut tokens)?;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }
    flush(&mut current, &mut tokens)?;

    Ok(tokens)
}

/// Build a lyon path from a `d` attribute value.
pub fn build_path(data: &str) -> SvgResult<Path> {
    Parser::new(tokenize(data)?).run()
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
    builder: lyon::path::path::Builder,
    cursor: (f32, f32),
    subpath_start: (f32, f32),
    open: bool,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            builder: Path::builder(),
            cursor: (0.0, 0.0),
            subpath_start: (0.0, 0.0),
            open: false,
        }
    }

    fn peek_number(&self) -> bool {
        matches!(self.tokens.get(self.index), Some(Token::Number(_)))
    }

    fn number(&mut self) -> SvgResult<f32> {
        match self.tokens.get(self.index) {
            Some(Token::Number(value)) => {
                self.index += 1;
                Ok(*value as f32)
            }
            _ => Err(SvgError::MalformedPathData(
                "expected a number argument".to_string(),
            )),
        }
    }

    fn begin_if_needed(&mut self) {
        if !self.open {
            self.builder.begin(point(self.cursor.0, self.cursor.1));
            self.subpath_start = self.cursor;
            self.open = true;
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.begin_if_needed();
        self.builder.line_to(point(x, y));
        self.cursor = (x, y);
    }

    fn run(mut self) -> SvgResult<Path> {
        while self.index < self.tokens.len() {
            let Token::Command(cmd) = self.tokens[self.index] else {
                return Err(SvgError::MalformedPathData(
                    "number without a preceding command".to_string(),
                ));
            };
            self.index += 1;
            self.command(cmd)?;
        }
        if self.open {
            self.builder.end(false);
        }
        Ok(self.builder.build())
    }

    fn command(&mut self, cmd: char) -> SvgResult<()> {
        let relative = cmd.is_ascii_lowercase();
        let mut first = true;

        // Implicit repetition: a command's argument group repeats
        // while numbers remain; repeated M acts as L.
        while first || self.peek_number() {
            match cmd.to_ascii_uppercase() {
                'M' => {
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    if first {
                        if self.open {
                            self.builder.end(false);
                            self.open = false;
                        }
                        self.cursor = (x, y);
                        self.begin_if_needed();
                    } else {
                        self.line_to(x, y);
                    }
                }
                'L' => {
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.line_to(x, y);
                }
                'H' => {
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    self.line_to(x, self.cursor.1);
                }
                'V' => {
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.line_to(self.cursor.0, y);
                }
                'C' => {
                    let c1x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let c1y = { let n = self.number()?; self.resolve_y(relative, n) };
                    let c2x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let c2y = { let n = self.number()?; self.resolve_y(relative, n) };
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.begin_if_needed();
                    self.builder
                        .cubic_bezier_to(point(c1x, c1y), point(c2x, c2y), point(x, y));
                    self.cursor = (x, y);
                }
                'Q' => {
                    let cx = { let n = self.number()?; self.resolve_x(relative, n) };
                    let cy = { let n = self.number()?; self.resolve_y(relative, n) };
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.begin_if_needed();
                    self.builder.quadratic_bezier_to(point(cx, cy), point(x, y));
                    self.cursor = (x, y);
                }
                'S' => {
                    // Degraded: skip the control point, line to the end.
                    let _ = self.number()?;
                    let _ = self.number()?;
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.line_to(x, y);
                }
                'T' => {
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.line_to(x, y);
                }
                'A' => {
                    // Degraded: consume rx ry rotation large-arc sweep,
                    // line to the endpoint.
                    for _ in 0..5 {
                        let _ = self.number()?;
                    }
                    let x = { let n = self.number()?; self.resolve_x(relative, n) };
                    let y = { let n = self.number()?; self.resolve_y(relative, n) };
                    self.line_to(x, y);
                }
                'Z' => {
                    if self.open {
                        self.builder.close();
                        self.open = false;
                    }
                    self.cursor = self.subpath_start;
                    break;
                }
                other => {
                    return Err(SvgError::MalformedPathData(format!(
                        "unsupported command '{other}'"
                    )));
                }
            }
            first = false;
        }
        Ok(())
    }

    fn resolve_x(&self, relative: bool, value: f32) -> f32 {
        if relative {
            self.cursor.0 + value
        } else {
            value
        }
    }

    fn resolve_y(&self, relative: bool, value: f32) -> f32 {
        if relative {
            self.cursor.1 + value
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::Event;

    fn line_endpoints(path: &Path) -> Vec<(f32, f32)> {
        let mut out = Vec::new();
        for event in path.iter() {
            match event {
                Event::Begin { at } => out.push((at.x, at.y)),
                Event::Line { to, .. } => out.push((to.x, to.y)),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_absolute_move_and_lines() {
        let path = build_path("M 1 2 L 3 4 L 5 6").unwrap();
        assert_eq!(
            line_endpoints(&path),
            vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]
        );
    }

    #[test]
    fn test_relative_commands() {
        let path = build_path("m 1 1 l 2 0 v 3 h -2").unwrap();
        assert_eq!(
            line_endpoints(&path),
            vec![(1.0, 1.0), (3.0, 1.0), (3.0, 4.0), (1.0, 4.0)]
        );
    }

    #[test]
    fn test_implicit_line_repetition() {
        let path = build_path("M 0 0 L 1 0 2 0 3 0").unwrap();
        assert_eq!(line_endpoints(&path).len(), 4);
    }

    #[test]
    fn test_implicit_move_repetition_draws_lines() {
        let path = build_path("M 0 0 1 1 2 2").unwrap();
        assert_eq!(
            line_endpoints(&path),
            vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]
        );
    }

    #[test]
    fn test_negative_numbers_without_separators() {
        let path = build_path("M10-5L-3-4").unwrap();
        assert_eq!(line_endpoints(&path), vec![(10.0, -5.0), (-3.0, -4.0)]);
    }

    #[test]
    fn test_close_returns_to_subpath_start() {
        let path = build_path("M 1 1 L 5 1 L 5 5 Z L 9 9").unwrap();
        // After Z the cursor is back at (1,1); the following L starts
        // a fresh subpath from there.
        let pts = line_endpoints(&path);
        assert!(pts.contains(&(1.0, 1.0)));
        assert!(pts.contains(&(9.0, 9.0)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(build_path("M 1 banana").is_err());
        assert!(build_path("1 2 3").is_err());
        assert!(build_path("M 1").is_err());
    }
}
