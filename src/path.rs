//! Typed vector path commands and their SVG path-data form.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Magnitude above which a tenth is below the spacing of representable values.
const ROUNDING_LIMIT: f64 = 1e15;

/// Rounds to one decimal digit, half away from zero, without producing `-0.0`.
///
/// Values at or beyond 1e15 in magnitude are returned as is, so scaling by
/// ten can't overflow.
pub fn round1(v: f64) -> f64 {
    if v.abs() >= ROUNDING_LIMIT {
        return v;
    }
    let r = (v * 10.0).round() / 10.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    /// Quadratic curve whose control point reflects the previous one.
    SmoothQuadTo { x: f64, y: f64 },
}

impl PathCommand {
    /// The on-curve point the command ends at.
    pub fn end(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::SmoothQuadTo { x, y } => (x, y),
        }
    }

    pub fn control(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::QuadTo { cx, cy, .. } => Some((cx, cy)),
            _ => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {:.1} {:.1}", x, y),
            PathCommand::QuadTo { cx, cy, x, y } => {
                write!(f, "Q {:.1} {:.1}, {:.1} {:.1}", cx, cy, x, y)
            }
            PathCommand::SmoothQuadTo { x, y } => write!(f, "T {:.1} {:.1}", x, y),
        }
    }
}

/// An ordered list of absolute path commands with one-decimal coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo {
            x: round1(x),
            y: round1(y),
        });
        self
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::QuadTo {
            cx: round1(cx),
            cy: round1(cy),
            x: round1(x),
            y: round1(y),
        });
        self
    }

    pub fn smooth_quad_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::SmoothQuadTo {
            x: round1(x),
            y: round1(y),
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Splits the path at every `MoveTo`.
    pub fn subpaths(&self) -> impl Iterator<Item = &[PathCommand]> {
        let mut starts: Vec<usize> = self
            .commands
            .iter()
            .enumerate()
            .filter(|(i, c)| *i == 0 || matches!(c, PathCommand::MoveTo { .. }))
            .map(|(i, _)| i)
            .collect();
        starts.push(self.commands.len());
        let commands = &self.commands;
        (0..starts.len().saturating_sub(1))
            .map(move |i| &commands[starts[i]..starts[i + 1]])
            .filter(|s| !s.is_empty())
    }

    /// On-curve points, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.commands.iter().map(PathCommand::end)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    #[error("unknown path command `{0}`")]
    UnknownCommand(String),
    #[error("path command `{command}` is missing a coordinate")]
    MissingNumber { command: char },
    #[error("invalid number `{0}` in path data")]
    InvalidNumber(String),
    #[error("path data must start with a move-to command")]
    MissingMoveTo,
}

impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());

        let mut path = Path::new();
        while let Some(token) = tokens.next() {
            let command = match token {
                "M" => 'M',
                "Q" => 'Q',
                "T" => 'T',
                other => return Err(PathParseError::UnknownCommand(other.to_string())),
            };
            let mut number = || -> Result<f64, PathParseError> {
                let raw = tokens
                    .next()
                    .ok_or(PathParseError::MissingNumber { command })?;
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| PathParseError::InvalidNumber(raw.to_string()))
            };
            match command {
                'M' => {
                    let (x, y) = (number()?, number()?);
                    path.move_to(x, y);
                }
                'Q' => {
                    let (cx, cy, x, y) = (number()?, number()?, number()?, number()?);
                    path.quad_to(cx, cy, x, y);
                }
                _ => {
                    let (x, y) = (number()?, number()?);
                    path.smooth_quad_to(x, y);
                }
            }
            if path.len() == 1 && !matches!(path.commands[0], PathCommand::MoveTo { .. }) {
                return Err(PathParseError::MissingMoveTo);
            }
        }
        Ok(path)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PathVisitor;

impl<'de> Visitor<'de> for PathVisitor {
    type Value = Path;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("SVG path data made of M, Q and T commands")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<Path>().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Path, D::Error> {
        deserializer.deserialize_str(PathVisitor)
    }
}
