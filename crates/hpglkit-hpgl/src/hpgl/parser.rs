//! HPGL parser and path reconstruction
//!
//! The input is split on `;`, each non-empty token is decoded into an
//! [`HpglCommand`], and the commands are folded through a [`PathBuilder`]
//! that turns pen-up/pen-down motion into a [`Drawing`]. Tokens that do
//! not decode are reported and skipped.

use hpglkit_core::{Drawing, HpglError, Path, Point};
use tracing::{debug, trace, warn};

use super::HpglCommand;

/// A token that could not be decoded
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDiagnostic {
    /// Position of the token in the `;`-separated stream (0-based)
    pub index: usize,
    /// The trimmed token text
    pub token: String,
    /// Why it was rejected
    pub error: HpglError,
}

/// Result of parsing a command stream
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// The reconstructed paths
    pub drawing: Drawing,
    /// Tokens that were skipped
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Number of tokens that decoded successfully
    pub commands: usize,
}

impl ParseOutcome {
    /// True when every token was understood
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Turns a command sequence into paths
///
/// Holds the path being drawn. A pen-up move flushes it and starts a new
/// one at the target; pen-down moves extend it. Only strokes that actually
/// move the pen survive a flush.
#[derive(Debug, Default)]
pub struct PathBuilder {
    paths: Vec<Path>,
    current: Vec<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one command
    pub fn apply(&mut self, command: &HpglCommand) {
        match command {
            HpglCommand::PenUp(Some(target)) => {
                self.flush();
                self.current.push(*target);
            }
            // No target: the current path simply continues
            HpglCommand::PenUp(None) => trace!("bare PU ignored"),
            HpglCommand::PenDown(target) => {
                if self.current.last() != Some(target) {
                    self.current.push(*target);
                }
            }
            HpglCommand::PenDownMany(targets) => self.current.extend_from_slice(targets),
            HpglCommand::SelectPen(_) | HpglCommand::PlotAbsolute | HpglCommand::Initialize => {}
        }
    }

    /// Close the current path, keeping it only if it has two or more points
    /// and they are not all the same point
    pub fn flush(&mut self) {
        let points = std::mem::take(&mut self.current);
        let count = points.len();
        if count > 1 && points.iter().all(|p| *p == points[0]) {
            trace!(count, "dropping zero-length path");
            return;
        }
        match Path::new(points) {
            Some(path) => self.paths.push(path),
            None if count > 0 => trace!(count, "dropping single-point path"),
            None => {}
        }
    }

    /// Flush and hand back the drawing
    pub fn finish(mut self) -> Drawing {
        self.flush();
        Drawing::new(self.paths)
    }
}

#[derive(Default)]
struct ParseState {
    builder: PathBuilder,
    diagnostics: Vec<ParseDiagnostic>,
    commands: usize,
}

/// HPGL command stream parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HpglParser;

impl HpglParser {
    /// Create a new HPGL parser
    pub fn new() -> Self {
        Self
    }

    /// Split the input into trimmed, non-empty tokens with their positions
    pub fn tokens(input: &str) -> impl Iterator<Item = (usize, &str)> {
        input
            .split(';')
            .map(str::trim)
            .enumerate()
            .filter(|(_, token)| !token.is_empty())
    }

    /// Parse a full command stream
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let state = Self::tokens(input).fold(ParseState::default(), |mut state, (index, token)| {
            match HpglCommand::parse(token) {
                Ok(command) => {
                    state.builder.apply(&command);
                    state.commands += 1;
                }
                Err(error) => {
                    warn!(index, token, %error, "skipping HPGL token");
                    state.diagnostics.push(ParseDiagnostic {
                        index,
                        token: token.to_string(),
                        error,
                    });
                }
            }
            state
        });

        let drawing = state.builder.finish();
        debug!(
            commands = state.commands,
            skipped = state.diagnostics.len(),
            paths = drawing.len(),
            "parsed HPGL"
        );

        ParseOutcome {
            drawing,
            diagnostics: state.diagnostics,
            commands: state.commands,
        }
    }
}

/// Parse a command stream straight to a drawing, discarding diagnostics
pub fn parse_drawing(input: &str) -> Drawing {
    HpglParser::new().parse(input).drawing
}
