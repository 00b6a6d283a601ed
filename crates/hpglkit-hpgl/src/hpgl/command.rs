//! HPGL command types and decoding

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use hpglkit_core::{HpglError, Point};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A decoded HPGL command
///
/// Only the subset a cutting plotter job needs: pen up/down moves in
/// absolute coordinates, pen selection, and the mode/initialize commands
/// that usually open a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HpglCommand {
    /// `PUx,y` lifts the pen and moves to a point; a bare `PU` carries none
    PenUp(Option<Point>),
    /// `PDx,y` cuts to a single point
    PenDown(Point),
    /// `PDx1,y1,x2,y2,...` cuts through two or more points
    PenDownMany(Vec<Point>),
    /// `SPn` selects a pen (tool)
    SelectPen(u32),
    /// `PA` switches to absolute coordinates
    PlotAbsolute,
    /// `IN` or `IN:` resets the plotter
    Initialize,
}

impl HpglCommand {
    /// Two-letter mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::PenUp(_) => "PU",
            Self::PenDown(_) | Self::PenDownMany(_) => "PD",
            Self::SelectPen(_) => "SP",
            Self::PlotAbsolute => "PA",
            Self::Initialize => "IN",
        }
    }

    /// Decode one token (the text between two `;`)
    ///
    /// The mnemonic is matched case-insensitively; the arguments must be
    /// plain comma-separated integers.
    pub fn parse(token: &str) -> Result<Self, HpglError> {
        let token = token.trim();
        let (mnemonic, args) = match token.get(..2) {
            Some(m) => (m.to_ascii_uppercase(), &token[2..]),
            None => {
                return Err(HpglError::UnknownCommand {
                    token: token.to_string(),
                })
            }
        };

        match mnemonic.as_str() {
            "PU" => {
                if args.is_empty() {
                    return Ok(Self::PenUp(None));
                }
                let points = parse_points(&mnemonic, args)?;
                match points.as_slice() {
                    [p] => Ok(Self::PenUp(Some(*p))),
                    _ => Err(invalid(&mnemonic, "expected a single coordinate pair")),
                }
            }
            "PD" => {
                if args.is_empty() {
                    return Err(invalid(&mnemonic, "expected at least one coordinate pair"));
                }
                let mut points = parse_points(&mnemonic, args)?;
                if points.len() == 1 {
                    Ok(Self::PenDown(points.remove(0)))
                } else {
                    Ok(Self::PenDownMany(points))
                }
            }
            "SP" => {
                if args.is_empty() || !args.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(&mnemonic, "expected a pen number"));
                }
                args.parse::<u32>()
                    .map(Self::SelectPen)
                    .map_err(|e| invalid(&mnemonic, &e.to_string()))
            }
            "PA" if args.is_empty() => Ok(Self::PlotAbsolute),
            "PA" => Err(invalid(&mnemonic, "relative arguments are not supported")),
            "IN" if args.is_empty() || args == ":" => Ok(Self::Initialize),
            "IN" => Err(invalid(&mnemonic, "takes no arguments")),
            _ => Err(HpglError::UnknownCommand {
                token: token.to_string(),
            }),
        }
    }
}

impl FromStr for HpglCommand {
    type Err = HpglError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats without the trailing `;`, coordinates rounded to whole units
impl fmt::Display for HpglCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PenUp(None) => write!(f, "PU"),
            Self::PenUp(Some(p)) => write!(f, "PU{}", format_point(p)),
            Self::PenDown(p) => write!(f, "PD{}", format_point(p)),
            Self::PenDownMany(points) => {
                write!(f, "PD")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", format_point(p))?;
                }
                Ok(())
            }
            Self::SelectPen(pen) => write!(f, "SP{}", pen),
            Self::PlotAbsolute => write!(f, "PA"),
            Self::Initialize => write!(f, "IN:"),
        }
    }
}

fn format_point(p: &Point) -> String {
    format!("{},{}", p.x.round() as i64, p.y.round() as i64)
}

fn invalid(mnemonic: &str, reason: &str) -> HpglError {
    HpglError::InvalidParameter {
        mnemonic: mnemonic.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse `x1,y1[,x2,y2...]` into points
fn parse_points(mnemonic: &str, args: &str) -> Result<Vec<Point>, HpglError> {
    static COORDINATES_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COORDINATES_REGEX
        .get_or_init(|| Regex::new(r"^-?\d+(?:,-?\d+)*$").expect("invalid regex pattern"));

    if !regex.is_match(args) {
        return Err(invalid(mnemonic, "expected comma-separated integers"));
    }

    let values = args
        .split(',')
        .map(|v| v.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(mnemonic, &e.to_string()))?;

    if values.len() % 2 != 0 {
        return Err(invalid(mnemonic, "odd number of coordinates"));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Point::from((pair[0], pair[1])))
        .collect())
}
