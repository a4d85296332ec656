// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Input Document
// ─────────────────────────────────────────────────────────────────────
//! Planar points, the logical connector matrix, and the JSON input
//! document that carries them together with the parameters and PUV.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DecideError, DecideResult};
use crate::parameters::{Parameters, PredicateMode};
use crate::report::{Puv, LIC_COUNT};

/// A planar point. Serialized as an `[x, y]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// One LCM cell.
///
/// Documents spell the connectors `"ANDD"` and `"ORR"`; every other
/// string means the pairing imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Connector {
    And,
    Or,
    #[default]
    NotUsed,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "ANDD",
            Connector::Or => "ORR",
            Connector::NotUsed => "NOTUSED",
        }
    }
}

impl From<&str> for Connector {
    fn from(s: &str) -> Self {
        match s {
            "ANDD" => Connector::And,
            "ORR" => Connector::Or,
            _ => Connector::NotUsed,
        }
    }
}

impl From<String> for Connector {
    fn from(s: String) -> Self {
        Connector::from(s.as_str())
    }
}

impl From<Connector> for String {
    fn from(c: Connector) -> Self {
        c.as_str().to_string()
    }
}

/// Logical Connector Matrix: how each pair of LICs combines.
pub type Lcm = [[Connector; LIC_COUNT]; LIC_COUNT];

/// Build an LCM from row-major cells, checking the 15×15 shape.
pub fn lcm_from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> DecideResult<Lcm> {
    if rows.len() != LIC_COUNT {
        return Err(DecideError::Validation(format!(
            "LCM must have {LIC_COUNT} rows, got {}",
            rows.len()
        )));
    }
    let mut lcm = [[Connector::NotUsed; LIC_COUNT]; LIC_COUNT];
    for (i, (row, cells)) in lcm.iter_mut().zip(rows).enumerate() {
        if cells.len() != LIC_COUNT {
            return Err(DecideError::Validation(format!(
                "LCM row {i} must have {LIC_COUNT} entries, got {}",
                cells.len()
            )));
        }
        for (slot, cell) in row.iter_mut().zip(cells) {
            *slot = Connector::from(cell.as_ref());
        }
    }
    Ok(lcm)
}

/// Build a PUV from a slice, checking its length.
pub fn puv_from_slice(flags: &[bool]) -> DecideResult<Puv> {
    Puv::try_from(flags).map_err(|_| {
        DecideError::Validation(format!(
            "PUV must have {LIC_COUNT} entries, got {}",
            flags.len()
        ))
    })
}

/// Complete input to one decision, in the document layout the `decide`
/// harness reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecideInput {
    #[serde(rename = "PARAMETERS")]
    pub parameters: Parameters,
    pub points: Vec<Point>,
    #[serde(rename = "LCM")]
    pub lcm: Lcm,
    #[serde(rename = "PUV")]
    pub puv: Puv,
    #[serde(rename = "MODE", default)]
    pub mode: PredicateMode,
}

impl DecideInput {
    /// Parse an input document.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        let input: Self =
            serde_json::from_str(json).map_err(|e| DecideError::Parse(e.to_string()))?;
        log::info!(
            "loaded input: {} points, mode={:?}",
            input.points.len(),
            input.mode
        );
        Ok(input)
    }

    /// Read and parse an input document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> DecideResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DecideError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values the kernel is not total over.
    pub fn validate(&self) -> DecideResult<()> {
        self.parameters.validate()?;
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            let p = self.points[i];
            log::warn!("point {i} is not finite: ({}, {})", p.x, p.y);
            return Err(DecideError::Validation(format!(
                "point {i} must be finite, got ({}, {})",
                p.x, p.y
            )));
        }
        Ok(())
    }
}
