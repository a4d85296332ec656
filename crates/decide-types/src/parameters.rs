// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Parameters
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DecideError, DecideResult};

/// Thresholds consumed by the 15 Launch Interceptor Conditions.
///
/// Field names serialize in the upper-case form used by input documents
/// (`LENGTH1`, `Q_PTS`, ...). Every field is required: a document that
/// omits one fails to parse and names the missing field.
///
/// No range checking happens here: each LIC applies its own validity
/// rule and evaluates false when a parameter it reads is out of range.
/// Counts are signed so that a negative count reaches that rule instead
/// of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Parameters {
    /// Length threshold for LIC0, LIC7, LIC12.
    pub length1: f64,
    /// Upper length bound for LIC12.
    pub length2: f64,
    /// Radius for LIC1, LIC8, LIC13.
    pub radius1: f64,
    /// Containing radius for LIC13.
    pub radius2: f64,
    /// Deviation from π for LIC2, LIC9.
    pub epsilon: f64,
    /// Area threshold for LIC3, LIC10, LIC14.
    pub area1: f64,
    /// Upper area bound for LIC14.
    pub area2: f64,
    /// Distance from the first-last line for LIC6.
    pub dist: f64,

    /// Window length for LIC4.
    #[serde(deserialize_with = "whole_count")]
    pub q_pts: i64,
    /// Quadrant count LIC4 must exceed.
    #[serde(deserialize_with = "whole_count")]
    pub quads: i64,
    /// Window length for LIC6.
    #[serde(deserialize_with = "whole_count")]
    pub n_pts: i64,
    /// Intervening points for LIC7, LIC12.
    #[serde(deserialize_with = "whole_count")]
    pub k_pts: i64,
    /// First gap for LIC8, LIC13.
    #[serde(deserialize_with = "whole_count")]
    pub a_pts: i64,
    /// Second gap for LIC8, LIC13.
    #[serde(deserialize_with = "whole_count")]
    pub b_pts: i64,
    /// First gap for LIC9.
    #[serde(deserialize_with = "whole_count")]
    pub c_pts: i64,
    /// Second gap for LIC9.
    #[serde(deserialize_with = "whole_count")]
    pub d_pts: i64,
    /// First gap for LIC10, LIC14.
    #[serde(deserialize_with = "whole_count")]
    pub e_pts: i64,
    /// Second gap for LIC10, LIC14.
    #[serde(deserialize_with = "whole_count")]
    pub f_pts: i64,
    /// Intervening points for LIC11.
    #[serde(deserialize_with = "whole_count")]
    pub g_pts: i64,
}

impl Parameters {
    /// Real-valued thresholds paired with their document names.
    pub fn reals(&self) -> [(&'static str, f64); 8] {
        [
            ("LENGTH1", self.length1),
            ("LENGTH2", self.length2),
            ("RADIUS1", self.radius1),
            ("RADIUS2", self.radius2),
            ("EPSILON", self.epsilon),
            ("AREA1", self.area1),
            ("AREA2", self.area2),
            ("DIST", self.dist),
        ]
    }

    /// Reject non-finite real thresholds.
    ///
    /// Out-of-range but finite values are accepted; they are the LICs'
    /// business.
    pub fn validate(&self) -> DecideResult<()> {
        for (name, value) in self.reals() {
            if !value.is_finite() {
                return Err(DecideError::Validation(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DecideError::Parse(format!("PARAMETERS: {e}")))
    }
}

/// Accept a count written either as an integer or as a float with no
/// fractional part (`3` or `3.0`). Fractions are rejected.
fn whole_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(n) => Ok(n),
        Count::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Ok(x as i64),
        Count::Float(x) => Err(serde::de::Error::custom(format!(
            "expected a whole-number count, got {x}"
        ))),
    }
}

/// Which variant of the three disputed predicates to evaluate.
///
/// `Reference` reproduces the classical reference program bit for bit:
/// - LIC5 accepts any change in x, not only a decrease;
/// - LIC6 drops the line coefficients on the interior point;
/// - the angle test only guards the first endpoint against the vertex.
///
/// `Corrected` evaluates the textbook forms of all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateMode {
    #[default]
    Reference,
    Corrected,
}

impl std::str::FromStr for PredicateMode {
    type Err = DecideError;

    fn from_str(s: &str) -> DecideResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "corrected" => Ok(Self::Corrected),
            other => Err(DecideError::Validation(format!(
                "mode must be 'reference' or 'corrected', got '{other}'"
            ))),
        }
    }
}
