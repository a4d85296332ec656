// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Decision Stages
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Number of Launch Interceptor Conditions.
pub const LIC_COUNT: usize = 15;

/// Condition-Met Vector: one entry per LIC.
pub type Cmv = [bool; LIC_COUNT];

/// Preliminary Unlocking Vector: which requirements are active.
pub type Puv = [bool; LIC_COUNT];

/// Preliminary Unlocking Matrix: pairwise CMV combination under the LCM.
pub type Pum = [[bool; LIC_COUNT]; LIC_COUNT];

/// Final Unlocking Vector: per-requirement satisfaction.
pub type Fuv = [bool; LIC_COUNT];

/// Short description of each LIC, indexed by LIC number.
pub const LIC_NAMES: [&str; LIC_COUNT] = [
    "consecutive pair farther apart than LENGTH1",
    "consecutive triple not contained in circle of RADIUS1",
    "consecutive triple angle deviates from pi by EPSILON",
    "consecutive triangle area above AREA1",
    "Q_PTS run spans more than QUADS quadrants",
    "consecutive pair with change in x",
    "N_PTS run with interior point beyond DIST of the chord",
    "K_PTS-separated pair farther apart than LENGTH1",
    "A/B_PTS-separated triple not contained in circle of RADIUS1",
    "C/D_PTS-separated angle deviates from pi by EPSILON",
    "E/F_PTS-separated triangle area above AREA1",
    "G_PTS-separated pair with decrease in x",
    "K_PTS-separated pair between LENGTH1 and LENGTH2",
    "A/B_PTS-separated triple outside RADIUS1 and inside RADIUS2",
    "E/F_PTS-separated triangle area between AREA1 and AREA2",
];

/// Every stage of one decision, from condition vector to verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub cmv: Cmv,
    pub pum: Pum,
    pub fuv: Fuv,
    /// Final verdict: true authorizes launch.
    pub launch: bool,
}

impl DecisionReport {
    /// LIC indices whose condition was not met.
    pub fn unmet_conditions(&self) -> Vec<usize> {
        indices_where(&self.cmv, false)
    }

    /// Requirement indices that blocked the launch.
    pub fn blocking_requirements(&self) -> Vec<usize> {
        indices_where(&self.fuv, false)
    }

    /// `"YES"` or `"NO"`.
    pub fn verdict(&self) -> &'static str {
        if self.launch {
            "YES"
        } else {
            "NO"
        }
    }
}

fn indices_where(v: &[bool; LIC_COUNT], value: bool) -> Vec<usize> {
    v.iter()
        .enumerate()
        .filter(|&(_, &b)| b == value)
        .map(|(i, _)| i)
        .collect()
}
