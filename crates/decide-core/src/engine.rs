// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Combination Engine
// ─────────────────────────────────────────────────────────────────────
//! Reduces the fifteen LIC results to one launch decision.
//!
//! Pipeline, recomputed on every call:
//!   1. CMV: one boolean per LIC
//!   2. PUM: CMV pairs combined per the LCM
//!   3. FUV: PUM rows folded for active requirements
//!   4. launch: AND of the FUV
//!
//! The reduction is total: no input makes it fail or panic.

use decide_types::{
    Cmv, Connector, DecideInput, DecisionReport, Fuv, Lcm, Parameters, Point, PredicateMode, Pum,
    Puv, LIC_COUNT, LIC_NAMES,
};

/// Stateless DECIDE kernel. Holds only the predicate mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecideKernel {
    mode: PredicateMode,
}

impl DecideKernel {
    pub fn new(mode: PredicateMode) -> Self {
        Self { mode }
    }

    pub fn from_input(input: &DecideInput) -> Self {
        Self::new(input.mode)
    }

    pub fn mode(&self) -> PredicateMode {
        self.mode
    }

    /// Evaluate all fifteen LICs.
    ///
    /// With the `parallel` feature the LICs run on the rayon pool; each
    /// writes only its own slot, so the result is the same either way.
    pub fn condition_met_vector(&self, points: &[Point], params: &Parameters) -> Cmv {
        let cmv = evaluate_conditions(points, params, self.mode);
        if log::log_enabled!(log::Level::Trace) {
            for (i, met) in cmv.iter().enumerate() {
                log::trace!("LIC{i} [{}]: {met}", LIC_NAMES[i]);
            }
        }
        cmv
    }

    /// Run the full pipeline and keep every intermediate stage.
    pub fn evaluate(
        &self,
        points: &[Point],
        params: &Parameters,
        lcm: &Lcm,
        puv: &Puv,
    ) -> DecisionReport {
        let cmv = self.condition_met_vector(points, params);
        let pum = preliminary_unlocking_matrix(&cmv, lcm);
        let fuv = final_unlocking_vector(&pum, puv);
        let launch = launch_decision(&fuv);

        log::debug!(
            "DECIDE over {} points: cmv={} fuv={} launch={launch}",
            points.len(),
            bits(&cmv),
            bits(&fuv),
        );

        DecisionReport {
            cmv,
            pum,
            fuv,
            launch,
        }
    }

    /// Launch decision only.
    pub fn decide(&self, points: &[Point], params: &Parameters, lcm: &Lcm, puv: &Puv) -> bool {
        self.evaluate(points, params, lcm, puv).launch
    }

    /// Run the pipeline on a parsed input document.
    pub fn evaluate_input(&self, input: &DecideInput) -> DecisionReport {
        self.evaluate(&input.points, &input.parameters, &input.lcm, &input.puv)
    }
}

/// Evaluate an input document in its own predicate mode.
pub fn evaluate(input: &DecideInput) -> DecisionReport {
    DecideKernel::from_input(input).evaluate_input(input)
}

/// Launch decision for an input document.
pub fn decide(input: &DecideInput) -> bool {
    evaluate(input).launch
}

/// PUM[i][j]: AND or OR of CMV[i], CMV[j] per the LCM; true where the
/// pairing is not used.
pub fn preliminary_unlocking_matrix(cmv: &Cmv, lcm: &Lcm) -> Pum {
    let mut pum = [[true; LIC_COUNT]; LIC_COUNT];
    for (i, row) in pum.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = match lcm[i][j] {
                Connector::And => cmv[i] && cmv[j],
                Connector::Or => cmv[i] || cmv[j],
                Connector::NotUsed => true,
            };
        }
    }
    pum
}

/// FUV[i]: true for an inactive requirement, else the AND of PUM row i.
pub fn final_unlocking_vector(pum: &Pum, puv: &Puv) -> Fuv {
    let mut fuv = [true; LIC_COUNT];
    for (i, slot) in fuv.iter_mut().enumerate() {
        *slot = !puv[i] || pum[i].iter().all(|&cell| cell);
    }
    fuv
}

/// Launch iff every FUV entry holds.
pub fn launch_decision(fuv: &Fuv) -> bool {
    fuv.iter().all(|&f| f)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_conditions(points: &[Point], params: &Parameters, mode: PredicateMode) -> Cmv {
    crate::lic::condition_met_vector(points, params, mode)
}

#[cfg(feature = "parallel")]
fn evaluate_conditions(points: &[Point], params: &Parameters, mode: PredicateMode) -> Cmv {
    use rayon::prelude::*;

    use crate::lic::LIC_TABLE;

    let mut cmv = [false; LIC_COUNT];
    cmv.par_iter_mut()
        .zip(LIC_TABLE.par_iter())
        .for_each(|(slot, lic)| *slot = lic(points, params, mode));
    cmv
}

fn bits(v: &[bool; LIC_COUNT]) -> String {
    v.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
