// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied; PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the DECIDE kernel.
//!
//! Exposes `Parameters`, `DecisionReport`, and the `decide`, `evaluate`
//! and `decide_json` functions to Python via PyO3.
//!
//! # FFI Safety
//!
//! - Nothing crosses the boundary by reference; points, LCM and PUV are
//!   copied into fixed-size Rust arrays before evaluation.
//! - Shape errors, unknown modes and non-finite values raise
//!   `ValueError`. The kernel itself never raises.
//!
//! Install: `pip install -e crates/decide-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from decide_kernel import Parameters, decide
//!
//! params = Parameters(length1=1.0, q_pts=3, quads=1)
//! launch = decide([(0, 0), (4, 0), (4, 4)], params, lcm, puv)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use decide_core::DecideKernel;
use decide_types::{
    lcm_from_rows, puv_from_slice, DecideError, DecideInput, Point, PredicateMode, LIC_NAMES,
};

fn value_error(e: DecideError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyParameters ───────────────────────────────────────────────────

/// Python-visible LIC parameter block.
#[pyclass(name = "Parameters")]
#[derive(Clone)]
struct PyParameters {
    inner: decide_types::Parameters,
}

#[pymethods]
impl PyParameters {
    #[new]
    #[pyo3(signature = (
        length1 = 0.0,
        radius1 = 0.0,
        epsilon = 0.0,
        area1 = 0.0,
        q_pts = 0,
        quads = 0,
        dist = 0.0,
        n_pts = 0,
        k_pts = 0,
        a_pts = 0,
        b_pts = 0,
        c_pts = 0,
        d_pts = 0,
        e_pts = 0,
        f_pts = 0,
        g_pts = 0,
        length2 = 0.0,
        radius2 = 0.0,
        area2 = 0.0,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        length1: f64,
        radius1: f64,
        epsilon: f64,
        area1: f64,
        q_pts: i64,
        quads: i64,
        dist: f64,
        n_pts: i64,
        k_pts: i64,
        a_pts: i64,
        b_pts: i64,
        c_pts: i64,
        d_pts: i64,
        e_pts: i64,
        f_pts: i64,
        g_pts: i64,
        length2: f64,
        radius2: f64,
        area2: f64,
    ) -> PyResult<Self> {
        let params = decide_types::Parameters {
            length1,
            length2,
            radius1,
            radius2,
            epsilon,
            area1,
            area2,
            dist,
            q_pts,
            quads,
            n_pts,
            k_pts,
            a_pts,
            b_pts,
            c_pts,
            d_pts,
            e_pts,
            f_pts,
            g_pts,
        };
        params.validate().map_err(value_error)?;
        Ok(Self { inner: params })
    }

    /// Construct from a JSON object carrying all nineteen upper-case
    /// parameter names.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let params = decide_types::Parameters::from_json(json).map_err(value_error)?;
        params.validate().map_err(value_error)?;
        Ok(Self { inner: params })
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let p = &self.inner;
        let dict = PyDict::new(py);
        for (name, value) in p.reals() {
            dict.set_item(name, value)?;
        }
        for (name, value) in [
            ("Q_PTS", p.q_pts),
            ("QUADS", p.quads),
            ("N_PTS", p.n_pts),
            ("K_PTS", p.k_pts),
            ("A_PTS", p.a_pts),
            ("B_PTS", p.b_pts),
            ("C_PTS", p.c_pts),
            ("D_PTS", p.d_pts),
            ("E_PTS", p.e_pts),
            ("F_PTS", p.f_pts),
            ("G_PTS", p.g_pts),
        ] {
            dict.set_item(name, value)?;
        }
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Parameters(length1={}, radius1={}, epsilon={}, area1={}, q_pts={}, quads={}, n_pts={})",
            self.inner.length1,
            self.inner.radius1,
            self.inner.epsilon,
            self.inner.area1,
            self.inner.q_pts,
            self.inner.quads,
            self.inner.n_pts
        )
    }
}

// ─── PyDecisionReport ───────────────────────────────────────────────

/// Every stage of one decision.
#[pyclass(name = "DecisionReport")]
#[derive(Clone)]
struct PyDecisionReport {
    inner: decide_types::DecisionReport,
}

#[pymethods]
impl PyDecisionReport {
    #[getter]
    fn cmv(&self) -> Vec<bool> {
        self.inner.cmv.to_vec()
    }

    #[getter]
    fn pum(&self) -> Vec<Vec<bool>> {
        self.inner.pum.iter().map(|row| row.to_vec()).collect()
    }

    #[getter]
    fn fuv(&self) -> Vec<bool> {
        self.inner.fuv.to_vec()
    }

    #[getter]
    fn launch(&self) -> bool {
        self.inner.launch
    }

    #[getter]
    fn verdict(&self) -> &'static str {
        self.inner.verdict()
    }

    /// Indices of LICs that did not hold.
    fn unmet_conditions(&self) -> Vec<usize> {
        self.inner.unmet_conditions()
    }

    /// Indices of FUV entries that block launch.
    fn blocking_requirements(&self) -> Vec<usize> {
        self.inner.blocking_requirements()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("cmv", self.cmv())?;
        dict.set_item("pum", self.pum())?;
        dict.set_item("fuv", self.fuv())?;
        dict.set_item("launch", self.inner.launch)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        let unmet: Vec<&str> = self
            .inner
            .unmet_conditions()
            .into_iter()
            .map(|i| LIC_NAMES[i])
            .collect();
        format!(
            "DecisionReport(launch={}, unmet={:?}, blocking={:?})",
            self.inner.launch,
            unmet,
            self.inner.blocking_requirements()
        )
    }
}

// ─── Functions ──────────────────────────────────────────────────────

fn build_input(
    points: Vec<(f64, f64)>,
    parameters: &PyParameters,
    lcm: Vec<Vec<String>>,
    puv: Vec<bool>,
    mode: &str,
) -> PyResult<DecideInput> {
    let input = DecideInput {
        parameters: parameters.inner.clone(),
        points: points.into_iter().map(Point::from).collect(),
        lcm: lcm_from_rows(&lcm).map_err(value_error)?,
        puv: puv_from_slice(&puv).map_err(value_error)?,
        mode: mode.parse::<PredicateMode>().map_err(value_error)?,
    };
    input.validate().map_err(value_error)?;
    Ok(input)
}

/// Run the full DECIDE pipeline and return every stage.
///
/// `lcm` is 15 rows of 15 strings ("ANDD", "ORR", anything else is not
/// used); `puv` is 15 booleans; `mode` is "reference" or "corrected".
#[pyfunction]
#[pyo3(signature = (points, parameters, lcm, puv, mode = "reference"))]
fn evaluate(
    points: Vec<(f64, f64)>,
    parameters: &PyParameters,
    lcm: Vec<Vec<String>>,
    puv: Vec<bool>,
    mode: &str,
) -> PyResult<PyDecisionReport> {
    let input = build_input(points, parameters, lcm, puv, mode)?;
    Ok(PyDecisionReport {
        inner: decide_core::evaluate(&input),
    })
}

/// Launch decision only.
#[pyfunction]
#[pyo3(signature = (points, parameters, lcm, puv, mode = "reference"))]
fn decide(
    points: Vec<(f64, f64)>,
    parameters: &PyParameters,
    lcm: Vec<Vec<String>>,
    puv: Vec<bool>,
    mode: &str,
) -> PyResult<bool> {
    let input = build_input(points, parameters, lcm, puv, mode)?;
    Ok(decide_core::decide(&input))
}

/// Evaluate a complete JSON input document.
#[pyfunction]
fn evaluate_json(json: &str) -> PyResult<PyDecisionReport> {
    let input = DecideInput::from_json(json).map_err(value_error)?;
    input.validate().map_err(value_error)?;
    Ok(PyDecisionReport {
        inner: DecideKernel::from_input(&input).evaluate_input(&input),
    })
}

/// Launch decision for a complete JSON input document.
#[pyfunction]
fn decide_json(json: &str) -> PyResult<bool> {
    Ok(evaluate_json(json)?.inner.launch)
}

// ─── Module Registration ────────────────────────────────────────────

/// DECIDE kernel: launch interceptor conditions and the launch
/// reduction, callable from Python:
/// - `Parameters`: LIC parameter block
/// - `DecisionReport`: CMV, PUM, FUV and the decision
/// - `decide` / `evaluate`: evaluate Python-side inputs
/// - `decide_json` / `evaluate_json`: evaluate a JSON input document
#[pymodule]
fn decide_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyParameters>()?;
    m.add_class::<PyDecisionReport>()?;
    m.add_function(wrap_pyfunction!(decide, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(decide_json, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_json, m)?)?;
    Ok(())
}
